use serde::{Deserialize, Serialize};

/// Marker attached to a data point that belongs to a performance alert.
///
/// Only its presence matters to the graph; the id lets the host link back to
/// the alert summary it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSummary {
    pub id: u64,
}

/// A single measurement as delivered by the test-results feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    /// Push timestamp in milliseconds.
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub revision: String,
    #[serde(default)]
    pub alert_summary: Option<AlertSummary>,
    #[serde(default, alias = "z")]
    pub color_key: String,
}

impl DataPoint {
    pub fn new(x: f64, y: f64, revision: impl Into<String>) -> Self {
        Self {
            x,
            y,
            revision: revision.into(),
            alert_summary: None,
            color_key: String::new(),
        }
    }

    pub fn with_alert(mut self, alert: AlertSummary) -> Self {
        self.alert_summary = Some(alert);
        self
    }

    pub fn with_color_key(mut self, color_key: impl Into<String>) -> Self {
        self.color_key = color_key.into();
        self
    }

    pub fn has_alert(&self) -> bool {
        self.alert_summary.is_some()
    }
}

/// A named, independently toggleable sequence of points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default, alias = "data")]
    pub points: Vec<DataPoint>,
}

fn default_visible() -> bool {
    true
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            points,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Iterates the points of every visible series, in series order then point order.
pub fn visible_points(series: &[Series]) -> impl Iterator<Item = &DataPoint> + '_ {
    series
        .iter()
        .filter(|s| s.visible)
        .flat_map(|s| s.points.iter())
}
