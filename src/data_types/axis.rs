use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` range on one axis.
///
/// Serialized as a two-element array, the shape the query-state layer stores.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Inclusive membership. Inverted or NaN bounds contain nothing.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl From<[f64; 2]> for AxisBounds {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

impl From<AxisBounds> for [f64; 2] {
    fn from(b: AxisBounds) -> Self {
        [b.min, b.max]
    }
}

/// Rectangular value range over both axes.
///
/// Either axis may be missing. A domain with no axis is "empty" (no data, or no
/// selection yet). Filtering only engages once both axes are present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<AxisBounds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<AxisBounds>,
}

impl Domain {
    pub fn new(x: AxisBounds, y: AxisBounds) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Convenience for `Domain::new` from raw `(min, max)` pairs.
    pub fn from_ranges(x: (f64, f64), y: (f64, f64)) -> Self {
        Self::new(AxisBounds::new(x.0, x.1), AxisBounds::new(y.0, y.1))
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }

    /// Both axes are bounded.
    pub fn is_complete(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }

    /// Inclusive test on both axes. Returns `false` unless the domain is complete.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match (self.x, self.y) {
            (Some(bx), Some(by)) => bx.contains(x) && by.contains(y),
            _ => false,
        }
    }
}
