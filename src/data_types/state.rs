use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// Durations are written as whole milliseconds in config files.
mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// Timing and default criteria for a graphs view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphsConfig {
    /// Quiet period before an overview brush is committed to the zoom store.
    #[serde(with = "duration_ms")]
    pub zoom_debounce: Duration,
    /// Quiet period before a detail zoom/pan re-filters the points.
    #[serde(with = "duration_ms")]
    pub selection_debounce: Duration,
    /// Delay between the pointer leaving a point and the preview tooltip hiding.
    #[serde(with = "duration_ms")]
    pub tooltip_hide_delay: Duration,
    pub highlight_alerts: bool,
}

impl Default for GraphsConfig {
    fn default() -> Self {
        Self {
            zoom_debounce: Duration::from_millis(500),
            selection_debounce: Duration::from_millis(500),
            tooltip_hide_delay: Duration::from_millis(250),
            highlight_alerts: true,
        }
    }
}

impl GraphsConfig {
    /// Parses a config document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("invalid graphs config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GraphsConfig::default();
        assert_eq!(config.zoom_debounce, Duration::from_millis(500));
        assert_eq!(config.selection_debounce, Duration::from_millis(500));
        assert_eq!(config.tooltip_hide_delay, Duration::from_millis(250));
        assert!(config.highlight_alerts);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GraphsConfig::from_json(r#"{"tooltip_hide_delay": 100}"#).unwrap();
        assert_eq!(config.tooltip_hide_delay, Duration::from_millis(100));
        assert_eq!(config.zoom_debounce, Duration::from_millis(500));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(GraphsConfig::from_json(r#"{"zoom_debounce": "soon"}"#).is_err());
    }
}
