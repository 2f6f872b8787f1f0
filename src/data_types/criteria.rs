use serde::{Deserialize, Serialize};

/// Revision search terms, accepted either as one string or as a list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RevisionTerms {
    Single(String),
    Many(Vec<String>),
}

impl Default for RevisionTerms {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl RevisionTerms {
    /// Non-blank terms, as written, in input order.
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        let slice: &[String] = match self {
            Self::Single(s) => std::slice::from_ref(s),
            Self::Many(v) => v,
        };
        slice
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.as_str())
    }
}

impl From<&str> for RevisionTerms {
    fn from(s: &str) -> Self {
        Self::Single(s.to_string())
    }
}

impl From<Vec<String>> for RevisionTerms {
    fn from(v: Vec<String>) -> Self {
        Self::Many(v)
    }
}

impl From<Vec<&str>> for RevisionTerms {
    fn from(v: Vec<&str>) -> Self {
        Self::Many(v.into_iter().map(String::from).collect())
    }
}

/// What the detail chart should highlight, independent of the zoom selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightCriteria {
    pub highlight_alerts: bool,
    pub revisions: RevisionTerms,
}

impl Default for HighlightCriteria {
    fn default() -> Self {
        Self {
            highlight_alerts: true,
            revisions: RevisionTerms::default(),
        }
    }
}
