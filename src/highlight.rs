use crate::data_types::{DataPoint, RevisionTerms, Series};

/// Finds the points the detail chart should mark across all visible series.
pub struct HighlightMatcher;

impl HighlightMatcher {
    /// Alert points (when `highlight_alerts`) plus, per series and per
    /// non-blank term, the first point whose revision contains the term.
    ///
    /// Substring matching lets a shortened revision find the full one. The
    /// result is not de-duplicated: a point that both carries an alert and
    /// matches a term appears twice.
    pub fn find(
        series: &[Series],
        highlight_alerts: bool,
        revisions: &RevisionTerms,
    ) -> Vec<DataPoint> {
        let mut highlights = Vec::new();

        for s in series.iter().filter(|s| s.visible) {
            if highlight_alerts {
                highlights.extend(s.points.iter().filter(|p| p.has_alert()).cloned());
            }

            for term in revisions.terms() {
                if let Some(point) = s.points.iter().find(|p| p.revision.contains(term)) {
                    highlights.push(point.clone());
                }
            }
        }

        highlights
    }

    /// X positions of the vertical guide lines drawn for each highlight.
    pub fn markers(highlights: &[DataPoint]) -> Vec<f64> {
        highlights.iter().map(|p| p.x).collect()
    }
}
