use crate::data_types::{visible_points, DataPoint, Domain, Series};

/// Narrows the visible points to those inside a selected domain.
///
/// Zooming the detail chart only redraws what the selection covers; this is
/// where the reduction happens.
pub struct RangeFilter;

impl RangeFilter {
    /// Visible points inside `domain`, in series order then point order.
    ///
    /// Until the domain has both axes the flattened visible points are returned
    /// unchanged. Inverted or non-finite bounds match nothing.
    pub fn filter(series: &[Series], domain: &Domain) -> Vec<DataPoint> {
        if !domain.is_complete() {
            return visible_points(series).cloned().collect();
        }
        visible_points(series)
            .filter(|p| domain.contains(p.x, p.y))
            .cloned()
            .collect()
    }

    /// Same rule applied to an already flattened point list.
    pub fn filter_slice(points: &[DataPoint], domain: &Domain) -> Vec<DataPoint> {
        if !domain.is_complete() {
            return points.to_vec();
        }
        points
            .iter()
            .filter(|p| domain.contains(p.x, p.y))
            .cloned()
            .collect()
    }
}
