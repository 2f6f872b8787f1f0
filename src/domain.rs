use crate::data_types::{visible_points, AxisBounds, Domain, Series};

/// Derives the full value range spanned by the visible series.
pub struct DomainComputer;

impl DomainComputer {
    /// Returns the empty domain when no visible series has points.
    ///
    /// The x range is positional: first and last point in feed order, since the
    /// feed delivers points time-ordered. An out-of-order feed yields a wrong x
    /// range; it is not corrected here.
    pub fn compute(series: &[Series]) -> Domain {
        let mut points = visible_points(series);
        let Some(first) = points.next() else {
            return Domain::empty();
        };

        let (y_min, y_max, last) = points.fold((first.y, first.y, first), |(lo, hi, _), p| {
            (lo.min(p.y), hi.max(p.y), p)
        });

        Domain::new(
            AxisBounds::new(first.x, last.x),
            AxisBounds::new(y_min, y_max),
        )
    }
}
