#[cfg(test)]
mod tests {
    use perf_graphs::data_types::AxisBounds;
    use perf_graphs::{DataPoint, Domain, DomainComputer, HighlightMatcher, RangeFilter, Series};

    fn series() -> Vec<Series> {
        vec![Series::new(
            "a",
            vec![DataPoint::new(1.0, 1.0, "aa"), DataPoint::new(2.0, 2.0, "bb")],
        )]
    }

    #[test]
    fn test_no_series_at_all() {
        assert!(DomainComputer::compute(&[]).is_empty());
        assert!(RangeFilter::filter(&[], &Domain::from_ranges((0.0, 1.0), (0.0, 1.0))).is_empty());
        assert!(HighlightMatcher::find(&[], true, &"aa".into()).is_empty());
    }

    #[test]
    fn test_all_invisible() {
        let hidden: Vec<Series> = series().into_iter().map(Series::hidden).collect();
        assert!(DomainComputer::compute(&hidden).is_empty());
        assert!(RangeFilter::filter(&hidden, &Domain::empty()).is_empty());
    }

    #[test]
    fn test_inverted_and_non_finite_selection() {
        let inverted = Domain::from_ranges((2.0, 1.0), (2.0, 1.0));
        assert!(RangeFilter::filter(&series(), &inverted).is_empty());

        let nan = Domain::from_ranges((f64::NAN, f64::NAN), (0.0, 10.0));
        assert!(RangeFilter::filter(&series(), &nan).is_empty());

        let infinite = Domain::from_ranges((f64::NEG_INFINITY, f64::INFINITY), (0.0, 10.0));
        assert_eq!(RangeFilter::filter(&series(), &infinite).len(), 2);
    }

    #[test]
    fn test_partial_selection_does_not_filter() {
        let partial = Domain {
            x: Some(AxisBounds::new(1.0, 1.0)),
            y: None,
        };
        assert_eq!(RangeFilter::filter(&series(), &partial).len(), 2);
    }
}
