//! View State
//!
//! `ViewState` is the single owner of everything the overview and detail charts
//! draw from: the entire domain, the user's selected domain, the filtered and
//! highlighted point sets and the tooltip. The renderer only reads it; gestures
//! come back in through the methods below and are debounced before they touch
//! derived state.
//!
//! Time is supplied by the host. Gestures take the `Instant` at which they
//! happened, and `advance` must be called at or after `next_deadline` to
//! release debounced work.

use crate::data_types::{
    DataPoint, Domain, GraphsConfig, HighlightCriteria, RevisionTerms, Series,
};
use crate::debounce::{DebouncedUpdateScheduler, ScheduledUpdate};
use crate::domain::DomainComputer;
use crate::highlight::HighlightMatcher;
use crate::query_state::ZoomParamStore;
use crate::range_filter::RangeFilter;
use crate::tooltip::{TooltipController, TooltipState};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Attached,
    Detached,
}

/// One overview line: every series keeps its slot, hidden ones draw nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct OverviewLine<'a> {
    pub name: &'a str,
    pub points: &'a [DataPoint],
}

/// Read-only view handed to the rendering layer.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewSnapshot<'a> {
    pub entire_domain: Domain,
    pub selected_domain: Domain,
    pub filtered: &'a [DataPoint],
    pub highlights: &'a [DataPoint],
    pub highlight_markers: Vec<f64>,
    pub tooltip: &'a TooltipState,
    pub overview: Vec<OverviewLine<'a>>,
}

pub struct ViewState {
    config: GraphsConfig,
    series: Arc<[Series]>,
    criteria: HighlightCriteria,

    entire_domain: Domain,
    selected_domain: Domain,
    filtered: Vec<DataPoint>,
    highlights: Vec<DataPoint>,

    scheduler: DebouncedUpdateScheduler,
    tooltip: TooltipController,
    store: Option<Arc<dyn ZoomParamStore>>,
    lifecycle: Lifecycle,
}

impl ViewState {
    pub fn new(config: GraphsConfig, series: impl Into<Arc<[Series]>>) -> Self {
        let series = series.into();
        let criteria = HighlightCriteria {
            highlight_alerts: config.highlight_alerts,
            revisions: RevisionTerms::default(),
        };
        let entire_domain = DomainComputer::compute(&series);
        let highlights =
            HighlightMatcher::find(&series, criteria.highlight_alerts, &criteria.revisions);
        let filtered = RangeFilter::filter(&series, &Domain::empty());

        Self {
            scheduler: DebouncedUpdateScheduler::new(
                config.zoom_debounce,
                config.selection_debounce,
            ),
            tooltip: TooltipController::new(config.tooltip_hide_delay),
            config,
            series,
            criteria,
            entire_domain,
            selected_domain: Domain::empty(),
            filtered,
            highlights,
            store: None,
            lifecycle: Lifecycle::Created,
        }
    }

    /// Binds the view to its zoom store and adopts the store's current zoom.
    ///
    /// Returns `false` once the view has been detached: a torn-down view cannot
    /// be revived.
    pub fn attach(&mut self, store: Arc<dyn ZoomParamStore>) -> bool {
        if self.lifecycle == Lifecycle::Detached {
            debug!("attach ignored: view already detached");
            return false;
        }
        let zoom = store.zoom();
        self.store = Some(store);
        self.lifecycle = Lifecycle::Attached;
        debug!(?zoom, "view attached");
        self.adopt_selection(zoom);
        true
    }

    /// Tears the view down. Pending debounced work is dropped and every later
    /// event is ignored, so nothing mutates the view or the store afterwards.
    pub fn detach(&mut self) {
        if self.lifecycle == Lifecycle::Detached {
            return;
        }
        self.scheduler.cancel_all();
        self.tooltip.cancel_pending();
        self.store = None;
        self.lifecycle = Lifecycle::Detached;
        debug!("view detached");
    }

    pub fn is_attached(&self) -> bool {
        self.lifecycle == Lifecycle::Attached
    }

    fn is_live(&self) -> bool {
        if self.lifecycle == Lifecycle::Detached {
            trace!("event ignored: view detached");
            return false;
        }
        true
    }

    /// Replaces the series data wholesale.
    ///
    /// A new data set invalidates the old selection: it is reset to empty here
    /// and in the zoom store, and any selection still being debounced is dropped.
    pub fn set_series(&mut self, series: impl Into<Arc<[Series]>>) {
        if !self.is_live() {
            return;
        }
        self.series = series.into();
        self.entire_domain = DomainComputer::compute(&self.series);
        self.recompute_highlights();
        self.scheduler.cancel_all();
        self.selected_domain = Domain::empty();
        self.filtered = RangeFilter::filter(&self.series, &self.selected_domain);
        if let Some(store) = &self.store {
            store.set_zoom(Domain::empty());
        }
        debug!(
            series = self.series.len(),
            points = self.filtered.len(),
            entire_domain = ?self.entire_domain,
            "series replaced"
        );
    }

    /// Adopts a zoom that changed outside the view (e.g. browser navigation).
    ///
    /// Never written back to the store. Returns whether the selection changed.
    pub fn set_external_zoom(&mut self, zoom: Domain) -> bool {
        if !self.is_live() || zoom == self.selected_domain {
            return false;
        }
        self.adopt_selection(zoom);
        true
    }

    pub fn set_highlight_criteria(&mut self, criteria: HighlightCriteria) {
        if !self.is_live() {
            return;
        }
        self.criteria = criteria;
        self.recompute_highlights();
    }

    pub fn set_highlight_alerts(&mut self, highlight_alerts: bool) {
        let revisions = self.criteria.revisions.clone();
        self.set_highlight_criteria(HighlightCriteria {
            highlight_alerts,
            revisions,
        });
    }

    pub fn set_highlighted_revisions(&mut self, revisions: impl Into<RevisionTerms>) {
        self.set_highlight_criteria(HighlightCriteria {
            highlight_alerts: self.criteria.highlight_alerts,
            revisions: revisions.into(),
        });
    }

    /// The overview brush moved. Committed after the zoom quiet period.
    pub fn brush_overview(&mut self, zoom: Domain, now: Instant) {
        if self.is_live() {
            self.scheduler.zoom_changed(zoom, now);
        }
    }

    /// The detail chart was zoomed or panned. Filtered after the selection quiet period.
    pub fn zoom_detail(&mut self, selection: Domain, now: Instant) {
        if self.is_live() {
            self.scheduler.selection_changed(selection, now);
        }
    }

    pub fn hover_point(&mut self, point: DataPoint) -> bool {
        self.is_live() && self.tooltip.hover(point)
    }

    pub fn click_point(&mut self, point: DataPoint) -> bool {
        self.is_live() && self.tooltip.click(point)
    }

    pub fn mouse_out(&mut self, now: Instant) {
        if self.is_live() {
            self.tooltip.mouse_out(now);
        }
    }

    pub fn close_tooltip(&mut self) -> bool {
        self.is_live() && self.tooltip.close()
    }

    /// Releases every debounced update whose deadline has passed.
    ///
    /// Returns whether anything the renderer reads has changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        if !self.is_live() {
            return false;
        }
        let mut changed = false;
        for update in self.scheduler.poll(now) {
            match update {
                ScheduledUpdate::Zoom(zoom) => {
                    trace!(?zoom, "overview brush committed");
                    if let Some(store) = &self.store {
                        store.set_zoom(zoom);
                    }
                    changed |= self.adopt_if_changed(zoom);
                }
                ScheduledUpdate::Selection(selection) => {
                    trace!(?selection, "detail selection committed");
                    changed |= self.adopt_if_changed(selection);
                }
            }
        }
        changed |= self.tooltip.poll(now);
        changed
    }

    /// When `advance` next has work to do, if ever.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.scheduler.next_deadline(), self.tooltip.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn adopt_if_changed(&mut self, selection: Domain) -> bool {
        if selection == self.selected_domain {
            return false;
        }
        self.adopt_selection(selection);
        true
    }

    fn adopt_selection(&mut self, selection: Domain) {
        self.selected_domain = selection;
        self.filtered = RangeFilter::filter(&self.series, &self.selected_domain);
        debug!(?selection, points = self.filtered.len(), "selection adopted");
    }

    fn recompute_highlights(&mut self) {
        self.highlights = HighlightMatcher::find(
            &self.series,
            self.criteria.highlight_alerts,
            &self.criteria.revisions,
        );
    }

    pub fn config(&self) -> &GraphsConfig {
        &self.config
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn criteria(&self) -> &HighlightCriteria {
        &self.criteria
    }

    pub fn entire_domain(&self) -> Domain {
        self.entire_domain
    }

    pub fn selected_domain(&self) -> Domain {
        self.selected_domain
    }

    pub fn filtered(&self) -> &[DataPoint] {
        &self.filtered
    }

    pub fn highlights(&self) -> &[DataPoint] {
        &self.highlights
    }

    pub fn tooltip(&self) -> &TooltipState {
        self.tooltip.state()
    }

    pub fn overview_series(&self) -> Vec<OverviewLine<'_>> {
        self.series
            .iter()
            .map(|s| OverviewLine {
                name: &s.name,
                points: if s.visible { s.points.as_slice() } else { &[] },
            })
            .collect()
    }

    pub fn snapshot(&self) -> ViewSnapshot<'_> {
        ViewSnapshot {
            entire_domain: self.entire_domain,
            selected_domain: self.selected_domain,
            filtered: &self.filtered,
            highlights: &self.highlights,
            highlight_markers: HighlightMatcher::markers(&self.highlights),
            tooltip: self.tooltip.state(),
            overview: self.overview_series(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_state::SharedZoomStore;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn series() -> Vec<Series> {
        vec![
            Series::new(
                "A",
                vec![DataPoint::new(1.0, 1.0, "aa"), DataPoint::new(2.0, 5.0, "bb")],
            ),
            Series::new("B", vec![DataPoint::new(3.0, 100.0, "cc")]).hidden(),
        ]
    }

    #[test]
    fn test_attach_adopts_store_zoom() {
        let store = SharedZoomStore::new(Domain::from_ranges((1.0, 1.0), (1.0, 1.0)));
        let mut view = ViewState::new(GraphsConfig::default(), series());
        assert_eq!(view.filtered().len(), 2);
        assert!(view.attach(Arc::new(store.clone())));
        assert_eq!(view.filtered(), &[DataPoint::new(1.0, 1.0, "aa")]);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_external_zoom_is_not_written_back() {
        let store = SharedZoomStore::default();
        let mut view = ViewState::new(GraphsConfig::default(), series());
        view.attach(Arc::new(store.clone()));
        let zoom = Domain::from_ranges((2.0, 2.0), (0.0, 10.0));
        assert!(view.set_external_zoom(zoom));
        assert!(!view.set_external_zoom(zoom));
        assert_eq!(view.filtered().len(), 1);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_overview_keeps_hidden_slots() {
        let view = ViewState::new(GraphsConfig::default(), series());
        let lines = view.overview_series();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].points.len(), 2);
        assert_eq!(lines[1].name, "B");
        assert!(lines[1].points.is_empty());
        assert_eq!(view.snapshot().overview, lines);
    }

    #[test]
    fn test_next_deadline_spans_timers() {
        let t0 = Instant::now();
        let mut view = ViewState::new(GraphsConfig::default(), series());
        assert!(view.next_deadline().is_none());
        view.hover_point(DataPoint::new(1.0, 1.0, "aa"));
        view.zoom_detail(Domain::empty(), t0);
        view.mouse_out(t0 + ms(100));
        assert_eq!(view.next_deadline(), Some(t0 + ms(350)));
    }
}
