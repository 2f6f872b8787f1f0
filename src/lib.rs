//! perf_graphs: state engine for an overview + detail performance graph

pub mod data_types;
pub mod debounce;
pub mod domain;
pub mod highlight;
pub mod query_state;
pub mod range_filter;
pub mod tooltip;
pub mod utils;
pub mod view_state;

pub use data_types::{AxisBounds, DataPoint, Domain, GraphsConfig, RevisionTerms, Series};
pub use domain::DomainComputer;
pub use highlight::HighlightMatcher;
pub use range_filter::RangeFilter;
pub use tooltip::{TooltipController, TooltipState};
pub use view_state::{ViewSnapshot, ViewState};
