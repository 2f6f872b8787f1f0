pub mod axis;
pub mod criteria;
pub mod data;
pub mod state;

// Flat re-exports so callers can `use perf_graphs::data_types::*`
pub use axis::*;
pub use criteria::*;
pub use data::*;
pub use state::*;
