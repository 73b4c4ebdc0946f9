//! Core business logic: datasets, look-through aggregation and charts

pub mod chart;
pub mod config;
pub mod drilldown;
pub mod exposure;
pub mod log;
pub mod portfolio;

// Re-export main types for cleaner imports
pub use chart::{ColorField, PieChart};
pub use drilldown::{ClickData, DrillInput, DrillOutput, DrillState, drilldown};
pub use exposure::compute_effective_exposure;
pub use portfolio::{FundHolding, Investment, Portfolio};
