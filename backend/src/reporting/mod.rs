//! Cost reporting
//!
//! Turns priced items into stacked-bar chart data and hands it to an
//! injected [`ChartRenderer`].

pub mod category;
pub mod format;
pub mod renderer;
pub mod report;

// Re-exports
pub use category::{CostCategory, ReportConfig};
pub use format::{format_currency, item_label, DEFAULT_CURRENCY_SYMBOL};
pub use renderer::{BarSeries, ChartRenderer};
pub use report::{visualize_costs, CostReport};
