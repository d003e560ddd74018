//! Printcost Core - 3D print cost model
//!
//! Prices printed parts, purchased components and nested assemblies, and
//! lays the per-category breakdown out for a stacked bar chart.
//!
//! # Architecture
//!
//! - **models**: Domain types (Filament, Printer, Part, NonPrintedPart, MultiPart)
//! - **costs**: The five cost queries and their schema documentation
//! - **reporting**: Category matrices, labels, and the chart renderer seam
//!
//! # Critical Invariants
//!
//! 1. Every assembly query is the sum of its children's, in child order
//! 2. A printer's hourly rate is fixed at construction
//! 3. Nothing in the library draws; charts go through `ChartRenderer`

// Module declarations
pub mod costs;
pub mod error;
pub mod models;
pub mod reporting;

// Re-exports for convenience
pub use costs::{get_cost_schema, CostBreakdown, CostQueries, CostQuery};
pub use error::PricingError;
pub use models::{
    Attributes, Filament, MultiPart, NonPrintedPart, Part, PricedItem, Printer, PrinterSpec,
};
pub use reporting::{
    visualize_costs, BarSeries, ChartRenderer, CostCategory, CostReport, ReportConfig,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

/// Get the cost schema documentation as a JSON string.
#[cfg(feature = "pyo3")]
#[pyfunction]
#[pyo3(name = "get_cost_schema")]
fn py_get_cost_schema() -> PyResult<String> {
    Ok(costs::schema_docs::get_cost_schema())
}

#[cfg(feature = "pyo3")]
#[pymodule]
fn printcost_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::py_price_item, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::py_build_report, m)?)?;
    m.add_function(wrap_pyfunction!(py_get_cost_schema, m)?)?;
    Ok(())
}
