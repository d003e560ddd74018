//! Python bindings (feature `pyo3`)
//!
//! Items cross the boundary as plain dicts; see
//! [`types::parse_priced_item`] for the accepted shape.
//!
//! # Example (from Python)
//!
//! ```python
//! from printcost_core import price_item, build_report
//!
//! lamp = {
//!     "type": "assembly",
//!     "name": "Stonks",
//!     "parts": [
//!         {"type": "part", "name": "arrow", "filament": "pla",
//!          "printer": "ender_3_pro", "hours": 3, "grams": 20},
//!         {"type": "non_printed", "name": "LED", "cost": 5},
//!     ],
//! }
//! print(price_item(lamp)["total_cost"])
//! print(build_report([lamp])["labels"])
//! ```

pub mod types;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::costs::CostQuery;
use crate::error::PricingError;
use crate::reporting::{CostCategory, CostReport};

impl From<PricingError> for PyErr {
    fn from(err: PricingError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Price one item and return its total and component costs.
#[pyfunction]
#[pyo3(name = "price_item")]
pub fn py_price_item<'py>(py: Python<'py>, item: &Bound<'py, PyDict>) -> PyResult<Bound<'py, PyDict>> {
    let item = types::parse_priced_item(item)?;
    types::breakdown_to_py(py, &item)
}

/// Build the stacked-bar report for a list of items.
///
/// `categories` is a list of query names (`"other"`, `"material"`,
/// `"printing_time"`, `"power"`); `None` selects the default order.
#[pyfunction]
#[pyo3(name = "build_report", signature = (items, categories=None))]
pub fn py_build_report<'py>(
    py: Python<'py>,
    items: &Bound<'py, PyList>,
    categories: Option<Vec<String>>,
) -> PyResult<Bound<'py, PyDict>> {
    let items = types::parse_priced_items(items)?;
    let categories = match categories {
        Some(names) => names
            .iter()
            .map(|name| name.parse::<CostQuery>().map(CostCategory::for_query))
            .collect::<Result<Vec<_>, _>>()?,
        None => CostCategory::defaults(),
    };
    let report = CostReport::build(&items, &categories)?;
    types::report_to_py(py, &report)
}
