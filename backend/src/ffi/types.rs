//! Type conversion utilities for FFI boundary
//!
//! Converts between Python dicts/lists and the Rust cost model.

use std::sync::Arc;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyFloat, PyList, PyLong, PyString};

use crate::costs::{CostBreakdown, CostQueries};
use crate::models::{Attributes, Filament, MultiPart, NonPrintedPart, Part, PricedItem, Printer, PrinterSpec};
use crate::reporting::CostReport;

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a required field from a Python dict with clear error messages.
///
/// # Errors
/// Returns PyValueError if the field is missing; type conversion errors
/// propagate unchanged.
fn extract_required<T>(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<T>
where
    T: for<'py> FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| PyValueError::new_err(format!("Missing required field '{}'", key)))?
        .extract()
}

/// Extract an optional field from a Python dict.
///
/// Missing keys and explicit `None` both yield `None`.
fn extract_optional<T>(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<Option<T>>
where
    T: for<'py> FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => Ok(Some(value.extract()?)),
        _ => Ok(None),
    }
}

// ========================================================================
// Python -> Rust
// ========================================================================

/// Convert an arbitrary Python value into JSON for the attributes map.
///
/// Objects with no JSON counterpart are stored as their `str()`.
fn py_to_json(value: &Bound<'_, PyAny>) -> PyResult<serde_json::Value> {
    if value.is_none() {
        return Ok(serde_json::Value::Null);
    }
    // bool before int: Python bools are ints
    if value.is_instance_of::<PyBool>() {
        return Ok(serde_json::Value::Bool(value.extract()?));
    }
    if value.is_instance_of::<PyLong>() {
        if let Ok(n) = value.extract::<i64>() {
            return Ok(serde_json::Value::from(n));
        }
    }
    if value.is_instance_of::<PyFloat>() {
        let f: f64 = value.extract()?;
        return Ok(serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null));
    }
    if value.is_instance_of::<PyString>() {
        return Ok(serde_json::Value::String(value.extract()?));
    }
    if let Ok(list) = value.downcast::<PyList>() {
        let items = list.iter().map(|v| py_to_json(&v)).collect::<PyResult<Vec<_>>>()?;
        return Ok(serde_json::Value::Array(items));
    }
    if let Ok(dict) = value.downcast::<PyDict>() {
        let mut map = serde_json::Map::new();
        for (k, v) in dict.iter() {
            map.insert(k.str()?.to_string(), py_to_json(&v)?);
        }
        return Ok(serde_json::Value::Object(map));
    }
    Ok(serde_json::Value::String(value.str()?.to_string()))
}

fn parse_attributes(dict: &Bound<'_, PyDict>) -> PyResult<Attributes> {
    let mut attributes = Attributes::new();
    if let Some(raw) = dict.get_item("attributes")? {
        if raw.is_none() {
            return Ok(attributes);
        }
        let raw = raw.downcast::<PyDict>()?;
        for (k, v) in raw.iter() {
            attributes.insert(k.str()?.to_string(), py_to_json(&v)?);
        }
    }
    Ok(attributes)
}

/// Filament from a preset name ("pla", "abs") or a dict
fn parse_filament(value: &Bound<'_, PyAny>) -> PyResult<Filament> {
    if let Ok(preset) = value.extract::<String>() {
        return match preset.to_ascii_lowercase().as_str() {
            "pla" => Ok(Filament::pla()),
            "abs" => Ok(Filament::abs()),
            other => Err(PyValueError::new_err(format!("Unknown filament preset '{}'", other))),
        };
    }
    let dict = value.downcast::<PyDict>()?;
    let name: String = extract_optional(dict, "name")?.unwrap_or_else(|| "custom".to_string());
    Ok(Filament::new(name, extract_required(dict, "price_per_gram")?)?)
}

/// Printer from a preset name ("ender_3_pro", "ender_5_plus") or a dict
fn parse_printer(value: &Bound<'_, PyAny>) -> PyResult<Printer> {
    if let Ok(preset) = value.extract::<String>() {
        return match preset.to_ascii_lowercase().replace('-', "_").as_str() {
            "ender_3_pro" | "ender3pro" => Ok(Printer::ender_3_pro()),
            "ender_5_plus" | "ender5plus" => Ok(Printer::ender_5_plus()),
            other => Err(PyValueError::new_err(format!("Unknown printer preset '{}'", other))),
        };
    }
    let dict = value.downcast::<PyDict>()?;
    let name: String = extract_optional(dict, "name")?.unwrap_or_else(|| "custom".to_string());
    let mut spec = PrinterSpec::new(
        name,
        extract_required(dict, "initial_cost")?,
        extract_required(dict, "power_consumption")?,
    );
    if let Some(price_per_watt) = extract_optional(dict, "price_per_watt")? {
        spec = spec.with_price_per_watt(price_per_watt);
    }
    if let Some(hours) = extract_optional(dict, "repay_period_hours")? {
        spec = spec.with_repay_period_hours(hours);
    }
    if let Some(rate) = extract_optional(dict, "price_per_hour")? {
        spec = spec.with_price_per_hour(rate);
    }
    Ok(Printer::from_spec(spec)?)
}

/// Parse a priced-item dict.
///
/// ```python
/// {"type": "part", "name": "spire", "filament": "pla",
///  "printer": "ender_3_pro", "hours": 6, "grams": 80}
/// {"type": "non_printed", "name": "LED", "cost": 5}
/// {"type": "assembly", "name": "Messeturm", "parts": [...]}
/// ```
pub fn parse_priced_item(dict: &Bound<'_, PyDict>) -> PyResult<PricedItem> {
    let kind: String = extract_optional(dict, "type")?.unwrap_or_else(|| "part".to_string());
    let name: String = extract_required(dict, "name")?;
    let attributes = parse_attributes(dict)?;

    let item: PricedItem = match kind.as_str() {
        "part" => {
            let filament = dict
                .get_item("filament")?
                .ok_or_else(|| PyValueError::new_err("Missing required field 'filament'"))?;
            let printer = dict
                .get_item("printer")?
                .ok_or_else(|| PyValueError::new_err("Missing required field 'printer'"))?;
            Part::new(
                name,
                Arc::new(parse_filament(&filament)?),
                Arc::new(parse_printer(&printer)?),
                extract_required(dict, "hours")?,
                extract_required(dict, "grams")?,
            )?
            .with_attributes(attributes)
            .into()
        }
        "non_printed" => NonPrintedPart::new(name, extract_required(dict, "cost")?)?
            .with_attributes(attributes)
            .into(),
        "assembly" => {
            let parts = dict
                .get_item("parts")?
                .ok_or_else(|| PyValueError::new_err("Missing required field 'parts'"))?;
            MultiPart::from_parts(name, parse_priced_items(parts.downcast::<PyList>()?)?)
                .with_attributes(attributes)
                .into()
        }
        other => {
            return Err(PyValueError::new_err(format!(
                "Unknown item type '{}' (expected part, non_printed or assembly)",
                other
            )))
        }
    };
    Ok(item)
}

pub fn parse_priced_items(list: &Bound<'_, PyList>) -> PyResult<Vec<PricedItem>> {
    list.iter()
        .map(|entry| parse_priced_item(entry.downcast::<PyDict>()?))
        .collect()
}

// ========================================================================
// Rust -> Python
// ========================================================================

pub fn breakdown_to_py<'py>(
    py: Python<'py>,
    item: &PricedItem,
) -> PyResult<Bound<'py, PyDict>> {
    let CostBreakdown {
        material_cost,
        printing_time_cost,
        power_cost,
        other_cost,
    } = item.breakdown();

    let dict = PyDict::new_bound(py);
    dict.set_item("name", item.name())?;
    dict.set_item("total_cost", item.total_cost())?;
    dict.set_item("material_cost", material_cost)?;
    dict.set_item("printing_time_cost", printing_time_cost)?;
    dict.set_item("power_cost", power_cost)?;
    dict.set_item("other_cost", other_cost)?;
    Ok(dict)
}

pub fn report_to_py<'py>(py: Python<'py>, report: &CostReport) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("labels", report.labels().to_vec())?;
    dict.set_item("categories", report.category_names())?;
    dict.set_item("totals", report.totals().to_vec())?;
    dict.set_item("partial_costs", report.partial_costs().to_vec())?;
    dict.set_item("partial_sums", report.partial_sums().to_vec())?;
    dict.set_item("value_annotations", report.value_annotations())?;
    Ok(dict)
}
