//! Cost Schema Documentation
//!
//! Self-documenting schema for the five cost queries, generated from code
//! metadata and exported as JSON for the CLI (`printcost schema`) and the
//! Python bindings.

use serde::{Deserialize, Serialize};

use super::queries::CostQuery;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Worked example for one query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostExample {
    /// Scenario description
    pub scenario: String,
    /// Input values as (name, value) pairs
    pub inputs: Vec<(String, String)>,
    /// Calculation steps
    pub calculation: String,
    /// Final result
    pub result: String,
}

/// Documentation for a single cost query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryDoc {
    /// Query identifier (e.g., "printing_time")
    pub name: String,

    /// Method on `CostQueries` (e.g., "printing_time_cost")
    pub method: String,

    /// Legend name used in reports, if the query is a report category
    pub display_name: Option<String>,

    /// What this figure represents
    pub description: String,

    /// Formula for printed parts
    pub part_formula: String,

    /// Formula for non-printed parts
    pub non_printed_formula: String,

    /// Formula for assemblies
    pub assembly_formula: String,

    /// Rust source file location
    pub source_location: String,

    /// Related queries
    pub see_also: Vec<String>,

    pub example: Option<CostExample>,
}

/// Complete cost schema documentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostSchemaDoc {
    pub version: String,
    pub currency_unit: String,
    pub queries: Vec<QueryDoc>,
}

/// Trait for types that can provide cost schema documentation
pub trait CostSchemaDocumented {
    fn schema_docs() -> Vec<QueryDoc>;
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

const ASSEMBLY_FORMULA: &str = "sum of the same query over all children, in child order";
const PART_SOURCE: &str = "backend/src/models/part.rs";

fn s(text: &str) -> String {
    text.to_string()
}

fn reference_example(calculation: &str, result: &str) -> Option<CostExample> {
    Some(CostExample {
        scenario: s("10 h, 100 g of PLA on a 220 / 20 W printer with default rates"),
        inputs: vec![
            (s("price_per_hour"), s("220 / 2160 + 0.00028 * 20 = 0.107452")),
            (s("price_per_gram"), s("0.02")),
            (s("hours"), s("10")),
            (s("grams"), s("100")),
        ],
        calculation: s(calculation),
        result: s(result),
    })
}

impl CostSchemaDocumented for CostQuery {
    fn schema_docs() -> Vec<QueryDoc> {
        vec![
            QueryDoc {
                name: s("total"),
                method: s("total_cost"),
                display_name: None,
                description: s("Full price of the item. Shown in report labels."),
                part_formula: s("printer.price_per_hour * hours + filament.price_per_gram * grams"),
                non_printed_formula: s("cost"),
                assembly_formula: s(ASSEMBLY_FORMULA),
                source_location: s(PART_SOURCE),
                see_also: vec![s("material"), s("printing_time")],
                example: reference_example("0.107452 * 10 + 0.02 * 100", "3.07"),
            },
            QueryDoc {
                name: s("material"),
                method: s("material_cost"),
                display_name: Some(s("Material Costs")),
                description: s("Filament consumed by printed parts."),
                part_formula: s("filament.price_per_gram * grams"),
                non_printed_formula: s("0"),
                assembly_formula: s(ASSEMBLY_FORMULA),
                source_location: s(PART_SOURCE),
                see_also: vec![s("total")],
                example: reference_example("0.02 * 100", "2.00"),
            },
            QueryDoc {
                name: s("printing_time"),
                method: s("printing_time_cost"),
                display_name: Some(s("Printing Time Costs")),
                description: s("Printer-hour billing: amortized purchase price plus \
                    estimated electricity, baked into one hourly rate."),
                part_formula: s("printer.price_per_hour * hours"),
                non_printed_formula: s("0"),
                assembly_formula: s(ASSEMBLY_FORMULA),
                source_location: s(PART_SOURCE),
                see_also: vec![s("power"), s("total")],
                example: reference_example("0.107452 * 10", "1.07"),
            },
            QueryDoc {
                name: s("power"),
                method: s("power_cost"),
                display_name: Some(s("Power Costs")),
                description: s("Electricity for printed parts. The hourly rate already \
                    contains this term, so it is charged twice when both are shown \
                    and is not part of total_cost."),
                part_formula: s("printer.power_consumption * printer.price_per_watt * hours"),
                non_printed_formula: s("0"),
                assembly_formula: s(ASSEMBLY_FORMULA),
                source_location: s(PART_SOURCE),
                see_also: vec![s("printing_time")],
                example: reference_example("20 * 0.00028 * 10", "0.06"),
            },
            QueryDoc {
                name: s("other"),
                method: s("other_cost"),
                display_name: Some(s("Other Costs")),
                description: s("Flat price of purchased, non-printed components."),
                part_formula: s("0"),
                non_printed_formula: s("cost"),
                assembly_formula: s(ASSEMBLY_FORMULA),
                source_location: s(PART_SOURCE),
                see_also: vec![s("total")],
                example: None,
            },
        ]
    }
}

/// Get the complete cost schema as a JSON string
pub fn get_cost_schema() -> String {
    let schema = CostSchemaDoc {
        version: s("1.0"),
        currency_unit: s("€"),
        queries: CostQuery::schema_docs(),
    };

    serde_json::to_string_pretty(&schema).unwrap_or_else(|err| {
        tracing::error!(error = %err, "failed to serialize cost schema");
        String::new()
    })
}
