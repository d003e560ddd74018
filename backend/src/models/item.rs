//! Priced item: the sum type over everything that has a price

use serde::Serialize;

use crate::costs::CostQueries;
use crate::models::{Attributes, MultiPart, NonPrintedPart, Part};

/// Any node of a priced-item tree
///
/// Serializes with a `"type"` tag (`part`, `non_printed`, `assembly`) for
/// diagnostic dumps.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PricedItem {
    Part(Part),
    NonPrinted(NonPrintedPart),
    Assembly(MultiPart),
}

impl PricedItem {
    pub fn name(&self) -> &str {
        match self {
            PricedItem::Part(part) => part.name(),
            PricedItem::NonPrinted(part) => part.name(),
            PricedItem::Assembly(assembly) => assembly.name(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            PricedItem::Part(part) => part.attributes(),
            PricedItem::NonPrinted(part) => part.attributes(),
            PricedItem::Assembly(assembly) => assembly.attributes(),
        }
    }

    fn as_queries(&self) -> &dyn CostQueries {
        match self {
            PricedItem::Part(part) => part,
            PricedItem::NonPrinted(part) => part,
            PricedItem::Assembly(assembly) => assembly,
        }
    }
}

impl CostQueries for PricedItem {
    fn total_cost(&self) -> f64 {
        self.as_queries().total_cost()
    }

    fn material_cost(&self) -> f64 {
        self.as_queries().material_cost()
    }

    fn printing_time_cost(&self) -> f64 {
        self.as_queries().printing_time_cost()
    }

    fn power_cost(&self) -> f64 {
        self.as_queries().power_cost()
    }

    fn other_cost(&self) -> f64 {
        self.as_queries().other_cost()
    }
}

impl From<Part> for PricedItem {
    fn from(part: Part) -> Self {
        PricedItem::Part(part)
    }
}

impl From<NonPrintedPart> for PricedItem {
    fn from(part: NonPrintedPart) -> Self {
        PricedItem::NonPrinted(part)
    }
}

impl From<MultiPart> for PricedItem {
    fn from(assembly: MultiPart) -> Self {
        PricedItem::Assembly(assembly)
    }
}
