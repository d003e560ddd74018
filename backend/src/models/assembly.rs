//! Assemblies (multi-part objects)
//!
//! An assembly owns its children by value. Nothing can hold a reference back
//! up the tree, so a cycle cannot be built and the recursive sums always
//! terminate.

use serde::Serialize;

use crate::costs::CostQueries;
use crate::models::{Attributes, PricedItem};

/// A priced item made of other priced items
///
/// Every query is the sum of the same query over the children, in child
/// order. An empty assembly costs nothing.
///
/// # Example
/// ```
/// use printcost_core::{CostQueries, MultiPart, NonPrintedPart};
///
/// let lamp = MultiPart::new("lamp")
///     .with_part(NonPrintedPart::new("LED", 5.0).unwrap())
///     .with_part(NonPrintedPart::new("GU10 Lamp Socket", 6.0).unwrap());
///
/// assert_eq!(lamp.total_cost(), 11.0);
/// assert_eq!(MultiPart::new("empty").total_cost(), 0.0);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct MultiPart {
    name: String,
    parts: Vec<PricedItem>,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    attributes: Attributes,
}

impl MultiPart {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parts: Vec::new(),
            attributes: Attributes::new(),
        }
    }

    pub fn from_parts(name: impl Into<String>, parts: Vec<PricedItem>) -> Self {
        Self {
            name: name.into(),
            parts,
            attributes: Attributes::new(),
        }
    }

    pub fn with_part(mut self, part: impl Into<PricedItem>) -> Self {
        self.parts.push(part.into());
        self
    }

    /// Append a child at the end of the assembly
    pub fn push(&mut self, part: impl Into<PricedItem>) {
        self.parts.push(part.into());
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parts(&self) -> &[PricedItem] {
        &self.parts
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Number of leaf parts, counting through nested assemblies
    pub fn leaf_count(&self) -> usize {
        self.parts
            .iter()
            .map(|part| match part {
                PricedItem::Assembly(inner) => inner.leaf_count(),
                _ => 1,
            })
            .sum()
    }

    fn sum_over<F>(&self, query: F) -> f64
    where
        F: Fn(&PricedItem) -> f64,
    {
        self.parts.iter().map(query).sum()
    }
}

impl CostQueries for MultiPart {
    fn total_cost(&self) -> f64 {
        self.sum_over(PricedItem::total_cost)
    }

    fn material_cost(&self) -> f64 {
        self.sum_over(PricedItem::material_cost)
    }

    fn printing_time_cost(&self) -> f64 {
        self.sum_over(PricedItem::printing_time_cost)
    }

    fn power_cost(&self) -> f64 {
        self.sum_over(PricedItem::power_cost)
    }

    fn other_cost(&self) -> f64 {
        self.sum_over(PricedItem::other_cost)
    }
}
