//! Printed and purchased parts
//!
//! The two leaf kinds of priced item:
//! - `Part`: printed on a shared printer from a shared filament
//! - `NonPrintedPart`: bought in at a flat price (LEDs, sockets, screws)

use std::sync::Arc;

use serde::Serialize;

use crate::costs::CostQueries;
use crate::error::{require_non_negative, PricingError};
use crate::models::{Attributes, Filament, Printer};

/// A printed part
///
/// Holds shared references to its filament and printer; the same
/// `Arc<Printer>` typically prices many parts.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use printcost_core::{CostQueries, Filament, Part, Printer};
///
/// let pla = Arc::new(Filament::pla());
/// let ender = Arc::new(Printer::ender_3_pro());
/// let spire = Part::new("spire", pla, ender, 6.0, 80.0).unwrap();
///
/// assert_eq!(spire.material_cost(), 0.02 * 80.0);
/// assert_eq!(spire.other_cost(), 0.0);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    name: String,
    filament: Arc<Filament>,
    printer: Arc<Printer>,
    /// Printer time
    hours: f64,
    /// Material consumed
    grams: f64,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    attributes: Attributes,
}

impl Part {
    /// # Errors
    /// `InvalidConfiguration` if `hours` or `grams` is negative or not finite.
    pub fn new(
        name: impl Into<String>,
        filament: Arc<Filament>,
        printer: Arc<Printer>,
        hours: f64,
        grams: f64,
    ) -> Result<Self, PricingError> {
        Ok(Self {
            name: name.into(),
            filament,
            printer,
            hours: require_non_negative("hours", hours)?,
            grams: require_non_negative("grams", grams)?,
            attributes: Attributes::new(),
        })
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

    pub fn filament(&self) -> &Arc<Filament> {
        &self.filament
    }

    pub fn printer(&self) -> &Arc<Printer> {
        &self.printer
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn grams(&self) -> f64 {
        self.grams
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl CostQueries for Part {
    fn total_cost(&self) -> f64 {
        self.printer.price_per_hour() * self.hours + self.filament.price_per_gram() * self.grams
    }

    fn material_cost(&self) -> f64 {
        self.filament.price_per_gram() * self.grams
    }

    fn printing_time_cost(&self) -> f64 {
        self.printer.price_per_hour() * self.hours
    }

    // Charged on top of the hourly rate, which already folds in power.
    fn power_cost(&self) -> f64 {
        self.printer.power_consumption() * self.printer.price_per_watt() * self.hours
    }

    fn other_cost(&self) -> f64 {
        0.0
    }
}

/// A purchased component with a flat price
#[derive(Debug, Clone, Serialize)]
pub struct NonPrintedPart {
    name: String,
    cost: f64,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    attributes: Attributes,
}

impl NonPrintedPart {
    /// # Errors
    /// `InvalidConfiguration` if `cost` is negative or not finite.
    pub fn new(name: impl Into<String>, cost: f64) -> Result<Self, PricingError> {
        Ok(Self {
            name: name.into(),
            cost: require_non_negative("cost", cost)?,
            attributes: Attributes::new(),
        })
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

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl CostQueries for NonPrintedPart {
    fn total_cost(&self) -> f64 {
        self.cost
    }

    fn material_cost(&self) -> f64 {
        0.0
    }

    fn printing_time_cost(&self) -> f64 {
        0.0
    }

    fn power_cost(&self) -> f64 {
        0.0
    }

    fn other_cost(&self) -> f64 {
        self.cost
    }
}
