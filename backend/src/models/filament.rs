//! Filament model
//!
//! A filament is nothing more than a price per gram. PLA and ABS are
//! named presets with default prices; they behave identically.

use serde::Serialize;

use crate::error::{require_non_negative, PricingError};

/// Default PLA price (currency per gram)
pub const PLA_PRICE_PER_GRAM: f64 = 20.0 / 1000.0;

/// Default ABS price (currency per gram)
pub const ABS_PRICE_PER_GRAM: f64 = 9.0 / 1000.0;

/// Printing material, priced per gram consumed
///
/// # Example
/// ```
/// use printcost_core::Filament;
///
/// let petg = Filament::new("PETG", 0.025).unwrap();
/// assert_eq!(petg.price_per_gram(), 0.025);
/// assert!(Filament::new("broken", -1.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filament {
    name: String,
    price_per_gram: f64,
}

impl Filament {
    /// Create a filament with an explicit price per gram.
    ///
    /// # Errors
    /// `InvalidConfiguration` if the price is negative or not finite.
    pub fn new(name: impl Into<String>, price_per_gram: f64) -> Result<Self, PricingError> {
        Ok(Self {
            name: name.into(),
            price_per_gram: require_non_negative("price_per_gram", price_per_gram)?,
        })
    }

    /// PLA at the default price of 0.020 per gram
    pub fn pla() -> Self {
        Self {
            name: "PLA".to_string(),
            price_per_gram: PLA_PRICE_PER_GRAM,
        }
    }

    /// ABS at the default price of 0.009 per gram
    pub fn abs() -> Self {
        Self {
            name: "ABS".to_string(),
            price_per_gram: ABS_PRICE_PER_GRAM,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price_per_gram(&self) -> f64 {
        self.price_per_gram
    }
}
