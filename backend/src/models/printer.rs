//! Printer model
//!
//! A printer is billed by the hour. Unless an hourly rate is given
//! explicitly, it is derived once at construction time:
//!
//! ```text
//! price_per_hour = initial_cost / repay_period_hours
//!                + price_per_watt * power_consumption
//! ```
//!
//! i.e. the purchase price amortized over the repay period plus the
//! estimated electricity cost of one hour of printing. The rate is never
//! recomputed; `Printer` has no setters.

use serde::{Deserialize, Serialize};

use crate::error::{require_non_negative, PricingError};

/// Default electricity price (currency per watt-hour)
pub const DEFAULT_PRICE_PER_WATT: f64 = 0.28 / 1000.0;

/// Default repay period: three 30-day months of continuous use
pub const DEFAULT_REPAY_PERIOD_HOURS: f64 = 3.0 * 30.0 * 24.0;

fn default_price_per_watt() -> f64 {
    DEFAULT_PRICE_PER_WATT
}

fn default_repay_period_hours() -> f64 {
    DEFAULT_REPAY_PERIOD_HOURS
}

/// Printer Configuration
///
/// Plain input to [`Printer::from_spec`]. Validation happens when the spec
/// is turned into a `Printer`, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrinterSpec {
    /// Display name (e.g., "Ender 3 Pro")
    pub name: String,

    /// Purchase price of the printer
    pub initial_cost: f64,

    /// Average draw while printing (watts)
    pub power_consumption: f64,

    /// Electricity price per watt-hour. Default: 0.00028
    #[serde(default = "default_price_per_watt")]
    pub price_per_watt: f64,

    /// Hours of printing over which the purchase is paid back. Default: 2160
    #[serde(default = "default_repay_period_hours")]
    pub repay_period_hours: f64,

    /// Explicit hourly rate. When set, the derivation is skipped entirely.
    #[serde(default)]
    pub price_per_hour: Option<f64>,
}

impl PrinterSpec {
    /// Spec with default electricity price and repay period
    pub fn new(name: impl Into<String>, initial_cost: f64, power_consumption: f64) -> Self {
        Self {
            name: name.into(),
            initial_cost,
            power_consumption,
            price_per_watt: DEFAULT_PRICE_PER_WATT,
            repay_period_hours: DEFAULT_REPAY_PERIOD_HOURS,
            price_per_hour: None,
        }
    }

    pub fn with_price_per_watt(mut self, price_per_watt: f64) -> Self {
        self.price_per_watt = price_per_watt;
        self
    }

    pub fn with_repay_period_hours(mut self, hours: f64) -> Self {
        self.repay_period_hours = hours;
        self
    }

    pub fn with_price_per_hour(mut self, price_per_hour: f64) -> Self {
        self.price_per_hour = Some(price_per_hour);
        self
    }
}

/// A 3D printer with a fixed hourly rate
///
/// Printers are shared between parts through `Arc<Printer>`.
///
/// # Example
/// ```
/// use printcost_core::{Printer, PrinterSpec};
///
/// let printer = Printer::from_spec(PrinterSpec::new("Ender 3 Pro", 220.0, 20.0)).unwrap();
/// assert!((printer.price_per_hour() - 0.107452).abs() < 1e-6);
///
/// let broken = PrinterSpec::new("free", 220.0, 20.0).with_repay_period_hours(0.0);
/// assert!(Printer::from_spec(broken).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Printer {
    name: String,
    initial_cost: f64,
    power_consumption: f64,
    price_per_watt: f64,
    repay_period_hours: f64,
    price_per_hour: f64,
}

impl Printer {
    /// Printer with default electricity price and repay period
    pub fn new(
        name: impl Into<String>,
        initial_cost: f64,
        power_consumption: f64,
    ) -> Result<Self, PricingError> {
        Self::from_spec(PrinterSpec::new(name, initial_cost, power_consumption))
    }

    /// Validate a spec and fix its hourly rate.
    ///
    /// # Errors
    /// `InvalidConfiguration` if any input is negative or not finite, or if
    /// the rate has to be derived and `repay_period_hours` is not positive.
    pub fn from_spec(spec: PrinterSpec) -> Result<Self, PricingError> {
        let initial_cost = require_non_negative("initial_cost", spec.initial_cost)?;
        let power_consumption = require_non_negative("power_consumption", spec.power_consumption)?;
        let price_per_watt = require_non_negative("price_per_watt", spec.price_per_watt)?;
        let repay_period_hours = require_non_negative("repay_period_hours", spec.repay_period_hours)?;

        // An explicit rate of 0.0 is a free printer, not a missing rate:
        // only `None` falls back to the derived rate.
        let price_per_hour = match spec.price_per_hour {
            Some(rate) => require_non_negative("price_per_hour", rate)?,
            None => {
                if repay_period_hours <= 0.0 {
                    return Err(PricingError::invalid(format!(
                        "printer '{}': repay_period_hours must be positive when price_per_hour is not given",
                        spec.name
                    )));
                }
                let derived = initial_cost / repay_period_hours + price_per_watt * power_consumption;
                require_non_negative("price_per_hour", derived)?
            }
        };

        tracing::trace!(printer = %spec.name, price_per_hour, "printer rate fixed");

        Ok(Self {
            name: spec.name,
            initial_cost,
            power_consumption,
            price_per_watt,
            repay_period_hours,
            price_per_hour,
        })
    }

    /// Creality Ender 3 Pro: 220 purchase price, 20 W
    pub fn ender_3_pro() -> Self {
        Self::preset("Ender 3 Pro", 220.0, 20.0)
    }

    /// Creality Ender 5 Plus: 500 purchase price, 125 W
    pub fn ender_5_plus() -> Self {
        Self::preset("Ender 5 Plus", 500.0, 125.0)
    }

    // Presets use known-good constants and skip validation.
    fn preset(name: &str, initial_cost: f64, power_consumption: f64) -> Self {
        Self {
            name: name.to_string(),
            initial_cost,
            power_consumption,
            price_per_watt: DEFAULT_PRICE_PER_WATT,
            repay_period_hours: DEFAULT_REPAY_PERIOD_HOURS,
            price_per_hour: initial_cost / DEFAULT_REPAY_PERIOD_HOURS
                + DEFAULT_PRICE_PER_WATT * power_consumption,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initial_cost(&self) -> f64 {
        self.initial_cost
    }

    /// Average draw while printing (watts)
    pub fn power_consumption(&self) -> f64 {
        self.power_consumption
    }

    pub fn price_per_watt(&self) -> f64 {
        self.price_per_watt
    }

    pub fn repay_period_hours(&self) -> f64 {
        self.repay_period_hours
    }

    /// Hourly rate fixed at construction
    pub fn price_per_hour(&self) -> f64 {
        self.price_per_hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_defaults() {
        let spec = PrinterSpec::new("p", 100.0, 50.0);
        assert_eq!(spec.price_per_watt, DEFAULT_PRICE_PER_WATT);
        assert!((spec.price_per_watt - 0.00028).abs() < 1e-12);
        assert_eq!(spec.repay_period_hours, 2160.0);
        assert!(spec.price_per_hour.is_none());
    }

    #[test]
    fn test_spec_deserialize_fills_defaults() {
        let json = r#"{"name": "Prusa MK4", "initial_cost": 1000.0, "power_consumption": 80.0}"#;
        let spec: PrinterSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.price_per_watt, DEFAULT_PRICE_PER_WATT);
        assert_eq!(spec.repay_period_hours, DEFAULT_REPAY_PERIOD_HOURS);
        assert_eq!(spec.price_per_hour, None);
    }

    #[test]
    fn test_presets_match_derivation() {
        let derived = Printer::new("Ender 3 Pro", 220.0, 20.0).unwrap();
        assert_eq!(Printer::ender_3_pro(), derived);

        let derived = Printer::new("Ender 5 Plus", 500.0, 125.0).unwrap();
        assert_eq!(Printer::ender_5_plus(), derived);
    }

    #[test]
    fn test_explicit_rate_skips_derivation() {
        let spec = PrinterSpec::new("p", 220.0, 20.0)
            .with_repay_period_hours(0.0)
            .with_price_per_hour(0.5);
        let printer = Printer::from_spec(spec).unwrap();
        assert_eq!(printer.price_per_hour(), 0.5);
    }

    #[test]
    fn test_explicit_zero_rate_is_honored() {
        let spec = PrinterSpec::new("p", 220.0, 20.0).with_price_per_hour(0.0);
        let printer = Printer::from_spec(spec).unwrap();
        assert_eq!(printer.price_per_hour(), 0.0);
    }

    #[test]
    fn test_negative_power_rejected() {
        let err = Printer::new("p", 220.0, -20.0).unwrap_err();
        assert!(err.to_string().contains("power_consumption"));
    }
}
