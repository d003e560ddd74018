//! Cost Queries and Breakdown
//!
//! Every priced item answers the same five questions. Parts answer them
//! from their own inputs; assemblies answer them by summing their children.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// The five cost queries shared by every priced item
///
/// All queries are pure: calling one twice on the same item yields the
/// same value.
///
/// # Note on `total_cost`
///
/// For printed parts `total_cost()` is NOT the sum of the four component
/// costs. The printer's hourly rate already includes electricity, and
/// `power_cost()` charges it a second time. Use [`CostBreakdown::sum`] when
/// you need the component sum.
pub trait CostQueries {
    /// The item's full price
    fn total_cost(&self) -> f64;

    /// Portion attributable to filament consumption
    fn material_cost(&self) -> f64;

    /// Portion attributable to printer-hour billing
    fn printing_time_cost(&self) -> f64;

    /// Portion attributable to electricity
    fn power_cost(&self) -> f64;

    /// Flat or purchased cost not otherwise categorized
    fn other_cost(&self) -> f64;

    /// All four component costs at once
    fn breakdown(&self) -> CostBreakdown {
        CostBreakdown {
            material_cost: self.material_cost(),
            printing_time_cost: self.printing_time_cost(),
            power_cost: self.power_cost(),
            other_cost: self.other_cost(),
        }
    }
}

/// Selects one of the [`CostQueries`] methods
///
/// Used by report categories to name the figure they read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostQuery {
    Total,
    Material,
    PrintingTime,
    Power,
    Other,
}

impl CostQuery {
    pub const ALL: [CostQuery; 5] = [
        CostQuery::Total,
        CostQuery::Material,
        CostQuery::PrintingTime,
        CostQuery::Power,
        CostQuery::Other,
    ];

    /// Run the selected query against an item
    pub fn evaluate<T: CostQueries + ?Sized>(self, item: &T) -> f64 {
        match self {
            CostQuery::Total => item.total_cost(),
            CostQuery::Material => item.material_cost(),
            CostQuery::PrintingTime => item.printing_time_cost(),
            CostQuery::Power => item.power_cost(),
            CostQuery::Other => item.other_cost(),
        }
    }

    /// Snake-case identifier, as accepted by `FromStr`
    pub fn as_str(self) -> &'static str {
        match self {
            CostQuery::Total => "total",
            CostQuery::Material => "material",
            CostQuery::PrintingTime => "printing_time",
            CostQuery::Power => "power",
            CostQuery::Other => "other",
        }
    }
}

impl fmt::Display for CostQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostQuery {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "total" => Ok(CostQuery::Total),
            "material" | "filament" => Ok(CostQuery::Material),
            "printing_time" | "printer" => Ok(CostQuery::PrintingTime),
            "power" => Ok(CostQuery::Power),
            "other" => Ok(CostQuery::Other),
            other => Err(PricingError::invalid(format!(
                "unknown cost query '{}' (expected one of: total, material, printing_time, power, other)",
                other
            ))),
        }
    }
}

/// The four component costs of one priced item
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub material_cost: f64,
    pub printing_time_cost: f64,
    pub power_cost: f64,
    pub other_cost: f64,
}

impl CostBreakdown {
    /// Sum of the four components
    ///
    /// Equals `total_cost()` for non-printed parts, but not for printed
    /// parts (see [`CostQueries`]).
    pub fn sum(&self) -> f64 {
        self.material_cost + self.printing_time_cost + self.power_cost + self.other_cost
    }
}
