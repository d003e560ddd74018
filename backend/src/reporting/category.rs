//! Report categories and report configuration

use serde::{Deserialize, Serialize};

use crate::costs::{CostQueries, CostQuery};
use crate::error::PricingError;
use crate::reporting::format::DEFAULT_CURRENCY_SYMBOL;

/// A named slice of an item's cost, stacked as one bar segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostCategory {
    /// Legend name (e.g., "Material Costs")
    pub name: String,
    /// Which cost query fills this segment
    pub query: CostQuery,
}

impl CostCategory {
    pub fn new(name: impl Into<String>, query: CostQuery) -> Self {
        Self {
            name: name.into(),
            query,
        }
    }

    /// Category with the standard legend name for `query`
    pub fn for_query(query: CostQuery) -> Self {
        let name = match query {
            CostQuery::Total => "Total Costs",
            CostQuery::Material => "Material Costs",
            CostQuery::PrintingTime => "Printing Time Costs",
            CostQuery::Power => "Power Costs",
            CostQuery::Other => "Other Costs",
        };
        Self::new(name, query)
    }

    pub fn material() -> Self {
        Self::for_query(CostQuery::Material)
    }

    pub fn printing_time() -> Self {
        Self::for_query(CostQuery::PrintingTime)
    }

    pub fn power() -> Self {
        Self::for_query(CostQuery::Power)
    }

    pub fn other() -> Self {
        Self::for_query(CostQuery::Other)
    }

    /// Default stacking order: Other, Material, Printing Time, Power
    pub fn defaults() -> Vec<CostCategory> {
        vec![
            Self::other(),
            Self::material(),
            Self::printing_time(),
            Self::power(),
        ]
    }

    /// This category's figure for one item
    pub fn cost_of<T: CostQueries + ?Sized>(&self, item: &T) -> f64 {
        self.query.evaluate(item)
    }
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

/// Report Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Categories in stacking order (bottom segment first). Must not be empty.
    #[serde(default = "CostCategory::defaults")]
    pub categories: Vec<CostCategory>,

    /// Appended to every displayed amount. Default: "€"
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            categories: CostCategory::defaults(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl ReportConfig {
    pub fn with_categories(categories: Vec<CostCategory>) -> Self {
        Self {
            categories,
            ..Self::default()
        }
    }

    /// # Errors
    /// `InvalidConfiguration` when there are no categories to stack.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.categories.is_empty() {
            return Err(PricingError::invalid(
                "a cost report needs at least one category",
            ));
        }
        Ok(())
    }
}
