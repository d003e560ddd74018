//! Cost Report
//!
//! Decomposes a list of priced items into per-category figures laid out for
//! a stacked bar chart:
//!
//! - `labels[item]` = `"{name} ({total}€)"`
//! - `partial_costs[item][category]` = the category's query on the item
//! - `partial_sums[item][category]` = sum of `partial_costs[item][..category]`,
//!   the baseline the segment is stacked on
//!
//! Both matrices are `items × categories`, and `partial_sums[i][0]` is
//! always 0.

use std::io::Write;

use serde::Serialize;

use crate::costs::CostQueries;
use crate::error::PricingError;
use crate::models::PricedItem;
use crate::reporting::category::{CostCategory, ReportConfig};
use crate::reporting::format::{format_currency, item_label};
use crate::reporting::renderer::{BarSeries, ChartRenderer};

/// Per-item, per-category cost figures ready for charting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostReport {
    labels: Vec<String>,
    categories: Vec<CostCategory>,
    totals: Vec<f64>,
    partial_costs: Vec<Vec<f64>>,
    partial_sums: Vec<Vec<f64>>,
    currency_symbol: String,
}

impl CostReport {
    /// Build a report with the default currency symbol.
    ///
    /// # Errors
    /// `InvalidConfiguration` when `categories` is empty.
    pub fn build(items: &[PricedItem], categories: &[CostCategory]) -> Result<Self, PricingError> {
        let config = ReportConfig::with_categories(categories.to_vec());
        Self::build_with_config(items, &config)
    }

    /// Build a report from an explicit configuration.
    ///
    /// # Errors
    /// `InvalidConfiguration` when the configuration has no categories.
    pub fn build_with_config(items: &[PricedItem], config: &ReportConfig) -> Result<Self, PricingError> {
        config.validate()?;

        if items.is_empty() {
            tracing::warn!("building cost report over zero items; chart will be empty");
        }

        let categories = config.categories.clone();
        let mut labels = Vec::with_capacity(items.len());
        let mut totals = Vec::with_capacity(items.len());
        let mut partial_costs = Vec::with_capacity(items.len());
        let mut partial_sums = Vec::with_capacity(items.len());

        for item in items {
            let total = item.total_cost();
            let costs: Vec<f64> = categories.iter().map(|c| c.cost_of(item)).collect();

            let mut running = 0.0;
            let sums: Vec<f64> = costs
                .iter()
                .map(|cost| {
                    let baseline = running;
                    running += cost;
                    baseline
                })
                .collect();

            tracing::trace!(item = item.name(), total, ?costs, "priced item");

            labels.push(item_label(item.name(), total, &config.currency_symbol));
            totals.push(total);
            partial_costs.push(costs);
            partial_sums.push(sums);
        }

        let report = Self {
            labels,
            categories,
            totals,
            partial_costs,
            partial_sums,
            currency_symbol: config.currency_symbol.clone(),
        };

        tracing::debug!(
            labels = ?report.labels,
            partial_costs = ?report.partial_costs,
            partial_sums = ?report.partial_sums,
            categories = ?report.category_names(),
            "cost report built"
        );

        Ok(report)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn categories(&self) -> &[CostCategory] {
        &self.categories
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Unrounded `total_cost()` per item
    pub fn totals(&self) -> &[f64] {
        &self.totals
    }

    /// `partial_costs[item][category]`
    pub fn partial_costs(&self) -> &[Vec<f64>] {
        &self.partial_costs
    }

    /// `partial_sums[item][category]`: exclusive prefix sums of `partial_costs`
    pub fn partial_sums(&self) -> &[Vec<f64>] {
        &self.partial_sums
    }

    pub fn item_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// One series per category, transposed from the item-major matrices
    pub fn series(&self) -> Vec<BarSeries> {
        self.categories
            .iter()
            .enumerate()
            .map(|(idx, category)| BarSeries {
                name: category.name.clone(),
                heights: self.partial_costs.iter().map(|row| row[idx]).collect(),
                baselines: self.partial_sums.iter().map(|row| row[idx]).collect(),
            })
            .collect()
    }

    /// Rounded segment values, `[category][item]`
    pub fn value_annotations(&self) -> Vec<Vec<String>> {
        (0..self.categories.len())
            .map(|idx| {
                self.partial_costs
                    .iter()
                    .map(|row| format_currency(row[idx], &self.currency_symbol))
                    .collect()
            })
            .collect()
    }

    /// Hand the chart to the rendering collaborator
    pub fn render(&self, renderer: &mut dyn ChartRenderer) -> Result<(), PricingError> {
        renderer.render_stacked_bar(&self.labels, &self.series(), &self.value_annotations())
    }

    /// Write labels and matrices as plain text (debugging aid, not a stable format)
    pub fn write_dump<W: Write>(&self, out: &mut W) -> Result<(), PricingError> {
        writeln!(out, "labels: {:?}", self.labels)?;
        writeln!(out, "categories: {:?}", self.category_names())?;
        writeln!(out, "partial_costs:")?;
        for (label, row) in self.labels.iter().zip(&self.partial_costs) {
            writeln!(out, "  {}: {:?}", label, row)?;
        }
        writeln!(out, "partial_sums:")?;
        for (label, row) in self.labels.iter().zip(&self.partial_sums) {
            writeln!(out, "  {}: {:?}", label, row)?;
        }
        Ok(())
    }

    /// Pretty JSON rendition of the whole report
    pub fn to_json(&self) -> Result<String, PricingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build a report and render it in one step.
///
/// Nothing is rendered if the report cannot be built.
pub fn visualize_costs(
    items: &[PricedItem],
    categories: &[CostCategory],
    renderer: &mut dyn ChartRenderer,
) -> Result<CostReport, PricingError> {
    let report = CostReport::build(items, categories)?;
    report.render(renderer)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MultiPart, NonPrintedPart};

    fn items() -> Vec<PricedItem> {
        vec![
            NonPrintedPart::new("LED", 5.0).unwrap().into(),
            MultiPart::new("lamp")
                .with_part(NonPrintedPart::new("socket", 6.0).unwrap())
                .with_part(NonPrintedPart::new("cable", 2.25).unwrap())
                .into(),
        ]
    }

    #[test]
    fn test_matrix_shape() {
        let report = CostReport::build(&items(), &CostCategory::defaults()).unwrap();
        assert_eq!(report.partial_costs().len(), 2);
        assert_eq!(report.partial_sums().len(), 2);
        for (costs, sums) in report.partial_costs().iter().zip(report.partial_sums()) {
            assert_eq!(costs.len(), 4);
            assert_eq!(sums.len(), 4);
            assert_eq!(sums[0], 0.0);
        }
    }

    #[test]
    fn test_labels_use_rounded_totals() {
        let report = CostReport::build(&items(), &CostCategory::defaults()).unwrap();
        assert_eq!(report.labels(), &["LED (5.00€)", "lamp (8.25€)"]);
        assert_eq!(report.totals(), &[5.0, 8.25]);
    }

    #[test]
    fn test_series_transposes_matrices() {
        let report = CostReport::build(&items(), &CostCategory::defaults()).unwrap();
        let series = report.series();

        assert_eq!(series.len(), 4);
        assert_eq!(series[0].name, "Other Costs");
        assert_eq!(series[0].heights, vec![5.0, 8.25]);
        assert_eq!(series[1].baselines, vec![5.0, 8.25]);
    }

    #[test]
    fn test_annotations_are_category_major() {
        let report = CostReport::build(&items(), &CostCategory::defaults()).unwrap();
        let annotations = report.value_annotations();

        assert_eq!(annotations.len(), 4);
        assert_eq!(annotations[0], vec!["5.00€", "8.25€"]);
        assert_eq!(annotations[3], vec!["0.00€", "0.00€"]);
    }

    #[test]
    fn test_no_categories_is_invalid() {
        let err = CostReport::build(&items(), &[]).unwrap_err();
        assert!(matches!(err, PricingError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_write_dump() {
        let report = CostReport::build(&items(), &CostCategory::defaults()).unwrap();
        let mut out = Vec::new();
        report.write_dump(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("labels: [\"LED (5.00€)\", \"lamp (8.25€)\"]"));
        assert!(text.contains("partial_sums:"));
    }

    #[test]
    fn test_to_json() {
        let report = CostReport::build(&items(), &[CostCategory::other()]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["labels"][1], "lamp (8.25€)");
        assert_eq!(json["partial_costs"][1][0], 8.25);
        assert_eq!(json["partial_sums"][0][0], 0.0);
    }
}
