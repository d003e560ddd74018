//! Chart rendering seam
//!
//! The library never draws. A report hands its figures to whatever
//! `ChartRenderer` the caller injects (a terminal renderer in the CLI, a
//! recording double in tests).

use serde::Serialize;

use crate::error::PricingError;

/// One stacked-bar series: a single category across all items
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    /// Legend name
    pub name: String,
    /// Segment height per item
    pub heights: Vec<f64>,
    /// Segment start per item (sum of the segments below it)
    pub baselines: Vec<f64>,
}

/// External charting collaborator
pub trait ChartRenderer {
    /// Draw a stacked bar chart.
    ///
    /// * `labels` - one bar label per item
    /// * `series` - one series per category, bottom segment first; every
    ///   `heights`/`baselines` vector has `labels.len()` entries
    /// * `value_annotations` - `value_annotations[category][item]` is the text
    ///   drawn near the top of that segment
    ///
    /// An empty `labels` slice means an empty chart, not an error.
    fn render_stacked_bar(
        &mut self,
        labels: &[String],
        series: &[BarSeries],
        value_annotations: &[Vec<String>],
    ) -> Result<(), PricingError>;
}
