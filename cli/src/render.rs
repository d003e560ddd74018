//! Terminal stacked bar chart
//!
//! Draws one horizontal bar per item. Each category is a colored run of
//! block characters whose length is proportional to its cost; the value
//! annotations are printed under the bar in stacking order.

use std::io::Write;

use colored::{Color, Colorize};
use printcost_core::{BarSeries, ChartRenderer, PricingError};

const BLOCK: &str = "█";

const PALETTE: [Color; 6] = [
    Color::Blue,
    Color::Yellow,
    Color::Green,
    Color::Red,
    Color::Magenta,
    Color::Cyan,
];

/// `ChartRenderer` that writes to a terminal (or any writer)
pub struct TextChartRenderer<W: Write> {
    out: W,
    width: usize,
    use_color: bool,
}

impl<W: Write> TextChartRenderer<W> {
    pub fn new(out: W, width: usize, use_color: bool) -> Self {
        Self {
            out,
            width: width.max(1),
            use_color,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, series_idx: usize) -> String {
        if self.use_color {
            text.color(PALETTE[series_idx % PALETTE.len()]).to_string()
        } else {
            text.to_string()
        }
    }

    // Segments that are not the first use a different glyph without color,
    // so adjacent categories stay distinguishable.
    fn glyph(&self, series_idx: usize) -> &'static str {
        if self.use_color {
            BLOCK
        } else {
            ["█", "▓", "▒", "░"][series_idx % 4]
        }
    }
}

/// Top of one item's stack
fn stack_height(series: &[BarSeries], item: usize) -> f64 {
    series
        .iter()
        .map(|s| s.baselines[item] + s.heights[item])
        .fold(0.0, f64::max)
}

impl<W: Write> ChartRenderer for TextChartRenderer<W> {
    fn render_stacked_bar(
        &mut self,
        labels: &[String],
        series: &[BarSeries],
        value_annotations: &[Vec<String>],
    ) -> Result<(), PricingError> {
        let legend: Vec<String> = series
            .iter()
            .enumerate()
            .map(|(idx, s)| format!("{} {}", self.paint(self.glyph(idx), idx), s.name))
            .collect();
        writeln!(self.out, "{}", legend.join("   "))?;
        writeln!(self.out)?;

        if labels.is_empty() {
            writeln!(self.out, "(no items)")?;
            return Ok(());
        }

        let scale_max = (0..labels.len())
            .map(|item| stack_height(series, item))
            .fold(0.0, f64::max);

        for (item, label) in labels.iter().enumerate() {
            let title = if self.use_color {
                label.bold().to_string()
            } else {
                label.clone()
            };
            writeln!(self.out, "{}", title)?;

            let mut bar = String::new();
            for (idx, s) in series.iter().enumerate() {
                let cells = if scale_max > 0.0 {
                    (s.heights[item] / scale_max * self.width as f64).round() as usize
                } else {
                    0
                };
                if cells > 0 {
                    bar.push_str(&self.paint(&self.glyph(idx).repeat(cells), idx));
                }
            }
            writeln!(self.out, "  {}", bar)?;

            let values: Vec<String> = value_annotations
                .iter()
                .enumerate()
                .map(|(idx, row)| self.paint(&row[item], idx))
                .collect();
            writeln!(self.out, "  {}", values.join(" | "))?;
        }

        self.out.flush()?;
        Ok(())
    }
}
