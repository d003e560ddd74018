use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use printcost_core::reporting::format_currency;
use printcost_core::{get_cost_schema, CostCategory, CostQueries, CostReport, ReportConfig};

use crate::catalog::sample_catalog;
use crate::cli::{Cli, DumpFormat};
use crate::render::TextChartRenderer;

fn report_config(args: &Cli) -> ReportConfig {
    ReportConfig {
        categories: args
            .categories
            .iter()
            .copied()
            .map(CostCategory::for_query)
            .collect(),
        currency_symbol: args.currency.clone(),
    }
}

fn build_report(args: &Cli) -> Result<CostReport> {
    let catalog = sample_catalog().context("Failed to build sample catalog")?;
    let report = CostReport::build_with_config(&catalog, &report_config(args))
        .context("Failed to build cost report")?;
    Ok(report)
}

pub fn chart(args: &Cli, width: usize) -> Result<()> {
    let report = build_report(args)?;
    tracing::info!(items = report.item_count(), width, "rendering cost chart");

    let stdout = io::stdout();
    let mut renderer = TextChartRenderer::new(stdout.lock(), width, !args.no_color);
    report
        .render(&mut renderer)
        .context("Failed to render cost chart")?;
    Ok(())
}

pub fn totals(args: &Cli) -> Result<()> {
    let catalog = sample_catalog().context("Failed to build sample catalog")?;
    for item in &catalog {
        let name = format!("{} Total Cost:", item.name());
        let name = if args.no_color {
            name
        } else {
            name.bold().to_string()
        };
        println!("{} {}", name, format_currency(item.total_cost(), &args.currency));
    }
    Ok(())
}

pub fn dump(args: &Cli, format: DumpFormat) -> Result<()> {
    let report = build_report(args)?;
    match format {
        DumpFormat::Text => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            report.write_dump(&mut out).context("Failed to write dump")?;
            out.flush().context("Failed to flush stdout")?;
        }
        DumpFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

pub fn schema() -> Result<()> {
    println!("{}", get_cost_schema());
    Ok(())
}
