use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod catalog;
mod cli;
mod commands;
mod render;

/// Initialize tracing to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    init_tracing(args.verbose);

    match args.get_command() {
        cli::Commands::Chart { width } => commands::chart(&args, width)?,
        cli::Commands::Totals => commands::totals(&args)?,
        cli::Commands::Dump { format } => commands::dump(&args, format)?,
        cli::Commands::Schema => commands::schema()?,
    }

    Ok(())
}
