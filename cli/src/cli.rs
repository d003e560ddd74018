use clap::{Parser, Subcommand, ValueEnum};
use printcost_core::CostQuery;

fn default_categories() -> Vec<CostQuery> {
    vec![
        CostQuery::Other,
        CostQuery::Material,
        CostQuery::PrintingTime,
        CostQuery::Power,
    ]
}

#[derive(Parser, Debug)]
#[command(name = "printcost", version, about = "Price 3D-printed builds and chart their cost breakdown")]
pub struct Cli {
    /// Cost categories in stacking order, bottom first (other, material, printing_time, power, total)
    #[arg(
        short,
        long,
        global = true,
        value_delimiter = ',',
        default_values_t = default_categories()
    )]
    pub categories: Vec<CostQuery>,

    /// Currency symbol appended to displayed amounts
    #[arg(long, global = true, default_value = "€")]
    pub currency: String,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log report internals (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Draw the sample catalog as a stacked bar chart (default)
    Chart {
        /// Width of the longest bar in characters
        #[arg(short, long, default_value = "60")]
        width: usize,
    },

    /// Print the total cost of every catalog item
    Totals,

    /// Dump report labels and matrices for debugging
    Dump {
        #[arg(short, long, value_enum, default_value_t = DumpFormat::Text)]
        format: DumpFormat,
    },

    /// Print the cost query schema as JSON
    Schema,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpFormat {
    Text,
    Json,
}

impl Cli {
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Chart { width: 60 })
    }
}
