use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report with summary and component table
    Terminal,
    /// Full result bundle as pretty-printed JSON
    Json,
    /// Per-component indicator table as CSV
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "circmap")]
#[command(about = "Product circularity indicator calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute circularity indicators for a bill of materials
    Compute {
        /// Path to the bill-of-materials CSV file
        bom: PathBuf,

        /// Product parameter file
        #[arg(short, long, default_value = "circmap.toml")]
        params: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Treat factor columns as 0-100 percentages instead of fractions
        #[arg(long)]
        percent: bool,

        /// Increase verbosity level (can be repeated: -v shows the
        /// per-component mass-flow snapshot)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Check a bill of materials and product parameters without computing
    Validate {
        /// Path to the bill-of-materials CSV file
        bom: PathBuf,

        /// Product parameter file
        #[arg(short, long, default_value = "circmap.toml")]
        params: PathBuf,

        /// Treat factor columns as 0-100 percentages instead of fractions
        #[arg(long)]
        percent: bool,
    },

    /// Create a default circmap.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
