use anyhow::Result;
use clap::Parser;
use circmap::cli::{Cli, Commands};
use circmap::commands::compute::ComputeConfig;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compute {
            bom,
            params,
            format,
            output,
            percent,
            verbosity,
        } => circmap::commands::compute::compute(ComputeConfig {
            bom,
            params,
            format,
            output,
            percent,
            verbosity,
        }),
        Commands::Validate {
            bom,
            params,
            percent,
        } => circmap::commands::validate::validate_bom(&bom, &params, percent),
        Commands::Init { force } => circmap::commands::init::init_config(force),
    }
}
