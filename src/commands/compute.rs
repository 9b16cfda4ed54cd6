use crate::cli::OutputFormat;
use crate::config::CircmapConfig;
use crate::indicators;
use crate::io::{self, bom};
use anyhow::Result;
use std::path::PathBuf;

/// Options for the compute command
pub struct ComputeConfig {
    pub bom: PathBuf,
    pub params: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub percent: bool,
    pub verbosity: u8,
}

pub fn compute(config: ComputeConfig) -> Result<()> {
    let toml_config = CircmapConfig::load_or_default(&config.params)?;
    let components = bom::load_bom(&config.bom, config.percent)?;
    let params = toml_config.product.to_params();

    let results = indicators::assess(&components, &params)?;

    let format = io::OutputFormat::from(config.format);
    let mut writer = match &config.output {
        Some(path) => io::create_file_writer(format, path, &toml_config.output)?,
        None => io::create_writer(format, &toml_config.output, config.verbosity),
    };
    writer.write_results(&results)?;

    if let Some(path) = &config.output {
        log::info!("results written to {}", path.display());
    }
    Ok(())
}
