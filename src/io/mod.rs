pub mod bom;
pub mod output;

// Re-export I/O entry points for convenient access
pub use bom::{load_bom, read_bom};
pub use output::{create_file_writer, create_writer, OutputFormat, OutputWriter};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
