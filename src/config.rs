//! Tool configuration loaded from `circmap.toml`

use crate::core::errors::{Error, Result};
use crate::core::types::ProductParams;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Product parameter configuration (the `[product]` table)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductConfig {
    /// Product display name
    #[serde(default = "default_product_name")]
    pub name: String,

    /// Fraction of product mass reused as-is (0.0-1.0)
    #[serde(default)]
    pub fu: f64,

    /// Fraction credited to reuse circularity (0.0-1.0)
    #[serde(default)]
    pub cu: f64,

    /// Fraction recycled at end of life (0.0-1.0)
    #[serde(default)]
    pub cr: f64,

    /// Actual lifetime
    #[serde(default = "default_scalar")]
    pub lifetime: f64,

    /// Design lifetime
    #[serde(default = "default_scalar")]
    pub design_lifetime: f64,

    /// Actual use intensity
    #[serde(default = "default_scalar")]
    pub intensity: f64,

    /// Design use intensity
    #[serde(default = "default_scalar")]
    pub design_intensity: f64,
}

impl Default for ProductConfig {
    fn default() -> Self {
        Self {
            name: default_product_name(),
            fu: 0.0,
            cu: 0.0,
            cr: 0.0,
            lifetime: default_scalar(),
            design_lifetime: default_scalar(),
            intensity: default_scalar(),
            design_intensity: default_scalar(),
        }
    }
}

impl ProductConfig {
    /// Convert into the engine's parameter record.
    pub fn to_params(&self) -> ProductParams {
        ProductParams {
            product_name: self.name.clone(),
            fu: self.fu,
            cu: self.cu,
            cr: self.cr,
            lifetime: self.lifetime,
            design_lifetime: self.design_lifetime,
            intensity: self.intensity,
            design_intensity: self.design_intensity,
        }
    }
}

/// Output preferences (the `[output]` table)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// CSV column delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Render decimal values with a comma separator in CSV output
    #[serde(default)]
    pub decimal_comma: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            decimal_comma: false,
        }
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CircmapConfig {
    #[serde(default)]
    pub product: ProductConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_product_name() -> String {
    "product".to_string()
}

fn default_scalar() -> f64 {
    1.0
}

fn default_delimiter() -> char {
    ','
}

impl CircmapConfig {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: CircmapConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("{} not found, using default product parameters", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !self.output.delimiter.is_ascii() {
            return Err(Error::configuration(format!(
                "output delimiter must be an ASCII character, got '{}'",
                self.output.delimiter
            )));
        }
        if self.output.delimiter == '.' {
            return Err(Error::configuration(
                "output delimiter '.' would collide with decimal points",
            ));
        }
        Ok(())
    }
}
