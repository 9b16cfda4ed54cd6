use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from("circmap.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Circmap Configuration

[product]
name = "product"
# Fraction of product mass reused as-is
fu = 0.0
# Fraction credited to reuse circularity
cu = 0.0
# Fraction recycled at end of life
cr = 0.0
# Actual vs design lifetime
lifetime = 1.0
design_lifetime = 1.0
# Actual vs design use intensity
intensity = 1.0
design_intensity = 1.0

[output]
delimiter = ","
decimal_comma = false
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created circmap.toml configuration file");

    Ok(())
}
