use crate::config::CircmapConfig;
use crate::core::sanitize::{clamped_fields, sanitize_components, sanitize_params};
use crate::indicators::{derive_mass_flows, use_factor};
use crate::io::bom;
use anyhow::Result;
use colored::*;
use std::path::Path;

/// Check a bill of materials and product parameters without computing
/// indicators.
///
/// Hard preconditions (mass, use factor, production efficiencies) are
/// errors; anything the permissive clamping policy would silently alter is
/// reported as a note so malformed uploads stay visible.
pub fn validate_bom(bom_path: &Path, params_path: &Path, percent: bool) -> Result<()> {
    let config = CircmapConfig::load_or_default(params_path)?;
    let raw_components = bom::load_bom(bom_path, percent)?;

    let mut clamp_notes = 0usize;
    for component in &raw_components {
        for (field, value) in clamped_fields(component) {
            clamp_notes += 1;
            println!(
                "{} component '{}': {} = {} will be clamped to [0,1]",
                "note:".yellow(),
                component.id,
                field,
                value
            );
        }
    }

    let components = sanitize_components(&raw_components)?;
    let params = sanitize_params(&config.product.to_params());
    let x = use_factor(&params)?;
    for component in &components {
        derive_mass_flows(component, &params)?;
    }

    println!(
        "{} {} components, use factor X = {:.3}, {} clamp note(s)",
        "OK:".green().bold(),
        components.len(),
        x,
        clamp_notes
    );
    Ok(())
}
