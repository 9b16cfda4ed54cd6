//! Bill-of-materials CSV import
//!
//! Expects a header row of `id,name,material,process,mass_kg,fr,efp,ecp,
//! cfp,ccp,ems,erfp`. Factor cells are parsed permissively: missing or
//! unparsable values become NaN and are clamped to 0 by the sanitizer. An
//! unparsable mass is a hard error naming the record, and duplicate ids are
//! rejected since downstream display keys on the id.

use crate::core::errors::{Error, Result};
use crate::core::types::Component;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct BomRow {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    material: String,
    #[serde(default)]
    process: String,
    #[serde(default)]
    mass_kg: String,
    #[serde(default)]
    fr: String,
    #[serde(default)]
    efp: String,
    #[serde(default)]
    ecp: String,
    #[serde(default)]
    cfp: String,
    #[serde(default)]
    ccp: String,
    #[serde(default)]
    ems: String,
    #[serde(default)]
    erfp: String,
}

/// Parse a factor cell, accepting either decimal separator. Anything that
/// does not parse maps to NaN and falls into the sanitizer's clamping.
fn parse_factor(cell: &str) -> f64 {
    let cell = cell.trim();
    if cell.is_empty() {
        return f64::NAN;
    }
    cell.replace(',', ".").parse().unwrap_or(f64::NAN)
}

fn parse_mass(cell: &str, id: &str, line: usize) -> Result<f64> {
    cell.trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| {
            Error::validation(format!(
                "record {}: component '{}': mass '{}' is not a number",
                line, id, cell
            ))
        })
}

fn scale(value: f64, percent: bool) -> f64 {
    if percent {
        value / 100.0
    } else {
        value
    }
}

/// Read component records from any CSV source.
pub fn read_bom<R: Read>(reader: R, percent: bool) -> Result<Vec<Component>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut seen = HashSet::new();
    let mut components = Vec::new();

    for (index, row) in csv_reader.deserialize::<BomRow>().enumerate() {
        let line = index + 2; // header occupies line 1
        let row = row?;

        if row.id.is_empty() {
            return Err(Error::validation(format!("record {}: component id is empty", line)));
        }
        if !seen.insert(row.id.clone()) {
            return Err(Error::validation(format!(
                "record {}: duplicate component id '{}'",
                line, row.id
            )));
        }

        let mass_kg = parse_mass(&row.mass_kg, &row.id, line)?;
        components.push(Component {
            mass_kg,
            fr: scale(parse_factor(&row.fr), percent),
            efp: scale(parse_factor(&row.efp), percent),
            ecp: scale(parse_factor(&row.ecp), percent),
            cfp: scale(parse_factor(&row.cfp), percent),
            ccp: scale(parse_factor(&row.ccp), percent),
            ems: scale(parse_factor(&row.ems), percent),
            erfp: scale(parse_factor(&row.erfp), percent),
            id: row.id,
            name: row.name,
            material: row.material,
            process: row.process,
        });
    }

    log::info!("loaded {} component records", components.len());
    Ok(components)
}

/// Load a bill of materials from a CSV file.
pub fn load_bom(path: &Path, percent: bool) -> Result<Vec<Component>> {
    let file = File::open(path)
        .map_err(|e| Error::bom(format!("cannot open '{}': {}", path.display(), e), path))?;
    read_bom(file, percent)
}
