//! Boundary sanitization of raw input records
//!
//! Factor fields are clamped to [0,1] rather than rejected; only a
//! non-positive mass fails validation. Sanitization always returns copies
//! and never mutates caller-owned records.

use crate::core::errors::{Error, Result};
use crate::core::types::{Component, ProductParams};

/// Names of the seven dimensionless factor fields, in record order.
pub const FACTOR_FIELDS: [&str; 7] = ["fr", "efp", "ecp", "cfp", "ccp", "ems", "erfp"];

/// Clamp a raw factor to the unit interval, mapping non-finite input to 0.
pub fn clamp01(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

fn factor_values(component: &Component) -> [f64; 7] {
    [
        component.fr,
        component.efp,
        component.ecp,
        component.cfp,
        component.ccp,
        component.ems,
        component.erfp,
    ]
}

/// Sanitize one component record, returning a clamped copy.
///
/// Mass must be a finite number greater than zero; every factor field is
/// clamped to [0,1] with non-finite values mapped to 0.
pub fn sanitize_component(raw: &Component) -> Result<Component> {
    if !raw.mass_kg.is_finite() || raw.mass_kg <= 0.0 {
        return Err(Error::component(
            &raw.id,
            format!("mass must be a finite number greater than zero, got {}", raw.mass_kg),
        ));
    }

    Ok(Component {
        id: raw.id.clone(),
        name: raw.name.clone(),
        material: raw.material.clone(),
        process: raw.process.clone(),
        mass_kg: raw.mass_kg,
        fr: clamp01(raw.fr),
        efp: clamp01(raw.efp),
        ecp: clamp01(raw.ecp),
        cfp: clamp01(raw.cfp),
        ccp: clamp01(raw.ccp),
        ems: clamp01(raw.ems),
        erfp: clamp01(raw.erfp),
    })
}

/// Sanitize an ordered component list. The list must be non-empty.
pub fn sanitize_components(raw: &[Component]) -> Result<Vec<Component>> {
    if raw.is_empty() {
        return Err(Error::validation("component list is empty"));
    }
    raw.iter().map(sanitize_component).collect()
}

/// Sanitize product parameters, clamping the three fraction fields.
///
/// The lifetime and intensity scalars are left untouched; the use-factor
/// calculator validates them.
pub fn sanitize_params(raw: &ProductParams) -> ProductParams {
    ProductParams {
        product_name: raw.product_name.clone(),
        fu: clamp01(raw.fu),
        cu: clamp01(raw.cu),
        cr: clamp01(raw.cr),
        lifetime: raw.lifetime,
        design_lifetime: raw.design_lifetime,
        intensity: raw.intensity,
        design_intensity: raw.design_intensity,
    }
}

/// Report which factor fields of a raw component the sanitizer would alter,
/// with their offending values. Used to surface the permissive clamping
/// policy without changing it.
pub fn clamped_fields(raw: &Component) -> Vec<(&'static str, f64)> {
    FACTOR_FIELDS
        .iter()
        .zip(factor_values(raw))
        .filter(|(_, value)| !value.is_finite() || !(0.0..=1.0).contains(value))
        .map(|(name, value)| (*name, value))
        .collect()
}
