//! Product use factor
//!
//! X = (I * L) / (Id * Ld) normalizes the Linear Flow Index into a
//! circularity score. A degenerate product configuration is rejected here,
//! before any component math runs.

use crate::core::errors::{Error, Result};
use crate::core::types::ProductParams;

/// Compute the use factor X from the four lifetime/intensity scalars.
pub fn use_factor(params: &ProductParams) -> Result<f64> {
    let inputs = [
        ("L", params.lifetime),
        ("Ld", params.design_lifetime),
        ("I", params.intensity),
        ("Id", params.design_intensity),
    ];
    for (name, value) in inputs {
        if !value.is_finite() {
            return Err(Error::validation(format!(
                "use factor X = (I*L)/(Id*Ld) needs {} to be a number, got {}",
                name, value
            )));
        }
    }

    let design = params.design_intensity * params.design_lifetime;
    if design <= 0.0 {
        return Err(Error::validation(
            "use factor X = (I*L)/(Id*Ld) requires Id*Ld > 0",
        ));
    }

    let x = (params.intensity * params.lifetime) / design;
    if !x.is_finite() || x <= 0.0 {
        return Err(Error::validation(format!(
            "use factor X = (I*L)/(Id*Ld) must be positive, got {}",
            x
        )));
    }

    Ok(x)
}
