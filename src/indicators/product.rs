//! Product-level aggregation and impact distribution

use crate::core::errors::{Error, Result};
use crate::core::sanitize::clamp01;
use crate::core::ComponentAssessment;

/// Near-zero threshold for PCI/CCI guards.
pub const EPSILON: f64 = 1e-9;

/// Warning attached to every component when the product-level PCI is zero.
pub const WARN_PCI_ZERO: &str = "PCI equals 0, so CII defaults to 0";
/// Warning attached to a component whose CCI is too small to share impact.
pub const WARN_CCI_TOO_LOW: &str = "CCI too low to derive CII";

/// Mass-weighted mean of the clamped CCIs, clamped again to [0,1].
///
/// `weighted` pairs each component's mass with its CCI. Total mass must be
/// positive; per-component mass validation already guarantees this for any
/// non-empty list.
pub fn aggregate_pci(weighted: &[(f64, f64)]) -> Result<f64> {
    let total_mass: f64 = weighted.iter().map(|(mass, _)| mass).sum();
    if total_mass <= 0.0 {
        return Err(Error::validation("total product mass must be greater than zero"));
    }
    let weighted_sum: f64 = weighted.iter().map(|(mass, cci)| mass * cci).sum();
    Ok(clamp01(weighted_sum / total_mass))
}

/// Distribute the product's linearity gap over components as CII
/// percentages.
///
/// Components with CCI above the epsilon threshold share 100% in
/// proportion to PCI/CCI; everything else gets 0 with a warning. A
/// near-zero PCI zeroes every component.
pub fn distribute_cii(pci: f64, components: &mut [ComponentAssessment]) {
    if pci <= EPSILON {
        for assessment in components.iter_mut() {
            assessment.cii = 0.0;
            assessment.warnings.push(WARN_PCI_ZERO.to_string());
        }
        return;
    }

    let denominator: f64 = components
        .iter()
        .filter(|assessment| assessment.cci > EPSILON)
        .map(|assessment| pci / assessment.cci)
        .sum();

    for assessment in components.iter_mut() {
        if assessment.cci > EPSILON && denominator > EPSILON {
            let share = 100.0 * (pci / assessment.cci) / denominator;
            assessment.cii = share.clamp(0.0, 100.0);
        } else {
            assessment.cii = 0.0;
            assessment.warnings.push(WARN_CCI_TOO_LOW.to_string());
        }
    }
}
