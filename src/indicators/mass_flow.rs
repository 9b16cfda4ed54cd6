//! Per-component mass-flow derivation
//!
//! Turns a sanitized component plus the product-level reuse/recycling
//! fractions into virgin feedstock, the waste breakdown, recycling in/out,
//! reused mass, and the fully-linear reference flows. Every division uses
//! `efp`/`ecp` as denominator, so both are required to be positive here;
//! no further zero-guard is needed within this stage.

use crate::core::errors::{Error, Result};
use crate::core::types::{Component, ProductParams};
use crate::core::MassFlows;

/// Derive the mass-flow bundle for one component.
pub fn derive_mass_flows(component: &Component, params: &ProductParams) -> Result<MassFlows> {
    let Component {
        mass_kg: m,
        fr,
        efp,
        ecp,
        cfp,
        ccp,
        ems,
        erfp,
        ..
    } = *component;
    let ProductParams { fu, cu, cr, .. } = *params;

    if efp <= 0.0 || ecp <= 0.0 {
        return Err(Error::component(
            &component.id,
            "feedstock and component production efficiencies (Efp, Ecp) must be greater than zero",
        ));
    }

    // Mass not reused as-is; feedstock and production flows act on this base.
    let base = (1.0 - fu) * m;

    let virgin = base / (ecp * efp) * (1.0 - fr);

    let waste_feedstock = base / (efp * ecp) * (1.0 - efp) * (1.0 - cfp);
    let waste_component = base / ecp * (1.0 - ecp) * (1.0 - ccp);
    let waste_unrecoverable = m * (1.0 - cu - cr).max(0.0);
    let waste_separation = m * (1.0 - ems) * cr;
    let waste_reprocessing = m * ems * (1.0 - erfp);
    let waste = waste_feedstock
        + waste_component
        + waste_unrecoverable
        + waste_separation
        + waste_reprocessing;

    let recycle_in = base / (efp * ecp);
    let recycle_feedstock = recycle_in * (1.0 - efp) * cfp;
    let recycle_component = base / ecp * (1.0 - ecp) * ccp;
    let recycle_eol = erfp * ems * cr * m;
    let recycle_out = recycle_feedstock + recycle_component + recycle_eol;
    let imbalance = (recycle_in - recycle_out).abs();

    // Signed reuse credit imbalance; negative when Cu exceeds Fu.
    let reused = m * (fu - cu);

    let linear = m / (ecp * efp);

    Ok(MassFlows {
        virgin,
        waste,
        waste_feedstock,
        waste_component,
        waste_unrecoverable,
        waste_separation,
        waste_reprocessing,
        recycle_in,
        recycle_out,
        recycle_feedstock,
        recycle_component,
        recycle_eol,
        imbalance,
        reused,
        linear_virgin: linear,
        linear_waste: linear,
    })
}
