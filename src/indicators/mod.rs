//! The circularity assessment pipeline
//!
//! Sanitized components flow through four stages: use-factor derivation,
//! per-component mass flows, per-component indicators (LFI, CCI), then the
//! product-level aggregation (PCI) and impact distribution (CII). The whole
//! pipeline is a pure function of its inputs; re-running it with identical
//! inputs yields bit-identical results.

pub mod component;
pub mod mass_flow;
pub mod product;
pub mod use_factor;

// Re-export commonly used items
pub use component::{
    component_indicators, linear_flow_index, ComponentIndicators, WARN_CCI_CLIPPED,
    WARN_USE_FACTOR_DIVISION,
};
pub use mass_flow::derive_mass_flows;
pub use product::{aggregate_pci, distribute_cii, EPSILON, WARN_CCI_TOO_LOW, WARN_PCI_ZERO};
pub use use_factor::use_factor;

use crate::core::errors::Result;
use crate::core::types::{Component, ProductParams};
use crate::core::{
    sanitize_components, sanitize_params, AssessmentResults, ComponentAssessment, ComponentDebug,
};

/// Run the full assessment over a bill of materials.
///
/// Inputs are sanitized first (factor clamping, mass validation); the
/// original records are never mutated.
pub fn assess(components: &[Component], params: &ProductParams) -> Result<AssessmentResults> {
    let sanitized = sanitize_components(components)?;
    let params = sanitize_params(params);

    let x = use_factor(&params)?;
    log::debug!("use factor X = {}", x);

    let mut assessed = Vec::with_capacity(sanitized.len());
    for component in sanitized {
        let flows = derive_mass_flows(&component, &params)?;
        let indicators = component_indicators(&flows, x);
        for warning in &indicators.warnings {
            log::warn!("component '{}': {}", component.id, warning);
        }
        assessed.push(ComponentAssessment {
            component,
            flows,
            lfi: indicators.lfi,
            cci: indicators.cci,
            cii: 0.0,
            warnings: indicators.warnings,
        });
    }

    let weighted: Vec<(f64, f64)> = assessed
        .iter()
        .map(|assessment| (assessment.component.mass_kg, assessment.cci))
        .collect();
    let pci = aggregate_pci(&weighted)?;
    log::debug!("PCI = {} over {} components", pci, assessed.len());

    distribute_cii(pci, &mut assessed);

    let total_mass_kg = weighted.iter().map(|(mass, _)| mass).sum();
    let debug = assessed.iter().map(ComponentDebug::from_assessment).collect();

    Ok(AssessmentResults {
        product_name: params.product_name,
        components: assessed,
        pci,
        use_factor: x,
        total_mass_kg,
        debug,
    })
}
