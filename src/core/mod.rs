pub mod errors;
pub mod sanitize;
pub mod types;

use serde::{Deserialize, Serialize};

pub use errors::{Error, Result};
pub use sanitize::{clamp01, sanitize_components, sanitize_params};
pub use types::{Component, ProductParams};

/// Per-component mass flows in kilograms, plus the fully-linear reference
/// flows used as the LFI denominator.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MassFlows {
    /// Virgin feedstock mass (V)
    pub virgin: f64,
    /// Total waste mass (W)
    pub waste: f64,
    /// Waste from feedstock production (Wfp)
    pub waste_feedstock: f64,
    /// Waste from component production (Wcp)
    pub waste_component: f64,
    /// End-of-life mass neither reused nor recycled (Wu)
    pub waste_unrecoverable: f64,
    /// Losses in end-of-life material separation (Wms)
    pub waste_separation: f64,
    /// Losses in recycled-feedstock production (Wrfp)
    pub waste_reprocessing: f64,
    /// Mass entering the recycling loop (Rin)
    pub recycle_in: f64,
    /// Mass leaving the recycling loop (Rout)
    pub recycle_out: f64,
    /// Recycled output credited to feedstock production (Rfp)
    pub recycle_feedstock: f64,
    /// Recycled output credited to component production (Rcp)
    pub recycle_component: f64,
    /// Recycled output recovered at end of life (REoL)
    pub recycle_eol: f64,
    /// Absolute recycling imbalance |Rin - Rout|
    pub imbalance: f64,
    /// Reused-component mass (C); negative when the reuse credit Cu
    /// exceeds the reused fraction Fu
    pub reused: f64,
    /// Virgin feedstock under a fully linear baseline
    pub linear_virgin: f64,
    /// Waste under a fully linear baseline
    pub linear_waste: f64,
}

/// A component enriched with its mass flows and indicators.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ComponentAssessment {
    pub component: Component,
    pub flows: MassFlows,
    /// Linear Flow Index
    pub lfi: f64,
    /// Component Circularity Indicator, in [0,1]
    pub cci: f64,
    /// Circularity Impact Indicator, in [0,100]
    pub cii: f64,
    /// Non-fatal anomalies recorded during computation
    pub warnings: Vec<String>,
}

/// Compact per-component snapshot for diagnostics.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ComponentDebug {
    pub id: String,
    pub virgin: f64,
    pub waste: f64,
    pub recycle_in: f64,
    pub recycle_out: f64,
    pub imbalance: f64,
    pub reused: f64,
    pub lfi: f64,
    pub cci: f64,
}

impl ComponentDebug {
    pub fn from_assessment(assessment: &ComponentAssessment) -> Self {
        Self {
            id: assessment.component.id.clone(),
            virgin: assessment.flows.virgin,
            waste: assessment.flows.waste,
            recycle_in: assessment.flows.recycle_in,
            recycle_out: assessment.flows.recycle_out,
            imbalance: assessment.flows.imbalance,
            reused: assessment.flows.reused,
            lfi: assessment.lfi,
            cci: assessment.cci,
        }
    }
}

/// Whole-run result bundle.
///
/// Carries no timestamps or other ambient values: identical inputs produce
/// bit-identical results.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AssessmentResults {
    pub product_name: String,
    pub components: Vec<ComponentAssessment>,
    /// Product Circularity Indicator, mass-weighted mean of the CCIs, in [0,1]
    pub pci: f64,
    /// Product use factor X
    pub use_factor: f64,
    pub total_mass_kg: f64,
    pub debug: Vec<ComponentDebug>,
}
