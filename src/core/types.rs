//! Input record types for the assessment pipeline

use serde::{Deserialize, Serialize};

/// One bill-of-materials line.
///
/// The seven dimensionless factors are fractions in [0,1] after
/// sanitization; `material` and `process` are informational only.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Component {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub process: String,
    pub mass_kg: f64,
    /// Recycled-content fraction of feedstock
    pub fr: f64,
    /// Feedstock-production efficiency
    pub efp: f64,
    /// Component-production efficiency
    pub ecp: f64,
    /// Feedstock-production circularity credit
    pub cfp: f64,
    /// Component-production circularity credit
    pub ccp: f64,
    /// End-of-life material-separation efficiency
    pub ems: f64,
    /// Recycled-feedstock-production efficiency
    pub erfp: f64,
}

impl Component {
    /// Create a component with the given id, name and mass, all factors zero
    /// except unit production efficiencies.
    pub fn new(id: impl Into<String>, name: impl Into<String>, mass_kg: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            material: String::new(),
            process: String::new(),
            mass_kg,
            fr: 0.0,
            efp: 1.0,
            ecp: 1.0,
            cfp: 0.0,
            ccp: 0.0,
            ems: 0.0,
            erfp: 0.0,
        }
    }
}

/// Product-level usage parameters shared by every component.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductParams {
    pub product_name: String,
    /// Fraction of product mass reused as-is
    pub fu: f64,
    /// Fraction credited to reuse circularity
    pub cu: f64,
    /// Fraction recycled at end of life
    pub cr: f64,
    /// Actual lifetime (L)
    pub lifetime: f64,
    /// Design lifetime (Ld)
    pub design_lifetime: f64,
    /// Actual use intensity (I)
    pub intensity: f64,
    /// Design use intensity (Id)
    pub design_intensity: f64,
}

impl Default for ProductParams {
    fn default() -> Self {
        Self {
            product_name: "product".to_string(),
            fu: 0.0,
            cu: 0.0,
            cr: 0.0,
            lifetime: 1.0,
            design_lifetime: 1.0,
            intensity: 1.0,
            design_intensity: 1.0,
        }
    }
}
