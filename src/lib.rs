// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod indicators;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    AssessmentResults, Component, ComponentAssessment, ComponentDebug, Error, MassFlows,
    ProductParams, Result,
};

pub use crate::core::sanitize::{clamp01, sanitize_components, sanitize_params};

pub use crate::indicators::{
    aggregate_pci, assess, component_indicators, derive_mass_flows, distribute_cii,
    linear_flow_index, use_factor, EPSILON,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
