//! Configuration types for loading event scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! single-event scenario. A scenario consists of:
//!
//! - [`EventConfig`]    – grid layout, normalization and generalized-mean exponent
//! - [`NucleonConfig`]  – shape of the per-nucleon thickness profile
//! - [`NucleonEntry`]   – position and participant flag of one nucleon
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! event:
//!   normalization: 1.0      # scale applied to the reduced thickness
//!   grid_step: 0.2          # cell width
//!   grid_max: 10.0          # requested half extent, rounded up to whole cells
//!   reduced_thickness: 0.0  # generalized-mean exponent p
//!   ncoll: false            # accepted, currently inert
//!
//! nucleon:
//!   width: 0.5              # gaussian width
//!   truncation: 3.0         # profile cut off at truncation * width
//!
//! nucleus_a:
//!   - x: [ -1.0, 0.2 ]
//!     participant: true
//! nucleus_b:
//!   - x: [ 1.0, -0.2 ]
//!     participant: true
//! ```
//!
//! The scenario builder maps this into an `Event`, a `GaussianNucleon` and two
//! `Nucleus` values; validation happens there, not during deserialization.

use serde::Deserialize;

/// Grid and reduction settings for an event
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EventConfig {
    #[serde(default = "default_normalization")]
    pub normalization: f64, // scale of the reduced thickness
    pub grid_step: f64, // cell width
    pub grid_max: f64, // requested half extent
    #[serde(default)]
    pub reduced_thickness: f64, // generalized-mean exponent p
    #[serde(default)]
    pub ncoll: bool, // binary collision accumulation, inert
}

fn default_normalization() -> f64 {
    1.0
}

/// Per-nucleon gaussian profile
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct NucleonConfig {
    pub width: f64,
    #[serde(default = "default_truncation")]
    pub truncation: f64,
}

fn default_truncation() -> f64 {
    3.0
}

/// One nucleon of a nucleus
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct NucleonEntry {
    pub x: [f64; 2], // transverse position
    #[serde(default = "default_participant")]
    pub participant: bool,
}

fn default_participant() -> bool {
    true
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub event: EventConfig,
    pub nucleon: NucleonConfig,
    pub nucleus_a: Vec<NucleonEntry>,
    pub nucleus_b: Vec<NucleonEntry>,
}
