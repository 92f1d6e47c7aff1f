//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – gravity mode and frame delta cap
//! - [`ParametersConfig`] – physical constants and numerical cutoffs
//! - [`SpawnConfig`]      – drag-to-launch gesture tuning
//! - [`BodyConfig`]       – optional bodies present at start
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so an empty document is a valid scenario: an
//! empty sky waiting for the user to launch bodies.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   gravity: "summed"       # or "per_pair" (legacy: last pair processed wins)
//!   max_dt: 0.1             # frame deltas above this are clamped
//!
//! parameters:
//!   G: 667.4                # gravitational constant
//!   min_distance: 1.0e-3    # closer pairs exert no force
//!   absorb_fraction: 0.5    # winner.radius += loser.radius * absorb_fraction
//!   trail_capacity: 5000    # trail points kept per body
//!
//! spawn:
//!   default_radius: 10.0
//!   min_radius: 1.0
//!   max_radius: 500.0
//!   scroll_step: 1.0
//!   heavy_threshold: 100.0
//!   preview_damping: 0.3333
//!
//! bodies:
//!   - x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     radius: 120.0
//!     gravity_affected: false
//!   - x: [ 400.0, 0.0 ]
//!     v: [ 0.0, 60.0 ]
//!     radius: 8.0
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::simulation::engine::DEFAULT_MAX_DT;
use crate::simulation::params::{DEFAULT_ABSORB_FRACTION, DEFAULT_G, DEFAULT_MIN_DISTANCE};
use crate::simulation::spawn::SpawnSettings;
use crate::simulation::trail::DEFAULT_TRAIL_CAPACITY;

/// How pairwise gravity feeds the velocity update
/// `gravity: "summed"` or `gravity: "per_pair"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravityMode {
    #[default]
    #[serde(rename = "summed")] // total acceleration from all other bodies, one kick per step
    Summed,

    #[serde(rename = "per_pair")] // kick per pair, acceleration overwritten by each pair
    PerPair,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub gravity: GravityMode,
    pub max_dt: f64, // cap on the frame delta handed to the stepper
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gravity: GravityMode::Summed,
            max_dt: DEFAULT_MAX_DT,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    pub min_distance: f64, // degenerate-geometry cutoff
    pub absorb_fraction: f64, // share of the loser's radius the winner gains
    pub trail_capacity: usize, // trail points per body
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            g: DEFAULT_G,
            min_distance: DEFAULT_MIN_DISTANCE,
            absorb_fraction: DEFAULT_ABSORB_FRACTION,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SpawnConfig {
    pub default_radius: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub scroll_step: f64,
    pub heavy_threshold: f64,
    pub preview_damping: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        let s = SpawnSettings::default();
        Self {
            default_radius: s.default_radius,
            min_radius: s.min_radius,
            max_radius: s.max_radius,
            scroll_step: s.scroll_step,
            heavy_threshold: s.heavy_threshold,
            preview_damping: s.preview_damping,
        }
    }
}

impl From<&SpawnConfig> for SpawnSettings {
    fn from(c: &SpawnConfig) -> Self {
        SpawnSettings {
            default_radius: c.default_radius,
            min_radius: c.min_radius,
            max_radius: c.max_radius,
            scroll_step: c.scroll_step,
            heavy_threshold: c.heavy_threshold,
            preview_damping: c.preview_damping,
        }
    }
}

/// Initial state of a preset body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // position [x, y]
    #[serde(default = "zero_velocity")]
    pub v: Vec<f64>, // velocity [x, y], negated convention
    pub radius: f64, // mass is derived from it
    #[serde(default = "default_true")]
    pub gravity_affected: bool,
}

fn zero_velocity() -> Vec<f64> {
    vec![0.0, 0.0]
}

fn default_true() -> bool {
    true
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub spawn: SpawnConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    /// Parse and validate a scenario from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty mapping
        let mut text = String::new();
        BufReader::new(reader).read_to_string(&mut text)?;
        let cfg: ScenarioConfig = if text.trim().is_empty() {
            ScenarioConfig::default()
        } else {
            serde_yaml::from_str(&text)?
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load and validate a scenario file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| -> Result<(), ConfigError> { Err(ConfigError::Invalid(msg)) };

        let e = &self.engine;
        if !(e.max_dt > 0.0) {
            return invalid(format!("engine.max_dt must be positive, got {}", e.max_dt));
        }

        let p = &self.parameters;
        if !(p.g > 0.0) || !p.g.is_finite() {
            return invalid(format!("parameters.G must be positive and finite, got {}", p.g));
        }
        if !(p.min_distance > 0.0) {
            return invalid(format!("parameters.min_distance must be positive, got {}", p.min_distance));
        }
        if !(p.absorb_fraction >= 0.0) {
            return invalid(format!("parameters.absorb_fraction must not be negative, got {}", p.absorb_fraction));
        }
        if p.trail_capacity == 0 {
            return invalid("parameters.trail_capacity must be at least 1".to_string());
        }

        let s = &self.spawn;
        if !(s.min_radius > 0.0) || !(s.min_radius <= s.max_radius) {
            return invalid(format!(
                "spawn radius bounds must satisfy 0 < min_radius <= max_radius, got [{}, {}]",
                s.min_radius, s.max_radius
            ));
        }
        if !(s.default_radius >= s.min_radius && s.default_radius <= s.max_radius) {
            return invalid(format!(
                "spawn.default_radius {} is outside [{}, {}]",
                s.default_radius, s.min_radius, s.max_radius
            ));
        }
        if !s.scroll_step.is_finite() || !s.heavy_threshold.is_finite() || !s.preview_damping.is_finite() {
            return invalid("spawn values must be finite".to_string());
        }

        for (i, b) in self.bodies.iter().enumerate() {
            if b.x.len() != 2 || b.v.len() != 2 {
                return invalid(format!("body {i}: x and v must have exactly 2 components"));
            }
            if b.x.iter().chain(b.v.iter()).any(|c| !c.is_finite()) {
                return invalid(format!("body {i}: x and v must be finite"));
            }
            if !(b.radius > 0.0) || !b.radius.is_finite() {
                return invalid(format!("body {i}: radius must be positive, got {}", b.radius));
            }
        }

        Ok(())
    }
}
