//! High-level runtime engine settings
//!
//! Selects how pairwise gravity feeds the velocity update and caps the frame
//! delta handed to the stepper

use crate::configuration::config::GravityMode;

pub const DEFAULT_MAX_DT: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct Engine {
    pub gravity: GravityMode, // summed (default) or legacy per-pair
    pub max_dt: f64, // frame deltas above this are clamped
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            gravity: GravityMode::Summed,
            max_dt: DEFAULT_MAX_DT,
        }
    }
}
