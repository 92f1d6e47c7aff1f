//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `G` (arbitrary simulation units),
//! - minimum separation below which a pair's force is skipped,
//! - fraction of the loser's radius a merge winner absorbs,
//! - trail capacity for newly spawned bodies

pub const DEFAULT_G: f64 = 667.4;
pub const DEFAULT_MIN_DISTANCE: f64 = 1.0e-3;
pub const DEFAULT_ABSORB_FRACTION: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub min_distance: f64, // degenerate-geometry cutoff
    pub absorb_fraction: f64, // winner.radius += loser.radius * absorb_fraction
    pub trail_capacity: usize, // max trail points per body
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: DEFAULT_G,
            min_distance: DEFAULT_MIN_DISTANCE,
            absorb_fraction: DEFAULT_ABSORB_FRACTION,
            trail_capacity: crate::simulation::trail::DEFAULT_TRAIL_CAPACITY,
        }
    }
}
