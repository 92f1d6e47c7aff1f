//! Force / acceleration contributors for the gravity simulator
//!
//! Defines the pairwise gravity kernel, the acceleration trait and the direct
//! O(n^2) Newtonian gravity term that sums every pair's contribution.
//!
//! Accelerations follow the negated convention of [`crate::simulation::states`]:
//! the vector points from `other` to `current`, and the integrator subtracts
//! it, so the net motion is attraction.

use log::debug;

use crate::error::Anomaly;
use crate::simulation::params::Parameters;
use crate::simulation::states::{CelestialBody, NVec2, System};

/// Acceleration of `current` caused by `other` alone.
///
/// `force = G * m_current * m_other / r^2` along `(current.x - other.x) / r`,
/// divided by `m_current`. Pairs closer than `min_distance`, overlapping pairs
/// and non-finite results are reported as [`Anomaly::DegenerateGeometry`].
/// Overlapping pairs merge at the end of the step, so they exert no pull.
pub fn pair_acceleration(current: &CelestialBody, other: &CelestialBody, g: f64, min_distance: f64) -> Result<NVec2, Anomaly> {
    let distance = current.x - other.x;
    let r = distance.norm();

    let degenerate = || Anomaly::DegenerateGeometry {
        current: current.id,
        other: other.id,
        distance: r,
    };

    if !(r >= min_distance) || r == 0.0 || current.overlaps(other) {
        return Err(degenerate());
    }

    let force = (distance / r) * (g * (current.mass * other.mass) / (r * r));
    let accel = force / current.mass;

    if accel.iter().all(|c| c.is_finite()) {
        Ok(accel)
    } else {
        Err(degenerate())
    }
}

/// Collection of acceleration terms.
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - constants are read from `params` on every call
    /// - `out[i]` is set to the sum of contributions from all terms
    /// - skipped degenerate pairs are pushed onto `anomalies`
    pub fn accumulate_accels(&self, t: f64, sys: &System, params: &Parameters, out: &mut [NVec2], anomalies: &mut Vec<Anomaly>) {
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, sys, params, out, anomalies);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceleration source operating on a [`System`].
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, params: &Parameters, out: &mut [NVec2], anomalies: &mut Vec<Anomaly>);
}

/// Direct Newtonian gravity, summed over every other body, using
/// `params.g` and `params.min_distance`.
/// Bodies that are not gravity-affected receive no contribution.
pub struct NewtonianGravity;

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, params: &Parameters, out: &mut [NVec2], anomalies: &mut Vec<Anomaly>) {
        let n = sys.bodies.len();
        if n < 2 {
            return;
        }

        // Ordered pairs: the gravity-affected flag makes the interaction one-sided
        for (i, bi) in sys.bodies.iter().enumerate() {
            if !bi.gravity_affected {
                continue;
            }
            for (j, bj) in sys.bodies.iter().enumerate() {
                if i == j {
                    continue;
                }
                match pair_acceleration(bi, bj, params.g, params.min_distance) {
                    Ok(a) => out[i] += a,
                    Err(anomaly) => {
                        debug!("{anomaly}");
                        anomalies.push(anomaly);
                    }
                }
            }
        }
    }
}
