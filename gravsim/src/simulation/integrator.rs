//! Leapfrog (kick-drift-kick) pieces for a single body
//!
//! The stepper drifts every body first, then applies the velocity kicks
//! bracketing the new acceleration. Positions subtract the velocity term
//! (negated velocity convention), so accelerations must be kept in the same
//! convention as [`crate::simulation::forces::pair_acceleration`].

use log::debug;

use crate::error::Anomaly;
use crate::simulation::forces::pair_acceleration;
use crate::simulation::states::{CelestialBody, NVec2};

/// Drift: refresh the mass and advance the position by one full step
/// x_n+1 = x_n - (dt v_n + dt/2 * dt a_n)
pub fn drift(body: &mut CelestialBody, dt: f64, half_dt: f64) {
    body.refresh_mass();
    body.x -= body.v * dt + body.a * (half_dt * dt);
}

/// Kick with a summed acceleration:
/// v += dt/2 a_old, a = a_new, v += dt/2 a_new
pub fn kick(body: &mut CelestialBody, a_new: NVec2, half_dt: f64) {
    body.v += body.a * half_dt;
    body.a = a_new;
    body.v += body.a * half_dt;
}

/// Legacy per-pair kick: the acceleration is overwritten by `other`'s pull
/// rather than summed, so the last pair processed dominates.
/// A degenerate pair leaves the body untouched.
pub fn kick_pair(body: &mut CelestialBody, other: &CelestialBody, g: f64, min_distance: f64, half_dt: f64) -> Result<(), Anomaly> {
    let a_new = pair_acceleration(body, other, g, min_distance)?;
    kick(body, a_new, half_dt);
    Ok(())
}

/// Apply [`kick_pair`] against every other body, in collection order
pub fn kick_pairs_in_order<'a, I>(body: &mut CelestialBody, others: I, g: f64, min_distance: f64, half_dt: f64, anomalies: &mut Vec<Anomaly>)
where
    I: IntoIterator<Item = &'a CelestialBody>,
{
    for other in others {
        if other.id == body.id {
            continue;
        }
        if let Err(anomaly) = kick_pair(body, other, g, min_distance, half_dt) {
            debug!("{anomaly}");
            anomalies.push(anomaly);
        }
    }
}
