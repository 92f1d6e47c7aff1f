//! Per-frame simulation step driver
//!
//! One call advances the whole system by the frame delta:
//! drift + trail, velocity kicks (summed or legacy per-pair), then collision
//! merging with a single compaction at the end.

use log::{debug, warn};

use crate::configuration::config::GravityMode;
use crate::error::Anomaly;
use crate::simulation::collisions::{purge_invalid, resolve_collisions, Merge};
use crate::simulation::engine::Engine;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::{drift, kick, kick_pairs_in_order};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, System};
use crate::simulation::trail::record_position;

/// What happened during one step
#[derive(Debug, Clone, Default)]
pub struct StepReport {
    pub dt: f64, // delta actually integrated (after clamping)
    pub merges: Vec<Merge>,
    pub anomalies: Vec<Anomaly>,
}

impl StepReport {
    pub fn is_quiet(&self) -> bool {
        self.merges.is_empty() && self.anomalies.is_empty()
    }
}

/// Advance `sys` by one frame of length `dt`.
///
/// `dt` is clamped to `engine.max_dt`; a zero, negative or non-finite `dt`
/// leaves the system untouched.
pub fn step_system(sys: &mut System, forces: &AccelSet, engine: &Engine, params: &Parameters, dt: f64) -> StepReport {
    let mut report = StepReport::default();

    if !dt.is_finite() || dt <= 0.0 {
        if !dt.is_finite() {
            warn!("ignoring non-finite frame delta {dt}");
        }
        return report;
    }
    let dt = dt.min(engine.max_dt);
    let half_dt = 0.5 * dt; // half step dt/2
    report.dt = dt;

    report.anomalies.extend(purge_invalid(&mut sys.bodies));
    if sys.bodies.is_empty() {
        sys.t += dt;
        return report;
    }

    // Drift: x_n+1 from x_n, v_n, a_n, then record the trail point
    for b in sys.bodies.iter_mut() {
        drift(b, dt, half_dt);
        record_position(b);
    }

    match engine.gravity {
        GravityMode::Summed => {
            // a_n+1 from x_n+1, summed over all other bodies
            let mut a_new = vec![NVec2::zeros(); sys.bodies.len()];
            forces.accumulate_accels(sys.t + dt, &*sys, params, &mut a_new, &mut report.anomalies);

            // v_n+1 = v_n + dt/2 (a_n + a_n+1)
            for (b, a) in sys.bodies.iter_mut().zip(a_new) {
                if b.gravity_affected {
                    kick(b, a, half_dt);
                }
            }
        }
        GravityMode::PerPair => {
            // Positions are fixed during the kicks, so each body can borrow the rest
            for i in 0..sys.bodies.len() {
                if !sys.bodies[i].gravity_affected {
                    continue;
                }
                let (before, rest) = sys.bodies.split_at_mut(i);
                let (body, after) = rest.split_at_mut(1);
                kick_pairs_in_order(&mut body[0], before.iter().chain(after.iter()), params.g, params.min_distance, half_dt, &mut report.anomalies);
            }
        }
    }

    let collisions = resolve_collisions(&mut sys.bodies, params.absorb_fraction);
    report.merges.extend(collisions.merges);
    report.anomalies.extend(collisions.anomalies);

    sys.t += dt;

    if !report.is_quiet() {
        debug!(
            "t = {:.3}: {} merges, {} anomalies, {} bodies left",
            sys.t,
            report.merges.len(),
            report.anomalies.len(),
            sys.bodies.len()
        );
    }

    report
}
