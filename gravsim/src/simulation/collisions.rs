//! Collision detection and merging
//!
//! Overlapping bodies merge: the larger radius absorbs the smaller one, the
//! first body in collection order wins a tie. Removal is deferred: the pass
//! tombstones losers and compacts the collection once at the end, together
//! with bodies that went extinct or non-finite.

use log::debug;

use crate::error::Anomaly;
use crate::simulation::states::{BodyId, CelestialBody};

/// One merge: `winner` absorbed `loser` and now has `radius`
#[derive(Debug, Clone, PartialEq)]
pub struct Merge {
    pub winner: BodyId,
    pub loser: BodyId,
    pub radius: f64,
}

#[derive(Debug, Clone, Default)]
pub struct CollisionReport {
    pub merges: Vec<Merge>,
    pub anomalies: Vec<Anomaly>,
}

/// Merge every overlapping pair and compact `bodies`.
///
/// Pairs are visited as `(i, j)` with `i < j`. A tombstoned body takes no part
/// in later pairs, so a pair never removes both of its bodies. The winner's
/// new radius (and mass) is visible to the pairs that follow.
pub fn resolve_collisions(bodies: &mut Vec<CelestialBody>, absorb_fraction: f64) -> CollisionReport {
    let mut report = CollisionReport::default();
    let n = bodies.len();
    let mut removed = vec![false; n];

    for i in 0..n {
        for j in (i + 1)..n {
            if removed[i] {
                break;
            }
            if removed[j] || !bodies[i].overlaps(&bodies[j]) {
                continue;
            }

            let (winner, loser) = if bodies[i].radius >= bodies[j].radius { (i, j) } else { (j, i) };

            let gained = bodies[loser].radius * absorb_fraction;
            bodies[winner].radius += gained;
            bodies[winner].refresh_mass();
            removed[loser] = true;

            let merge = Merge {
                winner: bodies[winner].id,
                loser: bodies[loser].id,
                radius: bodies[winner].radius,
            };
            debug!("body {} absorbed body {}, radius now {:.3}", merge.winner.0, merge.loser.0, merge.radius);
            report.merges.push(merge);
        }
    }

    mark_invalid(bodies, &mut removed, &mut report.anomalies);

    let mut flags = removed.into_iter();
    bodies.retain(|_| !flags.next().unwrap_or(false));

    report
}

/// Remove extinct (`radius <= 0`) and non-finite bodies, reporting each one
pub fn purge_invalid(bodies: &mut Vec<CelestialBody>) -> Vec<Anomaly> {
    let mut anomalies = Vec::new();
    let mut removed = vec![false; bodies.len()];
    mark_invalid(bodies, &mut removed, &mut anomalies);
    if removed.iter().any(|&gone| gone) {
        let mut flags = removed.into_iter();
        bodies.retain(|_| !flags.next().unwrap_or(false));
    }
    anomalies
}

fn mark_invalid(bodies: &[CelestialBody], removed: &mut [bool], anomalies: &mut Vec<Anomaly>) {
    for (body, gone) in bodies.iter().zip(removed.iter_mut()) {
        if *gone {
            continue;
        }
        let anomaly = if body.is_extinct() {
            Anomaly::BodyExtinct { id: body.id, radius: body.radius }
        } else if !body.is_finite() {
            Anomaly::NonFiniteState { id: body.id }
        } else {
            continue;
        };
        debug!("{anomaly}");
        anomalies.push(anomaly);
        *gone = true;
    }
}
