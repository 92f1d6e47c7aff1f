//! Core state types for the gravity simulator.
//!
//! - `CelestialBody` holds the physical state of one body plus its trail
//! - `System` owns the live collection of bodies and the simulation time `t`
//!
//! Velocity and acceleration are stored negated: the integrator subtracts the
//! velocity term from the position, so a body with `v = (1, 0)` moves towards -x.

use std::f64::consts::PI;

use nalgebra::Vector2;

use crate::simulation::trail::{TrailBuffer, DEFAULT_TRAIL_CAPACITY};

pub type NVec2 = Vector2<f64>;

/// Stable body identity, assigned by [`System::insert`] and never reused in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub id: BodyId, // set on insert
    pub radius: f64, // determines size and derived mass
    pub mass: f64, // always pi * radius^2
    pub x: NVec2, // position
    pub v: NVec2, // velocity (negated convention)
    pub a: NVec2, // acceleration from the previous evaluation
    pub active: bool, // launched and alive
    pub gravity_affected: bool, // false -> pulls on others but is never pulled
    pub trail: TrailBuffer, // past positions, oldest first
}

impl CelestialBody {
    pub fn new(x: NVec2, v: NVec2, radius: f64) -> Self {
        Self {
            id: BodyId(0),
            radius,
            mass: mass_from_radius(radius),
            x,
            v,
            a: NVec2::zeros(),
            active: true,
            gravity_affected: true,
            trail: TrailBuffer::new(DEFAULT_TRAIL_CAPACITY),
        }
    }

    pub fn with_gravity_affected(mut self, gravity_affected: bool) -> Self {
        self.gravity_affected = gravity_affected;
        self
    }

    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail = TrailBuffer::new(capacity);
        self
    }

    /// Recompute `mass` from the current radius
    pub fn refresh_mass(&mut self) {
        self.mass = mass_from_radius(self.radius);
    }

    pub fn is_extinct(&self) -> bool {
        self.radius <= 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).chain(self.a.iter()).all(|c| c.is_finite())
    }

    /// Circle-circle overlap, strict: touching circles do not collide
    pub fn overlaps(&self, other: &CelestialBody) -> bool {
        let reach = self.radius + other.radius;
        (self.x - other.x).norm_squared() < reach * reach
    }
}

pub fn mass_from_radius(radius: f64) -> f64 {
    PI * radius * radius
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<CelestialBody>, // live collection
    pub t: f64, // time
    next_id: u64,
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body, giving it a fresh id
    pub fn insert(&mut self, mut body: CelestialBody) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        body.id = id;
        body.refresh_mass();
        self.bodies.push(body);
        id
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
