//! Bounded position history used for drawing trails.

use std::collections::VecDeque;

use crate::simulation::states::{CelestialBody, NVec2};

pub const DEFAULT_TRAIL_CAPACITY: usize = 5000;

/// FIFO of past positions, oldest first. Never holds more than `capacity` points.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    points: VecDeque<NVec2>,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity.min(DEFAULT_TRAIL_CAPACITY)),
            capacity,
        }
    }

    /// Append a point, evicting from the head while over capacity
    pub fn push(&mut self, point: NVec2) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn oldest(&self) -> Option<&NVec2> {
        self.points.front()
    }

    pub fn latest(&self) -> Option<&NVec2> {
        self.points.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        self.points.iter()
    }

    /// Consecutive point pairs to draw as line segments; empty for 0 or 1 points
    pub fn segments(&self) -> impl Iterator<Item = (&NVec2, &NVec2)> + '_ {
        self.points.iter().zip(self.points.iter().skip(1))
    }
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_CAPACITY)
    }
}

/// Record the body's current position at the tail of its trail
pub fn record_position(body: &mut CelestialBody) {
    let x = body.x;
    body.trail.push(x);
}
