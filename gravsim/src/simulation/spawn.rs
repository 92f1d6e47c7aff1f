//! Drag-and-release spawn gesture
//!
//! `Idle -> Sizing -> Launched`: pressing the pointer anchors a new body,
//! scrolling while held resizes it, and releasing launches it slingshot-style
//! away from the pointer. The gesture is an explicit value the caller keeps
//! between frames and feeds one [`PointerInput`] at a time.

use log::debug;

use crate::simulation::states::{mass_from_radius, CelestialBody, NVec2};

/// One frame of pointer input, in world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub position: NVec2,
    pub pressed: bool, // button went down this frame
    pub held: bool, // button is down
    pub released: bool, // button went up this frame
    pub scroll: f64, // wheel delta this frame
}

impl PointerInput {
    /// Pointer at `position` with no button activity
    pub fn hover(position: NVec2) -> Self {
        Self {
            position,
            pressed: false,
            held: false,
            released: false,
            scroll: 0.0,
        }
    }

    pub fn press(position: NVec2) -> Self {
        Self { pressed: true, held: true, ..Self::hover(position) }
    }

    pub fn hold(position: NVec2, scroll: f64) -> Self {
        Self { held: true, scroll, ..Self::hover(position) }
    }

    pub fn release(position: NVec2) -> Self {
        Self { released: true, ..Self::hover(position) }
    }
}

/// Tunables for the gesture
#[derive(Debug, Clone)]
pub struct SpawnSettings {
    pub default_radius: f64, // radius on press
    pub min_radius: f64, // lower clamp while sizing
    pub max_radius: f64, // upper clamp while sizing
    pub scroll_step: f64, // radius change per wheel unit
    pub heavy_threshold: f64, // radius or drag distance that makes a body immune to gravity
    pub preview_damping: f64, // launch line length as a fraction of the drag
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            default_radius: 10.0,
            min_radius: 1.0,
            max_radius: 500.0,
            scroll_step: 1.0,
            heavy_threshold: 100.0,
            preview_damping: 1.0 / 3.0,
        }
    }
}

/// What the renderer draws while a body is being sized
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub origin: NVec2,
    pub radius: f64,
    pub mass: f64,
    pub line_end: NVec2, // end of the launch line, `origin` for a short drag
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SpawnGesture {
    #[default]
    Idle,
    Sizing {
        origin: NVec2, // where the body will spawn
        pointer: NVec2, // latest pointer position
        radius: f64,
    },
}

impl SpawnGesture {
    /// Feed one frame of input. Returns the next gesture state and the body
    /// launched this frame, if any.
    pub fn advance(self, input: &PointerInput, settings: &SpawnSettings) -> (SpawnGesture, Option<CelestialBody>) {
        let mut state = self;

        if input.pressed {
            state = SpawnGesture::Sizing {
                origin: input.position,
                pointer: input.position,
                radius: settings.default_radius,
            };
        }

        if let SpawnGesture::Sizing { origin, radius, .. } = state {
            let radius = if input.held {
                (radius + settings.scroll_step * input.scroll).clamp(settings.min_radius, settings.max_radius)
            } else {
                radius
            };

            if input.released {
                return (SpawnGesture::Idle, launch(origin, input.position, radius, settings));
            }
            if input.held {
                state = SpawnGesture::Sizing { origin, pointer: input.position, radius };
            }
        }

        (state, None)
    }

    /// Spawn preview while sizing. The launch line points away from the
    /// pointer, scaled by `preview_damping`, and collapses while the drag is
    /// no longer than the radius.
    pub fn preview(&self, settings: &SpawnSettings) -> Option<Preview> {
        let SpawnGesture::Sizing { origin, pointer, radius } = *self else {
            return None;
        };

        let drag = origin - pointer;
        let distance = drag.norm();
        let line_end = if distance > radius {
            origin + drag * settings.preview_damping
        } else {
            origin
        };

        Some(Preview {
            origin,
            radius,
            mass: mass_from_radius(radius),
            line_end,
        })
    }
}

/// Build the launched body, or `None` when the radius is not positive
fn launch(origin: NVec2, pointer: NVec2, radius: f64, settings: &SpawnSettings) -> Option<CelestialBody> {
    if !(radius > 0.0) {
        debug!("discarding spawn at ({:.1}, {:.1}) with radius {radius}", origin.x, origin.y);
        return None;
    }

    let drag = origin - pointer;
    let distance = drag.norm();

    // Negated convention: v = -(d - r) * dir, so the body flies along `drag`
    let v = if distance > radius {
        let direction = drag / distance;
        -(distance - radius) * direction
    } else {
        NVec2::zeros()
    };

    let heavy = radius >= settings.heavy_threshold || distance >= settings.heavy_threshold;

    debug!(
        "launching body at ({:.1}, {:.1}), r = {radius:.1}, speed = {:.1}, gravity affected = {}",
        origin.x,
        origin.y,
        v.norm(),
        !heavy
    );

    Some(CelestialBody::new(origin, v, radius).with_gravity_affected(!heavy))
}
