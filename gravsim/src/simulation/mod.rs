pub mod states;
pub mod trail;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod collisions;
pub mod spawn;
pub mod stepper;
pub mod scenario;
