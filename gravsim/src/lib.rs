pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use error::{Anomaly, ConfigError};

pub use simulation::states::{BodyId, CelestialBody, System, NVec2};
pub use simulation::trail::TrailBuffer;
pub use simulation::forces::{pair_acceleration, Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::{drift, kick, kick_pair};
pub use simulation::collisions::{resolve_collisions, Merge};
pub use simulation::spawn::{PointerInput, Preview, SpawnGesture, SpawnSettings};
pub use simulation::stepper::{step_system, StepReport};
pub use simulation::scenario::Scenario;

pub use configuration::config::{GravityMode, EngineConfig, ParametersConfig, SpawnConfig, BodyConfig, ScenarioConfig};

pub use visualization::vis2d::run_2d;
