//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - spawn gesture tuning (`SpawnSettings`)
//! - system state (`System` with the preset bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and driven one frame at
//! a time by the visualization systems, or by the headless runner.

use bevy::prelude::Resource;
use log::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::spawn::SpawnSettings;
use crate::simulation::states::{BodyId, CelestialBody, NVec2, System};
use crate::simulation::stepper::{step_system, StepReport};

#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub spawn: SpawnSettings,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Engine (runtime) from EngineConfig
        let engine = Engine {
            gravity: cfg.engine.gravity,
            max_dt: cfg.engine.max_dt,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            g: p_cfg.g,
            min_distance: p_cfg.min_distance,
            absorb_fraction: p_cfg.absorb_fraction,
            trail_capacity: p_cfg.trail_capacity,
        };

        let spawn = SpawnSettings::from(&cfg.spawn);

        let mut scenario = Self::from_parts(engine, parameters, spawn);

        // Bodies: map `BodyConfig` -> runtime `CelestialBody` using nalgebra vectors
        for bc in &cfg.bodies {
            scenario.launch(body_from_config(bc));
        }

        info!(
            "scenario ready: {} preset bodies, G = {}, gravity mode {:?}",
            scenario.system.len(),
            scenario.parameters.g,
            scenario.engine.gravity
        );

        scenario
    }

    /// Empty sky with the given settings
    pub fn from_parts(engine: Engine, parameters: Parameters, spawn: SpawnSettings) -> Self {
        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity);

        Self {
            engine,
            parameters,
            spawn,
            system: System::new(),
            forces,
        }
    }

    /// Add a body to the live collection with this scenario's trail capacity
    pub fn launch(&mut self, body: CelestialBody) -> BodyId {
        let body = body.with_trail_capacity(self.parameters.trail_capacity);
        self.system.insert(body)
    }

    /// Advance one frame of `dt` seconds
    pub fn step(&mut self, dt: f64) -> StepReport {
        step_system(&mut self.system, &self.forces, &self.engine, &self.parameters, dt)
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::from_parts(Engine::default(), Parameters::default(), SpawnSettings::default())
    }
}

fn body_from_config(bc: &BodyConfig) -> CelestialBody {
    CelestialBody::new(NVec2::new(bc.x[0], bc.x[1]), NVec2::new(bc.v[0], bc.v[1]), bc.radius)
        .with_gravity_affected(bc.gravity_affected)
}
