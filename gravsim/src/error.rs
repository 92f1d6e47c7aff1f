//! Error and anomaly types.
//!
//! Numeric degeneracies during a step are not errors: they are classified as
//! [`Anomaly`] values, the step corrects itself and the anomaly is reported in
//! the `StepReport`. Only configuration loading can fail, with [`ConfigError`].

use std::fmt;

use crate::simulation::states::BodyId;

/// Numeric degeneracy detected and corrected during a step
#[derive(Debug, Clone, PartialEq)]
pub enum Anomaly {
    /// Two bodies too close for a finite force; the pair's contribution was skipped
    DegenerateGeometry { current: BodyId, other: BodyId, distance: f64 },
    /// Radius dropped to zero or below; the body was removed
    BodyExtinct { id: BodyId, radius: f64 },
    /// Position, velocity or acceleration went NaN/infinite; the body was removed
    NonFiniteState { id: BodyId },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::DegenerateGeometry { current, other, distance } => write!(
                f,
                "degenerate geometry between body {} and body {} (distance {:e}), force skipped",
                current.0, other.0, distance
            ),
            Anomaly::BodyExtinct { id, radius } => {
                write!(f, "body {} extinct (radius {}), removed", id.0, radius)
            }
            Anomaly::NonFiniteState { id } => {
                write!(f, "body {} has non-finite state, removed", id.0)
            }
        }
    }
}

/// Errors that can occur while loading or validating a scenario file.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the scenario file.
    Io(std::io::Error),
    /// The file is not valid scenario YAML.
    Yaml(serde_yaml::Error),
    /// A value is outside its allowed range.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read scenario file: {}", e),
            ConfigError::Yaml(e) => write!(f, "Failed to parse scenario YAML: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid scenario: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Yaml(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Yaml(e)
    }
}
