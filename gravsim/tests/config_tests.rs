use std::io::Write;

use gravsim::{ConfigError, GravityMode, Scenario, ScenarioConfig};

const FULL: &str = r#"
engine:
  gravity: "per_pair"
  max_dt: 0.05

parameters:
  G: 100.0
  min_distance: 0.01
  absorb_fraction: 1.0
  trail_capacity: 64

spawn:
  default_radius: 12.0
  min_radius: 2.0
  max_radius: 80.0
  scroll_step: 2.0
  heavy_threshold: 50.0
  preview_damping: 0.5

bodies:
  - x: [ 0.0, 0.0 ]
    radius: 40.0
    gravity_affected: false
  - x: [ 300.0, 0.0 ]
    v: [ 0.0, 25.0 ]
    radius: 5.0
"#;

fn parse(text: &str) -> Result<ScenarioConfig, ConfigError> {
    ScenarioConfig::from_reader(text.as_bytes())
}

fn assert_invalid(text: &str) {
    match parse(text) {
        Err(ConfigError::Invalid(_)) => {}
        other => panic!("expected Invalid, got {:?}", other),
    }
}

#[test]
fn empty_document_gives_defaults() {
    let cfg = parse("").unwrap();

    assert_eq!(cfg.engine.gravity, GravityMode::Summed);
    assert_eq!(cfg.parameters.g, 667.4);
    assert_eq!(cfg.parameters.absorb_fraction, 0.5);
    assert_eq!(cfg.parameters.trail_capacity, 5000);
    assert_eq!(cfg.spawn.max_radius, 500.0);
    assert_eq!(cfg.spawn.heavy_threshold, 100.0);
    assert!(cfg.bodies.is_empty());
}

#[test]
fn partial_document_fills_in_defaults() {
    let cfg = parse("parameters:\n  G: 1.5\n").unwrap();

    assert_eq!(cfg.parameters.g, 1.5);
    assert_eq!(cfg.parameters.min_distance, 1.0e-3);
    assert_eq!(cfg.engine.max_dt, 0.1);
}

#[test]
fn full_document_builds_scenario() {
    let cfg = parse(FULL).unwrap();
    let scenario = Scenario::build_scenario(cfg);

    assert_eq!(scenario.engine.gravity, GravityMode::PerPair);
    assert_eq!(scenario.engine.max_dt, 0.05);
    assert_eq!(scenario.parameters.g, 100.0);
    assert_eq!(scenario.spawn.default_radius, 12.0);
    assert_eq!(scenario.spawn.preview_damping, 0.5);

    let bodies = &scenario.system.bodies;
    assert_eq!(bodies.len(), 2);
    assert!(!bodies[0].gravity_affected);
    assert!(bodies[1].gravity_affected);
    assert_eq!(bodies[1].v.y, 25.0);
    assert_eq!(bodies[0].v.x, 0.0);
    assert_eq!(bodies[1].trail.capacity(), 64);
}

#[test]
fn unknown_gravity_mode_is_a_yaml_error() {
    assert!(matches!(parse("engine:\n  gravity: \"tree\"\n"), Err(ConfigError::Yaml(_))));
}

#[test]
fn non_positive_constant_is_rejected() {
    assert_invalid("parameters:\n  G: 0.0\n");
    assert_invalid("parameters:\n  min_distance: -1.0\n");
    assert_invalid("parameters:\n  trail_capacity: 0\n");
    assert_invalid("engine:\n  max_dt: 0.0\n");
}

#[test]
fn inverted_radius_bounds_are_rejected() {
    assert_invalid("spawn:\n  min_radius: 50.0\n  max_radius: 10.0\n");
    assert_invalid("spawn:\n  default_radius: 900.0\n");
}

#[test]
fn malformed_bodies_are_rejected() {
    assert_invalid("bodies:\n  - x: [ 1.0, 2.0, 3.0 ]\n    radius: 1.0\n");
    assert_invalid("bodies:\n  - x: [ 1.0, 2.0 ]\n    radius: 0.0\n");
}

#[test]
fn load_reads_scenario_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FULL.as_bytes()).unwrap();

    let cfg = ScenarioConfig::load(file.path()).unwrap();

    assert_eq!(cfg.bodies.len(), 2);
    assert_eq!(cfg.parameters.trail_capacity, 64);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.yaml");

    assert!(matches!(ScenarioConfig::load(&missing), Err(ConfigError::Io(_))));
}

#[test]
fn bundled_scenarios_parse() {
    let dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    for name in ["empty.yaml", "star_and_planet.yaml", "legacy_pairs.yaml"] {
        ScenarioConfig::load(&dir.join(name)).unwrap_or_else(|e| panic!("{name}: {e}"));
    }
}
