use gravsim::{run_2d, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Drag to launch bodies, scroll to resize them, watch them orbit and merge")]
struct Args {
    /// Scenario YAML, looked up as given and then under `scenarios/`
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Run this many steps without a window and print a summary
    #[arg(long, value_name = "STEPS")]
    headless: Option<usize>,

    /// Frame delta for headless runs, in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,
}

// load here to keep main clean
fn load_scenario(file: Option<&PathBuf>) -> Result<ScenarioConfig> {
    let Some(file) = file else {
        return Ok(ScenarioConfig::default());
    };

    let config_path = if file.exists() {
        file.clone()
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file)
    };

    ScenarioConfig::load(&config_path).with_context(|| format!("failed to load scenario {}", config_path.display()))
}

fn run_headless(mut scenario: Scenario, steps: usize, dt: f64) {
    let mut merges = 0;
    let mut anomalies = 0;
    for _ in 0..steps {
        let report = scenario.step(dt);
        merges += report.merges.len();
        anomalies += report.anomalies.len();
    }

    info!("ran {steps} steps of {dt} s");
    println!("t = {:.3}, bodies = {}, merges = {merges}, anomalies = {anomalies}", scenario.system.t, scenario.system.len());
    for b in &scenario.system.bodies {
        println!(
            "  body {:3}: x = ({:10.3}, {:10.3}) r = {:8.3} m = {:12.3} trail = {}",
            b.id.0,
            b.x.x,
            b.x.y,
            b.radius,
            b.mass,
            b.trail.len()
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = load_scenario(args.file.as_ref())?;

    match args.headless {
        Some(steps) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
            run_headless(Scenario::build_scenario(scenario_cfg), steps, args.dt);
        }
        // Bevy's LogPlugin installs the logger for windowed runs
        None => run_2d(Scenario::build_scenario(scenario_cfg)),
    }

    Ok(())
}
