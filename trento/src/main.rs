use trento::{Scenario, ScenarioConfig};
use trento::{bench_event, bench_thickness};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "pb_pb_toy.yaml")]
    file_name: String,

    /// Run the timing harness instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing {}", config_path.display()))?;

    log::debug!("{:?}", scenario_cfg);

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_thickness();
        bench_event();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;
    let event = scenario.run();

    let (ixcm, iycm) = event.center_of_mass();
    log::info!("grid: {}x{} cells, dxy = {}", event.nsteps(), event.nsteps(), event.dxy());
    log::info!("npart = {}, multiplicity = {:.6}", event.npart(), event.multiplicity());
    log::info!("center of mass (index units) = ({:.4}, {:.4})", ixcm, iycm);
    log::info!("entropy = {:.6}", event.observables().entropy);
    for (n, h) in event.observables().harmonics() {
        log::info!(
            "n = {n}: magnitude = {:.6}, angle = {:.6}, radius = {:.6}",
            h.magnitude, h.angle, h.radius
        );
    }

    Ok(())
}
