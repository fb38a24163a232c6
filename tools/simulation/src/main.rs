//! Simulation CLI.
//!
//! Runs one Glosten–Milgrom session against the matching engine and
//! writes the per-step log to CSV.

use anyhow::Result;
use clap::Parser;
use simulation::config::SimulationConfig;
use simulation::export;
use simulation::run::Simulation;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "simulation")]
#[command(about = "Glosten-Milgrom market microstructure simulation", long_about = None)]
struct Cli {
    /// Output CSV path
    #[arg(short, long, default_value = "gm_simulation.csv")]
    output: PathBuf,

    /// RNG seed; the same seed reproduces the run exactly
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Session length in simulated time units
    #[arg(long, default_value_t = 100.0)]
    horizon: f64,

    /// Verbosity level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cfg = SimulationConfig {
        seed: cli.seed,
        horizon: cli.horizon,
        ..Default::default()
    };
    info!(seed = cfg.seed, horizon = cfg.horizon, steps = cfg.steps(), "starting session");

    let mut sim = Simulation::new(cfg);
    let records = sim.run();

    export::write_csv(&cli.output, &records)?;

    let arrivals = records.iter().filter(|r| r.arrival).count();
    info!(
        steps = records.len(),
        arrivals,
        trades = sim.exchange().trades().len(),
        belief = sim.belief(),
        output = %cli.output.display(),
        "session complete"
    );
    Ok(())
}
