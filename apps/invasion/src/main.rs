//! invasion — run an alien invasion over a city map.
//!
//! Reads the city map and the alien names, lands the aliens at random
//! cities and lets them wander until they are all destroyed, every city is
//! gone, or every survivor has taken `--max-steps` steps.
//!
//! Every flag can also be set through the environment:
//!
//! ```text
//! NUM_ALIENS=8 INVASION_SEED=42 RUST_LOG=debug invasion --output-dir out/
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use inv_alien::{AlienStoreBuilder, load_names};
use inv_core::{DEFAULT_MAX_STEPS, InvasionConfig};
use inv_map::load_city_map;
use inv_output::{CsvWriter, LogObserver, ReportObserver};
use inv_sim::{Invasion, InvasionBuilder, Outcome};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "invasion", version, about = "Simulate an alien invasion over a city map")]
struct Cli {
    /// Number of aliens to land.
    #[arg(long, env = "NUM_ALIENS", default_value_t = 5)]
    num_aliens: usize,

    /// City map file, one `city dir=city ...` line per city.
    #[arg(long, env = "CITY_MAP_FILE_PATH", default_value = "input.txt")]
    city_map_file_path: PathBuf,

    /// Alien names, one per line.
    #[arg(long, env = "NAMES_FILE_PATH", default_value = "names.txt")]
    names_file_path: PathBuf,

    /// RNG seed; a random one is drawn and logged when omitted.
    #[arg(long, env = "INVASION_SEED")]
    seed: Option<u64>,

    /// Steps each alien may take before the invasion ends.
    #[arg(long, env = "MAX_STEPS", default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: u32,

    /// Directory for CSV reports; none are written when omitted.
    #[arg(long, env = "INVASION_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let map = load_city_map(&cli.city_map_file_path)
        .with_context(|| format!("loading city map {}", cli.city_map_file_path.display()))?;
    let names = load_names(&cli.names_file_path)
        .with_context(|| format!("loading alien names {}", cli.names_file_path.display()))?;
    let aliens = AlienStoreBuilder::new(names).limit(cli.num_aliens).build()?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, max_steps = cli.max_steps, aliens = aliens.count, "starting invasion");

    let config = InvasionConfig { max_steps: cli.max_steps, seed };
    let mut invasion = InvasionBuilder::new(config, map, aliens).build()?;

    let outcome = match &cli.output_dir {
        Some(dir) => run_with_reports(&mut invasion, dir)?,
        None => invasion.run(&mut LogObserver::new()),
    };

    tracing::info!(
        step = outcome.final_step.0,
        cities_destroyed = outcome.cities_destroyed,
        aliens_destroyed = outcome.aliens_destroyed,
        "done"
    );
    Ok(())
}

/// Run with both the log and the CSV observers, surfacing any write error.
fn run_with_reports(invasion: &mut Invasion, dir: &Path) -> Result<Outcome> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;
    let writer = CsvWriter::new(dir)?;

    let mut observers = (LogObserver::new(), ReportObserver::new(writer));
    let outcome = invasion.run(&mut observers);
    if let Some(e) = observers.1.take_error() {
        return Err(e).context("writing CSV reports");
    }
    tracing::info!(dir = %dir.display(), "reports written");
    Ok(outcome)
}
