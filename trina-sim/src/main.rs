//! Trina-Sim - run the fuzzy sweep controller on a simulated lawn
//!
//! ```text
//! trina-sim --config configs/sim.toml --ticks 5000 --variant single-sided
//! RUST_LOG=trina_nav=debug trina-sim --ticks 10
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use trina_nav::ControllerVariant;
use trina_sim::{Result, SimConfig, Simulation};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of ticks to run (overrides [run].ticks)
    #[arg(short, long)]
    ticks: Option<usize>,

    /// Seconds per tick (overrides [run].dt)
    #[arg(long)]
    dt: Option<f32>,

    /// Enable sensor noise with this seed
    #[arg(long)]
    seed: Option<u64>,

    /// Controller variant (overrides [controller].variant)
    #[arg(long, value_enum)]
    variant: Option<Variant>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Variant {
    SingleSided,
    BilateralUnified,
    BilateralPerSide,
}

impl From<Variant> for ControllerVariant {
    fn from(v: Variant) -> Self {
        match v {
            Variant::SingleSided => ControllerVariant::SingleSided,
            Variant::BilateralUnified => ControllerVariant::BilateralUnified,
            Variant::BilateralPerSide => ControllerVariant::BilateralPerSide,
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trina_sim=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            SimConfig::load(path)?
        }
        None => {
            info!("Using default configuration");
            SimConfig::default()
        }
    };

    if let Some(ticks) = args.ticks {
        config.run.ticks = ticks;
    }
    if let Some(dt) = args.dt {
        config.run.dt = dt;
    }
    if let Some(seed) = args.seed {
        config.noise.enabled = true;
        config.noise.seed = seed;
    }
    if let Some(variant) = args.variant {
        config.controller.variant = variant.into();
    }

    info!("Trina-Sim v{}", env!("CARGO_PKG_VERSION"));

    let mut sim = Simulation::new(config)?;
    let summary = sim.run();

    info!("Done: {}", summary);
    println!("{}", summary);

    Ok(())
}
