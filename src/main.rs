//! GridScout - frontier-based obstacle discovery simulator.
//!
//! Scatters obstacles on an integer grid and lets a sensor-limited robot
//! discover them with one of three exploration strategies. Renders the
//! grid to the console each tick and logs a summary when the run stops.

use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use gridscout::config::ScoutConfig;
use gridscout::error::Result;
use gridscout::render::ConsolePlotter;
use gridscout::sim::Simulation;
use gridscout::strategy::{DynStrategy, StrategyKind};
use gridscout::world::GridWorld;

/// Frontier-based obstacle discovery simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<i32>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<i32>,

    /// Number of obstacles to scatter
    #[arg(long)]
    obstacles: Option<usize>,

    /// Exploration strategy
    #[arg(short, long, value_enum)]
    strategy: Option<StrategyKind>,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Tick budget before the run is aborted
    #[arg(long)]
    max_ticks: Option<usize>,

    /// Suppress per-tick console rendering
    #[arg(short, long)]
    quiet: bool,

    /// List available strategies and exit
    #[arg(long)]
    list_strategies: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gridscout=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    if args.list_strategies {
        for kind in StrategyKind::ALL {
            println!("{:<24} {}", kind.to_string(), kind.description());
        }
        return Ok(());
    }

    // Load configuration, then apply command-line overrides
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            ScoutConfig::load(path)?
        }
        None => ScoutConfig::default(),
    };

    if let Some(width) = args.width {
        config.grid.width = width;
    }
    if let Some(height) = args.height {
        config.grid.height = height;
    }
    if let Some(obstacles) = args.obstacles {
        config.grid.obstacle_count = obstacles;
    }
    if let Some(strategy) = args.strategy {
        config.simulation.strategy = strategy;
    }
    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
    }
    if let Some(max_ticks) = args.max_ticks {
        config.simulation.max_ticks = max_ticks;
    }
    if args.quiet {
        config.simulation.render = false;
    }

    config.validate()?;

    info!("GridScout v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Grid {}x{}, {} obstacles, strategy: {}",
        config.grid.width,
        config.grid.height,
        config.grid.obstacle_count,
        config.simulation.strategy
    );

    let mut rng = match config.simulation.seed {
        Some(seed) => {
            info!("Using RNG seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let world = GridWorld::generate(
        config.grid.width,
        config.grid.height,
        config.grid.obstacle_count,
        &mut rng,
    );
    let strategy = DynStrategy::new(config.simulation.strategy, rng);
    let plotter = ConsolePlotter::new(config.grid.width, config.grid.height);

    let mut sim = Simulation::new(world, strategy, plotter);

    while sim.tick() {
        if config.simulation.render {
            println!("{}", sim.plotter().frame(sim.world().robot()));
        }
        if sim.ticks() >= config.simulation.max_ticks {
            warn!(
                "Tick budget ({}) exhausted before the run stopped",
                config.simulation.max_ticks
            );
            break;
        }
    }

    // Final frame after the stop signal
    if config.simulation.render {
        println!("{}", sim.plotter().frame(sim.world().robot()));
    }

    info!(
        "Finished after {} ticks: {}/{} obstacles found",
        sim.ticks(),
        sim.strategy().found_obstacles().len(),
        sim.world().obstacles().len()
    );

    Ok(())
}
