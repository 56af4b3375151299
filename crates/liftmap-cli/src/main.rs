//! liftmap - assign every grid cell to its nearest elevator and export the
//! result to a simulator configuration file

mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process;
use tracing::info;

use cli::Cli;
use config::RunConfig;
use liftmap_export::ConfigTarget;
use liftmap_map::ElevatorMapping;
use liftmap_space::load_elevator_source;

fn main() {
    let cli = Cli::parse();

    cli.init_logging();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cfg = RunConfig::from(cli);
    let grid = cfg.validate().context("invalid arguments")?;

    let target = ConfigTarget::open(&cfg.config)
        .with_context(|| format!("cannot export to {}", cfg.config.display()))?;

    let elevators = load_elevator_source(&cfg.elevators, grid)
        .with_context(|| format!("failed to load elevators from {}", cfg.elevators.display()))?;
    info!(
        x_size = grid.x_size(),
        y_size = grid.y_size(),
        elevators = elevators.len(),
        policy = %cfg.policy,
        "loaded elevators"
    );

    let mut mapping = ElevatorMapping::new(elevators);
    mapping
        .create_mapping(&cfg.policy)
        .context("failed to build mapping table")?;

    if cfg.visualize {
        let drawing = mapping.visualize()?;
        io::stdout()
            .lock()
            .write_all(drawing.as_bytes())
            .context("failed to print mapping")?;
    }

    target
        .append_all(&mapping, &cfg.names)
        .with_context(|| format!("failed to export to {}", cfg.config.display()))?;
    info!(path = %cfg.config.display(), "export complete");

    Ok(())
}
