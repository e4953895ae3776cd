/*
 * Boid Flocking Simulation
 *
 * Every boid steers by three local rules:
 * 1. Alignment: Steer towards the average heading of neighbors
 * 2. Cohesion: Steer towards the average position of neighbors
 * 3. Separation: Avoid crowding neighbors
 *
 * Usage: flock [CONFIG.json]
 * Log verbosity follows RUST_LOG (defaults to info).
 */

use std::env;

use anyhow::Result;
use log::info;

use flock::{app, SimulationParams};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting boid flocking simulation");

    let params = match env::args().nth(1) {
        Some(path) => {
            info!("Loading parameters from {}", path);
            SimulationParams::load(&path)?
        }
        None => {
            info!("Using default parameters");
            SimulationParams::default()
        }
    };
    params.validate()?;

    app::run(params);
    Ok(())
}
