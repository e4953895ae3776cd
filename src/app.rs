/*
 * Application Module
 *
 * Wires the flock simulator into a nannou window. The world bounds come from
 * the primary monitor's native resolution, the flock advances exactly one
 * step per frame and the control panel may pause, retune or rebuild it.
 */

use std::sync::OnceLock;
use std::time::Instant;

use anyhow::{anyhow, Result};
use log::{debug, error, info, warn};
use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::debug::DebugInfo;
use crate::params::SimulationParams;
use crate::renderer;
use crate::simulator::FlockSimulator;
use crate::ui;
use crate::world::WorldBounds;

static LAUNCH_PARAMS: OnceLock<SimulationParams> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub simulator: FlockSimulator,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub rng: StdRng,
}

/// Runs the windowed simulation until the window is closed.
pub fn run(params: SimulationParams) {
    if LAUNCH_PARAMS.set(params).is_err() {
        warn!("Simulation already launched, ignoring new parameters");
    }
    nannou::app(model).update(update).run();
}

pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

// Initialize the model
fn model(app: &App) -> Model {
    match build_model(app) {
        Ok(model) => model,
        Err(e) => {
            error!("Failed to start simulation: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn build_model(app: &App) -> Result<Model> {
    let params = LAUNCH_PARAMS.get().cloned().unwrap_or_default();

    let window_id = app
        .new_window()
        .title("Boid Flocking Simulation")
        .size(params.window_width, params.window_height)
        .view(renderer::view)
        .raw_event(raw_window_event)
        .build()
        .map_err(|e| anyhow!("failed to create window: {:?}", e))?;

    let window = app
        .window(window_id)
        .ok_or_else(|| anyhow!("window {:?} disappeared after creation", window_id))?;
    let egui = Egui::from_window(&window);

    let bounds = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            WorldBounds::from_resolution(size.width, size.height)?
        }
        None => {
            warn!("No primary monitor found, using the window size as world bounds");
            WorldBounds::from_resolution(params.window_width, params.window_height)?
        }
    };
    info!("World bounds {}x{}", bounds.width, bounds.height);

    let mut rng = seeded_rng(params.seed);
    let simulator = FlockSimulator::from_params(&params, bounds, &mut rng);
    info!(
        "Spawned {} boids ({:?} update order)",
        simulator.boids().len(),
        simulator.order()
    );

    Ok(Model {
        simulator,
        params,
        egui,
        debug_info: DebugInfo::default(),
        rng,
    })
}

// Update the model
fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.egui.set_elapsed_time(update.since_start);

    let (should_reset, changes) = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if should_reset || changes.num_boids_changed {
        info!("Resetting flock with {} boids", model.params.num_boids);
        model.simulator.reset(&model.params, &mut model.rng);
    } else if changes.rules_changed {
        debug!("Flocking parameters changed: {:?}", model.params.rules());
        model.simulator.retune(&model.params);
    }

    if !model.params.pause_simulation {
        let started = Instant::now();
        model.simulator.step();
        model.debug_info.step_time = started.elapsed();
    }

    // Statistics always describe the flock actually being simulated
    model.debug_info.steps = model.simulator.step_count();
    model
        .debug_info
        .record_flock(model.simulator.boids().iter().map(|b| b.speed()));
}

// Pass raw window events to egui
fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
