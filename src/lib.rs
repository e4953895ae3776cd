/*
 * Boid Flocking Simulation - Module Definitions
 *
 * The simulation core (vector, world, boid, simulator, params) is free of
 * any windowing state; app, renderer and ui form the thin nannou driver that
 * calls `FlockSimulator::step` once per frame and draws the result.
 */

// Re-export key components for easier access
pub use boid::{Boid, FlockRules};
pub use params::SimulationParams;
pub use simulator::{step, FlockSimulator, UpdateOrder};
pub use vector::{Steering, Vector2};
pub use world::WorldBounds;

// Define modules
pub mod app;
pub mod boid;
pub mod debug;
pub mod params;
pub mod renderer;
pub mod simulator;
pub mod ui;
pub mod vector;
pub mod world;

// Distance from a boid's centre to each corner of its triangle, in world units
pub const BOID_SIZE: f32 = 10.0;
