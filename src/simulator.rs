/*
 * Simulator Module
 *
 * FlockSimulator owns a fixed-size population of boids together with the
 * world bounds and advances them one synchronous tick per call to `step`.
 * The neighbor scan is a plain O(n^2) pass over the population.
 */

use log::{debug, trace};
use rand::Rng;

use crate::boid::{Boid, FlockRules};
use crate::params::SimulationParams;
use crate::world::WorldBounds;

/// Which state neighbor reads observe during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOrder {
    /// Boids are updated in place, one after another. A boid's forces are
    /// computed against the live population, so boids earlier in the list
    /// have already moved this tick.
    #[default]
    Sequential,
    /// All steering deltas are computed from a copy of the population taken
    /// at the start of the tick, then applied. The outcome does not depend on
    /// the order of the boids.
    Snapshot,
}

// Advance every boid by one tick
pub fn step(boids: &mut [Boid], rules: &FlockRules, bounds: &WorldBounds, order: UpdateOrder) {
    match order {
        UpdateOrder::Sequential => {
            for i in 0..boids.len() {
                // Forces read the live slice, earlier boids already moved
                let steering = boids[i].steering(boids, rules);

                // Apply before moving on to the next boid
                boids[i].integrate(steering, bounds);
            }
        }
        UpdateOrder::Snapshot => {
            // Create a copy of boids for the calculations
            let snapshot = boids.to_vec();

            for (boid, before) in boids.iter_mut().zip(&snapshot) {
                // Identity checks run against the copy, so steer from it
                let steering = before.steering(&snapshot, rules);
                boid.integrate(steering, bounds);
            }
        }
    }
}

pub struct FlockSimulator {
    boids: Vec<Boid>,
    rules: FlockRules,
    bounds: WorldBounds,
    order: UpdateOrder,
    steps: u64,
}

impl FlockSimulator {
    pub fn new(boids: Vec<Boid>, bounds: WorldBounds) -> Self {
        debug!(
            "Creating flock simulator: {} boids in {}x{}",
            boids.len(),
            bounds.width,
            bounds.height
        );
        Self {
            boids,
            rules: FlockRules::default(),
            bounds,
            order: UpdateOrder::default(),
            steps: 0,
        }
    }

    pub fn with_order(mut self, order: UpdateOrder) -> Self {
        debug!("Update order set to {:?}", order);
        self.order = order;
        self
    }

    pub fn with_rules(mut self, rules: FlockRules) -> Self {
        self.rules = rules;
        self
    }

    /// Builds a random population sized and tuned by `params`.
    pub fn from_params<R: Rng + ?Sized>(params: &SimulationParams, bounds: WorldBounds, rng: &mut R) -> Self {
        let boids = spawn_boids(params, &bounds, rng);
        Self::new(boids, bounds)
            .with_rules(params.rules())
            .with_order(params.update_order)
    }

    // Replace the whole population and pick up rule changes
    pub fn reset<R: Rng + ?Sized>(&mut self, params: &SimulationParams, rng: &mut R) {
        self.boids = spawn_boids(params, &self.bounds, rng);
        self.rules = params.rules();
        self.order = params.update_order;
        self.steps = 0;
        debug!("Flock reset with {} boids", self.boids.len());
    }

    // Apply rule and limit changes without touching positions
    pub fn retune(&mut self, params: &SimulationParams) {
        self.rules = params.rules();
        self.order = params.update_order;

        // Update limits for all boids
        for boid in &mut self.boids {
            boid.max_speed = params.max_speed;
            boid.max_force = params.max_force;
        }
    }

    pub fn step(&mut self) {
        step(&mut self.boids, &self.rules, &self.bounds, self.order);
        self.steps += 1;
        trace!("Step {} complete for {} boids", self.steps, self.boids.len());
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn bounds(&self) -> &WorldBounds {
        &self.bounds
    }

    pub fn rules(&self) -> &FlockRules {
        &self.rules
    }

    pub fn order(&self) -> UpdateOrder {
        self.order
    }

    pub fn step_count(&self) -> u64 {
        self.steps
    }
}

fn spawn_boids<R: Rng + ?Sized>(params: &SimulationParams, bounds: &WorldBounds, rng: &mut R) -> Vec<Boid> {
    (0..params.num_boids)
        .map(|_| {
            Boid::random(rng, bounds, params.initial_speed_spread)
                .with_limits(params.max_speed, params.max_force)
        })
        .collect()
}
