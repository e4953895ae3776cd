/*
 * Boid Module
 *
 * This module defines the Boid struct and its behavior.
 * Each boid follows three rules, each producing a steering delta that is
 * clamped to the boid's maximum force:
 * 1. Alignment: Steer towards the average heading of neighbors
 * 2. Cohesion: Steer towards the (amplified) average position of neighbors
 * 3. Separation: Steer away from neighbors, harder the closer they are
 */

use rand::Rng;

use crate::vector::{vec2, Steering, Vector2};
use crate::world::WorldBounds;

pub const DEFAULT_MAX_SPEED: f32 = 2.0;
pub const DEFAULT_MAX_FORCE: f32 = 0.03;

// Neighborhood radii and the cohesion amplification shared by every boid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlockRules {
    pub alignment_radius: f32,
    pub cohesion_radius: f32,
    pub separation_radius: f32,
    pub cohesion_amplification: f32,
}

impl Default for FlockRules {
    fn default() -> Self {
        Self {
            alignment_radius: 50.0,
            cohesion_radius: 25.0,
            separation_radius: 25.0,
            cohesion_amplification: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boid {
    pub position: Vector2,
    pub velocity: Vector2,
    pub max_speed: f32,
    pub max_force: f32,
}

impl Boid {
    pub fn new(position: Vector2, velocity: Vector2) -> Self {
        Self {
            position,
            velocity,
            max_speed: DEFAULT_MAX_SPEED,
            max_force: DEFAULT_MAX_FORCE,
        }
    }

    pub fn with_limits(mut self, max_speed: f32, max_force: f32) -> Self {
        self.max_speed = max_speed;
        self.max_force = max_force;
        self
    }

    /// Random position inside `bounds`, velocity components uniform in
    /// `[-spread, spread)`. A spread of zero (or less) starts the boid at rest.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: &WorldBounds, spread: f32) -> Self {
        let position = bounds.random_position(rng);

        // gen_range panics on an empty range
        let velocity = if spread > 0.0 {
            vec2(rng.gen_range(-spread..spread), rng.gen_range(-spread..spread))
        } else {
            Vector2::ZERO
        };

        Self::new(position, velocity)
    }

    // Facing angle in radians, used to orient the drawn marker
    pub fn heading(&self) -> f32 {
        self.velocity.y.atan2(self.velocity.x)
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    #[inline]
    fn is_other(&self, other: &Boid) -> bool {
        !std::ptr::eq(self, other)
    }

    // Implement Reynolds: Steering = Desired - Velocity, limited to max_force
    #[inline]
    fn steer_towards(&self, desired: Vector2) -> Vector2 {
        (desired.normalized() * self.max_speed - self.velocity).limit(self.max_force)
    }

    /// Steering towards the average velocity of every other boid closer than
    /// `rules.alignment_radius`. Zero when there are no such neighbors.
    pub fn alignment(&self, boids: &[Boid], rules: &FlockRules) -> Vector2 {
        let mut sum = Vector2::ZERO;
        let mut total = 0;

        for other in boids {
            let distance = (self.position - other.position).length();

            // Any other boid inside the alignment radius contributes its heading
            if self.is_other(other) && distance < rules.alignment_radius {
                sum += other.velocity;
                total += 1;
            }
        }

        // No neighbors, no steering
        if total == 0 {
            return Vector2::ZERO;
        }

        // Average heading becomes the desired velocity
        self.steer_towards(sum * (1.0 / total as f32))
    }

    /// Steering towards the neighbors' centre of mass. The centre is scaled by
    /// `rules.cohesion_amplification` before the boid's own position is
    /// subtracted.
    pub fn cohesion(&self, boids: &[Boid], rules: &FlockRules) -> Vector2 {
        let mut sum = Vector2::ZERO;
        let mut total = 0;

        for other in boids {
            let distance = (self.position - other.position).length();

            // Accumulate neighbor positions
            if self.is_other(other) && distance < rules.cohesion_radius {
                sum += other.position;
                total += 1;
            }
        }

        if total == 0 {
            return Vector2::ZERO;
        }

        // Amplified centre of mass, then steer from our position towards it
        let target = sum * (rules.cohesion_amplification / total as f32);
        self.steer_towards(target - self.position)
    }

    /// Steering away from neighbors closer than `rules.separation_radius`,
    /// each weighted by the inverse of its distance.
    ///
    /// Neighbors sitting exactly on top of this boid have no direction to
    /// flee from and are left out of the average.
    pub fn separation(&self, boids: &[Boid], rules: &FlockRules) -> Vector2 {
        let mut sum = Vector2::ZERO;
        let mut total = 0;

        for other in boids {
            // Vector pointing away from the neighbor
            let diff = self.position - other.position;
            let distance = diff.length();

            // Weight by inverse distance: closer neighbors push harder
            if self.is_other(other) && distance > 0.0 && distance < rules.separation_radius {
                sum += diff.normalized() * (1.0 / distance);
                total += 1;
            }
        }

        if total == 0 {
            return Vector2::ZERO;
        }

        // Average push direction becomes the desired velocity
        self.steer_towards(sum * (1.0 / total as f32))
    }

    // Combined steering of all three rules, equally weighted
    pub fn steering(&self, boids: &[Boid], rules: &FlockRules) -> Vector2 {
        let alignment = self.alignment(boids, rules);
        let cohesion = self.cohesion(boids, rules);
        let separation = self.separation(boids, rules);
        alignment + cohesion + separation
    }

    /// Applies a steering delta, caps the speed, moves one tick and wraps.
    pub fn integrate(&mut self, steering: Vector2, bounds: &WorldBounds) {
        // Update velocity
        self.velocity += steering;

        // Limit speed
        if self.velocity.length() > self.max_speed {
            self.velocity = self.velocity.normalized() * self.max_speed;
        }

        // Update position, one unit time step
        self.position += self.velocity;

        // Wrap around the world edges
        self.position = bounds.wrap(self.position);
    }
}
