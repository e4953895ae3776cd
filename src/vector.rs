/*
 * Vector Module
 *
 * The simulation works on the glam Vec2 that nannou re-exports, so the same
 * values flow straight into the renderer. This module adds the two steering
 * helpers the flocking rules rely on: a normalize that is guarded against
 * zero-length input and a magnitude limit.
 */

pub use nannou::prelude::{vec2, Vec2};

// Two-dimensional vector used for positions, velocities and steering deltas
pub type Vector2 = Vec2;

pub trait Steering {
    /// Unit vector in the same direction, or the zero vector when the length
    /// is exactly zero.
    fn normalized(self) -> Self;

    /// Rescales to `max` when longer than `max`, otherwise returns unchanged.
    fn limit(self, max: f32) -> Self;
}

impl Steering for Vec2 {
    #[inline]
    fn normalized(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(self.x / len, self.y / len)
    }

    #[inline]
    fn limit(self, max: f32) -> Self {
        if self.length() > max {
            self.normalized() * max
        } else {
            self
        }
    }
}
