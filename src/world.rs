/*
 * World Module
 *
 * Defines the rectangular world the flock lives in. The origin is the
 * top-left corner and y grows downwards, matching an orthographic
 * projection of (0, width, height, 0). Agents leaving one edge re-enter
 * from the opposite edge.
 */

use anyhow::{ensure, Result};
use rand::Rng;

use crate::vector::{vec2, Vector2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        ensure!(
            width.is_finite() && width > 0.0,
            "world width must be a positive finite number, got {width}"
        );
        ensure!(
            height.is_finite() && height > 0.0,
            "world height must be a positive finite number, got {height}"
        );
        Ok(Self { width, height })
    }

    // Bounds taken from a display resolution in pixels
    pub fn from_resolution(width: u32, height: u32) -> Result<Self> {
        Self::new(width as f32, height as f32)
    }

    /// Applies a single corrective wrap per axis.
    ///
    /// A coordinate below zero gains one world size and a coordinate at or
    /// past the far edge loses one. This is not a modulo: anything further
    /// than one world size outside stays outside after the call.
    pub fn wrap(&self, mut position: Vector2) -> Vector2 {
        // Left edge re-enters on the right
        if position.x < 0.0 {
            position.x += self.width;
        }

        // Checked independently: a tiny negative x plus width can round up
        // to exactly width
        if position.x >= self.width {
            position.x -= self.width;
        }

        // Same for the top and bottom edges
        if position.y < 0.0 {
            position.y += self.height;
        }
        if position.y >= self.height {
            position.y -= self.height;
        }

        position
    }

    pub fn contains(&self, position: Vector2) -> bool {
        (0.0..self.width).contains(&position.x) && (0.0..self.height).contains(&position.y)
    }

    // Uniformly random point inside the bounds
    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector2 {
        vec2(rng.gen_range(0.0..self.width), rng.gen_range(0.0..self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bounds() -> WorldBounds {
        WorldBounds::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert!(WorldBounds::new(0.0, 600.0).is_err());
        assert!(WorldBounds::new(800.0, -1.0).is_err());
        assert!(WorldBounds::new(f32::NAN, 600.0).is_err());
        assert!(WorldBounds::new(f32::INFINITY, 600.0).is_err());
        assert!(WorldBounds::from_resolution(1920, 1080).is_ok());
        assert!(WorldBounds::from_resolution(0, 1080).is_err());
    }

    #[test]
    fn wrap_leaves_inside_points_alone() {
        let b = bounds();
        let p = vec2(400.0, 300.0);
        assert_eq!(b.wrap(p), p);
        assert_eq!(b.wrap(Vector2::ZERO), Vector2::ZERO);
    }

    #[test]
    fn wrap_corrects_each_axis_once() {
        let b = bounds();
        assert_eq!(b.wrap(vec2(-1.0, 10.0)), vec2(799.0, 10.0));
        assert_eq!(b.wrap(vec2(801.0, 10.0)), vec2(1.0, 10.0));
        assert_eq!(b.wrap(vec2(10.0, -2.0)), vec2(10.0, 598.0));
        assert_eq!(b.wrap(vec2(10.0, 603.0)), vec2(10.0, 3.0));
        assert_eq!(b.wrap(vec2(800.0, 600.0)), vec2(0.0, 0.0));
    }

    #[test]
    fn wrap_lands_in_range_within_one_world_size() {
        let b = bounds();
        let xs = [-800.0, -400.0, -0.5, -1e-5, 0.0, 250.0, 799.5, 800.0, 1200.0, 1599.0];
        let ys = [-600.0, -1.0, -1e-5, 0.0, 300.0, 600.0, 1199.0];
        for &x in &xs {
            for &y in &ys {
                let wrapped = b.wrap(vec2(x, y));
                assert!(b.contains(wrapped), "({x}, {y}) wrapped to {wrapped:?}");
            }
        }
    }

    #[test]
    fn wrap_catches_rounding_onto_the_far_edge() {
        let b = bounds();

        // -1e-5 + 800.0 rounds to exactly 800.0 in f32
        let wrapped = b.wrap(vec2(-1e-5, 10.0));
        assert!(b.contains(wrapped), "wrapped to {wrapped:?}");
        assert_eq!(wrapped, vec2(0.0, 10.0));

        let wrapped = b.wrap(vec2(10.0, -1e-5));
        assert!(b.contains(wrapped), "wrapped to {wrapped:?}");
    }

    #[test]
    fn wrap_is_not_a_modulo() {
        let b = bounds();
        let wrapped = b.wrap(vec2(-900.0, 1500.0));
        assert_eq!(wrapped, vec2(-100.0, 900.0));
        assert!(!b.contains(wrapped));
    }

    #[test]
    fn random_positions_are_inside() {
        let b = bounds();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(b.contains(b.random_position(&mut rng)));
        }
    }
}
