//! The snow field: every flake plus the wind, advanced once per frame

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::flake::Snowflake;
use crate::wind::Wind;

/// Default number of flakes in the field
pub const DEFAULT_FLAKE_COUNT: usize = 300;

/// Owns the snowflake collection and the ambient wind
///
/// All randomness flows through one long-lived ChaCha8 generator, so a field
/// built with [`SnowField::with_seed`] reproduces its full trajectory
/// frame-for-frame. The flake vector is allocated once and recycled in
/// place; `advance` never allocates.
pub struct SnowField {
    flakes: Vec<Snowflake>,
    wind: Wind,
    rng: ChaCha8Rng,
}

impl SnowField {
    /// Create a field of `count` flakes scattered over a canvas of the given
    /// dimensions
    pub fn new(width: f32, height: f32, count: usize) -> Self {
        Self::with_seed(width, height, count, rand::random())
    }

    /// Create a field with a fixed RNG seed for reproducible trajectories
    pub fn with_seed(width: f32, height: f32, count: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let flakes = (0..count)
            .map(|_| Snowflake::spawn(&mut rng, width, height))
            .collect();

        Self {
            flakes,
            wind: Wind::new(),
            rng,
        }
    }

    /// Advance the simulation by one frame
    ///
    /// Flakes falling past the bottom edge are recycled to the top with a
    /// fresh horizontal position; flakes blown past a side edge wrap to the
    /// opposite side.
    pub fn advance(&mut self, width: f32, height: f32) {
        let wind = self.wind.step(&mut self.rng);

        for flake in &mut self.flakes {
            // Larger flakes respond less to the wind
            flake.x += wind / flake.size;
            flake.y += flake.speed;

            if flake.y > height {
                flake.y = 0.0;
                flake.x = self.rng.gen_range(0.0..width);
            }

            if flake.x < 0.0 {
                flake.x = width;
            } else if flake.x > width {
                flake.x = 0.0;
            }
        }
    }

    /// All flakes, in spawn order
    pub fn flakes(&self) -> &[Snowflake] {
        &self.flakes
    }

    /// Smoothed wind strength currently applied
    pub fn wind(&self) -> f32 {
        self.wind.current()
    }

    /// Number of flakes in the field
    pub fn len(&self) -> usize {
        self.flakes.len()
    }

    /// Whether the field holds no flakes
    pub fn is_empty(&self) -> bool {
        self.flakes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 100.0;
    const HEIGHT: f32 = 100.0;

    #[test]
    fn test_initialize_positions_in_bounds() {
        let field = SnowField::with_seed(WIDTH, HEIGHT, 50, 1);
        assert_eq!(field.len(), 50);
        for flake in field.flakes() {
            assert!(flake.x >= 0.0 && flake.x < WIDTH);
            assert!(flake.y >= 0.0 && flake.y < HEIGHT);
        }
    }

    #[test]
    fn test_recycle_resets_to_top() {
        let mut field = SnowField::with_seed(WIDTH, HEIGHT, 1, 1);
        // Slowest spawn speed is 6 px/frame, so this falls past the bottom
        field.flakes[0].y = HEIGHT - 0.1;
        field.advance(WIDTH, HEIGHT);

        assert_eq!(field.flakes[0].y, 0.0);
        assert!(field.flakes[0].x >= 0.0 && field.flakes[0].x < WIDTH);
    }

    #[test]
    fn test_wrap_left_edge_to_right() {
        // Tall canvas so the flake does not also recycle
        let mut field = SnowField::with_seed(WIDTH, 10_000.0, 1, 2);
        field.flakes[0].x = -0.5;
        field.flakes[0].y = 10.0;
        field.advance(WIDTH, 10_000.0);

        assert_eq!(field.flakes[0].x, WIDTH);
    }

    #[test]
    fn test_wrap_right_edge_to_left() {
        let mut field = SnowField::with_seed(WIDTH, 10_000.0, 1, 2);
        field.flakes[0].x = WIDTH + 0.5;
        field.flakes[0].y = 10.0;
        field.advance(WIDTH, 10_000.0);

        assert_eq!(field.flakes[0].x, 0.0);
    }

    #[test]
    fn test_advance_keeps_positions_normalized() {
        let mut field = SnowField::with_seed(WIDTH, HEIGHT, 20, 5);
        for _ in 0..500 {
            field.advance(WIDTH, HEIGHT);
            for flake in field.flakes() {
                assert!(flake.x >= 0.0 && flake.x <= WIDTH);
                assert!(flake.y >= 0.0 && flake.y <= HEIGHT);
            }
        }
    }

    #[test]
    fn test_empty_field() {
        let mut field = SnowField::with_seed(WIDTH, HEIGHT, 0, 9);
        assert!(field.is_empty());
        field.advance(WIDTH, HEIGHT);
        assert_eq!(field.len(), 0);
    }
}
