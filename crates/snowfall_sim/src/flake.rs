//! Snowflake particle type

use rand::Rng;

/// Smallest size a flake can spawn with
pub const SIZE_MIN: f32 = 1.0;
/// Upper (exclusive) bound on flake size
pub const SIZE_MAX: f32 = 4.0;
/// Slowest fall speed, in pixels per frame
pub const SPEED_MIN: f32 = 6.0;
/// Upper (exclusive) bound on fall speed, in pixels per frame
pub const SPEED_MAX: f32 = 16.0;

/// A single falling snow particle
///
/// Size and speed are rolled once at spawn and never change afterwards; when
/// a flake falls past the bottom edge only its position is recycled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snowflake {
    /// Horizontal position in screen pixels
    pub x: f32,
    /// Vertical position in screen pixels
    pub y: f32,
    /// Radius-like visual scale
    pub size: f32,
    /// Fall speed in pixels per frame
    pub speed: f32,
    /// Residual per-flake drift, currently always zero
    pub drift: f32,
}

impl Snowflake {
    /// Spawn a flake at a uniformly random position on the canvas with
    /// random size and speed
    pub fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            x: rng.gen_range(0.0..width),
            y: rng.gen_range(0.0..height),
            size: rng.gen_range(SIZE_MIN..SIZE_MAX),
            speed: rng.gen_range(SPEED_MIN..SPEED_MAX),
            drift: 0.0,
        }
    }
}
