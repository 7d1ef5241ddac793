//! Snow particle simulation
//!
//! This crate owns the simulation half of the wallpaper: a fixed field of
//! snowflakes and the ambient wind that pushes them around. It knows nothing
//! about windows or rendering; the frame loop calls [`SnowField::advance`]
//! once per frame and hands the flakes to the rasterizer read-only.

pub mod field;
pub mod flake;
pub mod wind;

pub use field::{SnowField, DEFAULT_FLAKE_COUNT};
pub use flake::{Snowflake, SIZE_MAX, SIZE_MIN, SPEED_MAX, SPEED_MIN};
pub use wind::{Wind, WIND_MAX};
