//! Rendering for the snowfall wallpaper
//!
//! The snow field is rasterized on the CPU into a fixed-size frame and
//! blitted to the window surface through wgpu:
//!
//! - [`frame::FrameBuffer`] - RGBA8 canvas and flake rasterizer
//! - [`context::RenderContext`] - wgpu device, queue, and surface management
//! - [`pipeline::FramePipeline`] - fullscreen blit of the frame texture

pub mod context;
pub mod frame;
pub mod pipeline;

pub use context::RenderContext;
pub use frame::{FrameBuffer, CLEAR_COLOR, FLAKE_COLOR};
pub use pipeline::FramePipeline;
