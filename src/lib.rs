//! Snowfall wallpaper application library
//!
//! Exposes the configuration layer for integration tests. The binary in
//! `main.rs` wires the simulation, renderer, and layering daemon together.

pub mod config;
