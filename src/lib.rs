//! FarmFX - weather and device effects over a simulated farm plot
//!
//! Library half of the `farmfx` binary: configuration, input mapping,
//! scene assembly and the per-frame systems.

pub mod config;
pub mod input;
pub mod scene;
pub mod systems;
