//! Scene construction utilities
//!
//! This module provides a declarative API for building the farm scene and
//! the per-frame driver for it.

mod farm_scene;
mod scene_builder;

pub use farm_scene::{FarmScene, MAX_SIM_SPEED, MIN_SIM_SPEED};
pub use scene_builder::SceneBuilder;
