//! Camera input handling
//!
//! This crate turns mouse and keyboard events into orbit and zoom
//! motions for the scene camera.

mod orbit_controller;

pub use orbit_controller::{CameraControl, OrbitController};
