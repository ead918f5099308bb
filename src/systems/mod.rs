//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::{SimulationResult, SimulationSystem};
pub use window::{format_title, TitleStatus, WindowError, WindowSystem};
