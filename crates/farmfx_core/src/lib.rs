//! Core types for farmfx
//!
//! This crate provides the state the effects read and the seam they draw
//! through:
//!
//! - [`SimState`] - sim speed, device flags and the garden
//! - [`Garden`] / [`Plant`] - plants lightning can strike
//! - [`WeatherState`] - sky conditions
//! - [`EffectorFlags`] - which farm devices are on
//! - [`FrameContext`] - canvas size and frame counter
//! - [`SimRng`] - seeded randomness for reproducible effects
//! - [`Canvas`] / [`DrawList`] - immediate-mode drawing and its recorder
//! - [`GardenLayout`] - RON garden plot files

pub mod canvas;
mod effectors;
mod frame;
mod garden;
mod layout;
mod sim_rng;
mod sim_state;
mod weather;

pub use canvas::{Canvas, DrawList, Primitive, Shape, StrokeStyle, Surface, SurfaceKind};
pub use effectors::{EffectorFlags, DEVICE_COUNT};
pub use frame::FrameContext;
pub use garden::{Garden, Plant, PlantKey, SCORCH_RADIUS};
pub use layout::{GardenLayout, LayoutLoadError, LayoutSaveError, PlantTemplate};
pub use sim_rng::{SimRng, DEFAULT_SEED};
pub use sim_state::SimState;
pub use weather::{WeatherParseError, WeatherState};

// Re-export commonly used types from farmfx_math for convenience
pub use farmfx_math::{Color, Vec3};
