//! Visual effects for the farm simulation
//!
//! - [`WeatherCloud`] / [`Sky`] - drifting clouds with rain and lightning
//! - [`EffectorRenderer`] - props for the lamp, heater, dehumidifier and
//!   watering can
//! - [`farmland`] - the soil plot and its plants
//!
//! Effects read a [`farmfx_core::SimState`] and draw through a
//! [`farmfx_core::Canvas`]; they know nothing about the GPU.

pub mod cloud;
pub mod effectors;
pub mod farmland;
pub mod sky;

pub use cloud::{altitude_band, Bolt, LightningStrike, Puff, Raindrop, WeatherCloud};
pub use effectors::EffectorRenderer;
pub use sky::{CloudKey, Sky};
