//! Math Library for farmfx
//!
//! Small vector, matrix and color types used by the effects and the renderer.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Mat4`] - column-major 4x4 matrix (see [`mat4`] for constructors)
//! - [`Color`] - RGBA color in 0..=255 channel units
//!
//! The [`scalar`] module holds the easing helpers (`lerp`, `map_range`,
//! `constrain`) every per-frame fade is written with.

mod color;
pub mod mat4;
pub mod scalar;
mod vec3;

pub use color::Color;
pub use vec3::Vec3;
pub use mat4::Mat4;
pub use scalar::{constrain, lerp, map_range};
