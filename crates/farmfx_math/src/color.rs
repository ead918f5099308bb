//! RGBA color in 0..=255 channel units

use serde::{Serialize, Deserialize};

use crate::scalar::lerp;

/// An RGBA color with channels in the 0..=255 range
///
/// Channels are kept as `f32` so per-frame interpolation does not lose
/// precision; they are clamped only when converted for the GPU.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255.0, 255.0, 255.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque color
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 255.0 }
    }

    /// Color with explicit alpha
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray
    #[inline]
    pub const fn gray(v: f32) -> Self {
        Self::rgb(v, v, v)
    }

    /// Same color with a different alpha
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Per-channel linear interpolation
    pub fn lerp(self, target: Self, t: f32) -> Self {
        Self {
            r: lerp(self.r, target.r, t),
            g: lerp(self.g, target.g, t),
            b: lerp(self.b, target.b, t),
            a: lerp(self.a, target.a, t),
        }
    }

    /// Normalized `[r, g, b, a]` in 0..=1
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            (self.r / 255.0).clamp(0.0, 1.0),
            (self.g / 255.0).clamp(0.0, 1.0),
            (self.b / 255.0).clamp(0.0, 1.0),
            (self.a / 255.0).clamp(0.0, 1.0),
        ]
    }

    /// True when the color is fully opaque after clamping
    pub fn is_opaque(self) -> bool {
        self.a >= 255.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
