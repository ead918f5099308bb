//! GPU-compatible data types for the scene pipeline
//!
//! These types match the layouts in `scene.wgsl` exactly.

use bytemuck::{Pod, Zeroable};
use farmfx_math::mat4;

/// A tessellated scene vertex
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SceneVertex {
    /// World position
    pub position: [f32; 3],
    /// Surface normal (zero for lines)
    pub normal: [f32; 3],
    /// Normalized RGBA color
    pub color: [f32; 4],
    /// 1.0 for self-lit surfaces and lines, 0.0 otherwise
    pub emissive: f32,
    /// Specular exponent, 0.0 disables the highlight
    pub shininess: f32,
}

impl Default for SceneVertex {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            normal: [0.0, -1.0, 0.0],
            color: [1.0; 4],
            emissive: 0.0,
            shininess: 0.0,
        }
    }
}

/// Per-frame uniforms
/// Layout: 176 bytes total (must match scene.wgsl SceneUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    /// View matrix (64 bytes)
    pub view_matrix: [[f32; 4]; 4],
    /// Projection matrix (64 bytes)
    pub projection_matrix: [[f32; 4]; 4],
    /// Camera eye + padding (16 bytes)
    pub camera_pos: [f32; 3],
    pub _padding0: f32,
    /// Direction towards the light (normalized) + padding (16 bytes)
    pub light_dir: [f32; 3],
    pub _padding1: f32,
    /// Lighting parameters (16 bytes)
    pub ambient_strength: f32,
    pub diffuse_strength: f32,
    pub specular_strength: f32,
    pub _padding2: f32,
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            view_matrix: mat4::IDENTITY,
            projection_matrix: mat4::IDENTITY,
            camera_pos: [0.0; 3],
            _padding0: 0.0,
            // Scene Y points down, so "up" towards the light is -Y
            light_dir: [0.3, -1.0, 0.5],
            _padding1: 0.0,
            ambient_strength: 0.4,
            diffuse_strength: 0.6,
            specular_strength: 0.5,
            _padding2: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_vertex_size() {
        assert_eq!(std::mem::size_of::<SceneVertex>(), 48);
    }

    #[test]
    fn test_scene_uniforms_size() {
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 176);
        assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
    }
}
