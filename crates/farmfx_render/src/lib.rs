//! Farm scene rendering
//!
//! This crate turns the draw lists recorded by the effects into GPU
//! buffers and draws them with wgpu.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::OrbitCamera`] - camera orbiting the farm
//! - [`mesh::MeshBuilder`] - tessellates a [`DrawList`] into vertices
//! - [`pipeline::ScenePipeline`] - opaque, translucent and line passes

pub mod camera;
pub mod context;
pub mod mesh;
pub mod pipeline;

pub use camera::OrbitCamera;
pub use mesh::{MeshBuilder, SceneMesh};

// Re-export core types for convenience
pub use farmfx_core::{Canvas, DrawList, Primitive};
