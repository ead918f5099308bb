//! Rendering pipeline components
//!
//! GPU vertex/uniform layouts and the scene render pipeline.

pub mod types;
pub mod scene_pipeline;

// Re-export types
pub use types::{SceneUniforms, SceneVertex};

// Re-export pipelines
pub use scene_pipeline::ScenePipeline;
