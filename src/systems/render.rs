//! Frame rendering for the farm scene
//!
//! Each frame the scene is recorded into a draw list, tessellated into
//! vertex streams and drawn with the scene pipeline.

use std::sync::Arc;
use winit::window::Window;
use farmfx_core::DrawList;
use farmfx_math::mat4;
use farmfx_render::{
    context::{ContextError, RenderContext},
    pipeline::{SceneUniforms, ScenePipeline},
    MeshBuilder, OrbitCamera,
};
use crate::config::{CameraConfig, RenderingConfig};
use crate::scene::FarmScene;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU context could not be created
    Context(ContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "GPU setup failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(e) => Some(e),
            _ => None,
        }
    }
}

/// Owns the GPU context and turns a `FarmScene` into pixels
pub struct RenderSystem {
    context: RenderContext,
    pipeline: ScenePipeline,
    draw_list: DrawList,
    mesh_builder: MeshBuilder,
    render_config: RenderingConfig,
    camera_config: CameraConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        camera_config: CameraConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let mut pipeline = ScenePipeline::new(&context.device, context.config.format);

        // Ensure depth texture exists
        pipeline.ensure_depth_texture(
            &context.device,
            context.size.width,
            context.size.height,
        );

        Ok(Self {
            context,
            pipeline,
            draw_list: DrawList::new(),
            mesh_builder: MeshBuilder::new(),
            render_config,
            camera_config,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline.ensure_depth_texture(&self.context.device, width, height);
    }

    /// Reconfigure the surface after it was lost
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
    }

    /// Render a single frame
    pub fn render_frame(
        &mut self,
        camera: &OrbitCamera,
        scene: &FarmScene,
    ) -> Result<(), RenderError> {
        // Record and tessellate the scene
        self.draw_list.clear();
        scene.draw(&mut self.draw_list);
        let mesh = self.mesh_builder.build(&self.draw_list);
        self.pipeline.upload(&self.context.device, &self.context.queue, mesh);

        let aspect = self.context.aspect_ratio();
        let projection_matrix = mat4::perspective(
            self.camera_config.fov.to_radians(),
            aspect,
            self.camera_config.near,
            self.camera_config.far,
        );

        let uniforms = SceneUniforms {
            view_matrix: camera.view_matrix(),
            projection_matrix,
            camera_pos: camera.eye().to_array(),
            light_dir: self.render_config.light_dir,
            ambient_strength: self.render_config.ambient_strength,
            diffuse_strength: self.render_config.diffuse_strength,
            specular_strength: self.render_config.specular_strength,
            ..SceneUniforms::default()
        };
        self.pipeline.update_uniforms(&self.context.queue, &uniforms);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.render_config.background_color;
        self.pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }

    /// Vertex counts of the last frame (opaque, translucent, lines)
    pub fn vertex_counts(&self) -> (u32, u32, u32) {
        self.pipeline.vertex_counts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
        assert_eq!(
            format!("{}", RenderError::from(ContextError::NoAdapter)),
            "GPU setup failed: No compatible GPU adapter found"
        );
    }
}
