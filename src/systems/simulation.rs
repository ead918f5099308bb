//! Farm simulation system
//!
//! Manages the per-frame loop:
//! - Delta time calculation (for camera input)
//! - Stepping the weather and device effects
//! - Camera input

use std::time::Instant;

use farmfx_input::OrbitController;
use farmfx_render::OrbitCamera;

use crate::scene::FarmScene;

/// Result of a simulation update
pub struct SimulationResult {
    /// Lightning strikes that landed this frame
    pub strikes: usize,
    /// Seconds since the previous frame (capped)
    pub dt: f32,
}

/// Manages the simulation loop
pub struct SimulationSystem {
    last_frame: Instant,
    total_strikes: u64,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            total_strikes: 0,
        }
    }

    /// Run one simulation frame
    ///
    /// Effects advance one frame scaled by the sim speed; the camera moves
    /// by wall-clock time.
    pub fn update(
        &mut self,
        scene: &mut FarmScene,
        camera: &mut OrbitCamera,
        controller: &mut OrbitController,
    ) -> SimulationResult {
        let now = Instant::now();
        // Cap dt so a stalled frame does not fling the camera around
        let dt = (now - self.last_frame).as_secs_f32().min(0.25);
        self.last_frame = now;

        let strikes = scene.step().len();
        self.total_strikes += strikes as u64;

        controller.update(camera, dt);

        SimulationResult { strikes, dt }
    }

    /// Lightning strikes since startup
    pub fn total_strikes(&self) -> u64 {
        self.total_strikes
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneBuilder;
    use farmfx_core::{FrameContext, WeatherState};
    use farmfx_math::Vec3;

    #[test]
    fn test_delta_time_capped() {
        let mut sim = SimulationSystem::new();
        let mut scene = SceneBuilder::new(FrameContext::new(1280.0, 720.0)).build();
        let mut camera = OrbitCamera::new(Vec3::ZERO, 500.0, 0.0, 0.0);
        let mut controller = OrbitController::new();
        std::thread::sleep(std::time::Duration::from_millis(300));
        let result = sim.update(&mut scene, &mut camera, &mut controller);
        assert_eq!(result.dt, 0.25);
    }

    #[test]
    fn test_update_steps_scene() {
        let mut sim = SimulationSystem::default();
        let mut scene = SceneBuilder::new(FrameContext::new(1280.0, 720.0))
            .with_weather(WeatherState::Storm)
            .with_clouds(2)
            .with_garden_grid(1, 1, 10.0)
            .build();
        let mut camera = OrbitCamera::new(Vec3::ZERO, 500.0, 0.0, 0.0);
        let mut controller = OrbitController::new();

        let mut strikes = 0;
        for _ in 0..3000 {
            strikes += sim.update(&mut scene, &mut camera, &mut controller).strikes;
        }
        assert_eq!(scene.ctx.frame_count, 3000);
        assert_eq!(sim.total_strikes(), strikes as u64);
        assert!(strikes > 0);
    }
}
