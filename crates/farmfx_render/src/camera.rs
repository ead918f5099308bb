//! Orbit camera for the farm scene
//!
//! Scene units follow screen conventions: +Y points down, so the sky is at
//! negative Y and "up" for the camera is -Y. Positive pitch raises the eye
//! above the target.

use std::f32::consts::FRAC_PI_2;

use farmfx_input::CameraControl;
use farmfx_math::{mat4, Mat4, Vec3};

const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.05;

/// Camera orbiting a target point
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    /// Rotation around the vertical axis (radians)
    pub yaw: f32,
    /// Elevation above the target (radians)
    pub pitch: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    home: (Vec3, f32, f32, f32),
}

impl OrbitCamera {
    pub fn new(target: Vec3, distance: f32, yaw: f32, pitch: f32) -> Self {
        let pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        Self {
            target,
            distance,
            yaw,
            pitch,
            min_distance: 50.0,
            max_distance: 5000.0,
            home: (target, distance, yaw, pitch),
        }
    }

    /// Builder: set zoom limits
    pub fn with_distance_limits(mut self, min: f32, max: f32) -> Self {
        self.min_distance = min.max(1.0);
        self.max_distance = max.max(self.min_distance);
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
        self.home.1 = self.distance;
        self
    }

    /// Eye position in scene units
    pub fn eye(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        self.target
            + Vec3::new(
                horizontal * self.yaw.sin(),
                -self.distance * self.pitch.sin(),
                horizontal * self.yaw.cos(),
            )
    }

    /// Up vector of the camera
    pub fn up(&self) -> Vec3 {
        -Vec3::Y
    }

    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.eye(), self.target, self.up())
    }

    /// Restore the position the camera was created with
    pub fn reset(&mut self) {
        let (target, distance, yaw, pitch) = self.home;
        self.target = target;
        self.distance = distance;
        self.yaw = yaw;
        self.pitch = pitch;
    }
}

impl CameraControl for OrbitCamera {
    fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw = (self.yaw + delta_yaw) % std::f32::consts::TAU;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    fn zoom(&mut self, factor: f32) {
        if factor > 0.0 {
            self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
        }
    }

    fn eye(&self) -> Vec3 {
        OrbitCamera::eye(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_eye_at_zero_angles() {
        let cam = OrbitCamera::new(Vec3::ZERO, 100.0, 0.0, 0.0);
        assert!(approx(cam.eye(), Vec3::new(0.0, 0.0, 100.0)));
    }

    #[test]
    fn test_positive_pitch_is_above() {
        let cam = OrbitCamera::new(Vec3::ZERO, 100.0, 0.0, 0.5);
        assert!(cam.eye().y < 0.0);
        assert!((cam.eye().length() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut cam = OrbitCamera::new(Vec3::ZERO, 100.0, 0.0, 0.0);
        cam.orbit(0.0, 10.0);
        assert_eq!(cam.pitch, PITCH_LIMIT);
        cam.orbit(0.0, -20.0);
        assert_eq!(cam.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn test_zoom_limits() {
        let mut cam = OrbitCamera::new(Vec3::ZERO, 100.0, 0.0, 0.0).with_distance_limits(80.0, 200.0);
        cam.zoom(0.1);
        assert_eq!(cam.distance, 80.0);
        cam.zoom(10.0);
        assert_eq!(cam.distance, 200.0);
        cam.zoom(-1.0);
        assert_eq!(cam.distance, 200.0);
    }

    #[test]
    fn test_reset() {
        let mut cam = OrbitCamera::new(Vec3::new(0.0, 50.0, 0.0), 300.0, 0.2, 0.3);
        let home = cam.clone();
        cam.orbit(1.0, 0.5);
        cam.zoom(2.0);
        cam.target = Vec3::ZERO;
        cam.reset();
        assert_eq!(cam, home);
    }

    #[test]
    fn test_view_matrix_moves_target_in_front() {
        let cam = OrbitCamera::new(Vec3::new(10.0, 20.0, 30.0), 100.0, 0.7, 0.4);
        let v = mat4::transform_point(cam.view_matrix(), cam.target);
        // Right-handed view space looks down -Z
        assert!(v.z < 0.0);
        assert!((v.z + 100.0).abs() < 1e-2);
        assert!(v.x.abs() < 1e-3 && v.y.abs() < 1e-3);
    }
}
