//! Orbit controller for inspecting the farm scene
//!
//! Controls:
//! - Left mouse drag: orbit around the target
//! - Mouse wheel: zoom in/out
//! - Arrow keys: orbit (left/right yaw, up/down pitch)
//! - PageUp/PageDown: zoom

use farmfx_math::Vec3;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Accumulates mouse and keyboard input and applies it to an orbiting camera
pub struct OrbitController {
    // Key state
    yaw_left: bool,
    yaw_right: bool,
    pitch_up: bool,
    pitch_down: bool,
    zoom_in: bool,
    zoom_out: bool,

    // Mouse state
    dragging: bool,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_zoom: f32,

    // Configuration
    pub orbit_speed: f32,
    pub mouse_sensitivity: f32,
    pub zoom_sensitivity: f32,
    pub key_zoom_speed: f32,
    pub invert_pitch: bool,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitController {
    pub fn new() -> Self {
        Self {
            yaw_left: false,
            yaw_right: false,
            pitch_up: false,
            pitch_down: false,
            zoom_in: false,
            zoom_out: false,

            dragging: false,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_zoom: 0.0,

            orbit_speed: 1.5,
            mouse_sensitivity: 0.005,
            zoom_sensitivity: 0.1,
            key_zoom_speed: 1.0,
            invert_pitch: false,
        }
    }

    /// Process keyboard input, returns true if the key was consumed
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::ArrowLeft => { self.yaw_left = pressed; true }
            KeyCode::ArrowRight => { self.yaw_right = pressed; true }
            KeyCode::ArrowUp => { self.pitch_up = pressed; true }
            KeyCode::ArrowDown => { self.pitch_down = pressed; true }
            KeyCode::PageUp => { self.zoom_in = pressed; true }
            KeyCode::PageDown => { self.zoom_out = pressed; true }
            _ => false,
        }
    }

    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.dragging = state == ElementState::Pressed;
        }
    }

    /// Process mouse movement; only counts while dragging
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        if self.dragging {
            self.pending_yaw += delta_x as f32;
            self.pending_pitch += delta_y as f32;
        }
    }

    /// Process wheel input in lines (positive scrolls towards the target)
    pub fn process_scroll(&mut self, lines: f32) {
        self.pending_zoom += lines;
    }

    /// Apply accumulated input to the camera
    ///
    /// Returns the camera eye position.
    pub fn update<C: CameraControl>(&mut self, camera: &mut C, dt: f32) -> Vec3 {
        let key_yaw = (self.yaw_right as i32 - self.yaw_left as i32) as f32;
        let key_pitch = (self.pitch_up as i32 - self.pitch_down as i32) as f32;
        let key_zoom = (self.zoom_in as i32 - self.zoom_out as i32) as f32;

        let pitch_sign = if self.invert_pitch { -1.0 } else { 1.0 };
        let yaw = key_yaw * self.orbit_speed * dt + self.pending_yaw * self.mouse_sensitivity;
        let pitch = (key_pitch * self.orbit_speed * dt + self.pending_pitch * self.mouse_sensitivity) * pitch_sign;
        if yaw != 0.0 || pitch != 0.0 {
            camera.orbit(yaw, pitch);
        }

        let zoom = self.pending_zoom * self.zoom_sensitivity + key_zoom * self.key_zoom_speed * dt;
        if zoom != 0.0 {
            // Positive zoom shrinks the distance
            camera.zoom((-zoom).exp());
        }

        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
        self.pending_zoom = 0.0;

        camera.eye()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Check if any orbit or zoom keys are held
    pub fn is_moving(&self) -> bool {
        self.yaw_left || self.yaw_right || self.pitch_up || self.pitch_down
            || self.zoom_in || self.zoom_out
    }

    /// Builder: set keyboard orbit speed (radians per second)
    pub fn with_orbit_speed(mut self, speed: f32) -> Self {
        self.orbit_speed = speed;
        self
    }

    /// Builder: set mouse sensitivity (radians per pixel)
    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    /// Builder: set zoom per wheel line
    pub fn with_zoom_sensitivity(mut self, sensitivity: f32) -> Self {
        self.zoom_sensitivity = sensitivity;
        self
    }

    /// Builder: invert vertical orbit
    pub fn with_invert_pitch(mut self, invert: bool) -> Self {
        self.invert_pitch = invert;
        self
    }
}

/// Trait for camera control
/// Allows the controller to drive any orbiting camera
pub trait CameraControl {
    /// Rotate around the target (radians)
    fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32);
    /// Multiply the distance to the target by `factor`
    fn zoom(&mut self, factor: f32);
    fn eye(&self) -> Vec3;
}
