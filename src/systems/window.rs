//! Window management system
//!
//! Handles window creation, fullscreen toggle, and title updates.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use farmfx_core::{WeatherState, DEVICE_COUNT};
use crate::config::WindowConfig;

/// Device labels shown in the title, indexed like the device toggles
const DEVICE_LABELS: [&str; DEVICE_COUNT] = ["lamp", "heater", "water", "dehum"];

/// Snapshot of the simulation shown in the window title
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleStatus<'a> {
    pub weather: WeatherState,
    pub speed: f32,
    pub paused: bool,
    pub devices: &'a [bool],
    pub strikes: u64,
}

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Update window title with weather and device state
    pub fn update_title(&self, status: &TitleStatus<'_>) {
        self.window.set_title(&format_title(&self.base_title, status));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Build the title line, e.g. `Farm - storm x2 [lamp heater] strikes:3`
pub fn format_title(base: &str, status: &TitleStatus<'_>) -> String {
    let active: Vec<&str> = DEVICE_LABELS
        .iter()
        .zip(status.devices)
        .filter(|(_, on)| **on)
        .map(|(label, _)| *label)
        .collect();

    let speed = if status.paused {
        "paused".to_string()
    } else {
        format!("x{}", status.speed)
    };

    format!(
        "{} - {} {} [{}] strikes:{}",
        base,
        status.weather,
        speed,
        active.join(" "),
        status.strikes
    )
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
