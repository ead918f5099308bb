//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`FARMFX_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use farmfx_core::{WeatherState, DEVICE_COUNT};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Simulation state configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Cloud configuration
    #[serde(default)]
    pub sky: SkyConfig,
    /// Garden configuration
    #[serde(default)]
    pub garden: GardenConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`FARMFX_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // FARMFX_SKY__CLOUD_COUNT=3 -> sky.cloud_count = 3
        figment = figment.merge(Env::prefixed("FARMFX_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sim = &self.simulation;
        if sim.sim_speed < 0.0 {
            return Err(ConfigError::invalid("simulation.sim_speed must not be negative"));
        }
        if sim.canvas_width <= 0.0 || sim.canvas_height <= 0.0 {
            return Err(ConfigError::invalid("simulation canvas size must be positive"));
        }
        if sim.devices.len() > DEVICE_COUNT {
            return Err(ConfigError::invalid(format!(
                "simulation.devices lists {} devices, at most {} are known",
                sim.devices.len(),
                DEVICE_COUNT
            )));
        }
        if self.camera.min_distance > self.camera.max_distance {
            return Err(ConfigError::invalid("camera.min_distance exceeds camera.max_distance"));
        }
        Ok(())
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "farmfx - Farm Weather Effects".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Point the camera orbits [x, y, z]
    pub target: [f32; 3],
    /// Starting distance from the target
    pub distance: f32,
    /// Starting yaw in degrees
    pub yaw: f32,
    /// Starting elevation in degrees
    pub pitch: f32,
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Closest zoom
    pub min_distance: f32,
    /// Farthest zoom
    pub max_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            target: [0.0, 0.0, 0.0],
            distance: 900.0,
            yaw: 0.0,
            pitch: 15.0,
            fov: 60.0,
            near: 1.0,
            far: 10_000.0,
            min_distance: 100.0,
            max_distance: 4000.0,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Keyboard orbit speed (radians per second)
    pub orbit_speed: f32,
    /// Mouse drag sensitivity (radians per pixel)
    pub mouse_sensitivity: f32,
    /// Zoom per wheel line
    pub zoom_sensitivity: f32,
    /// Invert vertical orbit
    pub invert_pitch: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            orbit_speed: 1.5,
            mouse_sensitivity: 0.005,
            zoom_sensitivity: 0.1,
            invert_pitch: false,
        }
    }
}

/// Simulation state configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Frame scale factor (0 pauses the effects)
    pub sim_speed: f32,
    /// Seed for cloud placement, drift, rain and lightning
    pub seed: u64,
    /// Weather at startup
    pub initial_weather: WeatherState,
    /// Device states at startup, by index (light, temperature, soil moisture, humidity)
    pub devices: Vec<bool>,
    /// Farmland half size
    pub box_len: f32,
    /// Scene width the effects lay themselves out in
    pub canvas_width: f32,
    /// Scene height the effects lay themselves out in
    pub canvas_height: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sim_speed: 1.0,
            seed: farmfx_core::DEFAULT_SEED,
            initial_weather: WeatherState::Sunny,
            devices: vec![false; DEVICE_COUNT],
            box_len: 200.0,
            canvas_width: 1280.0,
            canvas_height: 720.0,
        }
    }
}

/// Cloud configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkyConfig {
    /// Number of clouds spawned at startup
    pub cloud_count: usize,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self { cloud_count: 4 }
    }
}

/// Garden configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GardenConfig {
    /// RON layout file; falls back to a grid when missing or unreadable
    pub layout_path: Option<String>,
    /// Fallback grid rows
    pub rows: usize,
    /// Fallback grid columns
    pub cols: usize,
    /// Fallback grid spacing
    pub spacing: f32,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            layout_path: Some("scenes/garden.ron".to_string()),
            rows: 3,
            cols: 4,
            spacing: 80.0,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Direction towards the light [x, y, z]
    pub light_dir: [f32; 3],
    /// Ambient light strength
    pub ambient_strength: f32,
    /// Diffuse light strength
    pub diffuse_strength: f32,
    /// Specular highlight strength
    pub specular_strength: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.53, 0.75, 0.92, 1.0],
            light_dir: [0.3, -1.0, 0.5],
            ambient_strength: 0.4,
            diffuse_strength: 0.6,
            specular_strength: 0.5,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Show weather, speed and device state in the window title
    pub title_stats: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            title_stats: true,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        ConfigError {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
