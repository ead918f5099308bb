//! SceneBuilder - Declarative farm scene construction
//!
//! Provides a fluent API for assembling the simulation state, garden and sky.

use std::path::Path;

use farmfx_core::{FrameContext, Garden, GardenLayout, SimRng, SimState, WeatherState};

use super::FarmScene;
use crate::config::AppConfig;

/// Builder for constructing farm scenes
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new(FrameContext::new(1280.0, 720.0))
///     .with_seed(7)
///     .with_weather(WeatherState::Storm)
///     .with_garden_grid(3, 4, 80.0)
///     .with_clouds(4)
///     .build();
/// ```
pub struct SceneBuilder {
    ctx: FrameContext,
    sim: SimState,
    weather: WeatherState,
    seed: u64,
    cloud_count: usize,
}

impl SceneBuilder {
    /// Create a new scene builder
    pub fn new(ctx: FrameContext) -> Self {
        Self {
            ctx,
            sim: SimState::new(),
            weather: WeatherState::default(),
            seed: farmfx_core::DEFAULT_SEED,
            cloud_count: 0,
        }
    }

    /// Create a builder with every setting taken from the app config
    ///
    /// The garden comes from the configured layout file, or a grid when the
    /// file is missing or unreadable.
    pub fn from_config(config: &AppConfig) -> Self {
        let sim = &config.simulation;
        let ctx = FrameContext::new(sim.canvas_width, sim.canvas_height);
        let mut builder = Self::new(ctx)
            .with_seed(sim.seed)
            .with_sim_speed(sim.sim_speed)
            .with_box_len(sim.box_len)
            .with_devices(&sim.devices)
            .with_weather(sim.initial_weather)
            .with_clouds(config.sky.cloud_count);

        let garden = &config.garden;
        let layout = garden.layout_path.as_deref().and_then(load_layout);
        builder = match layout {
            Some(layout) => builder.with_layout(&layout),
            None => builder.with_garden_grid(garden.rows, garden.cols, garden.spacing),
        };
        builder
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_sim_speed(mut self, speed: f32) -> Self {
        self.sim = self.sim.with_sim_speed(speed);
        self
    }

    pub fn with_box_len(mut self, box_len: f32) -> Self {
        self.sim = self.sim.with_box_len(box_len);
        self
    }

    pub fn with_devices(mut self, states: &[bool]) -> Self {
        self.sim = self.sim.with_devices(states);
        self
    }

    pub fn with_weather(mut self, weather: WeatherState) -> Self {
        self.weather = weather;
        self
    }

    /// Number of clouds spawned by [`Self::build`]
    pub fn with_clouds(mut self, count: usize) -> Self {
        self.cloud_count = count;
        self
    }

    pub fn with_garden(mut self, garden: Garden) -> Self {
        self.sim = self.sim.with_garden(garden);
        self
    }

    /// Plant a layout; its `box_len`, when set, overrides the current one
    pub fn with_layout(mut self, layout: &GardenLayout) -> Self {
        if let Some(box_len) = layout.box_len {
            self.sim = self.sim.with_box_len(box_len);
        }
        log::info!("Planted layout '{}' ({} plants)", layout.name, layout.plants.len());
        self.with_garden(layout.to_garden())
    }

    /// Plant a centered grid on the ground plane
    pub fn with_garden_grid(self, rows: usize, cols: usize, spacing: f32) -> Self {
        let layout = GardenLayout::grid(rows, cols, spacing, self.ctx.ground_y());
        self.with_garden(layout.to_garden())
    }

    /// Build the scene and populate the sky
    pub fn build(self) -> FarmScene {
        let rng = SimRng::from_seed_u64(self.seed);
        let mut scene = FarmScene::new(self.ctx, self.sim, self.weather, rng);
        let FarmScene { sky, ctx, sim, rng, .. } = &mut scene;
        sky.populate(self.cloud_count, self.weather, ctx, sim, rng);
        scene
    }
}

fn load_layout(path: &str) -> Option<GardenLayout> {
    if !Path::new(path).exists() {
        log::warn!("Garden layout '{}' not found, planting a grid", path);
        return None;
    }
    match GardenLayout::load(path) {
        Ok(layout) => Some(layout),
        Err(e) => {
            log::warn!("Failed to load garden layout '{}': {}. Planting a grid", path, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> FrameContext {
        FrameContext::new(1280.0, 720.0)
    }

    #[test]
    fn test_builder_defaults() {
        let scene = SceneBuilder::new(ctx()).build();
        assert!(scene.sky.is_empty());
        assert!(scene.sim.garden.is_empty());
        assert_eq!(scene.weather(), WeatherState::Sunny);
    }

    #[test]
    fn test_builder_populates_sky_and_garden() {
        let scene = SceneBuilder::new(ctx())
            .with_weather(WeatherState::Rainy)
            .with_clouds(3)
            .with_garden_grid(2, 2, 50.0)
            .with_devices(&[true])
            .build();
        assert_eq!(scene.sky.len(), 3);
        assert_eq!(scene.sim.garden.len(), 4);
        assert!(scene.sim.device(0));
        for (_, plant) in scene.sim.garden.iter() {
            assert_eq!(plant.position.y, 144.0);
        }
    }

    #[test]
    fn test_layout_overrides_box_len() {
        let mut layout = GardenLayout::new("plot");
        layout.box_len = Some(120.0);
        let scene = SceneBuilder::new(ctx()).with_box_len(300.0).with_layout(&layout).build();
        assert_eq!(scene.sim.box_len, 120.0);
    }

    #[test]
    fn test_from_config_falls_back_to_grid() {
        let mut config = AppConfig::default();
        config.garden.layout_path = Some("does/not/exist.ron".to_string());
        config.garden.rows = 2;
        config.garden.cols = 3;
        let scene = SceneBuilder::from_config(&config).build();
        assert_eq!(scene.sim.garden.len(), 6);
        assert_eq!(scene.sky.len(), config.sky.cloud_count);
    }

    #[test]
    fn test_same_seed_same_scene() {
        let a = SceneBuilder::new(ctx()).with_seed(5).with_clouds(2).build();
        let b = SceneBuilder::new(ctx()).with_seed(5).with_clouds(2).build();
        let pa: Vec<_> = a.sky.iter().map(|(_, c)| c.position).collect();
        let pb: Vec<_> = b.sky.iter().map(|(_, c)| c.position).collect();
        assert_eq!(pa, pb);
    }
}
