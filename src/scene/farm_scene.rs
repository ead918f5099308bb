//! The running farm scene
//!
//! Bundles the simulation state with the effects that read it and steps
//! them once per frame.

use farmfx_core::{Canvas, FrameContext, SimRng, SimState, WeatherState};
use farmfx_effects::{farmland, EffectorRenderer, LightningStrike, Sky};

/// Slowest and fastest sim speed reachable with speed up/down
pub const MIN_SIM_SPEED: f32 = 0.125;
pub const MAX_SIM_SPEED: f32 = 8.0;

/// Simulation state plus every effect drawn from it
pub struct FarmScene {
    pub ctx: FrameContext,
    pub sim: SimState,
    pub sky: Sky,
    pub effectors: EffectorRenderer,
    pub rng: SimRng,
    weather: WeatherState,
    /// Speed to restore when unpausing
    paused_speed: Option<f32>,
}

impl FarmScene {
    pub fn new(ctx: FrameContext, sim: SimState, weather: WeatherState, rng: SimRng) -> Self {
        let effectors = EffectorRenderer::new(&ctx);
        Self {
            ctx,
            sim,
            sky: Sky::new(),
            effectors,
            rng,
            weather,
            paused_speed: None,
        }
    }

    pub fn weather(&self) -> WeatherState {
        self.weather
    }

    pub fn set_weather(&mut self, weather: WeatherState) {
        if weather != self.weather {
            log::info!("Weather: {} -> {}", self.weather, weather);
            self.weather = weather;
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_speed.is_some()
    }

    /// Pause by zeroing the sim speed, or restore the speed it had
    pub fn toggle_pause(&mut self) -> bool {
        match self.paused_speed.take() {
            Some(speed) => {
                self.sim.sim_speed = speed;
                log::info!("Resumed at speed x{}", speed);
            }
            None => {
                self.paused_speed = Some(self.sim.sim_speed);
                self.sim.sim_speed = 0.0;
                log::info!("Paused");
            }
        }
        self.is_paused()
    }

    /// Multiply the sim speed by `factor`, within the speed limits
    ///
    /// While paused the stored speed changes instead.
    pub fn scale_speed(&mut self, factor: f32) -> f32 {
        let target = match self.paused_speed.as_mut() {
            Some(speed) => speed,
            None => &mut self.sim.sim_speed,
        };
        *target = (*target * factor).clamp(MIN_SIM_SPEED, MAX_SIM_SPEED);
        log::info!("Sim speed x{}", *target);
        *target
    }

    /// Toggle a device, returns its new state
    pub fn toggle_device(&mut self, index: usize) -> bool {
        let on = self.sim.toggle_device(index);
        log::info!("Device {} {}", index, if on { "on" } else { "off" });
        on
    }

    /// Advance every effect by one frame
    ///
    /// Returns the lightning strikes of this frame.
    pub fn step(&mut self) -> Vec<LightningStrike> {
        self.effectors.update(&self.sim);
        let strikes = self.sky.update(self.weather, &self.ctx, &mut self.sim, &mut self.rng);
        self.ctx.advance();
        strikes
    }

    /// Draw farmland, clouds and device props
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        farmland::display(canvas, &self.ctx, &self.sim);
        self.sky.display(canvas, &self.sim);
        self.effectors.display(canvas, &self.ctx);
    }

    /// Count of plants hit by lightning at least once
    pub fn struck_plants(&self) -> usize {
        self.sim.garden.iter().filter(|(_, p)| p.strike_count > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmfx_core::{DrawList, Plant, Vec3};

    fn scene() -> FarmScene {
        FarmScene::new(
            FrameContext::new(1280.0, 720.0),
            SimState::new(),
            WeatherState::Sunny,
            SimRng::from_seed_u64(1),
        )
    }

    #[test]
    fn test_pause_restores_speed() {
        let mut s = scene();
        s.sim.sim_speed = 2.0;
        assert!(s.toggle_pause());
        assert_eq!(s.sim.sim_speed, 0.0);
        assert!(!s.toggle_pause());
        assert_eq!(s.sim.sim_speed, 2.0);
    }

    #[test]
    fn test_speed_changes_while_paused() {
        let mut s = scene();
        s.toggle_pause();
        assert_eq!(s.scale_speed(2.0), 2.0);
        assert_eq!(s.sim.sim_speed, 0.0);
        s.toggle_pause();
        assert_eq!(s.sim.sim_speed, 2.0);
    }

    #[test]
    fn test_speed_limits() {
        let mut s = scene();
        for _ in 0..10 {
            s.scale_speed(2.0);
        }
        assert_eq!(s.sim.sim_speed, MAX_SIM_SPEED);
        for _ in 0..10 {
            s.scale_speed(0.5);
        }
        assert_eq!(s.sim.sim_speed, MIN_SIM_SPEED);
    }

    #[test]
    fn test_step_advances_frame_and_mirrors_devices() {
        let mut s = scene();
        s.toggle_device(1);
        s.step();
        assert_eq!(s.ctx.frame_count, 1);
        assert!(s.effectors.temp);
    }

    #[test]
    fn test_draw_includes_active_props() {
        let mut s = scene();
        let mut list = DrawList::new();
        s.draw(&mut list);
        let bare = list.len();

        s.toggle_device(0);
        s.step();
        list.clear();
        s.draw(&mut list);
        assert!(list.len() > bare);
        assert_eq!(list.depth(), 0);
    }

    #[test]
    fn test_struck_plants_counts_each_plant_once() {
        let mut s = scene();
        let a = s.sim.garden.add(Plant::new("a", Vec3::new(0.0, 144.0, 0.0)));
        s.sim.garden.add(Plant::new("b", Vec3::new(50.0, 144.0, 0.0)));
        assert_eq!(s.struck_plants(), 0);

        let plant = s.sim.garden.get_mut(a).unwrap();
        plant.struck_by_lightning(10.0);
        plant.struck_by_lightning(12.0);
        assert_eq!(s.struck_plants(), 1);
    }

    #[test]
    fn test_set_weather() {
        let mut s = scene();
        s.set_weather(WeatherState::Flood);
        assert_eq!(s.weather(), WeatherState::Flood);
    }
}
