//! The set of clouds over the farm

use slotmap::{new_key_type, SlotMap};

use farmfx_core::{Canvas, FrameContext, SimRng, SimState, Vec3, WeatherState};

use crate::cloud::{altitude_band, LightningStrike, WeatherCloud};

new_key_type! {
    /// Handle to a cloud in the [`Sky`]
    pub struct CloudKey;
}

/// Owns every weather cloud and drives them as a group
#[derive(Default)]
pub struct Sky {
    clouds: SlotMap<CloudKey, WeatherCloud>,
}

impl Sky {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `count` clouds at random spots inside the wrap bounds
    pub fn populate(
        &mut self,
        count: usize,
        weather: WeatherState,
        ctx: &FrameContext,
        sim: &SimState,
        rng: &mut SimRng,
    ) {
        let bound = (ctx.width / 2.0 - sim.box_len).max(0.0);
        let (floor, _) = altitude_band(ctx, sim);
        for _ in 0..count {
            let position = Vec3::new(rng.range(-bound, bound), floor, rng.range(-bound, bound));
            self.add(WeatherCloud::new(position, weather, sim, rng));
        }
        log::debug!("Sky populated with {} clouds ({})", count, weather);
    }

    pub fn add(&mut self, cloud: WeatherCloud) -> CloudKey {
        self.clouds.insert(cloud)
    }

    pub fn remove(&mut self, key: CloudKey) -> Option<WeatherCloud> {
        self.clouds.remove(key)
    }

    pub fn get(&self, key: CloudKey) -> Option<&WeatherCloud> {
        self.clouds.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CloudKey, &WeatherCloud)> {
        self.clouds.iter()
    }

    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }

    /// Fade every cloud towards `weather` and move it one frame
    ///
    /// Returns the lightning strikes that landed this frame.
    pub fn update(
        &mut self,
        weather: WeatherState,
        ctx: &FrameContext,
        sim: &mut SimState,
        rng: &mut SimRng,
    ) -> Vec<LightningStrike> {
        let mut strikes = Vec::new();
        for cloud in self.clouds.values_mut() {
            cloud.update(weather, sim);
            strikes.extend(cloud.drift(ctx, sim, rng));
        }
        strikes
    }

    pub fn display(&self, canvas: &mut dyn Canvas, sim: &SimState) {
        for cloud in self.clouds.values() {
            cloud.display(canvas, sim);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmfx_core::{DrawList, Plant};

    fn setup() -> (FrameContext, SimState, SimRng) {
        (
            FrameContext::new(1280.0, 720.0),
            SimState::new().with_box_len(40.0),
            SimRng::from_seed_u64(3),
        )
    }

    #[test]
    fn test_populate_places_clouds_in_bounds() {
        let (ctx, sim, mut rng) = setup();
        let mut sky = Sky::new();
        sky.populate(6, WeatherState::Rainy, &ctx, &sim, &mut rng);
        assert_eq!(sky.len(), 6);
        for (_, cloud) in sky.iter() {
            assert!(cloud.position.x.abs() <= 600.0);
            assert!(cloud.position.z.abs() <= 600.0);
            assert_eq!(cloud.position.y, -180.0);
            assert_eq!(cloud.weather(), WeatherState::Rainy);
        }
    }

    #[test]
    fn test_same_seed_same_sky() {
        let (ctx, sim, _) = setup();
        let mut a = Sky::new();
        let mut b = Sky::new();
        a.populate(3, WeatherState::Sunny, &ctx, &sim, &mut SimRng::from_seed_u64(9));
        b.populate(3, WeatherState::Sunny, &ctx, &sim, &mut SimRng::from_seed_u64(9));
        let pa: Vec<Vec3> = a.iter().map(|(_, c)| c.position).collect();
        let pb: Vec<Vec3> = b.iter().map(|(_, c)| c.position).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_update_retargets_every_cloud() {
        let (ctx, mut sim, mut rng) = setup();
        let mut sky = Sky::new();
        sky.populate(4, WeatherState::Sunny, &ctx, &sim, &mut rng);
        sky.update(WeatherState::Storm, &ctx, &mut sim, &mut rng);
        assert!(sky.iter().all(|(_, c)| c.target_weather() == WeatherState::Storm));
    }

    #[test]
    fn test_storm_eventually_strikes() {
        let (ctx, mut sim, mut rng) = setup();
        let key = sim.garden.add(Plant::new("tomato", Vec3::new(0.0, 144.0, 0.0)));
        let mut sky = Sky::new();
        sky.populate(5, WeatherState::Storm, &ctx, &sim, &mut rng);

        let mut strikes = 0;
        for _ in 0..2000 {
            strikes += sky.update(WeatherState::Storm, &ctx, &mut sim, &mut rng).len();
        }
        assert!(strikes > 0);
        assert_eq!(sim.garden.get(key).unwrap().strike_count as usize, strikes);
    }

    #[test]
    fn test_clear_sky_draws_nothing() {
        let (ctx, sim, mut rng) = setup();
        let mut sky = Sky::new();
        sky.populate(3, WeatherState::Clear, &ctx, &sim, &mut rng);
        let mut list = DrawList::new();
        sky.display(&mut list, &sim);
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove() {
        let (ctx, sim, mut rng) = setup();
        let mut sky = Sky::new();
        let key = sky.add(WeatherCloud::new(Vec3::ZERO, WeatherState::Sunny, &sim, &mut rng));
        sky.populate(1, WeatherState::Sunny, &ctx, &sim, &mut rng);
        assert!(sky.remove(key).is_some());
        assert_eq!(sky.len(), 1);
        assert!(sky.get(key).is_none());
    }
}
