//! Integration tests for the weather pipeline
//!
//! These tests drive a whole sky over a planted garden the way the app
//! does each frame:
//! 1. Clouds fade towards the requested weather
//! 2. Storms strike plants and record the hits
//! 3. Everything draws into a balanced draw list

use farmfx_core::{
    DrawList, FrameContext, GardenLayout, SimRng, SimState, WeatherState,
};
use farmfx_effects::{altitude_band, farmland, EffectorRenderer, Sky};

fn planted_sim(ctx: &FrameContext) -> SimState {
    let layout = GardenLayout::grid(3, 3, 60.0, ctx.ground_y());
    SimState::new().with_garden(layout.to_garden())
}

fn run(
    sky: &mut Sky,
    weather: WeatherState,
    ctx: &mut FrameContext,
    sim: &mut SimState,
    rng: &mut SimRng,
    frames: usize,
) -> usize {
    let mut strikes = 0;
    for _ in 0..frames {
        strikes += sky.update(weather, ctx, sim, rng).len();
        ctx.advance();
    }
    strikes
}

// ==================== Storm Tests ====================

#[test]
fn test_storm_strikes_record_on_plants() {
    let mut ctx = FrameContext::new(1280.0, 720.0);
    let mut sim = planted_sim(&ctx);
    let mut rng = SimRng::from_seed_u64(11);
    let mut sky = Sky::new();
    sky.populate(3, WeatherState::Storm, &ctx, &sim, &mut rng);

    let strikes = run(&mut sky, WeatherState::Storm, &mut ctx, &mut sim, &mut rng, 4000);
    assert!(strikes > 0, "A long storm should land at least one strike");

    let recorded: u32 = sim.garden.iter().map(|(_, p)| p.strike_count).sum();
    assert_eq!(recorded as usize, strikes, "Every strike with a garden hits a plant");

    for (_, plant) in sim.garden.iter() {
        if plant.strike_count > 0 {
            assert!(plant.last_strike_distance.is_some());
        }
    }
}

#[test]
fn test_clear_sky_never_strikes() {
    let mut ctx = FrameContext::new(1280.0, 720.0);
    let mut sim = planted_sim(&ctx);
    let mut rng = SimRng::from_seed_u64(3);
    let mut sky = Sky::new();
    sky.populate(4, WeatherState::Clear, &ctx, &sim, &mut rng);

    let strikes = run(&mut sky, WeatherState::Clear, &mut ctx, &mut sim, &mut rng, 500);
    assert_eq!(strikes, 0);
    for (_, cloud) in sky.iter() {
        assert!(cloud.bolts().is_empty());
        assert!(cloud.raindrops().is_empty());
    }
}

#[test]
fn test_paused_sky_stays_put() {
    let mut ctx = FrameContext::new(1280.0, 720.0);
    let mut sim = planted_sim(&ctx).with_sim_speed(0.0);
    let mut rng = SimRng::from_seed_u64(5);
    let mut sky = Sky::new();
    sky.populate(2, WeatherState::Storm, &ctx, &sim, &mut rng);
    let before: Vec<_> = sky.iter().map(|(_, c)| c.position).collect();

    let strikes = run(&mut sky, WeatherState::Storm, &mut ctx, &mut sim, &mut rng, 200);
    let after: Vec<_> = sky.iter().map(|(_, c)| c.position).collect();
    assert_eq!(strikes, 0);
    assert_eq!(before, after);
}

// ==================== Weather Change Tests ====================

#[test]
fn test_clouds_follow_weather_change() {
    let mut ctx = FrameContext::new(1280.0, 720.0);
    let mut sim = planted_sim(&ctx);
    let mut rng = SimRng::from_seed_u64(8);
    let mut sky = Sky::new();
    sky.populate(2, WeatherState::Sunny, &ctx, &sim, &mut rng);

    run(&mut sky, WeatherState::Flood, &mut ctx, &mut sim, &mut rng, 300);
    for (_, cloud) in sky.iter() {
        assert_eq!(cloud.target_weather(), WeatherState::Flood);
        assert_eq!(cloud.weather(), WeatherState::Flood);
        assert!(cloud.raindrops().len() <= farmfx_effects::cloud::MAX_RAINDROPS);
    }
}

#[test]
fn test_clouds_stay_in_altitude_band() {
    let mut ctx = FrameContext::new(1280.0, 720.0);
    let mut sim = planted_sim(&ctx);
    let mut rng = SimRng::from_seed_u64(21);
    let mut sky = Sky::new();
    sky.populate(4, WeatherState::Storm, &ctx, &sim, &mut rng);

    let (floor, ceiling) = altitude_band(&ctx, &sim);
    for _ in 0..1000 {
        sky.update(WeatherState::Storm, &ctx, &mut sim, &mut rng);
        ctx.advance();
        for (_, cloud) in sky.iter() {
            if ceiling > floor {
                assert_eq!(cloud.position.y, floor);
            } else {
                assert!(cloud.position.y <= floor && cloud.position.y >= ceiling);
            }
        }
    }
}

// ==================== Drawing Tests ====================

#[test]
fn test_full_frame_draws_balanced() {
    let mut ctx = FrameContext::new(1280.0, 720.0);
    let mut sim = planted_sim(&ctx).with_devices(&[true, true, true, true]);
    let mut rng = SimRng::from_seed_u64(2);
    let mut sky = Sky::new();
    sky.populate(3, WeatherState::Rainy, &ctx, &sim, &mut rng);
    let mut effectors = EffectorRenderer::new(&ctx);

    for _ in 0..30 {
        effectors.update(&sim);
        sky.update(WeatherState::Rainy, &ctx, &mut sim, &mut rng);
        ctx.advance();
    }

    let mut list = DrawList::new();
    farmland::display(&mut list, &ctx, &sim);
    sky.display(&mut list, &sim);
    effectors.display(&mut list, &ctx);

    assert!(effectors.any_active());
    assert!(!list.is_empty());
    assert_eq!(list.depth(), 0, "Every push has a matching pop");
}
