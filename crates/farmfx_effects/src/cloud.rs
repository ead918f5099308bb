//! Drifting weather cloud with rain and lightning
//!
//! A cloud is a cluster of translucent puff spheres. Each frame the driver
//! calls [`WeatherCloud::update`] with the weather the simulation wants, then
//! [`WeatherCloud::drift`] to move it, then [`WeatherCloud::display`]. State
//! changes never snap: opacities and tint ease towards the target, and the
//! visible weather only switches once the cloud has fully faded in or out.
//!
//! All rates are per frame and scale with `SimState::sim_speed`.

use farmfx_core::{
    Canvas, Color, FrameContext, PlantKey, SimRng, SimState, Vec3, WeatherState,
};
use farmfx_math::{constrain, map_range};

/// Cloud radius in scene units
pub const CLOUD_SIZE: f32 = 80.0;
/// Number of puff spheres per cloud
pub const PUFF_COUNT: usize = 8;
/// Puff offset spread, in multiples of the cloud size
pub const PUFF_SPREAD: f32 = 1.5;
/// Maximum raindrops a cloud keeps alive
pub const MAX_RAINDROPS: usize = 10;
/// Distance from the wrap edge over which a cloud fades out
pub const BOUNDARY_FADE_MARGIN: f32 = 100.0;
/// Bolt life that maps to a fully opaque bolt
pub const BOLT_FULL_LIFE: f32 = 15.0;

const FADE_STEP: f32 = 0.02;
const BOLT_FADE_STEP: f32 = 0.03;
const COLOR_LERP: f32 = 0.05;
const LIGHTNING_CHANCE: f32 = 0.002;
const BASE_COLOR: Color = Color::rgba(255.0, 255.0, 255.0, 100.0);
const BOLT_COLOR: Color = Color::rgb(255.0, 255.0, 180.0);
const RAIN_COLOR: Color = Color::rgb(100.0, 150.0, 255.0);

/// One sphere of the cloud cluster
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Puff {
    /// Offset from the cloud center, in multiples of the cloud size
    pub offset: Vec3,
    /// Radius multiplier
    pub scale: f32,
}

/// A lightning bolt as a zigzag of points below the cloud
#[derive(Clone, Debug, PartialEq)]
pub struct Bolt {
    pub segments: Vec<Vec3>,
    /// Frames left, scaled by sim speed
    pub life: f32,
}

/// A falling rain particle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Raindrop {
    pub position: Vec3,
    pub speed: f32,
}

/// A plant hit by lightning this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightningStrike {
    /// Where the bolt reached the ground
    pub point: Vec3,
    /// Nearest plant and its ground distance from the strike point
    pub target: Option<(PlantKey, f32)>,
}

/// A drifting cloud reflecting the current weather
pub struct WeatherCloud {
    pub position: Vec3,
    pub velocity: Vec3,
    weather: WeatherState,
    target: WeatherState,
    puffs: Vec<Puff>,
    bolts: Vec<Bolt>,
    raindrops: Vec<Raindrop>,
    cloud_opacity: f32,
    rain_opacity: f32,
    bolt_opacity: f32,
    boundary_fade: f32,
    current_color: Color,
    target_color: Color,
}

impl WeatherCloud {
    /// Create a cloud already showing `weather`
    pub fn new(position: Vec3, weather: WeatherState, sim: &SimState, rng: &mut SimRng) -> Self {
        let speed = sim.sim_speed;
        let velocity = Vec3::new(
            rng.range(-3.0, 3.0) * speed,
            rng.range(-0.5, 0.5) * speed,
            rng.range(-3.0, 3.0) * speed,
        );

        let mut cloud = Self {
            position,
            velocity,
            weather,
            target: weather,
            puffs: Vec::with_capacity(PUFF_COUNT),
            bolts: Vec::new(),
            raindrops: Vec::with_capacity(MAX_RAINDROPS),
            cloud_opacity: if weather == WeatherState::Clear { 0.0 } else { 1.0 },
            rain_opacity: 0.0,
            bolt_opacity: 0.0,
            boundary_fade: 1.0,
            current_color: BASE_COLOR,
            target_color: weather.cloud_color(),
        };
        cloud.generate_puffs(rng);
        cloud
    }

    fn generate_puffs(&mut self, rng: &mut SimRng) {
        for _ in 0..PUFF_COUNT {
            self.puffs.push(Puff {
                offset: Vec3::new(
                    (rng.unit() - 0.5) * PUFF_SPREAD,
                    (rng.unit() - 0.5) * PUFF_SPREAD * 0.6,
                    (rng.unit() - 0.5) * PUFF_SPREAD,
                ),
                scale: 0.5 + rng.unit() * 0.8,
            });
        }
    }

    /// Weather currently shown (switches once a fade completes)
    pub fn weather(&self) -> WeatherState {
        self.weather
    }

    /// Weather the cloud is fading towards
    pub fn target_weather(&self) -> WeatherState {
        self.target
    }

    pub fn cloud_opacity(&self) -> f32 {
        self.cloud_opacity
    }

    pub fn rain_opacity(&self) -> f32 {
        self.rain_opacity
    }

    pub fn bolt_opacity(&self) -> f32 {
        self.bolt_opacity
    }

    /// Fade applied near the wrap edges (1 = fully visible)
    pub fn boundary_fade(&self) -> f32 {
        self.boundary_fade
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn puffs(&self) -> &[Puff] {
        &self.puffs
    }

    pub fn bolts(&self) -> &[Bolt] {
        &self.bolts
    }

    pub fn raindrops(&self) -> &[Raindrop] {
        &self.raindrops
    }

    /// Whether anything of the cloud would be drawn
    pub fn is_visible(&self) -> bool {
        self.cloud_opacity > 0.0
    }

    /// Point under the cloud where bolts start
    fn base(&self) -> Vec3 {
        Vec3::new(self.position.x, self.position.y + CLOUD_SIZE * 0.6, self.position.z)
    }

    /// Ease opacities and tint towards `new_state`
    pub fn update(&mut self, new_state: WeatherState, sim: &SimState) {
        if new_state != self.target {
            log::debug!("Cloud retargeting {} -> {}", self.target, new_state);
        }
        self.target = new_state;
        self.target_color = new_state.cloud_color();

        let speed = sim.sim_speed;
        let fade_step = FADE_STEP * speed;
        let bolt_step = BOLT_FADE_STEP * speed;

        if self.target == WeatherState::Clear {
            self.cloud_opacity = (self.cloud_opacity - fade_step).max(0.0);
            self.rain_opacity = (self.rain_opacity - fade_step).max(0.0);
            self.bolt_opacity = (self.bolt_opacity - bolt_step).max(0.0);
        } else {
            self.cloud_opacity = (self.cloud_opacity + fade_step).min(1.0);
            self.rain_opacity = (self.rain_opacity + fade_step).min(1.0);
            if self.target == WeatherState::Storm {
                self.bolt_opacity = (self.bolt_opacity + bolt_step).min(1.0);
            } else {
                self.bolt_opacity = (self.bolt_opacity - bolt_step).max(0.0);
            }
        }

        self.current_color = self.current_color.lerp(self.target_color, (COLOR_LERP * speed).min(1.0));

        if self.cloud_opacity == 0.0 && self.target == WeatherState::Clear {
            if self.weather != WeatherState::Clear {
                log::debug!("Cloud faded out");
            }
            self.weather = WeatherState::Clear;
        } else if self.cloud_opacity == 1.0 && self.weather != self.target {
            log::debug!("Cloud settled on {}", self.target);
            self.weather = self.target;
        }
    }

    /// Move the cloud one frame and advance its rain and bolts
    ///
    /// Returns the strike if lightning hit the ground this frame.
    pub fn drift(
        &mut self,
        ctx: &FrameContext,
        sim: &mut SimState,
        rng: &mut SimRng,
    ) -> Option<LightningStrike> {
        if self.weather == WeatherState::Clear && self.cloud_opacity <= 0.0 {
            return None;
        }

        let speed = sim.sim_speed;
        let storm = self.weather == WeatherState::Storm;

        let jitter = if storm { 0.05 } else { 0.01 } * speed;
        self.velocity.x += rng.range(-jitter, jitter);
        self.velocity.y += rng.range(-jitter * 0.5, jitter * 0.5);
        self.velocity.z += rng.range(-jitter, jitter);

        let (max_xz, max_y) = if storm { (1.2, 0.6) } else { (0.5, 0.2) };
        self.velocity.x = constrain(self.velocity.x, -max_xz * speed, max_xz * speed);
        self.velocity.y = constrain(self.velocity.y, -max_y * speed, max_y * speed);
        self.velocity.z = constrain(self.velocity.z, -max_xz * speed, max_xz * speed);

        self.position += self.velocity;
        self.wrap_and_fade(ctx, sim);

        let mut strike = None;
        if storm && rng.unit() < LIGHTNING_CHANCE * speed {
            strike = self.spawn_bolt(ctx, sim, rng);
        }

        for bolt in &mut self.bolts {
            bolt.life -= speed;
        }
        self.bolts.retain(|b| b.life > 0.0);

        if self.weather.is_precipitating() {
            let count = self.drops_per_frame(speed);
            for _ in 0..count {
                self.spawn_raindrop(rng);
            }
        }

        let ground = ctx.ground_y();
        for drop in &mut self.raindrops {
            drop.position.y += drop.speed * speed * 10.0;
        }
        self.raindrops.retain(|d| d.position.y < ground);
        self.raindrops.truncate(MAX_RAINDROPS);

        strike
    }

    /// Raindrops spawned per frame for the shown weather
    fn drops_per_frame(&self, speed: f32) -> usize {
        match self.weather {
            WeatherState::Flood => (4.0 * speed).ceil().max(0.0) as usize,
            WeatherState::Rainy | WeatherState::Storm => 1,
            WeatherState::Clear | WeatherState::Sunny => 0,
        }
    }

    fn wrap_and_fade(&mut self, ctx: &FrameContext, sim: &SimState) {
        let bound = (ctx.width / 2.0 - sim.box_len).max(0.0);

        if self.position.x > bound {
            self.position.x = -bound;
        }
        if self.position.x < -bound {
            self.position.x = bound;
        }
        if self.position.z > bound {
            self.position.z = -bound;
        }
        if self.position.z < -bound {
            self.position.z = bound;
        }

        let fade_x = map_range(self.position.x.abs(), bound - BOUNDARY_FADE_MARGIN, bound, 1.0, 0.0, true);
        let fade_z = map_range(self.position.z.abs(), bound - BOUNDARY_FADE_MARGIN, bound, 1.0, 0.0, true);
        self.boundary_fade = fade_x.min(fade_z);

        let (floor, ceiling) = altitude_band(ctx, sim);
        if self.position.y > floor || self.position.y < ceiling {
            self.position.y = floor;
        }
    }

    /// Grow a bolt down to the ground and strike the nearest plant
    ///
    /// Returns `None` when the cloud sits at or below ground level.
    pub fn spawn_bolt(
        &mut self,
        ctx: &FrameContext,
        sim: &mut SimState,
        rng: &mut SimRng,
    ) -> Option<LightningStrike> {
        let ground = ctx.ground_y();
        let mut p = self.base();
        let mut segments = Vec::new();

        while p.y < ground {
            p.x += rng.range(-15.0, 15.0);
            p.y += rng.range(20.0, 50.0);
            p.z += rng.range(-15.0, 15.0);
            if p.y > ground {
                p.y = ground;
            }
            segments.push(p);
        }

        let point = *segments.last()?;
        self.bolts.push(Bolt {
            segments,
            life: rng.range(5.0, 15.0) * sim.sim_speed,
        });

        let target = sim.garden.nearest_xz(point.x, point.z);
        if let Some((key, distance)) = target {
            if let Some(plant) = sim.garden.get_mut(key) {
                plant.struck_by_lightning(distance);
                log::info!("Lightning struck '{}' ({:.1} units away)", plant.name, distance);
            }
        }

        Some(LightningStrike { point, target })
    }

    /// Add a raindrop somewhere under the cloud
    pub fn spawn_raindrop(&mut self, rng: &mut SimRng) {
        let position = Vec3::new(
            self.position.x + rng.range(-CLOUD_SIZE, CLOUD_SIZE),
            self.position.y + CLOUD_SIZE / 2.0,
            self.position.z + rng.range(-CLOUD_SIZE, CLOUD_SIZE),
        );
        let speed = rng.range(8.0, 15.0);
        self.raindrops.push(Raindrop { position, speed });
    }

    /// Draw puffs, bolts and rain
    pub fn display(&self, canvas: &mut dyn Canvas, sim: &SimState) {
        if self.cloud_opacity <= 0.0 {
            return;
        }

        canvas.no_stroke();
        let c = self.current_color;
        canvas.fill(c.with_alpha(c.a * self.cloud_opacity * self.boundary_fade));

        for puff in &self.puffs {
            let at = self.position + puff.offset * CLOUD_SIZE;
            canvas.push();
            canvas.translate(at.x, at.y, at.z);
            canvas.sphere(CLOUD_SIZE * 0.5 * puff.scale);
            canvas.pop();
        }

        if self.weather == WeatherState::Storm {
            canvas.stroke_weight(3.0);
            canvas.no_fill();
            let mut points = Vec::new();
            for bolt in &self.bolts {
                let alpha = map_range(bolt.life, 0.0, BOLT_FULL_LIFE, 0.0, 255.0, false)
                    * self.bolt_opacity
                    * self.boundary_fade;
                canvas.stroke(BOLT_COLOR.with_alpha(alpha));
                points.clear();
                points.push(self.base());
                points.extend_from_slice(&bolt.segments);
                canvas.polyline(&points);
            }
            canvas.no_stroke();
        }

        if self.weather.is_precipitating() {
            canvas.stroke(RAIN_COLOR.with_alpha(200.0 * self.rain_opacity * self.boundary_fade));
            canvas.stroke_weight(2.0);
            let length = 10.0 * sim.sim_speed;
            for drop in &self.raindrops {
                let p = drop.position;
                canvas.line(p, Vec3::new(p.x, p.y + length, p.z));
            }
            canvas.no_stroke();
        }
    }
}

/// Altitude limits for clouds: `(floor, ceiling)`
///
/// The ceiling is an absolute height, not an offset from the floor. When it
/// lies below the floor (larger Y) no altitude passes and every cloud is
/// held at the floor.
pub fn altitude_band(ctx: &FrameContext, sim: &SimState) -> (f32, f32) {
    (-ctx.height / 4.0, ctx.width / 10.0 - sim.box_len)
}
