//! Farm device props
//!
//! Each simulated device gets a small prop that is drawn while the device is
//! on: a hanging lamp, a heater, a dehumidifier and a watering can.

use std::f32::consts::{PI, TAU};

use farmfx_core::{Canvas, Color, EffectorFlags, FrameContext, SimState, Vec3};
use farmfx_math::map_range;

/// Lamp rays fanned around the bulb
pub const LAMP_RAY_COUNT: usize = 32;
const LAMP_RAY_LENGTH: f32 = 180.0;
const LAMP_RAY_SPREAD: f32 = 120.0;

/// Water streams poured by the watering can
pub const STREAM_COUNT: usize = 12;
/// Segments per water stream
pub const STREAM_SEGMENTS: usize = 36;
const STREAM_JITTER: f32 = 0.9;

const HEAT_WAVE_SEGMENTS: usize = 20;
const AIRFLOW_SEGMENTS: usize = 16;

/// Draws the props of the active devices
#[derive(Clone, Debug)]
pub struct EffectorRenderer {
    pub light: bool,
    pub temp: bool,
    pub soil_moisture: bool,
    pub humidity: bool,
    pub lamp_position: Vec3,
    /// Lamp footprint (width, height, depth)
    pub lamp_size: Vec3,
}

impl EffectorRenderer {
    /// All devices off, lamp hung above the farmland
    pub fn new(ctx: &FrameContext) -> Self {
        Self {
            light: false,
            temp: false,
            soil_moisture: false,
            humidity: false,
            lamp_position: Vec3::new(0.0, -ctx.height / 3.0 - 100.0, 0.0),
            lamp_size: Vec3::new(300.0, 50.0, 300.0),
        }
    }

    /// Mirror the simulation's device flags
    pub fn update(&mut self, sim: &SimState) {
        let flags = sim.effectors;
        self.light = flags.contains(EffectorFlags::LIGHT);
        self.temp = flags.contains(EffectorFlags::TEMPERATURE);
        self.soil_moisture = flags.contains(EffectorFlags::SOIL_MOISTURE);
        self.humidity = flags.contains(EffectorFlags::HUMIDITY);
    }

    pub fn any_active(&self) -> bool {
        self.light || self.temp || self.soil_moisture || self.humidity
    }

    pub fn display(&self, canvas: &mut dyn Canvas, ctx: &FrameContext) {
        if self.light {
            self.draw_lamp(canvas);
        }
        if self.temp {
            draw_heater(canvas, ctx);
        }
        if self.humidity {
            draw_dehumidifier(canvas, ctx);
        }
        if self.soil_moisture {
            draw_watering_can(canvas, ctx);
        }
    }

    fn draw_lamp(&self, canvas: &mut dyn Canvas) {
        let p = self.lamp_position;
        canvas.push();
        canvas.translate(p.x, p.y, p.z);

        // socket
        canvas.push();
        canvas.fill(Color::gray(120.0));
        canvas.cylinder(18.0, 32.0);
        canvas.pop();

        // bulb glass
        canvas.push();
        canvas.translate(0.0, 32.0, 0.0);
        canvas.fill(Color::rgba(255.0, 255.0, 200.0, 180.0));
        canvas.sphere(32.0);
        canvas.pop();

        // filament
        canvas.push();
        canvas.translate(0.0, 32.0, 0.0);
        canvas.emissive_material(Color::rgb(255.0, 255.0, 120.0));
        canvas.sphere(12.0);
        canvas.pop();

        canvas.push();
        canvas.translate(0.0, 64.0, 0.0);
        canvas.stroke(Color::rgba(255.0, 255.0, 180.0, 90.0));
        canvas.stroke_weight(2.5);
        for i in 0..LAMP_RAY_COUNT {
            let angle = TAU * i as f32 / LAMP_RAY_COUNT as f32;
            let end = Vec3::new(
                angle.cos() * LAMP_RAY_SPREAD,
                LAMP_RAY_LENGTH,
                angle.sin() * LAMP_RAY_SPREAD,
            );
            canvas.line(Vec3::ZERO, end);
        }
        canvas.pop();

        canvas.pop();
    }
}

fn draw_heater(canvas: &mut dyn Canvas, ctx: &FrameContext) {
    canvas.push();
    canvas.translate(ctx.width / 2.2, ctx.height / 5.0 - 30.0, 0.0);

    canvas.no_stroke();
    canvas.ambient_material(Color::rgb(180.0, 60.0, 40.0));
    canvas.box_shape(40.0, 60.0, 40.0);

    canvas.push();
    canvas.translate(0.0, 0.0, 21.0);
    canvas.ambient_material(Color::rgb(220.0, 120.0, 80.0));
    canvas.box_shape(36.0, 48.0, 2.0);
    canvas.stroke(Color::rgb(120.0, 60.0, 40.0));
    canvas.stroke_weight(2.0);
    grill_bars(canvas, 20.0);
    canvas.pop();

    // glow
    canvas.push();
    canvas.translate(0.0, 0.0, 24.0);
    canvas.no_stroke();
    for i in 0..3 {
        let i = i as f32;
        canvas.emissive_material(Color::rgb(255.0, 120.0 + i * 40.0, 40.0));
        canvas.sphere(18.0 + i * 6.0);
    }
    canvas.pop();

    canvas.push();
    canvas.translate(0.0, -40.0, 0.0);
    canvas.stroke(Color::rgba(255.0, 180.0, 80.0, 120.0));
    canvas.stroke_weight(3.0);
    rising_waves(canvas, HEAT_WAVE_SEGMENTS, ctx.frame() / 10.0);
    canvas.pop();

    canvas.pop();
}

fn draw_dehumidifier(canvas: &mut dyn Canvas, ctx: &FrameContext) {
    canvas.push();
    canvas.translate(-ctx.width / 2.2, ctx.height / 5.0 - 30.0, 0.0);

    canvas.no_stroke();
    canvas.ambient_material(Color::rgb(180.0, 200.0, 220.0));
    canvas.box_shape(44.0, 70.0, 44.0);

    // intake grill
    canvas.push();
    canvas.translate(0.0, -20.0, 22.0);
    canvas.ambient_material(Color::rgb(140.0, 180.0, 200.0));
    canvas.box_shape(38.0, 18.0, 4.0);
    canvas.stroke(Color::rgb(100.0, 140.0, 180.0));
    canvas.stroke_weight(2.0);
    grill_bars(canvas, 8.0);
    canvas.pop();

    // water tank
    canvas.push();
    canvas.translate(0.0, 28.0, 0.0);
    canvas.fill(Color::rgba(120.0, 180.0, 255.0, 80.0));
    canvas.box_shape(36.0, 16.0, 36.0);
    canvas.pop();

    canvas.push();
    canvas.translate(0.0, -40.0, 0.0);
    canvas.stroke(Color::rgba(120.0, 180.0, 255.0, 120.0));
    canvas.stroke_weight(3.0);
    rising_waves(canvas, AIRFLOW_SEGMENTS, ctx.frame() / 12.0);
    canvas.pop();

    canvas.pop();
}

/// Five vertical bars across a grill face
fn grill_bars(canvas: &mut dyn Canvas, half_height: f32) {
    for i in (-14..=14).step_by(7) {
        let x = i as f32;
        canvas.line(Vec3::new(x, -half_height, 2.0), Vec3::new(x, half_height, 2.0));
    }
}

/// Three wiggling columns rising from the origin, one line per segment
fn rising_waves(canvas: &mut dyn Canvas, segments: usize, phase: f32) {
    for w in [-12.0, 0.0, 12.0] {
        for t in 0..segments {
            let t0 = t as f32;
            let t1 = t0 + 1.0;
            let from = Vec3::new(w + (t0 / 2.0 + phase).sin() * 3.0, -t0 * 2.0, 0.0);
            let to = Vec3::new(w + (t1 / 2.0 + phase).sin() * 3.0, -t1 * 2.0, 0.0);
            canvas.line(from, to);
        }
    }
}

fn draw_watering_can(canvas: &mut dyn Canvas, ctx: &FrameContext) {
    let frame = ctx.frame();

    canvas.push();
    canvas.translate(0.0, 50.0, 0.0);

    canvas.ambient_material(Color::rgb(180.0, 180.0, 150.0));
    canvas.specular_material(Color::gray(220.0));
    canvas.shininess(20.0);

    // body
    canvas.push();
    canvas.translate(0.0, -10.0, 0.0);
    canvas.cylinder_with_detail(40.0, 80.0, 24, 1);
    canvas.pop();

    // handle
    canvas.push();
    canvas.no_fill();
    canvas.stroke(Color::rgb(170.0, 170.0, 140.0));
    canvas.stroke_weight(10.0);
    canvas.translate(0.0, -50.0, 0.0);
    canvas.arc(0.0, 0.0, 90.0, 90.0, PI, 0.0);
    canvas.pop();

    // spout
    canvas.push();
    canvas.translate(50.0, -20.0, 0.0);
    canvas.rotate_z(30f32.to_radians());
    canvas.cylinder_with_detail(8.0, 60.0, 12, 1);
    canvas.pop();

    canvas.stroke_weight(2.0);
    canvas.push();
    canvas.translate(65.0, -50.0, 0.0);
    let last = (STREAM_SEGMENTS - 1) as f32;
    for s in 0..STREAM_COUNT {
        let sf = s as f32;
        let sx = map_range(sf, 0.0, (STREAM_COUNT - 1) as f32, -14.0, 14.0, false);
        let phase = (frame / 8.0 + sf * 7.0) * 0.04;
        let point = |seg: f32| {
            Vec3::new(
                sx + (phase + seg * 0.18).sin() * STREAM_JITTER,
                seg * 4.0 + (phase * 0.6 + seg * 0.12).sin() * 0.6,
                (phase + seg * 0.07).cos() * 0.6,
            )
        };
        for seg in 0..STREAM_SEGMENTS {
            let seg = seg as f32;
            let alpha = map_range(seg, 0.0, last, 220.0, 30.0, false);
            canvas.stroke(Color::rgba(70.0, 160.0, 240.0, alpha));
            canvas.line(point(seg), point(seg + 1.0));
        }

        // droplet at the stream end
        let drop_phase = (frame / 6.0 + sf * 13.0) * 0.06;
        let drop = Vec3::new(
            sx + (drop_phase * 1.5).sin() * 1.6,
            STREAM_SEGMENTS as f32 * 4.0 + drop_phase.sin() * 3.0,
            (drop_phase * 1.2).cos() * 1.2,
        );
        canvas.no_stroke();
        canvas.fill(Color::rgba(90.0, 180.0, 255.0, 200.0));
        canvas.push();
        canvas.translate(drop.x, drop.y, drop.z);
        canvas.sphere(droplet_size(frame, sf));
        canvas.pop();
    }
    canvas.pop();

    canvas.pop();
}

/// Pulsing radius of the droplet at the end of stream `s`
pub fn droplet_size(frame: f32, s: f32) -> f32 {
    3.0 + (frame * 0.06 + s).sin().abs() * 2.0
}
