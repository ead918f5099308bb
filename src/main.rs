//! FarmFX - weather and device effects over a simulated farm plot
//!
//! Opens a window, steps the sky and device effects every frame and
//! renders them around an orbiting camera.

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use farmfx::config::AppConfig;
use farmfx::input::{InputAction, InputMapper};
use farmfx::scene::{FarmScene, SceneBuilder};
use farmfx::systems::{
    RenderError, RenderSystem, SimulationSystem, TitleStatus, WindowSystem,
};
use farmfx_input::OrbitController;
use farmfx_math::Vec3;
use farmfx_render::OrbitCamera;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: SimulationSystem,
    scene: FarmScene,
    camera: OrbitCamera,
    controller: OrbitController,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let scene = SceneBuilder::from_config(&config).build();
        log::info!(
            "Scene ready: {} plants, {} clouds, weather {}",
            scene.sim.garden.len(),
            scene.sky.len(),
            scene.weather()
        );

        let cam = &config.camera;
        let camera = OrbitCamera::new(
            Vec3::from(cam.target),
            cam.distance,
            cam.yaw.to_radians(),
            cam.pitch.to_radians(),
        )
        .with_distance_limits(cam.min_distance, cam.max_distance);

        // Configure controller from config
        let controller = OrbitController::new()
            .with_orbit_speed(config.input.orbit_speed)
            .with_mouse_sensitivity(config.input.mouse_sensitivity)
            .with_zoom_sensitivity(config.input.zoom_sensitivity)
            .with_invert_pitch(config.input.invert_pitch);

        Self {
            config,
            window: None,
            render: None,
            simulation: SimulationSystem::new(),
            scene,
            camera,
            controller,
        }
    }

    fn apply_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ResetCamera => {
                self.camera.reset();
                log::info!("Camera reset to starting position");
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::ToggleDevice(index) => {
                self.scene.toggle_device(index);
            }
            InputAction::SetWeather(weather) => self.scene.set_weather(weather),
            InputAction::SpeedUp => {
                self.scene.scale_speed(2.0);
            }
            InputAction::SlowDown => {
                self.scene.scale_speed(0.5);
            }
            InputAction::TogglePause => {
                self.scene.toggle_pause();
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.simulation
            .update(&mut self.scene, &mut self.camera, &mut self.controller);

        if let Some(render) = &mut self.render {
            match render.render_frame(&self.camera, &self.scene) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => render.recover_surface(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        if let Some(window) = &self.window {
            if self.config.debug.title_stats {
                let devices = self.scene.sim.effectors.to_device_states();
                window.update_title(&TitleStatus {
                    weather: self.scene.weather(),
                    speed: self.scene.sim.sim_speed,
                    paused: self.scene.is_paused(),
                    devices: &devices,
                    strikes: self.simulation.total_strikes(),
                });
            }
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        match RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            self.config.camera.clone(),
            self.config.window.vsync,
        ) {
            Ok(render) => {
                let (width, height) = render.size();
                log::info!("Rendering at {}x{}", width, height);
                self.render = Some(render);
            }
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.apply_action(action, event_loop);
                        return;
                    }
                    // Pass to controller for camera keys
                    self.controller.process_keyboard(key, event.state);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.controller.process_mouse_button(button, state);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
                self.controller.process_scroll(lines);
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.controller.process_mouse_motion(delta.0, delta.1);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() {
    // Config first so its log level can seed the logger
    let loaded = AppConfig::load();
    let level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    log::info!("Starting FarmFX");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
