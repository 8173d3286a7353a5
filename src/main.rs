use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use dronecam::assets::{AssetLoader, ModelPlacement};
use dronecam::cli::Cli;
use dronecam::traits::{FrameController, GamepadSource, NoGamepad};
use dronecam::{ControlMode, RigConfig, TickScheduler, World};

// === Constants ===

const WINDOW_TITLE: &str = "Drone Cam";
const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;

struct App {
    window: Option<Arc<Window>>,
    world: World,
    controller: Box<dyn FrameController>,
    scheduler: TickScheduler,
    show_status: bool,
}

impl App {
    fn new(world: World, controller: Box<dyn FrameController>, show_status: bool) -> Self {
        let scheduler = TickScheduler::new(world.config.status_hz);
        Self {
            window: None,
            world,
            controller,
            scheduler,
            show_status,
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.scheduler.stop();
        event_loop.exit();
    }

    fn redraw(&mut self) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if !self
            .scheduler
            .frame(&mut self.world, self.controller.as_mut())
        {
            return;
        }
        if let Some(report) = self.scheduler.take_status() {
            if self.show_status {
                window.set_title(&format!("{} - {}", WINDOW_TITLE, report));
            }
        }
        // next frame only once this one is done
        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(WINDOW_TITLE)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.world.camera.set_viewport(size.width, size.height);
        self.controller.process_event(&WindowEvent::Resized(size));
        self.window = Some(window.clone());
        self.scheduler.start();
        window.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => self.shutdown(event_loop),
            WindowEvent::Resized(size) => {
                self.world.camera.set_viewport(size.width, size.height);
                self.controller.process_event(&event);
            }
            WindowEvent::RedrawRequested => self.redraw(),
            // keys, mouse drags and focus changes
            _ => self.controller.process_event(&event),
        }
    }
}

/// Resolve both model loads before the loop starts. Failures are logged and skipped.
fn load_models(cli: &Cli, world: &mut World) {
    let loader = AssetLoader::new();
    let drone = loader.load_model(&cli.drone_obj, &cli.drone_mtl);
    let environment = loader.load_model(&cli.scene_obj, &cli.scene_mtl);

    match drone.wait() {
        Ok(asset) if cli.mode.follows_subject() => {
            world.attach_drone(&asset);
        }
        Ok(asset) => {
            world.add_model(&asset, ModelPlacement::Drone);
        }
        Err(err) => log::error!("Error loading drone model: {}", err),
    }

    match environment.wait() {
        Ok(asset) => {
            world.add_model(&asset, ModelPlacement::Environment);
        }
        Err(err) => log::error!("Error loading environment model: {}", err),
    }
}

#[cfg(target_os = "linux")]
fn gamepad_source() -> Box<dyn GamepadSource> {
    Box::new(dronecam::core::EvdevGamepads::new())
}

#[cfg(not(target_os = "linux"))]
fn gamepad_source() -> Box<dyn GamepadSource> {
    log::warn!("Gamepads are only read on Linux; keyboard input stays active");
    Box::new(NoGamepad)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => RigConfig::load(path)
            .with_context(|| format!("Failed to load rig config {}", path.display()))?,
        None => RigConfig::default(),
    };

    let mut world = World::new(config.clone());
    load_models(&cli, &mut world);

    let gamepad: Box<dyn GamepadSource> = if cli.mode == ControlMode::DroneGamepad {
        gamepad_source()
    } else {
        Box::new(NoGamepad)
    };
    let controller = cli.mode.build(&config, gamepad);
    log::info!("Control mode: {}", controller.name());

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    // redraws are requested one at a time by the scheduler
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(world, controller, !cli.no_ui);
    event_loop
        .run_app(&mut app)
        .context("Event loop terminated with an error")?;
    Ok(())
}
