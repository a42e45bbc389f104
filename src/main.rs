use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::Parser;
use log::{debug, error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use transform_cube::cli::Cli;
use transform_cube::core::WinitController;
use transform_cube::frame::{FpsCounter, FrameClock};
use transform_cube::hud::HudInfo;
use transform_cube::renderer::CubeRenderer;
use transform_cube::state::{AppState, CursorMode};

const WINDOW_TITLE: &str = "Transform Cube";

fn apply_cursor_mode(window: &Window, mode: CursorMode) {
    match mode {
        CursorMode::Locked => {
            let grabbed = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
            if let Err(e) = grabbed {
                warn!("Cursor grab unavailable: {}", e);
            }
            window.set_cursor_visible(false);
        }
        CursorMode::Normal => {
            if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
                warn!("Failed to release cursor: {}", e);
            }
            window.set_cursor_visible(true);
        }
    }
}

// === Application ===

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<CubeRenderer>,
    state: AppState,
    controller: WinitController,
    clock: FrameClock,
    fps: FpsCounter,
    fatal: Option<anyhow::Error>,
}

impl App {
    fn new(cli: Cli) -> Self {
        let state = AppState::new(cli.width, cli.height);
        Self {
            cli,
            window: None,
            renderer: None,
            state,
            controller: WinitController::new(),
            clock: FrameClock::new(),
            fps: FpsCounter::new(),
            fatal: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        error!("{:#}", err);
        self.fatal = Some(err);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let frame = self.clock.tick();
        if let Some(fps) = self.fps.update(frame.delta) {
            debug!("FPS: {:.1}", fps);
        }

        self.state.process_frame(&self.controller, frame.delta);

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };
        if !renderer.is_drawable() {
            return;
        }

        let matrices = self.state.frame_matrices(renderer.aspect(), frame.time);
        let hud = HudInfo {
            fps: self.fps.fps(),
            toggles: &self.state.toggles,
            look_active: self.state.look_active(),
        };

        match renderer.render(window, &matrices, &hud) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, anyhow!("GPU out of memory"));
            }
            Err(e) => warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop
            .create_window(
                Window::default_attributes()
                    .with_title(WINDOW_TITLE)
                    .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
            )
            .map_err(|e| anyhow!("Failed to create window: {}", e))
        {
            Ok(w) => Arc::new(w),
            Err(e) => return self.fail(event_loop, e),
        };

        let renderer = match pollster::block_on(CubeRenderer::new(window.clone(), !self.cli.no_ui))
            .context("Failed to initialize renderer")
        {
            Ok(r) => r,
            Err(e) => return self.fail(event_loop, e),
        };

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.clock = FrameClock::new();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        if let Some(input) = self.controller.process_event(&event) {
            if let Some(mode) = self.state.handle_event(input) {
                if let Some(window) = &self.window {
                    apply_cursor_mode(window, mode);
                }
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
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
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            let input = self.controller.process_mouse_motion(dx, dy);
            self.state.handle_event(input);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // GPU resources go before the window they were created for
        self.renderer = None;
        self.window = None;
        info!("Shut down");
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new().map_err(|e| anyhow!("Failed to create event loop: {}", e))?;
    let mut app = App::new(cli);

    info!("Controls: WASD move, hold left mouse to look, 1-5 toggle transforms, 0 reset, Escape quits");
    event_loop
        .run_app(&mut app)
        .map_err(|e| anyhow!("Event loop failed: {}", e))?;

    match app.fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
