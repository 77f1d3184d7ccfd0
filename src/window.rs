//! Windowed render loop on winit + wgpu.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use crate::config::StarfieldConfig;
use crate::error::StarfieldError;
use crate::gpu::GpuState;
use crate::runner::Runner;

/// Refresh the title's tick rate this often.
const TITLE_REFRESH_TICKS: u64 = 10;

/// Open a window and animate until it is closed.
///
/// Blocks until the close signal is observed. Startup failures (event loop,
/// window, GPU) are returned as errors.
pub fn run(config: StarfieldConfig) -> Result<(), StarfieldError> {
    config.validate()?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct App {
    config: StarfieldConfig,
    window: Option<Arc<Window>>,
    runner: Option<Runner<GpuState>>,
    error: Option<StarfieldError>,
}

impl App {
    fn new(config: StarfieldConfig) -> Self {
        Self {
            config,
            window: None,
            runner: None,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), StarfieldError> {
        let viewport = self.config.viewport;
        let window_attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(viewport.width, viewport.height))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let gpu_state = pollster::block_on(GpuState::new(
            window.clone(),
            viewport,
            self.config.star_count,
            self.config.clear_color,
        ))?;

        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            stars = self.config.star_count,
            "Window ready"
        );

        self.runner = Some(Runner::new(self.config.clone(), gpu_state));
        window.request_redraw();
        self.window = Some(window);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: StarfieldError) {
        tracing::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(runner) = &mut self.runner else {
            return;
        };

        match runner.step() {
            Ok(()) => {}
            Err(e) if e.is_fatal() => {
                self.fail(event_loop, e.into());
                return;
            }
            Err(e) => tracing::warn!("Skipped frame: {}", e),
        }

        let clock = runner.clock();
        if let Some(window) = &self.window {
            if clock.ticks() % TITLE_REFRESH_TICKS == 0 {
                window.set_title(&format!(
                    "{} - {:.1} ticks/s",
                    self.config.title,
                    clock.rate()
                ));
            }
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(runner) = &mut self.runner {
                    runner.sink_mut().resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(runner) = self.runner.take() {
            tracing::info!(ticks = runner.clock().ticks(), "Closing starfield");
        }
        self.window = None;
    }
}
