//! Keylight -- windowed application template, main loop and entry point.
//!
//! winit drives the event loop via `ApplicationHandler`; rendering happens in
//! `RedrawRequested`. Each frame the background clear color is a pure function
//! of the current input snapshot: purple while the space bar is held, sky blue
//! otherwise. Nothing else is drawn.
//!
//! Exit codes are explicit: 0 on a normal close request, non-zero when window
//! or GPU initialization fails (the failure is logged, the event loop exits,
//! and no frame is ever rendered).

use std::process::ExitCode;
use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use kl_core::frame::clear_color;
use kl_core::input::{InputState, Key};
use kl_core::lifecycle::FrameLoop;
use kl_core::time::FrameClock;
use kl_platform::window::WindowConfig;
use kl_render::GpuContext;

/// Everything that exists only while the window does. Constructed in
/// `ApplicationHandler::resumed` once the event loop is active.
struct AppState {
    window: Arc<Window>,
    gpu: GpuContext,
    input: InputState,
    clock: FrameClock,
    frame_loop: FrameLoop,
}

impl AppState {
    fn new(window: Arc<Window>) -> Result<Self, String> {
        let gpu = GpuContext::new(window.clone())?;
        Ok(Self {
            window,
            gpu,
            input: InputState::new(),
            clock: FrameClock::new(),
            frame_loop: FrameLoop::new(),
        })
    }
}

struct App {
    config: WindowConfig,
    state: Option<AppState>,
    init_error: Option<String>,
}

impl App {
    fn new() -> Self {
        Self {
            config: WindowConfig::default(),
            state: None,
            init_error: None,
        }
    }

    fn fail_init(&mut self, event_loop: &ActiveEventLoop, err: String) {
        log::error!("Initialization failed: {err}");
        self.init_error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let window = match kl_platform::window::create_window(event_loop, &self.config) {
            Ok(window) => window,
            Err(err) => return self.fail_init(event_loop, err),
        };
        match AppState::new(window) {
            Ok(state) => self.state = Some(state),
            Err(err) => self.fail_init(event_loop, err),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                state.frame_loop.request_close();
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                let w = physical_size.width;
                let h = physical_size.height;
                if w > 0 && h > 0 {
                    state.gpu.resize(w, h);
                    log::info!("Resized to {}x{}", w, h);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if let Some(key) = map_key(key_code) {
                        match event.state {
                            ElementState::Pressed => state.input.key_down(key),
                            ElementState::Released => state.input.key_up(key),
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if state.gpu.size.0 == 0 || state.gpu.size.1 == 0 {
                    return;
                }

                // Escape is close-bound, same as the close button.
                if state.input.is_just_pressed(Key::Escape) {
                    log::info!("Escape pressed, exiting.");
                    state.frame_loop.request_close();
                    event_loop.exit();
                    return;
                }

                if !state.frame_loop.advance(false) {
                    return;
                }

                state.clock.begin_frame();
                if state.clock.should_log_fps() {
                    log::debug!(
                        "{:.1} fps ({:.2} ms/frame)",
                        state.clock.smoothed_fps,
                        state.clock.smoothed_frame_time_ms
                    );
                }

                let color = clear_color(&state.input);
                state.gpu.clear_frame(color.to_f64_channels());

                state.input.end_frame();
            }

            _ => {}
        }
    }
}

fn map_key(key_code: KeyCode) -> Option<Key> {
    match key_code {
        KeyCode::Space => Some(Key::Space),
        KeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}

/// 0 on a normal close, non-zero when initialization failed.
fn exit_code(init_error: Option<&str>) -> ExitCode {
    match init_error {
        Some(_) => ExitCode::FAILURE,
        None => ExitCode::SUCCESS,
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Keylight starting...");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            log::error!("Failed to create event loop: {err}");
            return ExitCode::FAILURE;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    if let Err(err) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {err}");
        return ExitCode::FAILURE;
    }

    exit_code(app.init_error.as_deref())
}
