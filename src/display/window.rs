// Window module - host window, input routing and frame pacing
//
// Drives the emulator from a winit event loop: every redraw runs one frame
// of emulation, converts the PPU's output to RGBA through a pixels surface
// and presents it, capped to the configured frame rate. Keyboard state is
// polled into the controller snapshots between frames.
//
// The window takes its scale, frame-rate cap and vsync choice straight
// from the emulator's `VideoConfig`; there is no separate window-side
// configuration type.

use super::framebuffer::{FrameBuffer, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::emulator::{Emulator, VideoConfig};
use crate::input::{KeyboardHandler, Player};
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Largest integer scale the window honors
///
/// 256x240 at 7x is 1792x1680, taller than a 1440p desktop; configs past
/// 6x are treated as 6x rather than opening an unusable window.
const MAX_WINDOW_SCALE: u32 = 6;

/// The integer scale actually applied to the 256x240 surface
fn window_scale(video: &VideoConfig) -> u32 {
    if video.scale == 0 {
        1
    } else {
        video.scale.min(MAX_WINDOW_SCALE)
    }
}

/// Logical window size for the configured scale
fn window_size(video: &VideoConfig) -> LogicalSize<u32> {
    let scale = window_scale(video);
    LogicalSize::new(SCREEN_WIDTH as u32 * scale, SCREEN_HEIGHT as u32 * scale)
}

/// Wall-clock budget of one frame at the configured cap
fn frame_interval(video: &VideoConfig) -> Duration {
    // One second split across the frame budget; a zero cap means "as fast
    // as one frame per second", not a division by zero
    Duration::from_secs(1) / video.fps.max(1)
}

/// The emulator window: event loop state plus the running core
struct EmulatorWindow {
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    emulator: Emulator,
    frame_buffer: FrameBuffer,
    keyboard: KeyboardHandler,
    /// Wall-clock budget of one frame, fixed at startup
    frame_interval: Duration,
    last_frame_time: Instant,
}

impl EmulatorWindow {
    fn new(emulator: Emulator) -> Self {
        let frame_interval = frame_interval(&emulator.config().video);
        Self {
            window: None,
            pixels: None,
            emulator,
            frame_buffer: FrameBuffer::new(),
            keyboard: KeyboardHandler::new(),
            frame_interval,
            last_frame_time: Instant::now(),
        }
    }

    /// Push the current keyboard state into both controller snapshots
    fn update_controllers(&mut self) {
        let p1 = self.keyboard.get_controller_state(Player::One);
        let p2 = self.keyboard.get_controller_state(Player::Two);
        let io = self.emulator.controller_io_mut();
        io.set_controller1(p1);
        io.set_controller2(p2);
    }

    /// Handle a non-controller hotkey press
    fn handle_hotkey(&mut self, key: KeyCode, event_loop: &ActiveEventLoop) {
        let hotkeys = self.emulator.config().hotkeys.clone();
        if Some(key) == parse_key(&hotkeys.reset) {
            log::info!("reset requested");
            self.emulator.reset();
        } else if Some(key) == parse_key(&hotkeys.screenshot) {
            match self.emulator.screenshot(self.frame_buffer.as_slice()) {
                Ok(path) => log::info!("screenshot saved to {}", path.display()),
                Err(err) => log::error!("screenshot failed: {}", err),
            }
        } else if Some(key) == parse_key(&hotkeys.pause) {
            self.emulator.toggle_pause();
        } else if Some(key) == parse_key(&hotkeys.quit) || key == KeyCode::Escape {
            event_loop.exit();
        }
    }

    /// Run one frame of emulation and present it
    fn render_frame(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if !self.emulator.is_paused() {
            let frame = self.emulator.run_frame()?;
            self.frame_buffer.copy_from_frame(frame);
        }

        if let Some(pixels) = &mut self.pixels {
            self.frame_buffer.to_rgba(pixels.frame_mut());
            pixels.render()?;
        }
        Ok(())
    }

    /// Frame-rate cap: true once a frame budget has elapsed
    fn should_render_frame(&mut self) -> bool {
        if self.last_frame_time.elapsed() >= self.frame_interval {
            self.last_frame_time = Instant::now();
            true
        } else {
            false
        }
    }
}

impl ApplicationHandler for EmulatorWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title("famicore")
            .with_inner_size(window_size(&self.emulator.config().video))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .expect("failed to create window"),
        );
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, window.clone());
        let pixels = Pixels::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32, surface)
            .expect("failed to create pixel surface");

        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state,
                        ..
                    },
                ..
            } => {
                match state {
                    ElementState::Pressed => {
                        self.keyboard.handle_key_press(physical_key);
                        if let PhysicalKey::Code(code) = physical_key {
                            self.handle_hotkey(code, event_loop);
                        }
                    }
                    ElementState::Released => {
                        self.keyboard.handle_key_release(physical_key);
                    }
                }
                self.update_controllers();
            }
            WindowEvent::RedrawRequested => {
                if self.should_render_frame() {
                    if let Err(err) = self.render_frame() {
                        log::error!("frame failed: {}", err);
                        event_loop.exit();
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Map a config hotkey name onto a winit key code
fn parse_key(name: &str) -> Option<KeyCode> {
    match name {
        "F1" => Some(KeyCode::F1),
        "F2" => Some(KeyCode::F2),
        "F3" => Some(KeyCode::F3),
        "F4" => Some(KeyCode::F4),
        "F5" => Some(KeyCode::F5),
        "F6" => Some(KeyCode::F6),
        "F7" => Some(KeyCode::F7),
        "F8" => Some(KeyCode::F8),
        "F9" => Some(KeyCode::F9),
        "F10" => Some(KeyCode::F10),
        "F11" => Some(KeyCode::F11),
        "F12" => Some(KeyCode::F12),
        "P" => Some(KeyCode::KeyP),
        "Q" => Some(KeyCode::KeyQ),
        "R" => Some(KeyCode::KeyR),
        "Tab" => Some(KeyCode::Tab),
        "Escape" => Some(KeyCode::Escape),
        _ => None,
    }
}

/// Open the window and run the emulator until the host quits
///
/// The emulator must already have a ROM loaded and be reset; its
/// `VideoConfig` decides the window size, frame cap and vsync behavior.
pub fn run_emulator_window(emulator: Emulator) -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;

    let video = &emulator.config().video;
    if video.vsync {
        event_loop.set_control_flow(ControlFlow::Wait);
    } else {
        event_loop.set_control_flow(ControlFlow::Poll);
    }

    let size = window_size(video);
    log::info!(
        "opening {}x{} window ({}x scale, {} FPS cap)",
        size.width,
        size.height,
        window_scale(video),
        video.fps.max(1)
    );

    let mut app = EmulatorWindow::new(emulator);
    event_loop.run_app(&mut app)?;
    Ok(())
}
