// Display module - frame surface and host window
//
// The PPU hands over frames as 256x240 master-palette indices; this module
// owns the conversion to RGBA and the winit/pixels window that presents
// them at the NTSC frame rate.

mod framebuffer;
mod palette;
mod window;

pub use framebuffer::{FrameBuffer, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use palette::{palette_to_rgb, palette_to_rgba, NES_PALETTE};
pub use window::run_emulator_window;
