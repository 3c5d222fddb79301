// Screenshot capture
//
// Converts a finished frame (master-palette indices) to RGB and writes it
// as a PNG under the configured directory, one subdirectory per ROM.

use super::config::ScreenshotConfig;
use crate::display::NES_PALETTE;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Screenshot failure
#[derive(Debug)]
pub enum ScreenshotError {
    /// Filesystem error
    Io(io::Error),

    /// PNG encoding error
    PngEncoding(png::EncodingError),
}

impl std::fmt::Display for ScreenshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenshotError::Io(e) => write!(f, "I/O error: {}", e),
            ScreenshotError::PngEncoding(e) => write!(f, "PNG encoding error: {}", e),
        }
    }
}

impl std::error::Error for ScreenshotError {}

impl From<io::Error> for ScreenshotError {
    fn from(e: io::Error) -> Self {
        ScreenshotError::Io(e)
    }
}

impl From<png::EncodingError> for ScreenshotError {
    fn from(e: png::EncodingError) -> Self {
        ScreenshotError::PngEncoding(e)
    }
}

/// Save a frame surface as a PNG; returns the written path
pub fn save_screenshot(
    frame: &[u8],
    config: &ScreenshotConfig,
    rom_path: Option<&Path>,
) -> Result<PathBuf, ScreenshotError> {
    let directory = screenshot_directory(config, rom_path);
    fs::create_dir_all(&directory)?;

    let filename = if config.include_timestamp {
        format!(
            "screenshot_{}.png",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        )
    } else {
        "screenshot.png".to_string()
    };
    let file_path = directory.join(filename);

    let rgb = palette_indices_to_rgb(frame);
    write_png(&file_path, &rgb, 256, 240)?;

    Ok(file_path)
}

/// Per-ROM subdirectory under the configured screenshot root
fn screenshot_directory(config: &ScreenshotConfig, rom_path: Option<&Path>) -> PathBuf {
    match rom_path.and_then(|p| p.file_stem()) {
        Some(stem) => config.directory.join(stem),
        None => config.directory.join("default"),
    }
}

/// Expand master-palette indices to RGB888
fn palette_indices_to_rgb(frame: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(frame.len() * 3);
    for &index in frame {
        let color = NES_PALETTE[(index & 0x3F) as usize];
        rgb.push(((color >> 16) & 0xFF) as u8);
        rgb.push(((color >> 8) & 0xFF) as u8);
        rgb.push((color & 0xFF) as u8);
    }
    rgb
}

fn write_png(path: &Path, data: &[u8], width: u32, height: u32) -> Result<(), ScreenshotError> {
    let file = fs::File::create(path)?;
    let writer = io::BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_expansion() {
        let rgb = palette_indices_to_rgb(&[0x00, 0x20]);
        assert_eq!(rgb.len(), 6);
        assert_eq!(&rgb[0..3], &[0x54, 0x54, 0x54], "gray");
        assert_eq!(&rgb[3..6], &[0xEC, 0xEE, 0xEC], "near-white");
    }

    #[test]
    fn test_directory_layout() {
        let config = ScreenshotConfig {
            directory: PathBuf::from("screenshots"),
            include_timestamp: true,
        };

        let dir = screenshot_directory(&config, None);
        assert!(dir.ends_with("screenshots/default"));

        let dir = screenshot_directory(&config, Some(Path::new("roms/game.nes")));
        assert!(dir.ends_with("screenshots/game"));
    }
}
