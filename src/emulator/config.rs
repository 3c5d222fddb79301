// Configuration management
//
// TOML-backed user settings with the load-or-write-default pattern: a
// missing or unreadable file yields the defaults, which are saved back so
// the user has something to edit.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Default configuration file path
const CONFIG_FILE: &str = "famicore.toml";

/// Emulator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmulatorConfig {
    /// Video settings
    pub video: VideoConfig,

    /// Screenshot settings
    pub screenshot: ScreenshotConfig,

    /// Hotkeys
    pub hotkeys: HotkeyConfig,
}

/// Video configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Integer window scale (1-8)
    pub scale: u32,

    /// Wait for vertical sync
    pub vsync: bool,

    /// Frame-rate cap (60 for NTSC)
    pub fps: u32,
}

/// Screenshot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenshotConfig {
    /// Directory screenshots are written under
    pub directory: PathBuf,

    /// Include a timestamp in the filename
    pub include_timestamp: bool,
}

/// Hotkey configuration (key names as understood by the window layer)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Reset (default: F8)
    pub reset: String,

    /// Screenshot (default: F9)
    pub screenshot: String,

    /// Pause (default: P)
    pub pause: String,

    /// Quit (default: Q; Escape always works)
    pub quit: String,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        EmulatorConfig {
            video: VideoConfig {
                scale: 3,
                vsync: true,
                fps: 60,
            },
            screenshot: ScreenshotConfig {
                directory: PathBuf::from("screenshots"),
                include_timestamp: true,
            },
            hotkeys: HotkeyConfig {
                reset: "F8".to_string(),
                screenshot: "F9".to_string(),
                pause: "P".to_string(),
                quit: "Q".to_string(),
            },
        }
    }
}

impl EmulatorConfig {
    /// Load the configuration, or write and return the defaults
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| {
            let config = Self::default();
            if let Err(err) = config.save() {
                log::warn!("could not write default config: {}", err);
            }
            config
        })
    }

    /// Load the configuration from disk
    pub fn load() -> Result<Self, io::Error> {
        let contents = fs::read_to_string(CONFIG_FILE)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save the configuration to disk
    pub fn save(&self) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(CONFIG_FILE, contents)
    }
}
