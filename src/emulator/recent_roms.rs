// Recent ROMs list
//
// A small MRU list of opened ROM paths, persisted next to the config.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where the list is persisted
const RECENT_ROMS_FILE: &str = "recent_roms.toml";

/// Maximum entries kept
const MAX_RECENT_ROMS: usize = 10;

/// Most-recently-used ROM list, newest first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentRomsList {
    roms: Vec<RecentRomEntry>,
}

/// One remembered ROM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentRomEntry {
    /// Path to the ROM file
    pub path: PathBuf,

    /// When it was last opened (RFC 3339)
    pub last_accessed: String,

    /// File stem for display
    pub display_name: String,
}

impl RecentRomsList {
    /// An empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the list, or start fresh when missing/unreadable
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Load the list from disk
    pub fn load() -> Result<Self, io::Error> {
        let contents = fs::read_to_string(RECENT_ROMS_FILE)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Persist the list
    pub fn save(&self) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(RECENT_ROMS_FILE, contents)
    }

    /// Record a ROM as just-opened, deduplicating and trimming
    pub fn add<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();
        self.roms.retain(|entry| entry.path != path);

        let display_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Unknown")
            .to_string();

        self.roms.insert(
            0,
            RecentRomEntry {
                path: path.to_path_buf(),
                last_accessed: chrono::Local::now().to_rfc3339(),
                display_name,
            },
        );
        self.roms.truncate(MAX_RECENT_ROMS);
    }

    /// Drop a ROM from the list
    pub fn remove<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();
        self.roms.retain(|entry| entry.path != path);
    }

    /// The entries, newest first
    pub fn entries(&self) -> &[RecentRomEntry] {
        &self.roms
    }

    /// The newest entry's path
    pub fn most_recent(&self) -> Option<&Path> {
        self.roms.first().map(|entry| entry.path.as_path())
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.roms.is_empty()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.roms.len()
    }
}
