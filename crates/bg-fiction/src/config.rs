//! Configuration for a game session.

use std::path::PathBuf;

/// Name of the save slot when none is given.
pub const DEFAULT_SLOT: &str = "benagram-save";

/// Where and whether a session saves its progress.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Directory holding save slots.
    pub save_dir: PathBuf,
    /// Name of the slot; the file is `<save_dir>/<slot_name>.json`.
    pub slot_name: String,
    /// Whether every surviving state change is written to the slot.
    pub autosave: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_dir: dirs::data_dir()
                .map(|dir| dir.join("benagram"))
                .unwrap_or_else(|| PathBuf::from(".benagram")),
            slot_name: DEFAULT_SLOT.to_string(),
            autosave: true,
        }
    }
}

impl GameConfig {
    /// Set the save directory.
    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }

    /// Set the slot name.
    pub fn with_slot_name(mut self, name: impl Into<String>) -> Self {
        self.slot_name = name.into();
        self
    }

    /// Turn autosave on or off.
    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    /// Full path of the save file.
    pub fn save_path(&self) -> PathBuf {
        self.save_dir.join(format!("{}.json", self.slot_name))
    }
}
