//! Save slots and the on-disk save format.
//!
//! A slot holds one JSON document: the [`GameState`] in camelCase. Older
//! saves kept story flags in the inventory as "Talked to ..." entries;
//! [`decode`] moves those into `flags`.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use bg_core::GameState;

use crate::error::FictionResult;

/// Inventory prefix older saves used for story flags.
const LEGACY_FLAG_PREFIX: &str = "Talked to ";

/// A single named place a serialized game can be kept.
pub trait SaveSlot {
    /// The stored document, or `None` if the slot is empty.
    fn read(&self) -> FictionResult<Option<String>>;

    /// Replace the stored document.
    fn write(&mut self, contents: &str) -> FictionResult<()>;

    /// Empty the slot. Clearing an empty slot is not an error.
    fn clear(&mut self) -> FictionResult<()>;
}

/// A save slot backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// A slot stored at `path`. Nothing is touched until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where the slot lives.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveSlot for FileSlot {
    fn read(&self) -> FictionResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, contents: &str) -> FictionResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        // A crash mid-write must not leave a truncated save behind.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&mut self) -> FictionResult<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// An in-memory slot. Clones share the same storage, so a test can keep a
/// handle and inspect what a store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    contents: Rc<RefCell<Option<String>>>,
}

impl MemorySlot {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot that already holds `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Rc::new(RefCell::new(Some(contents.into()))),
        }
    }

    /// The stored document, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl SaveSlot for MemorySlot {
    fn read(&self) -> FictionResult<Option<String>> {
        Ok(self.contents())
    }

    fn write(&mut self, contents: &str) -> FictionResult<()> {
        *self.contents.borrow_mut() = Some(contents.to_string());
        Ok(())
    }

    fn clear(&mut self) -> FictionResult<()> {
        *self.contents.borrow_mut() = None;
        Ok(())
    }
}

/// Serialize a state for a save slot.
pub fn encode(state: &GameState) -> FictionResult<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Deserialize a saved state, migrating legacy inventory flags.
pub fn decode(contents: &str) -> FictionResult<GameState> {
    let mut state: GameState = serde_json::from_str(contents)?;
    let (legacy, items): (Vec<String>, Vec<String>) = state
        .inventory
        .into_iter()
        .partition(|item| item.starts_with(LEGACY_FLAG_PREFIX));
    state.inventory = items;
    state.flags.extend(legacy);
    Ok(state)
}
