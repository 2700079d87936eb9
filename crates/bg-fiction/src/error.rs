//! Error types for the fiction engine.

use bg_core::BgError;
use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors raised below the gameplay surface.
///
/// Gameplay itself never fails; these come from persistence and world
/// assembly and are logged rather than shown to the player.
#[derive(Debug, Error)]
pub enum FictionError {
    /// Reading or writing the save slot failed.
    #[error("save slot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The saved game could not be encoded or decoded.
    #[error("save data is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The saved game decoded but does not fit the world.
    #[error("saved game is unusable: {0}")]
    CorruptSave(String),

    /// World catalog error.
    #[error("{0}")]
    World(#[from] BgError),
}
