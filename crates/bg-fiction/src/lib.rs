//! Command interpretation and world-state engine for Benagram.
//!
//! Free-text input is normalized, tagged, patched for game vocabulary and
//! validated before the resolver hands it to a room or object handler. The
//! handler's reply becomes the next [`GameState`](bg_core::GameState), which
//! the [`GameStore`] publishes to subscribers and saves while the player
//! is alive.

/// Session configuration.
pub mod config;
/// The normalize-to-resolve pipeline.
pub mod engine;
/// Error types for the fiction engine.
pub mod error;
/// Inventory listing.
pub mod inventory;
/// Input normalization, tagging and validation.
pub mod parser;
/// Save slots and save format.
pub mod persistence;
/// Handler selection.
pub mod resolver;
/// Game sessions.
pub mod session;
/// The state store.
pub mod store;
/// Rooms, objects and their verb handlers.
pub mod world;

pub use config::GameConfig;
pub use engine::FictionEngine;
pub use error::{FictionError, FictionResult};
pub use parser::{LexiconTagger, Tagger};
pub use persistence::{FileSlot, MemorySlot, SaveSlot};
pub use resolver::Response;
pub use session::GameSession;
pub use store::{GameStore, SubscriptionId};
pub use world::World;
