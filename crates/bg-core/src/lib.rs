//! Core types for the Benagram text adventure.
//!
//! This crate defines the data that flows through a single command: the
//! tagged [`Term`]s produced from player input, the closed [`Verb`]
//! vocabulary handlers dispatch on, the [`GameState`] value handlers
//! transform, and the [`Message`]s handed back to the presentation layer.
//! It knows nothing about rooms, parsing or persistence.

/// Error types used throughout the crate.
pub mod error;
/// Transcript messages exchanged with the player.
pub mod message;
/// Handler replies: a message paired with the next state.
pub mod reply;
/// The player's game state value.
pub mod state;
/// Tagged terms produced by the tokenizer.
pub mod term;
/// Verb categories recognized by handlers.
pub mod verb;

/// Re-export error types.
pub use error::{BgError, BgResult};
/// Re-export message types.
pub use message::{Message, Sender};
/// Re-export the handler reply type.
pub use reply::Reply;
/// Re-export the game state value.
pub use state::GameState;
/// Re-export term types.
pub use term::{Chunk, Tag, Term};
/// Re-export the verb enum.
pub use verb::Verb;
