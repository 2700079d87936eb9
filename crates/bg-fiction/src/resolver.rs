//! Dispatching a validated command to the right handler.

use bg_core::{GameState, Message, Term, Verb};
use tracing::{debug, warn};

use crate::inventory::describe_inventory;
use crate::parser::Violation;
use crate::world::World;

/// Shown when an object declines the verb it was given.
pub const FALLBACK: &str = "Didn't understand that. Try looking around or going somewhere.";

/// Shown when the state names a room the world does not have.
pub const INVALID_ROOM: &str = "You are not in a valid room";

/// The game's answer to one command.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// The reply to show.
    pub message: Message,
    /// The state to publish.
    pub new_state: GameState,
}

impl Response {
    /// A response that leaves the state as it was.
    pub fn unchanged(content: impl Into<String>, state: &GameState) -> Self {
        Self {
            message: Message::bot(content),
            new_state: state.clone(),
        }
    }
}

/// Resolve a validated command against the current room.
///
/// An object named by the command's first noun always wins over the room.
/// If that object declines, the player gets [`FALLBACK`] and the state is
/// left untouched; the room handler is not consulted.
pub fn resolve(world: &World, terms: &[Term], state: &GameState) -> Response {
    let Some(verb_term) = terms.first() else {
        return Response::unchanged(Violation::Empty.to_string(), state);
    };
    let verb = Verb::parse(&verb_term.text);
    let noun = terms.iter().find(|t| t.is_noun());

    let room = match world.require_room(&state.current_room) {
        Ok(room) => room,
        Err(e) => {
            warn!(error = %e, "state names a room outside the catalog");
            return Response::unchanged(INVALID_ROOM, state);
        }
    };

    if let Some(object) = noun.and_then(|n| room.object(&n.text)) {
        debug!(%verb, object = %object.name, room = %room.name, "dispatching to object");
        let reply = object.behavior.handle(&verb, state, terms);
        if reply.is_declined() {
            return Response::unchanged(FALLBACK, state);
        }
        return Response {
            message: Message::bot(reply.message),
            new_state: reply.state,
        };
    }

    if verb == Verb::Inventory {
        return Response::unchanged(describe_inventory(&state.inventory), state);
    }

    debug!(%verb, room = %room.name, "dispatching to room");
    let reply = room.behavior.handle(&verb, state, terms);
    Response {
        message: Message::bot(reply.message),
        new_state: reply.state,
    }
}
