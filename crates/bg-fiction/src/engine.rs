//! The command pipeline: normalize, tag, patch, validate, resolve.

use bg_core::{GameState, Message, Term, Verb};
use tracing::warn;

use crate::parser::{LexiconTagger, Tagger, parse, validate};
use crate::resolver::{INVALID_ROOM, Response, resolve};
use crate::world::World;

/// Returned for any command sent after the player has died.
pub const DEAD: &str = "You are dead. Reset the game to play again.";

/// Stateless command interpreter over a fixed world.
pub struct FictionEngine {
    world: World,
    tagger: Box<dyn Tagger>,
}

impl FictionEngine {
    /// Create an engine over `world` using the bundled lexicon tagger.
    pub fn new(world: World) -> Self {
        Self::with_tagger(world, LexiconTagger::new())
    }

    /// Create an engine with a custom tagger.
    pub fn with_tagger(world: World, tagger: impl Tagger + 'static) -> Self {
        Self {
            world,
            tagger: Box::new(tagger),
        }
    }

    /// The world this engine plays.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Tag raw input without validating or resolving it.
    pub fn terms(&self, raw: &str) -> Vec<Term> {
        parse(raw, self.tagger.as_ref())
    }

    /// Interpret one line of player input against `state`.
    ///
    /// Never fails: grammar violations, unknown rooms and a dead player
    /// all come back as ordinary bot messages with `state` unchanged.
    pub fn submit(&self, raw: &str, state: &GameState) -> Response {
        if state.is_dead() {
            return Response::unchanged(DEAD, state);
        }

        let terms = self.terms(raw);
        if let Some(message) = validate(&terms) {
            return Response {
                message,
                new_state: state.clone(),
            };
        }

        resolve(&self.world, &terms, state)
    }

    /// Narrate a room as if the player typed "look" there.
    pub fn look_at(&self, room_name: &str, state: &GameState) -> Message {
        match self.world.require_room(room_name) {
            Ok(room) => {
                let reply = room
                    .behavior
                    .handle(&Verb::Look, state, &[Term::verb("look")]);
                Message::bot(reply.message)
            }
            Err(e) => {
                warn!(error = %e, "cannot narrate room");
                Message::bot(INVALID_ROOM)
            }
        }
    }
}
