//! A playable game: an engine plus the store it publishes into.

use bg_core::{GameState, Message};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::engine::FictionEngine;
use crate::error::FictionResult;
use crate::persistence::{FileSlot, SaveSlot};
use crate::store::{GameStore, SubscriptionId};
use crate::world::World;

/// An interactive Benagram session.
///
/// All player input goes through [`process`](Self::process); it is the only
/// way the session's state changes apart from starting over.
pub struct GameSession {
    engine: FictionEngine,
    store: GameStore,
}

impl GameSession {
    /// A session over the Benagram world, saving to the file slot `config`
    /// describes.
    pub fn new(config: &GameConfig) -> FictionResult<Self> {
        let engine = FictionEngine::new(World::benagram()?);
        Ok(Self::with_slot(engine, FileSlot::new(config.save_path())).with_autosave(config.autosave))
    }

    /// A session over any engine and slot.
    pub fn with_slot(engine: FictionEngine, slot: impl SaveSlot + 'static) -> Self {
        Self {
            engine,
            store: GameStore::new(slot),
        }
    }

    fn with_autosave(mut self, autosave: bool) -> Self {
        self.store = self.store.with_autosave(autosave);
        self
    }

    /// Throw away any save and begin at the station.
    pub fn start_new_game(&mut self) -> Message {
        info!("starting new game");
        self.reset()
    }

    /// Resume the saved game, or start a new one if there is none.
    pub fn continue_game(&mut self) -> Message {
        match self.store.load(self.engine.world()) {
            Some(state) => {
                info!(room = %state.current_room, "loaded saved game");
                self.store.set_state(state);
                self.look()
            }
            None => self.start_new_game(),
        }
    }

    /// Whether a usable save exists.
    pub fn has_saved_game(&self) -> bool {
        self.store.has_saved_game(self.engine.world())
    }

    /// Peek at the saved game without loading it.
    pub fn saved_game(&self) -> Option<GameState> {
        self.store.load(self.engine.world())
    }

    /// Run one line of player input and publish the result.
    pub fn process(&mut self, raw: &str) -> Message {
        let response = self.engine.submit(raw, self.store.state());
        if response.new_state != *self.store.state() {
            debug!(room = %response.new_state.current_room, health = response.new_state.health, "state changed");
        }
        self.store.set_state(response.new_state);
        response.message
    }

    /// Narrate the current room.
    pub fn look(&self) -> Message {
        let state = self.store.state();
        self.engine.look_at(&state.current_room, state)
    }

    /// Clear the save, return to the station, and narrate it.
    pub fn reset(&mut self) -> Message {
        self.store.reset();
        self.look()
    }

    /// The current state.
    pub fn state(&self) -> &GameState {
        self.store.state()
    }

    /// Whether the player has died.
    pub fn is_dead(&self) -> bool {
        self.store.is_dead()
    }

    /// Watch state changes. See [`GameStore::subscribe`].
    pub fn subscribe(&mut self, callback: impl FnMut(&GameState) + 'static) -> SubscriptionId {
        self.store.subscribe(callback)
    }

    /// Stop watching state changes.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }
}
