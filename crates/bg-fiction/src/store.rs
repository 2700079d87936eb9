//! The single authoritative game state, with publish-on-write and autosave.

use bg_core::GameState;
use tracing::{info, warn};

use crate::error::{FictionError, FictionResult};
use crate::persistence::{SaveSlot, decode, encode};
use crate::world::World;

/// Handle returned by [`GameStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&GameState)>;

/// Holds the current [`GameState`] and tells subscribers about every change.
///
/// Every [`set_state`](Self::set_state) replaces the whole value before any
/// subscriber runs, so no subscriber ever sees a half-applied update. Living
/// states are written to the save slot when autosave is on; a lethal state
/// is published but never saved, leaving the last living state in the slot.
pub struct GameStore {
    state: GameState,
    slot: Box<dyn SaveSlot>,
    autosave: bool,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl GameStore {
    /// A store holding the initial state, saving to `slot`.
    pub fn new(slot: impl SaveSlot + 'static) -> Self {
        Self {
            state: GameState::initial(),
            slot: Box::new(slot),
            autosave: true,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Turn autosave on or off.
    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    /// The current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether the current state is dead.
    pub fn is_dead(&self) -> bool {
        self.state.is_dead()
    }

    /// Register a callback. It is called once right away with the current
    /// state and again after every change.
    pub fn subscribe(&mut self, mut callback: impl FnMut(&GameState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        callback(&self.state);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Replace the state, notify subscribers, then autosave if alive.
    pub fn set_state(&mut self, state: GameState) {
        self.state = state;
        self.publish();
        if !self.autosave || self.state.is_dead() {
            return;
        }
        if let Err(e) = self.save() {
            warn!(error = %e, "autosave failed");
        }
    }

    /// Write the current state to the slot.
    pub fn save(&mut self) -> FictionResult<()> {
        let contents = encode(&self.state)?;
        self.slot.write(&contents)
    }

    /// Clear the slot and publish a fresh game.
    pub fn reset(&mut self) {
        if let Err(e) = self.slot.clear() {
            warn!(error = %e, "failed to clear save slot");
        }
        self.state = GameState::initial();
        info!("game reset");
        self.publish();
    }

    /// Read the saved game, if there is a usable one.
    ///
    /// Missing, unreadable and undecodable saves all count as no save, as
    /// do a save whose room is not in `world` and a dead one.
    pub fn load(&self, world: &World) -> Option<GameState> {
        match self.read_saved(world) {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, "ignoring saved game");
                None
            }
        }
    }

    /// Whether [`load`](Self::load) would find a game.
    pub fn has_saved_game(&self, world: &World) -> bool {
        self.load(world).is_some()
    }

    fn read_saved(&self, world: &World) -> FictionResult<Option<GameState>> {
        let Some(contents) = self.slot.read()? else {
            return Ok(None);
        };
        let state = decode(&contents)?;
        if !world.contains(&state.current_room) {
            return Err(FictionError::CorruptSave(format!(
                "unknown room '{}'",
                state.current_room
            )));
        }
        if state.is_dead() {
            return Err(FictionError::CorruptSave(format!(
                "health {} in '{}'",
                state.health, state.current_room
            )));
        }
        Ok(Some(state))
    }

    fn publish(&mut self) {
        for (_, callback) in &mut self.subscribers {
            callback(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemorySlot;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store() -> (GameStore, MemorySlot) {
        let slot = MemorySlot::new();
        (GameStore::new(slot.clone()), slot)
    }

    #[test]
    fn set_state_publishes_and_saves() {
        let (mut store, slot) = store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |s| sink.borrow_mut().push(s.current_room.clone()));

        store.set_state(GameState::initial().moved_to("Street"));

        assert_eq!(*seen.borrow(), vec!["Train Station", "Street"]);
        let saved = decode(&slot.contents().unwrap()).unwrap();
        assert_eq!(saved.current_room, "Street");
    }

    #[test]
    fn lethal_state_is_not_saved() {
        let (mut store, slot) = store();
        let alive = GameState::initial().moved_to("Village Center");
        store.set_state(alive.clone());
        store.set_state(alive.killed());

        assert!(store.is_dead());
        assert_eq!(decode(&slot.contents().unwrap()).unwrap(), alive);
    }

    #[test]
    fn autosave_off_never_writes() {
        let slot = MemorySlot::new();
        let mut store = GameStore::new(slot.clone()).with_autosave(false);
        store.set_state(GameState::initial().moved_to("Street"));
        assert!(slot.contents().is_none());
    }

    #[test]
    fn reset_clears_slot_and_publishes_initial() {
        let (mut store, slot) = store();
        store.set_state(GameState::initial().moved_to("Street").damaged(20));
        let last = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&last);
        store.subscribe(move |s| *sink.borrow_mut() = Some(s.clone()));

        store.reset();

        assert_eq!(*store.state(), GameState::initial());
        assert_eq!(last.borrow().clone(), Some(GameState::initial()));
        assert!(slot.contents().is_none());
        assert!(!store.has_saved_game(&World::benagram().unwrap()));
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let (mut store, _) = store();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_state(GameState::initial().moved_to("Street"));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn load_round_trip() {
        let (mut store, _) = store();
        let state = GameState::initial()
            .moved_to("Bus Stand")
            .with_item("charm")
            .with_flag("Talked to old woman");
        store.set_state(state.clone());
        assert_eq!(store.load(&World::benagram().unwrap()), Some(state));
    }

    #[test]
    fn unusable_saves_count_as_none() {
        let world = World::benagram().unwrap();
        let garbage = GameStore::new(MemorySlot::with_contents("{nope"));
        assert_eq!(garbage.load(&world), None);

        let lost = GameStore::new(MemorySlot::with_contents(
            r#"{"currentRoom":"Atlantis","inventory":[],"health":100}"#,
        ));
        assert_eq!(lost.load(&world), None);
        assert!(!lost.has_saved_game(&world));
    }

    #[test]
    fn dead_saves_count_as_none() {
        let world = World::benagram().unwrap();
        for health in [0, -15] {
            let dead = GameStore::new(MemorySlot::with_contents(format!(
                r#"{{"currentRoom":"Village Center","inventory":[],"health":{health}}}"#
            )));
            assert_eq!(dead.load(&world), None);
            assert!(!dead.has_saved_game(&world));
        }

        let alive = GameStore::new(MemorySlot::with_contents(
            r#"{"currentRoom":"Village Center","inventory":[],"health":1}"#,
        ));
        assert!(alive.has_saved_game(&world));
    }
}
