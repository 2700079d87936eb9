use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Room every new game starts in.
pub const START_ROOM: &str = "Train Station";

/// Items carried at the start of a new game, in acquisition order.
pub const STARTING_ITEMS: [&str; 4] = ["sunglasses", "100 Rupee Note", "20 Rupee Note", "letter"];

/// Health at the start of a new game.
pub const STARTING_HEALTH: i32 = 100;

/// The player's state for a session.
///
/// `GameState` is a value: handlers never mutate the state they are given,
/// they derive a new one through the builder-style helpers below.
/// `health` only goes down until the game is reset; at zero or below the
/// player is dead and the state is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Name of the room the player is in.
    pub current_room: String,
    /// Carried items in acquisition order. Duplicates are allowed.
    pub inventory: Vec<String>,
    /// Story flags ("Talked to old woman"), kept apart from physical items.
    #[serde(default)]
    pub flags: BTreeSet<String>,
    /// Remaining health.
    pub health: i32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

impl GameState {
    /// The canonical state of a fresh game.
    pub fn initial() -> Self {
        Self {
            current_room: START_ROOM.to_string(),
            inventory: STARTING_ITEMS.iter().map(|s| s.to_string()).collect(),
            flags: BTreeSet::new(),
            health: STARTING_HEALTH,
        }
    }

    /// Whether the player has died.
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Whether an item with this exact name is carried.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Whether every listed item is carried.
    pub fn has_all(&self, items: &[&str]) -> bool {
        items.iter().all(|item| self.has_item(item))
    }

    /// Whether a story flag is set.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    /// A copy of this state in another room.
    pub fn moved_to(&self, room: &str) -> Self {
        Self {
            current_room: room.to_string(),
            ..self.clone()
        }
    }

    /// A copy with the first occurrence of `item` removed.
    pub fn without_item(&self, item: &str) -> Self {
        let mut next = self.clone();
        if let Some(pos) = next.inventory.iter().position(|i| i == item) {
            next.inventory.remove(pos);
        }
        next
    }

    /// A copy with `item` appended to the inventory.
    pub fn with_item(&self, item: &str) -> Self {
        let mut next = self.clone();
        next.inventory.push(item.to_string());
        next
    }

    /// A copy with a story flag set.
    pub fn with_flag(&self, flag: &str) -> Self {
        let mut next = self.clone();
        next.flags.insert(flag.to_string());
        next
    }

    /// A copy with a story flag cleared.
    pub fn without_flag(&self, flag: &str) -> Self {
        let mut next = self.clone();
        next.flags.remove(flag);
        next
    }

    /// A copy with `amount` health taken away.
    pub fn damaged(&self, amount: i32) -> Self {
        Self {
            health: self.health.saturating_sub(amount),
            ..self.clone()
        }
    }

    /// A copy with health at zero.
    pub fn killed(&self) -> Self {
        Self {
            health: 0,
            ..self.clone()
        }
    }
}
