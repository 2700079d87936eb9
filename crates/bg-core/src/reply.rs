use crate::state::GameState;

/// What a verb handler hands back: the text to show and the next state.
///
/// An object handler declines a verb by replying with an empty message;
/// the resolver then answers with a fixed fallback and discards `state`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Narrative response. Empty means "not handled".
    pub message: String,
    /// The state after the action.
    pub state: GameState,
}

impl Reply {
    /// A reply carrying a new state.
    pub fn new(message: impl Into<String>, state: GameState) -> Self {
        Self {
            message: message.into(),
            state,
        }
    }

    /// A reply that leaves the state as it was.
    pub fn unchanged(message: impl Into<String>, state: &GameState) -> Self {
        Self::new(message, state.clone())
    }

    /// Decline the verb.
    pub fn decline(state: &GameState) -> Self {
        Self::new(String::new(), state.clone())
    }

    /// Whether the handler declined.
    pub fn is_declined(&self) -> bool {
        self.message.is_empty()
    }
}
