use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Typed by the player.
    User,
    /// Produced by the game.
    Bot,
}

/// A single line of the session transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The text shown to the player.
    pub content: String,
    /// Who produced it.
    pub sender: Sender,
    /// When it was produced.
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// A message from the game, stamped now.
    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sender: Sender::Bot,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bot_messages_are_stamped() {
        let before = Utc::now();
        let msg = Message::bot("hi");
        assert_eq!(msg.sender, Sender::Bot);
        assert_eq!(msg.content, "hi");
        assert!(msg.created_at >= before);
    }

    #[test]
    fn sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
    }
}
