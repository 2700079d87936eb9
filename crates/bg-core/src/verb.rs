use std::fmt;

/// Verb categories handlers dispatch on.
///
/// Words only share a category where every handler treats them alike
/// ("pay"/"give", "wait"/"end"). Words some handlers accept and others
/// ignore ("ask", "chat", "shout", "join") keep their own category.
/// Anything unrecognized lands in [`Verb::Custom`] so handlers always have
/// an explicit default arm.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Look around or at something.
    Look,
    /// Move somewhere.
    Go,
    /// Talk to someone ("talk", "speak").
    Talk,
    /// Ask someone something.
    Ask,
    /// Make small talk.
    Chat,
    /// Raise your voice.
    Shout,
    /// Walk up to someone.
    Approach,
    /// Join a group.
    Join,
    /// Get on a vehicle.
    Board,
    /// Hand over money or an item.
    Pay,
    /// Pick something up.
    Take,
    /// Haggle over a price.
    Bargain,
    /// Work a door or lock.
    Door,
    /// Go inside something.
    Enter,
    /// Step out of something.
    Exit,
    /// Let time pass.
    Wait,
    /// Take cover.
    Hide,
    /// Walk away.
    Leave,
    /// List carried items.
    Inventory,
    /// Any other verb, kept verbatim.
    Custom(String),
}

impl Verb {
    /// Classify a verb word. Matching is case-insensitive.
    pub fn parse(word: &str) -> Self {
        match word.to_lowercase().as_str() {
            "look" => Self::Look,
            "go" => Self::Go,
            "talk" | "speak" => Self::Talk,
            "ask" => Self::Ask,
            "chat" => Self::Chat,
            "shout" => Self::Shout,
            "approach" => Self::Approach,
            "join" => Self::Join,
            "board" => Self::Board,
            "pay" | "give" => Self::Pay,
            "take" => Self::Take,
            "bargain" | "negotiate" | "argue" | "reduce" | "lower" | "decrease" => Self::Bargain,
            "open" | "close" | "lock" | "unlock" => Self::Door,
            "enter" => Self::Enter,
            "exit" => Self::Exit,
            "wait" | "end" => Self::Wait,
            "hide" => Self::Hide,
            "leave" => Self::Leave,
            "inventory" => Self::Inventory,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Display name for this category.
    pub fn name(&self) -> &str {
        match self {
            Self::Look => "look",
            Self::Go => "go",
            Self::Talk => "talk",
            Self::Ask => "ask",
            Self::Chat => "chat",
            Self::Shout => "shout",
            Self::Approach => "approach",
            Self::Join => "join",
            Self::Board => "board",
            Self::Pay => "pay",
            Self::Take => "take",
            Self::Bargain => "bargain",
            Self::Door => "open",
            Self::Enter => "enter",
            Self::Exit => "exit",
            Self::Wait => "wait",
            Self::Hide => "hide",
            Self::Leave => "leave",
            Self::Inventory => "inventory",
            Self::Custom(word) => word,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonyms_share_a_category() {
        assert_eq!(Verb::parse("talk"), Verb::Talk);
        assert_eq!(Verb::parse("speak"), Verb::Talk);
        assert_eq!(Verb::parse("pay"), Verb::Pay);
        assert_eq!(Verb::parse("give"), Verb::Pay);
        assert_eq!(Verb::parse("negotiate"), Verb::Bargain);
        assert_eq!(Verb::parse("unlock"), Verb::Door);
        assert_eq!(Verb::parse("end"), Verb::Wait);
    }

    #[test]
    fn partial_synonyms_stay_apart() {
        assert_eq!(Verb::parse("ask"), Verb::Ask);
        assert_eq!(Verb::parse("chat"), Verb::Chat);
        assert_eq!(Verb::parse("shout"), Verb::Shout);
        assert_eq!(Verb::parse("join"), Verb::Join);
        assert_eq!(Verb::parse("walk"), Verb::Custom("walk".to_string()));
        assert_eq!(Verb::parse("grab"), Verb::Custom("grab".to_string()));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Verb::parse("LOOK"), Verb::Look);
        assert_eq!(Verb::parse("Hide"), Verb::Hide);
    }

    #[test]
    fn unknown_words_are_custom() {
        assert_eq!(Verb::parse("slap"), Verb::Custom("slap".to_string()));
        assert_eq!(Verb::parse("slap").name(), "slap");
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Verb::Inventory.to_string(), "inventory");
        assert_eq!(Verb::Custom("dance".into()).to_string(), "dance");
    }
}
