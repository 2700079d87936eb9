//! Lower-casing and shorthand expansion ahead of tagging.

/// Single-letter aliases and their expansions.
const SHORTHAND: &[(&str, &str)] = &[
    ("l", "look"),
    ("i", "inventory"),
    ("n", "north"),
    ("s", "south"),
    ("e", "east"),
    ("w", "west"),
];

/// Expand a whole token if it is a known shorthand.
pub fn expand_shorthand(word: &str) -> &str {
    SHORTHAND
        .iter()
        .find(|(short, _)| *short == word)
        .map(|(_, long)| *long)
        .unwrap_or(word)
}

/// Lower-case, trim, and expand shorthand tokens.
///
/// Tokens are split on single spaces and rejoined the same way, so runs of
/// spaces inside the sentence survive untouched.
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .trim()
        .split(' ')
        .map(expand_shorthand)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  LOOK Train  "), "look train");
    }

    #[test]
    fn expands_whole_tokens_only() {
        assert_eq!(normalize("l"), "look");
        assert_eq!(normalize("go w"), "go west");
        assert_eq!(normalize("i"), "inventory");
        assert_eq!(normalize("go n"), "go north");
        assert_eq!(normalize("go s"), "go south");
        assert_eq!(normalize("go e"), "go east");
        assert_eq!(normalize("look ls"), "look ls");
    }

    #[test]
    fn unknown_tokens_pass_through() {
        assert_eq!(normalize("pay driver"), "pay driver");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn deterministic() {
        assert_eq!(normalize("Go W"), normalize("Go W"));
    }
}
