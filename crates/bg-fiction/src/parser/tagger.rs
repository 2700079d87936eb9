//! Part-of-speech tagging.

use bg_core::{Chunk, Tag, Term};

/// Turns a normalized sentence into tagged terms.
///
/// Implementations must be deterministic: the same sentence always yields
/// the same terms.
pub trait Tagger {
    /// Tag every word of `sentence`, in order.
    fn tag(&self, sentence: &str) -> Vec<Term>;
}

/// Common English verbs in their bare form.
const VERBS: &[&str] = &[
    "look", "go", "pay", "give", "take", "grab", "get", "put", "drop", "use", "talk", "speak",
    "ask", "chat", "shout", "say", "tell", "approach", "join", "board", "bargain", "negotiate",
    "argue", "reduce", "lower", "decrease", "close", "lock", "unlock", "enter", "exit", "wait",
    "end", "hide", "leave", "run", "jump", "dance", "climb", "push", "pull", "read", "eat",
    "drink", "sit", "stand", "find", "see", "want", "train",
];

const ADJECTIVES: &[&str] = &[
    "open", "old", "dark", "black", "red", "strange", "ancient", "dirty", "big", "small",
    "closed", "quiet",
];

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "her", "some",
];

const PREPOSITIONS: &[&str] = &[
    "to", "at", "with", "on", "in", "into", "towards", "toward", "from", "of", "for", "by",
    "near", "behind", "under", "over", "through",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "then"];

const ADVERBS: &[&str] = &[
    "back", "away", "quietly", "slowly", "quickly", "now", "here", "there", "again",
];

const PRONOUNS: &[&str] = &["him", "it", "them", "me", "you", "us"];

/// A dictionary tagger for general English prose.
///
/// Words are looked up one at a time without context. Anything the lexicon
/// does not know is read as a noun.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    /// Create a tagger with the built-in lexicon.
    pub fn new() -> Self {
        Self
    }

    fn tag_word(word: &str) -> Term {
        if VERBS.contains(&word) {
            Term::new(word, [Tag::Verb, Tag::Infinitive], Chunk::Verb)
        } else if ADJECTIVES.contains(&word) {
            Term::new(word, [Tag::Adjective], Chunk::Adjective)
        } else if DETERMINERS.contains(&word) {
            Term::new(word, [Tag::Determiner], Chunk::Pivot)
        } else if PREPOSITIONS.contains(&word) {
            Term::new(word, [Tag::Preposition], Chunk::Pivot)
        } else if CONJUNCTIONS.contains(&word) {
            Term::new(word, [Tag::Conjunction], Chunk::Pivot)
        } else if ADVERBS.contains(&word) {
            Term::new(word, [Tag::Adverb], Chunk::Pivot)
        } else if PRONOUNS.contains(&word) {
            Term::new(word, [Tag::Pronoun], Chunk::Noun)
        } else if word.chars().all(|c| c.is_ascii_digit()) {
            Term::new(word, [Tag::Value], Chunk::Noun)
        } else if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") {
            Term::new(word, [Tag::Noun, Tag::Plural], Chunk::Noun)
        } else {
            Term::new(word, [Tag::Noun, Tag::Singular], Chunk::Noun)
        }
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, sentence: &str) -> Vec<Term> {
        sentence
            .split_whitespace()
            .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|word| !word.is_empty())
            .map(|word| Self::tag_word(&word.to_lowercase()))
            .collect()
    }
}
