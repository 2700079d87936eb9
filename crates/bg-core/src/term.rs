use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A grammatical tag attached to a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// Any verb form.
    Verb,
    /// Bare verb form ("go", "look").
    Infinitive,
    /// Any noun.
    Noun,
    /// Singular noun.
    Singular,
    /// Plural noun.
    Plural,
    /// Adjective.
    Adjective,
    /// Adverb.
    Adverb,
    /// Preposition ("to", "at").
    Preposition,
    /// Determiner ("the", "a").
    Determiner,
    /// Conjunction ("and", "or").
    Conjunction,
    /// Pronoun ("him", "it").
    Pronoun,
    /// Numeric value.
    Value,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The role a term plays in its sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chunk {
    /// Part of a verb phrase.
    Verb,
    /// Part of a noun phrase.
    Noun,
    /// Part of an adjective phrase.
    Adjective,
    /// Glue between phrases (prepositions, conjunctions, determiners).
    Pivot,
}

/// A single tokenized, tagged word.
///
/// Terms are plain records so post-processing can return copies with
/// overridden tags and chunk. They live only for the duration of a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Normalized text of the word.
    pub text: String,
    /// Grammatical tags.
    pub tags: BTreeSet<Tag>,
    /// Phrase classification.
    pub chunk: Chunk,
}

impl Term {
    /// Create a term with the given text, tags and chunk.
    pub fn new(text: impl Into<String>, tags: impl IntoIterator<Item = Tag>, chunk: Chunk) -> Self {
        Self {
            text: text.into(),
            tags: tags.into_iter().collect(),
            chunk,
        }
    }

    /// A term forced to be a bare verb.
    pub fn verb(text: impl Into<String>) -> Self {
        Self::new(text, [Tag::Verb], Chunk::Verb)
    }

    /// A term forced to be a bare noun.
    pub fn noun(text: impl Into<String>) -> Self {
        Self::new(text, [Tag::Noun], Chunk::Noun)
    }

    /// Whether this term carries the given tag.
    pub fn has(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Whether this term sits in a verb chunk and is tagged as a verb.
    pub fn is_verb(&self) -> bool {
        self.chunk == Chunk::Verb && self.has(Tag::Verb)
    }

    /// Whether this term sits in a noun chunk and is tagged as a noun.
    pub fn is_noun(&self) -> bool {
        self.chunk == Chunk::Noun && self.has(Tag::Noun)
    }
}

/// Whether any term's lower-cased text equals one of `words`.
pub fn mentions(terms: &[Term], words: &[&str]) -> bool {
    terms
        .iter()
        .any(|t| words.iter().any(|w| t.text.eq_ignore_ascii_case(w)))
}
