//! Corrections for words the generic tagger gets wrong in this game.

use bg_core::{Tag, Term};

/// Game vocabulary with the category it must be read as.
const FORCED: &[(&str, Tag)] = &[
    ("train", Tag::Noun),
    ("open", Tag::Verb),
    ("walk", Tag::Verb),
    ("slap", Tag::Verb),
    ("inventory", Tag::Verb),
];

/// Patch tagger output for the game's fixed vocabulary.
///
/// A listed word is replaced by a bare `{Verb}` or `{Noun}` term in the
/// matching chunk. Every other term keeps its tags and only has its text
/// lower-cased.
pub fn post_process(terms: Vec<Term>) -> Vec<Term> {
    terms.into_iter().map(patch).collect()
}

fn patch(term: Term) -> Term {
    let text = term.text.to_lowercase();
    match FORCED.iter().find(|(word, _)| *word == text) {
        Some((_, Tag::Noun)) => Term::noun(text),
        Some(_) => Term::verb(text),
        None => Term { text, ..term },
    }
}
