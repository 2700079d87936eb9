//! Sentence normalization, tagging, and grammar validation.

mod normalize;
mod postprocess;
mod tagger;
mod validate;

pub use normalize::{expand_shorthand, normalize};
pub use postprocess::post_process;
pub use tagger::{LexiconTagger, Tagger};
pub use validate::{Violation, check, validate};

use bg_core::Term;

/// Run raw player input through normalization, tagging and post-processing.
pub fn parse(input: &str, tagger: &dyn Tagger) -> Vec<Term> {
    let sentence = normalize(input);
    post_process(tagger.tag(&sentence))
}
