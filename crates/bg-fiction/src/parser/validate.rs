//! Grammar gatekeeping: exactly one verb, and it comes first.

use std::fmt;

use bg_core::{Message, Term};

/// A broken grammar rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Nothing was typed.
    Empty,
    /// More than one verb in the sentence.
    MultipleVerbs,
    /// The sentence does not open with a verb.
    VerbNotFirst,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "Type a command that starts with a verb, like \"look\"",
            Self::MultipleVerbs => "You can use sentences with only one verb",
            Self::VerbNotFirst => "First word must be a verb",
        })
    }
}

/// Collect every rule the term sequence breaks, in rule order.
pub fn check(terms: &[Term]) -> Vec<Violation> {
    let Some(first) = terms.first() else {
        return vec![Violation::Empty];
    };

    let mut violations = Vec::new();
    if terms.iter().filter(|t| t.is_verb()).count() > 1 {
        violations.push(Violation::MultipleVerbs);
    }
    if !first.is_verb() {
        violations.push(Violation::VerbNotFirst);
    }
    violations
}

/// Reject malformed commands.
///
/// Returns a single bot message joining every violation with " and ", or
/// `None` when the command may proceed to resolution.
pub fn validate(terms: &[Term]) -> Option<Message> {
    let violations = check(terms);
    if violations.is_empty() {
        return None;
    }
    let content = violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" and ");
    Some(Message::bot(content))
}
