//! Turns a raw answer key into the set of correct option texts.
//!
//! Bank files write answers either as the literal option text, as letter
//! codes (`"B"`, `"A & C"`, `"A, C"`, `"A and C"`) or as a list of option
//! texts. Parsing never fails: an answer that yields no usable letters falls
//! back to the trimmed raw text, even when that text matches no option.

use crate::model::{AnswerKey, CorrectOptions};

/// Parse `answer` against `options`.
///
/// A list is taken as the correct set as-is. For text, an exact (trimmed)
/// match on an option's text wins over letter parsing.
#[must_use]
pub fn parse_correct_options(answer: &AnswerKey, options: &[String]) -> CorrectOptions {
    match answer {
        AnswerKey::List(list) => list.iter().cloned().collect(),
        AnswerKey::Text(text) => parse_text(text, options),
    }
}

fn parse_text(answer: &str, options: &[String]) -> CorrectOptions {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        return CorrectOptions::default();
    }

    if let Some(exact) = options.iter().find(|o| o.trim() == trimmed) {
        return CorrectOptions::single(exact.clone());
    }

    let parsed: CorrectOptions = letter_codes(trimmed)
        .into_iter()
        .filter_map(letter_index)
        .filter_map(|idx| options.get(idx).cloned())
        .collect();

    if parsed.is_empty() {
        CorrectOptions::single(trimmed)
    } else {
        parsed
    }
}

/// Split on `,`, `&` and any case of "and"; pieces are trimmed and upper-cased.
fn letter_codes(text: &str) -> Vec<String> {
    replace_and(text)
        .split([',', '&'])
        .map(|piece| piece.trim().to_uppercase())
        .filter(|piece| !piece.is_empty())
        .collect()
}

fn replace_and(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while !rest.is_empty() {
        if rest.get(..3).is_some_and(|head| head.eq_ignore_ascii_case("and")) {
            out.push('&');
            rest = &rest[3..];
            continue;
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            out.push(ch);
        }
        rest = chars.as_str();
    }
    out
}

/// Only the first character of a code counts: `A` → 0 … `Z` → 25.
fn letter_index(code: String) -> Option<usize> {
    match code.chars().next()? {
        ch @ 'A'..='Z' => Some(ch as usize - 'A' as usize),
        _ => None,
    }
}
