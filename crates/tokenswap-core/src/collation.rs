//! Locale-style string ordering for catalog presentation.
//!
//! Approximates the default en-US collation used by browsers:
//!
//! 1. **Primary**: case-insensitive comparison where punctuation sorts before
//!    digits and digits sort before letters.
//! 2. **Tertiary**: at the first position differing only by case, lowercase
//!    sorts before uppercase (`usd` < `USD`).
//! 3. Raw code point order as the final tie-breaker so the ordering is total.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
    Other,
}

fn classify(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Whitespace
    } else if ch.is_ascii_punctuation() {
        CharClass::Punctuation
    } else if ch.is_numeric() {
        CharClass::Digit
    } else if ch.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Other
    }
}

fn punctuation_rank(ch: char) -> u32 {
    match ch {
        '_' => 0,
        '-' => 1,
        ',' => 2,
        ';' => 3,
        ':' => 4,
        '!' => 5,
        '?' => 6,
        '.' => 7,
        other => 8 + u32::from(other),
    }
}

fn fold(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

fn primary_key(ch: char) -> (CharClass, u32) {
    let class = classify(ch);
    let weight = match class {
        CharClass::Punctuation => punctuation_rank(ch),
        _ => u32::from(fold(ch)),
    };
    (class, weight)
}

/// Compare two strings with locale-style collation.
pub fn collate(left: &str, right: &str) -> Ordering {
    let primary = left
        .chars()
        .map(primary_key)
        .cmp(right.chars().map(primary_key));
    if primary != Ordering::Equal {
        return primary;
    }

    for (l, r) in left.chars().zip(right.chars()) {
        if l == r {
            continue;
        }
        match (l.is_lowercase(), r.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }

    left.cmp(right)
}
