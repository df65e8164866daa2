//! Text preprocessing shared by the extraction tiers.

use std::sync::LazyLock;

use regex::Regex;

/// `+` immediately before another sign character is redundant.
static REDUNDANT_SIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+\s*([+-])").expect("redundant-sign regex"));

/// Normalizes sign characters so downstream patterns only ever see `-`.
///
/// Folds the Unicode minus sign, en-dash, and em-dash to hyphen-minus and
/// drops a stray `+` in front of a sign character (`+-3` becomes `-3`).
pub fn normalize(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{2212}' | '\u{2013}' | '\u{2014}' => folded.push('-'),
            _ => folded.push(ch),
        }
    }
    REDUNDANT_SIGN.replace_all(&folded, "$1").into_owned()
}

/// Clamps a byte index down to the nearest char boundary.
pub(crate) fn floor_char_boundary(text: &str, mut i: usize) -> usize {
    if i >= text.len() {
        return text.len();
    }
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Clamps a byte index up to the nearest char boundary.
pub(crate) fn ceil_char_boundary(text: &str, mut i: usize) -> usize {
    if i >= text.len() {
        return text.len();
    }
    while !text.is_char_boundary(i) {
        i += 1;
    }
    i
}
