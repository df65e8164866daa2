//! Numeric-token scanning.
//!
//! The extractor works over a list of numbers found in the (normalized)
//! problem text, each annotated with the unit that immediately follows it,
//! if any. Token byte offsets double as identity: the consumed-offset set in
//! the extractor refers to these offsets to guarantee that one literal
//! number never satisfies two variables.

use std::sync::LazyLock;

use regex::Regex;

/// Recognized unit spellings, longest-prefix alternatives first. This is the
/// fixed known set; anything else is treated as "no unit".
static NUMBER_WITH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)([+-]?\d+\.?\d*)\s*(m/s[²2]|m/s|m|s|kg|n|v|a|w|ω|°|degrees?|seconds?|meters?|kilograms?|newtons?|volts?|amperes?|amps?|watts?|ohms?)?",
    )
    .expect("number token regex")
});

/// One number found in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberToken {
    /// Byte offset of the number (including its sign) in the scanned text.
    pub offset: usize,

    /// The literal number as written, sign included.
    pub value: String,

    /// Canonical unit (`"m/s2"`, `"kg"`, `"°"`, ...), or empty when the
    /// number has no adjacent recognized unit.
    pub unit: String,
}

impl NumberToken {
    /// Returns `true` if `pos` falls inside this token's number literal.
    pub fn covers(&self, pos: usize) -> bool {
        pos >= self.offset && pos < self.offset + self.value.len()
    }
}

/// Maps a unit spelling to its canonical short form.
///
/// Long word forms collapse to the symbol; superscript `²` becomes `2`.
/// Unknown spellings pass through lowercased.
pub fn canonical_unit(raw: &str) -> String {
    let lowered = raw.to_lowercase().replace('²', "2");
    match lowered.as_str() {
        "second" | "seconds" | "sec" => "s".to_string(),
        "meter" | "meters" => "m".to_string(),
        "kilogram" | "kilograms" => "kg".to_string(),
        "newton" | "newtons" => "n".to_string(),
        "volt" | "volts" => "v".to_string(),
        "ampere" | "amperes" | "amp" | "amps" => "a".to_string(),
        "watt" | "watts" => "w".to_string(),
        "ohm" | "ohms" => "ω".to_string(),
        "degree" | "degrees" => "°".to_string(),
        _ => lowered,
    }
}

/// Scans `text` for numeric tokens with their adjacent units, left to right.
pub fn scan_numbers(text: &str) -> Vec<NumberToken> {
    NUMBER_WITH_UNIT
        .captures_iter(text)
        .filter_map(|caps| {
            let number = caps.get(1)?;
            let unit = caps
                .get(2)
                .map(|m| canonical_unit(m.as_str()))
                .unwrap_or_default();
            Some(NumberToken {
                offset: number.start(),
                value: number.as_str().to_string(),
                unit,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn units(text: &str) -> Vec<(String, String)> {
        scan_numbers(text)
            .into_iter()
            .map(|t| (t.value, t.unit))
            .collect()
    }

    #[test]
    fn scans_kinematics_sentence() {
        let toks = units("accelerates at 5 m/s² for 10 seconds");
        assert_eq!(
            toks,
            vec![
                ("5".to_string(), "m/s2".to_string()),
                ("10".to_string(), "s".to_string()),
            ]
        );
    }

    #[test]
    fn distinguishes_velocity_from_acceleration_units() {
        let toks = units("from 10 m/s to 30 m/s at 4 m/s2");
        assert_eq!(toks[0].1, "m/s");
        assert_eq!(toks[1].1, "m/s");
        assert_eq!(toks[2].1, "m/s2");
    }

    #[test]
    fn electrical_units_fold_case() {
        let toks = units("12V across 4Ω carrying 2 A");
        assert_eq!(
            toks,
            vec![
                ("12".to_string(), "v".to_string()),
                ("4".to_string(), "ω".to_string()),
                ("2".to_string(), "a".to_string()),
            ]
        );
    }

    #[test]
    fn long_unit_words_canonicalize() {
        assert_eq!(canonical_unit("degrees"), "°");
        assert_eq!(canonical_unit("kilograms"), "kg");
        assert_eq!(canonical_unit("Ohms"), "ω");
        assert_eq!(canonical_unit("m/s²"), "m/s2");
        let toks = units("turns 45 degrees in 3 seconds");
        assert_eq!(toks[0].1, "°");
        assert_eq!(toks[1].1, "s");
    }

    #[test]
    fn keeps_sign_on_value() {
        let toks = units("decelerates at -4.25 m/s²");
        assert_eq!(toks[0].0, "-4.25");
    }

    #[test]
    fn numbers_without_units() {
        let toks = units("a coefficient of friction of 0.5");
        assert_eq!(toks, vec![("0.5".to_string(), String::new())]);
    }

    #[test]
    fn covers_uses_byte_span() {
        let toks = scan_numbers("at 4.25 m/s²");
        assert!(toks[0].covers(3));
        assert!(toks[0].covers(6));
        assert!(!toks[0].covers(7));
    }
}
