//! Static pattern and synonym tables for variable extraction.
//!
//! Tier A works off hand-authored phrasing patterns per variable key, most
//! specific first. Tiers B and C work off context-synonym tables paired with
//! unit compatibility. All rule content lives here as data; the matching
//! control flow is in [`crate::extract`].
//!
//! Every pattern captures the number (sign included) as group 1. Trailing
//! unit guards are spelled as character classes (`V(?:[^/]|$)` rejects `V/`)
//! since the regex engine has no lookahead; the one pattern that needs a
//! longer guard carries an explicit `not_followed_by` pattern checked against
//! the text after the match.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// One Tier-A phrasing pattern.
pub struct PhrasePattern {
    /// Case-insensitive pattern with the number as capture group 1.
    pub pattern: &'static str,

    /// When set, a match is rejected if this pattern matches the text
    /// immediately following it.
    pub not_followed_by: Option<&'static str>,
}

const fn p(pattern: &'static str) -> PhrasePattern {
    PhrasePattern {
        pattern,
        not_followed_by: None,
    }
}

const fn p_unless(pattern: &'static str, guard: &'static str) -> PhrasePattern {
    PhrasePattern {
        pattern,
        not_followed_by: Some(guard),
    }
}

/// Tier-A patterns for one variable key.
pub struct KeyPatterns {
    pub key: &'static str,
    pub patterns: &'static [PhrasePattern],
}

/// Extraction order for Tier A. Mass precedes normal force so the
/// N = mg derivation can see an already-extracted mass.
pub static TIER_A_ORDER: &[&str] = &[
    "u",
    "v",
    "a",
    "t",
    "voltage",
    "current",
    "resistance",
    "power",
    "mass",
    "mu",
    "normal_force",
    "force",
    "distance",
    "angle",
    "velocity",
];

pub static KEY_PATTERNS: &[KeyPatterns] = &[
    KeyPatterns {
        key: "u",
        patterns: &[
            p(r"launched\s+with\s+(?:an\s+)?initial\s+speed\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(r"with\s+(?:an\s+)?initial\s+speed\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
            p_unless(
                r"launched\s+at\s+([+-]?\d+\.?\d*)\s*m/s",
                r"^\s*at\s+an?\s+angle",
            ),
            p(r"projectile.*?launched\s+at\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(r"launched\s+with\s+a\s+speed\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(r"launched\s+at\s+a\s+speed\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(r"fired\s+at\s+a\s+speed\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(r"fired\s+at\s+.*?speed\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(r"fired\s+at\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(r"fired\s+with\s+a\s+speed\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(r"thrown\s+with\s+(?:an\s+)?initial\s+speed\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(r"thrown\s+with\s+a\s+speed\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(r"thrown\s+with\s+.*?speed\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(r"thrown\s+at\s+.*?speed\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(
                r"moving\s+(?:backward|forward|upward|downward).*?with\s+(?:an\s+)?initial\s+velocity\s+of\s+([+-]?\d+\.?\d*)",
            ),
            p(r"moving\s+.*?with\s+(?:an\s+)?initial\s+velocity\s+of\s+([+-]?\d+\.?\d*)"),
            p(r"initial\s+velocity\s+of\s+([+-]?\d+\.?\d*)"),
            p(r"initial\s+speed\s+of\s+([+-]?\d+\.?\d*)"),
            p(r"(?:rocket|projectile|ball|object).*?speed\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(r"traveling\s+at\s+(?:an\s+)?initial\s+velocity\s+of\s+([+-]?\d+\.?\d*)"),
            p(r"traveling\s+at\s+([+-]?\d+\.?\d*)\s+m/s"),
            p(r"from\s+([+-]?\d+\.?\d*)\s+m/s"),
            p(r"increases\s+.*?from\s+([+-]?\d+\.?\d*)\s+m/s"),
            p(r"decreases\s+.*?from\s+([+-]?\d+\.?\d*)\s+m/s"),
        ],
    },
    KeyPatterns {
        key: "v",
        patterns: &[
            p(r"final\s+velocity\s+of\s+([+-]?\d+\.?\d*)"),
            p(r"final\s+speed\s+of\s+([+-]?\d+\.?\d*)"),
            p(r"reach\s+(?:a\s+)?velocity\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(r"reach\s+(?:a\s+)?speed\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(r"v\s*=\s*([+-]?\d+\.?\d*)"),
            p(r"to\s+([+-]?\d+\.?\d*)\s+m/s"),
            p(r"increases\s+.*?to\s+([+-]?\d+\.?\d*)\s+m/s"),
            p(r"decreases\s+.*?to\s+([+-]?\d+\.?\d*)\s+m/s"),
            p(r"velocity\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
        ],
    },
    // Applied within a window around the "accelerat" stem; see extract.rs.
    KeyPatterns {
        key: "a",
        patterns: &[
            p(
                r"accelerat[^m]*?(?:forward|backward)?\s*at\s+([+-]?\d+\.?\d*)\s*(?:m/s[²2]|m/s)",
            ),
            p(r"at\s+([+-]?\d+\.?\d*)\s*(?:m/s[²2]|m/s)"),
            p(r"of\s+([+-]?\d+\.?\d*)\s*(?:m/s[²2]|m/s)"),
            p(r"([+-]?\d+\.?\d*)\s*(?:m/s[²2]|m/s)"),
        ],
    },
    // Last match wins for time; see extract.rs.
    KeyPatterns {
        key: "t",
        patterns: &[
            p(
                r"(?:for|after|over)\s+(?:a\s+)?(?:time\s+)?(?:interval\s+of\s+)?([+-]?\d+\.?\d*)\s+seconds?",
            ),
            p(r"(?:for|after|over)\s+([+-]?\d+\.?\d*)\s+seconds?"),
        ],
    },
    KeyPatterns {
        key: "voltage",
        patterns: &[
            p(r"voltage\s+of\s+([+-]?\d+\.?\d*)\s*V\s+across"),
            p(r"voltage\s+of\s+([+-]?\d+\.?\d*)\s*V"),
            p(r"voltage\s+applied\s+across.*?is\s+([+-]?\d+\.?\d*)\s*V"),
            p(r"voltage\s+across\s+.*?is\s+([+-]?\d+\.?\d*)\s*V"),
            p(r"potential\s+difference\s+of\s+([+-]?\d+\.?\d*)\s*V"),
            p(r"potential\s+difference\s+across\s+.*?is\s+([+-]?\d+\.?\d*)\s*V"),
            p(r"([+-]?\d+\.?\d*)\s*V(?:[^/]|$)"),
        ],
    },
    KeyPatterns {
        key: "current",
        patterns: &[
            p(r"([+-]?\d+\.?\d*)\s*A\s+of\s+current\s+passing\s+through"),
            p(r"current\s+flowing\s+through.*?is\s+measured\s+to\s+be\s+([+-]?\d+\.?\d*)\s*A"),
            p(r"current\s+flowing\s+through.*?is\s+([+-]?\d+\.?\d*)\s*A"),
            p(r"current\s+measured\s+through.*?is\s+([+-]?\d+\.?\d*)\s*A"),
            p(r"a\s+current\s+of\s+([+-]?\d+\.?\d*)\s*A\s+flows\s+through"),
            p(r"current\s+of\s+([+-]?\d+\.?\d*)\s*A\s+flows\s+through"),
            p(r"([+-]?\d+\.?\d*)\s*A\s+flows\s+through"),
            p(r"current\s+of\s+([+-]?\d+\.?\d*)\s*A"),
            p(r"current\s+.*?is\s+([+-]?\d+\.?\d*)\s*A"),
            p(r"carrying\s+a\s+current\s+of\s+([+-]?\d+\.?\d*)\s*A"),
            p(r"passing\s+through.*?current\s+of\s+([+-]?\d+\.?\d*)\s*A"),
            p(r"flows\s+through.*?current\s+of\s+([+-]?\d+\.?\d*)\s*A"),
            p(r"([+-]?\d+\.?\d*)\s*A(?:[^/]|$)"),
        ],
    },
    KeyPatterns {
        key: "resistance",
        patterns: &[
            p(r"has\s+(?:a\s+)?resistance\s+of\s+([+-]?\d+\.?\d*)\s*Ω"),
            p(r"resistance\s+of\s+([+-]?\d+\.?\d*)\s*Ω"),
            p(r"resistor\s+of\s+([+-]?\d+\.?\d*)\s*Ω"),
            p(r"resistance\s+.*?is\s+([+-]?\d+\.?\d*)\s*Ω"),
            p(r"([+-]?\d+\.?\d*)\s*Ω"),
            p(r"([+-]?\d+\.?\d*)\s*ohms?"),
        ],
    },
    KeyPatterns {
        key: "power",
        patterns: &[
            p(r"power\s+of\s+([+-]?\d+\.?\d*)\s*W"),
            p(r"power\s+dissipated\s+(?:by|is)\s+([+-]?\d+\.?\d*)\s*W"),
            p(r"power\s+.*?is\s+([+-]?\d+\.?\d*)\s*W"),
            p(r"([+-]?\d+\.?\d*)\s*W(?:[^/]|$)"),
        ],
    },
    KeyPatterns {
        key: "mass",
        patterns: &[
            p(r"mass\s+of\s+([+-]?\d+\.?\d*)\s*kg"),
            p(r"object.*?mass\s+of\s+([+-]?\d+\.?\d*)\s*kg"),
            p(r"([+-]?\d+\.?\d*)\s*kg\s+object"),
            p(r"([+-]?\d+\.?\d*)\s*kg\s+box"),
            p(r"([+-]?\d+\.?\d*)\s*kg\s+crate"),
            p(r"([+-]?\d+\.?\d*)\s*kg\s+ball"),
            p(r"([+-]?\d+\.?\d*)\s*kg(?:[^/]|$)"),
        ],
    },
    KeyPatterns {
        key: "mu",
        patterns: &[
            p(r"coefficient\s+of\s+(?:kinetic|static)\s+friction\s+of\s+([+-]?\d+\.?\d*)"),
            p(r"coefficient\s+of\s+(?:kinetic|static)\s+friction.*?is\s+([+-]?\d+\.?\d*)"),
            p(r"coefficient\s+of\s+friction\s+of\s+([+-]?\d+\.?\d*)"),
            p(r"coefficient\s+of\s+friction.*?is\s+([+-]?\d+\.?\d*)"),
            p(r"(?:kinetic|static)\s+friction.*?coefficient.*?is\s+([+-]?\d+\.?\d*)"),
            p(r"friction.*?coefficient.*?is\s+([+-]?\d+\.?\d*)"),
            p(r"μ\s*=\s*([+-]?\d+\.?\d*)"),
            p(r"mu\s*=\s*([+-]?\d+\.?\d*)"),
        ],
    },
    KeyPatterns {
        key: "normal_force",
        patterns: &[
            p(r"normal\s+force\s+of\s+([+-]?\d+\.?\d*)\s*N"),
            p(r"normal\s+force.*?is\s+([+-]?\d+\.?\d*)\s*N"),
            p(r"([+-]?\d+\.?\d*)\s*N\s+normal\s+force"),
        ],
    },
    KeyPatterns {
        key: "force",
        patterns: &[
            p(r"force\s+of\s+([+-]?\d+\.?\d*)\s*N"),
            p(r"pulls.*?force\s+of\s+([+-]?\d+\.?\d*)\s*N"),
            p(r"applies.*?force\s+of\s+([+-]?\d+\.?\d*)\s*N"),
            p(r"exerts.*?force\s+of\s+([+-]?\d+\.?\d*)\s*N"),
            p(r"([+-]?\d+\.?\d*)\s*N(?:[^/]|$)"),
        ],
    },
    KeyPatterns {
        key: "distance",
        patterns: &[
            p(r"distance\s+of\s+([+-]?\d+\.?\d*)\s*m"),
            p(r"for\s+a\s+distance\s+of\s+([+-]?\d+\.?\d*)\s*m"),
            p(r"distance\s+.*?is\s+([+-]?\d+\.?\d*)\s*m"),
            p(r"([+-]?\d+\.?\d*)\s*m(?:[^/²2]|$)"),
        ],
    },
    KeyPatterns {
        key: "angle",
        patterns: &[
            p(r"at\s+an\s+angle\s+of\s+([+-]?\d+\.?\d*)\s*°.*?(?:above|below)"),
            p(r"at\s+angle\s+of\s+([+-]?\d+\.?\d*)\s*°.*?(?:above|below)"),
            p(r"angle\s+of\s+([+-]?\d+\.?\d*)\s*°.*?(?:above|below)"),
            p(r"at\s+an\s+angle\s+of\s+([+-]?\d+\.?\d*)\s*°"),
            p(r"at\s+angle\s+of\s+([+-]?\d+\.?\d*)\s*°"),
            p(r"angle\s+of\s+([+-]?\d+\.?\d*)\s*°"),
            p(r"launched.*?at\s+an?\s+angle\s+of\s+([+-]?\d+\.?\d*)\s*°"),
            p(r"fired.*?at\s+an?\s+angle\s+of\s+([+-]?\d+\.?\d*)\s*°"),
            p(r"thrown.*?at\s+an?\s+angle\s+of\s+([+-]?\d+\.?\d*)\s*°"),
            p(r"angle\s+.*?is\s+([+-]?\d+\.?\d*)\s*°"),
            p(r"at\s+an\s+angle\s+of\s+([+-]?\d+\.?\d*)\s*degrees?"),
            p(r"angle\s+of\s+([+-]?\d+\.?\d*)\s*degrees?"),
            p(r"([+-]?\d+\.?\d*)\s*°(?:[^/]|$)"),
            p(r"([+-]?\d+\.?\d*)\s*degrees?"),
        ],
    },
    KeyPatterns {
        key: "velocity",
        patterns: &[
            p(r"speed\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(r"velocity\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(r"rolls\s+with\s+a\s+speed\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(r"moves\s+with\s+a\s+speed\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(r"travels\s+with\s+a\s+speed\s+of\s+([+-]?\d+\.?\d*)\s*m/s"),
            p(r"([+-]?\d+\.?\d*)\s*m/s(?:[^²2]|$)"),
        ],
    },
];

/// A compiled Tier-A pattern.
pub struct CompiledPattern {
    pub re: Regex,
    pub not_followed_by: Option<Regex>,
}

/// Tier-A pattern tables, compiled once.
pub static COMPILED_PATTERNS: LazyLock<HashMap<&'static str, Vec<CompiledPattern>>> =
    LazyLock::new(|| {
        KEY_PATTERNS
            .iter()
            .map(|entry| {
                let compiled = entry
                    .patterns
                    .iter()
                    .map(|pp| CompiledPattern {
                        re: Regex::new(&format!("(?i){}", pp.pattern)).expect(entry.key),
                        not_followed_by: pp
                            .not_followed_by
                            .map(|g| Regex::new(&format!("(?i){g}")).expect(entry.key)),
                    })
                    .collect();
                (entry.key, compiled)
            })
            .collect()
    });

/// Context vocabulary for the generic scan tiers.
pub struct ContextRule {
    pub key: &'static str,
    pub synonyms: &'static [&'static str],
}

/// Synonyms accepted near a numeric token, per variable key. Used strictly
/// (context AND unit) by Tier B and leniently (context OR unit) by Tier C.
pub static CONTEXT_SYNONYMS: &[ContextRule] = &[
    ContextRule {
        key: "u",
        synonyms: &["initial", "speed", "velocity"],
    },
    ContextRule {
        key: "v",
        synonyms: &["final", "speed", "velocity"],
    },
    ContextRule {
        key: "a",
        synonyms: &["accelerat"],
    },
    ContextRule {
        key: "t",
        synonyms: &["second", "time", "for", "after"],
    },
    ContextRule {
        key: "s",
        synonyms: &["displacement", "distance", "traveled"],
    },
    ContextRule {
        key: "height",
        synonyms: &["height", "dropped", "raised", "lifted", "elevation"],
    },
    ContextRule {
        key: "angle",
        synonyms: &["angle", "degree"],
    },
    ContextRule {
        key: "force",
        synonyms: &["force", "pulls", "applies", "exerts"],
    },
    ContextRule {
        key: "distance",
        synonyms: &["distance"],
    },
    ContextRule {
        key: "mass",
        synonyms: &["mass", "kg", "object", "box", "crate", "ball"],
    },
    ContextRule {
        key: "velocity",
        synonyms: &["speed", "velocity"],
    },
    ContextRule {
        key: "voltage",
        synonyms: &["voltage", "potential difference"],
    },
    ContextRule {
        key: "current",
        synonyms: &["current", "carrying", "flowing", "flows"],
    },
    ContextRule {
        key: "resistance",
        synonyms: &["resistance", "resistor"],
    },
    ContextRule {
        key: "power",
        synonyms: &["power", "dissipated"],
    },
    ContextRule {
        key: "mu",
        synonyms: &["coefficient", "friction", "μ", "mu"],
    },
    ContextRule {
        key: "normal_force",
        synonyms: &["normal"],
    },
];

/// Looks up the Tier-C synonyms for a key; the variable's own name and label
/// are always checked in addition.
pub fn synonyms_for(key: &str) -> &'static [&'static str] {
    CONTEXT_SYNONYMS
        .iter()
        .find(|r| r.key == key)
        .map(|r| r.synonyms)
        .unwrap_or(&[])
}

/// Returns `true` if the key has Tier-A phrasing patterns.
pub fn has_tier_a(key: &str) -> bool {
    COMPILED_PATTERNS.contains_key(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_pattern_tables_compile() {
        assert_eq!(COMPILED_PATTERNS.len(), KEY_PATTERNS.len());
    }

    #[test]
    fn tier_a_order_covers_pattern_keys() {
        for entry in KEY_PATTERNS {
            assert!(
                TIER_A_ORDER.contains(&entry.key),
                "{} missing from TIER_A_ORDER",
                entry.key
            );
        }
        for key in TIER_A_ORDER {
            assert!(has_tier_a(key), "{key} has no pattern table");
        }
    }

    #[test]
    fn guard_rejects_angle_continuation() {
        let compiled = &COMPILED_PATTERNS["u"];
        let guarded = compiled
            .iter()
            .find(|c| c.not_followed_by.is_some())
            .unwrap();
        let text = "launched at 20 m/s at an angle of 60°";
        let m = guarded.re.find(text).unwrap();
        let guard = guarded.not_followed_by.as_ref().unwrap();
        assert!(guard.is_match(&text[m.end()..]));
        assert!(!guard.is_match(" upward"));
    }

    #[test]
    fn unit_guard_rejects_compound_units() {
        // The bare voltage pattern must not fire on "V/R".
        let bare_voltage = COMPILED_PATTERNS["voltage"].last().unwrap();
        assert!(bare_voltage.re.is_match("a reading of 12 V today"));
        assert!(bare_voltage.re.is_match("exactly 12 V"));
        assert!(!bare_voltage.re.is_match("compute 12 V/R"));
    }

    #[test]
    fn synonyms_cover_unitless_keys() {
        assert!(synonyms_for("mu").contains(&"coefficient"));
        assert!(synonyms_for("unknown").is_empty());
    }
}
