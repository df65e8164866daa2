//! Keyword scoring table for formula identification.
//!
//! Rule content lives here as plain data, separate from the scoring loop in
//! [`crate::identify`], so the vocabulary can be tested and extended without
//! touching control flow. Entries containing `.*` are compiled as
//! case-insensitive patterns and score double; plain entries are substring
//! matches against the lowercased text.

use std::sync::LazyLock;

use regex::Regex;

/// Keywords voting for one formula id.
pub struct KeywordRule {
    pub formula: &'static str,
    pub keywords: &'static [&'static str],
}

/// The scoring table. Order matters: ties are broken by the first rule that
/// reaches the winning score.
pub static KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        formula: "velocity",
        keywords: &[
            "final velocity",
            "find velocity",
            "calculate velocity",
            "velocity after",
            "speed after",
        ],
    },
    KeywordRule {
        formula: "displacement",
        keywords: &["displacement", "distance traveled", "how far", "distance"],
    },
    KeywordRule {
        formula: "acceleration",
        keywords: &["acceleration", "find acceleration", "calculate acceleration"],
    },
    KeywordRule {
        formula: "time",
        keywords: &[
            "time",
            "how long",
            "how long will it take",
            "how long does it take",
            "takes",
            "duration",
            "reach.*velocity",
        ],
    },
    KeywordRule {
        formula: "current",
        keywords: &[
            "current",
            "find current",
            "find the current",
            "calculate current",
            "calculate the current",
            "what is.*current",
            "what is the current",
            "amperes",
            "amps",
            "i =",
        ],
    },
    KeywordRule {
        formula: "voltage",
        keywords: &[
            "voltage",
            "find voltage",
            "calculate voltage",
            "determine.*voltage",
            "how much.*voltage",
            "what is.*voltage",
            "potential difference",
            "voltage across",
            "voltage applied",
            "voltage present",
            "voltage applied across",
            "potential difference across",
            "what is.*potential difference",
            "find.*potential difference",
            "calculate.*potential difference",
            "determine.*potential difference",
            "how much.*potential difference",
            "v =",
        ],
    },
    KeywordRule {
        formula: "resistance",
        keywords: &[
            "resistance",
            "find resistance",
            "find the resistance",
            "calculate resistance",
            "calculate the resistance",
            "what is.*resistance",
            "what is the resistance",
            "ohms",
            "r =",
        ],
    },
    KeywordRule {
        formula: "power",
        keywords: &[
            "power",
            "find power",
            "find the power",
            "calculate power",
            "calculate the power",
            "what is.*power",
            "what is the power",
            "power dissipated",
            "power.*resistor",
            "p =",
        ],
    },
    KeywordRule {
        formula: "normalForce",
        keywords: &[
            "normal force",
            "find normal force",
            "find the normal force",
            "calculate normal force",
            "calculate the normal force",
            "what is.*normal force",
            "what is the normal force",
            "force.*table.*exerts",
            "force.*exerts.*upward",
            "force.*exerted.*upward",
            "table.*exerts.*upward",
            "n =",
        ],
    },
    KeywordRule {
        formula: "friction",
        keywords: &[
            "friction",
            "frictional force",
            "find frictional force",
            "find the frictional force",
            "calculate frictional force",
            "calculate the frictional force",
            "what is.*frictional force",
            "what is the frictional force",
            "f_f",
        ],
    },
    KeywordRule {
        formula: "kineticEnergy",
        keywords: &[
            "kinetic energy",
            "find kinetic energy",
            "find the kinetic energy",
            "calculate kinetic energy",
            "calculate the kinetic energy",
            "what is.*kinetic energy",
            "what is the kinetic energy",
            "energy due to.*motion",
            "energy.*motion",
            "ke =",
        ],
    },
    KeywordRule {
        formula: "potentialEnergy",
        keywords: &["potential energy", "pe =", "gravitational potential"],
    },
    KeywordRule {
        formula: "work",
        keywords: &[
            "work",
            "find work",
            "find the work",
            "calculate work",
            "calculate the work",
            "what is.*work",
            "what is the work",
            "work performed",
            "work done",
            "w =",
        ],
    },
    KeywordRule {
        formula: "projectileHeight",
        keywords: &[
            "maximum height",
            "find maximum height",
            "find the maximum height",
            "calculate maximum height",
            "calculate the maximum height",
            "calculate its maximum height",
            "what is.*maximum height",
            "what is the maximum height",
            "height reached",
            "peak height",
            "find.*peak height",
            "find the peak height",
            "peak.*height.*reaches",
            "peak.*it.*reaches",
            "highest point",
            "find.*highest point",
            "calculate.*highest point",
            "what is.*highest point",
            "projectile.*maximum height",
            "projectile.*highest point",
            "rocket.*height",
            "ball.*height",
        ],
    },
    KeywordRule {
        formula: "projectileRange",
        keywords: &[
            "range",
            "horizontal range",
            "horizontal distance",
            "distance traveled",
            "how far.*travel",
            "how far.*go",
            "distance.*travel",
        ],
    },
];

/// One compiled keyword matcher.
pub enum KeywordMatcher {
    /// Substring match, worth 1 point.
    Substring(&'static str),
    /// Wildcard pattern match, worth 2 points.
    Pattern(Regex),
}

/// The scoring table with wildcard entries compiled.
pub static COMPILED_RULES: LazyLock<Vec<(&'static str, Vec<KeywordMatcher>)>> =
    LazyLock::new(|| {
        KEYWORD_RULES
            .iter()
            .map(|rule| {
                let matchers = rule
                    .keywords
                    .iter()
                    .map(|kw| {
                        if kw.contains(".*") {
                            KeywordMatcher::Pattern(
                                Regex::new(&format!("(?i){kw}")).expect("keyword pattern"),
                            )
                        } else {
                            KeywordMatcher::Substring(kw)
                        }
                    })
                    .collect();
                (rule.formula, matchers)
            })
            .collect()
    });

/// Scores one rule's keywords against the lowercased problem text.
pub fn score(matchers: &[KeywordMatcher], lower_text: &str) -> u32 {
    matchers
        .iter()
        .map(|m| match m {
            KeywordMatcher::Substring(kw) => u32::from(lower_text.contains(kw)),
            KeywordMatcher::Pattern(re) => 2 * u32::from(re.is_match(lower_text)),
        })
        .sum()
}
