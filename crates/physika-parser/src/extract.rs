//! Three-tier numeric variable extraction.
//!
//! Tier A tries hand-authored phrasing patterns for the well-known variable
//! keys, most specific first. Tier B handles variables without Tier-A
//! patterns via a contextual scan over numeric tokens (context keyword AND
//! compatible unit, ~100-char window). Tier C is a lenient sweep for anything
//! still unresolved (~50-char window, context OR unit, but a variable whose
//! schema carries a unit only accepts tokens bearing that unit).
//!
//! All three tiers share one set of consumed token offsets, so a literal
//! number in the text can satisfy at most one variable. A variable the text
//! does not determine is simply absent from the result; extraction never
//! fails.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use physika_core::{FormulaDefinition, VariableSpec};
use regex::Regex;
use tracing::debug;

use crate::normalize::{ceil_char_boundary, floor_char_boundary, normalize};
use crate::patterns::{has_tier_a, synonyms_for, CompiledPattern, COMPILED_PATTERNS, TIER_A_ORDER};
use crate::tokens::{canonical_unit, scan_numbers, NumberToken};

/// Standard gravity, for the normal-force derivation.
const GRAVITY: f64 = 9.8;

static ACCELERAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)accelerat").expect("accelerat stem"));

/// Variable values recovered from a problem text, keyed by variable key.
///
/// Keys are always a subset of the formula's variable keys. Values are the
/// literal decimal strings as written, sign normalized (no leading `+`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    pub values: BTreeMap<&'static str, String>,
}

impl ExtractionResult {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// Extracts variable values for `formula` from free-form problem text.
pub fn extract(text: &str, formula: &FormulaDefinition) -> ExtractionResult {
    let normalized = normalize(text);
    let lower = normalized.to_lowercase();
    let tokens = scan_numbers(&normalized);
    let mut consumed: HashSet<usize> = HashSet::new();
    let mut values: BTreeMap<&'static str, String> = BTreeMap::new();

    tier_a(formula, &normalized, &lower, &tokens, &mut consumed, &mut values);
    tier_b(formula, &normalized, &tokens, &mut consumed, &mut values);
    tier_c(formula, &normalized, &tokens, &mut consumed, &mut values);

    debug!(
        formula = formula.id,
        resolved = values.len(),
        total = formula.variables.len(),
        "extraction finished"
    );
    ExtractionResult { values }
}

fn strip_plus(raw: &str) -> String {
    raw.strip_prefix('+').unwrap_or(raw).to_string()
}

fn token_at(tokens: &[NumberToken], pos: usize) -> Option<&NumberToken> {
    tokens.iter().find(|t| t.covers(pos))
}

/// Runs one key's pattern list over `slice` (at byte `base` within the full
/// text), honoring guards and the consumed set. First acceptable match wins.
fn match_patterns(
    patterns: &[CompiledPattern],
    slice: &str,
    base: usize,
    tokens: &[NumberToken],
    consumed: &mut HashSet<usize>,
) -> Option<String> {
    for cp in patterns {
        for caps in cp.re.captures_iter(slice) {
            let Some(num) = caps.get(1) else { continue };
            if let Some(guard) = &cp.not_followed_by {
                let whole = caps.get(0).map_or(num.end(), |m| m.end());
                if guard.is_match(&slice[whole..]) {
                    continue;
                }
            }
            if let Some(tok) = token_at(tokens, base + num.start()) {
                if consumed.contains(&tok.offset) {
                    continue;
                }
                consumed.insert(tok.offset);
            }
            return Some(strip_plus(num.as_str()));
        }
    }
    None
}

fn tier_a(
    formula: &FormulaDefinition,
    text: &str,
    lower: &str,
    tokens: &[NumberToken],
    consumed: &mut HashSet<usize>,
    values: &mut BTreeMap<&'static str, String>,
) {
    // Mass extracted solely to derive a normal force stays out of the result.
    let mut scratch_mass: Option<String> = None;

    for &key in TIER_A_ORDER {
        let wanted = formula.has_variable(key);
        let for_derivation =
            key == "mass" && !wanted && formula.has_variable("normal_force");
        if !wanted && !for_derivation {
            continue;
        }
        if values.contains_key(key) {
            continue;
        }

        let value = match key {
            "u" => extract_initial_velocity(text, lower, tokens, consumed),
            "v" => extract_final_velocity(text, lower, tokens, consumed),
            "a" => extract_acceleration(text, tokens, consumed),
            "t" => extract_time(text, tokens, consumed),
            _ => COMPILED_PATTERNS
                .get(key)
                .and_then(|pats| match_patterns(pats, text, 0, tokens, consumed)),
        };

        if let Some(value) = value {
            debug!(key, value, "tier A match");
            if for_derivation {
                scratch_mass = Some(value);
            } else {
                values.insert(key, value);
            }
        }

        if key == "normal_force" && wanted && !values.contains_key("normal_force") {
            let mass = values.get("mass").or(scratch_mass.as_ref());
            if let Some(mass_value) = mass.and_then(|m| m.parse::<f64>().ok()) {
                debug!(mass = mass_value, "deriving normal force from mass");
                values.insert("normal_force", format!("{}", mass_value * GRAVITY));
            }
        }
    }
}

fn extract_initial_velocity(
    text: &str,
    lower: &str,
    tokens: &[NumberToken],
    consumed: &mut HashSet<usize>,
) -> Option<String> {
    if let Some(v) = match_patterns(&COMPILED_PATTERNS["u"], text, 0, tokens, consumed) {
        return Some(v);
    }
    let at_rest =
        lower.contains("rest") && (lower.contains("starts") || lower.contains("from rest"));
    at_rest.then(|| "0".to_string())
}

fn extract_final_velocity(
    text: &str,
    lower: &str,
    tokens: &[NumberToken],
    consumed: &mut HashSet<usize>,
) -> Option<String> {
    let stops = lower.contains("come to a stop")
        || lower.contains("come to stop")
        || (lower.contains("stop")
            && (lower.contains("final velocity")
                || lower.contains("v=0")
                || lower.contains("v = 0")));
    if stops {
        return Some("0".to_string());
    }
    match_patterns(&COMPILED_PATTERNS["v"], text, 0, tokens, consumed)
}

/// Acceleration values only count near the "accelerat" stem. The window is
/// 50 bytes back and 200 forward, clamped to char boundaries.
fn extract_acceleration(
    text: &str,
    tokens: &[NumberToken],
    consumed: &mut HashSet<usize>,
) -> Option<String> {
    let stem = ACCELERAT.find(text)?;
    let start = floor_char_boundary(text, stem.start().saturating_sub(50));
    let end = ceil_char_boundary(text, stem.start() + 200);
    match_patterns(&COMPILED_PATTERNS["a"], &text[start..end], start, tokens, consumed)
}

/// The last "for/after/over N seconds" phrase wins; earlier ones usually
/// describe setup rather than the interval asked about.
fn extract_time(
    text: &str,
    tokens: &[NumberToken],
    consumed: &mut HashSet<usize>,
) -> Option<String> {
    for cp in &COMPILED_PATTERNS["t"] {
        let matches: Vec<_> = cp.re.captures_iter(text).collect();
        for caps in matches.iter().rev() {
            let Some(num) = caps.get(1) else { continue };
            if let Some(tok) = token_at(tokens, num.start()) {
                if consumed.contains(&tok.offset) {
                    continue;
                }
                consumed.insert(tok.offset);
            }
            return Some(strip_plus(num.as_str()));
        }
    }
    None
}

/// Lowercased window of `radius` bytes around a token.
fn context_window(text: &str, tok: &NumberToken, radius: usize) -> String {
    let start = floor_char_boundary(text, tok.offset.saturating_sub(radius));
    let end = ceil_char_boundary(text, tok.offset + tok.value.len() + radius);
    text[start..end].to_lowercase()
}

/// Context vocabulary for one variable: its name, its label when longer than
/// a single character, and the domain synonyms for its key.
fn context_hit(window: &str, var: &VariableSpec) -> bool {
    let name = var.name.to_lowercase();
    if window.contains(&name) {
        return true;
    }
    let label = var.label.to_lowercase();
    if label.chars().count() > 1 && window.contains(&label) {
        return true;
    }
    synonyms_for(var.key).iter().any(|s| window.contains(s))
}

fn tier_b(
    formula: &FormulaDefinition,
    text: &str,
    tokens: &[NumberToken],
    consumed: &mut HashSet<usize>,
    values: &mut BTreeMap<&'static str, String>,
) {
    for var in formula.variables {
        if has_tier_a(var.key) || values.contains_key(var.key) {
            continue;
        }
        let unit = canonical_unit(var.unit);
        for tok in tokens {
            if consumed.contains(&tok.offset) {
                continue;
            }
            let unit_ok = if unit.is_empty() {
                tok.unit.is_empty()
            } else {
                tok.unit == unit
            };
            if !unit_ok {
                continue;
            }
            let window = context_window(text, tok, 100);
            if context_hit(&window, var) {
                debug!(key = var.key, value = %tok.value, "tier B match");
                consumed.insert(tok.offset);
                values.insert(var.key, strip_plus(&tok.value));
                break;
            }
        }
    }
}

fn tier_c(
    formula: &FormulaDefinition,
    text: &str,
    tokens: &[NumberToken],
    consumed: &mut HashSet<usize>,
    values: &mut BTreeMap<&'static str, String>,
) {
    for var in formula.variables {
        if values.contains_key(var.key) {
            continue;
        }
        let unit = canonical_unit(var.unit);
        for tok in tokens {
            if consumed.contains(&tok.offset) {
                continue;
            }
            let accept = if unit.is_empty() {
                // Unitless variable: context decides, but a token carrying a
                // recognized unit belongs to something else.
                tok.unit.is_empty() && context_hit(&context_window(text, tok, 50), var)
            } else {
                // A token bearing the variable's own unit is its own context.
                tok.unit == unit
            };
            if accept {
                debug!(key = var.key, value = %tok.value, "tier C match");
                consumed.insert(tok.offset);
                values.insert(var.key, strip_plus(&tok.value));
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physika_core::formula_by_id;
    use pretty_assertions::assert_eq;

    fn run(formula_id: &str, text: &str) -> ExtractionResult {
        let formula = formula_by_id(formula_id).unwrap();
        extract(text, formula)
    }

    fn sorted(result: &ExtractionResult) -> Vec<(&str, &str)> {
        result
            .values
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect()
    }

    #[test]
    fn rest_and_acceleration_and_time() {
        let r = run(
            "velocity",
            "A car starts from rest and accelerates at 5 m/s² for 10 seconds. Find its final velocity.",
        );
        assert_eq!(sorted(&r), vec![("a", "5"), ("t", "10"), ("u", "0")]);
    }

    #[test]
    fn battery_and_resistor() {
        let r = run("current", "A 12V battery is connected to a 4Ω resistor. What is the current?");
        assert_eq!(sorted(&r), vec![("resistance", "4"), ("voltage", "12")]);
    }

    #[test]
    fn projectile_speed_and_angle() {
        let r = run(
            "projectileHeight",
            "A projectile is launched at 20 m/s at an angle of 60° above the horizontal. Find the maximum height.",
        );
        assert_eq!(sorted(&r), vec![("angle", "60"), ("u", "20")]);
    }

    #[test]
    fn mass_and_speed_for_kinetic_energy() {
        let r = run("kineticEnergy", "A 5 kg object moving at 10 m/s. Find its kinetic energy.");
        assert_eq!(sorted(&r), vec![("mass", "5"), ("velocity", "10")]);
    }

    #[test]
    fn come_to_a_stop_zeroes_final_velocity() {
        let r = run(
            "acceleration",
            "A train moving with an initial velocity of 30 m/s comes to a stop after 15 seconds. Find its acceleration with final velocity v = 0.",
        );
        assert_eq!(r.get("u"), Some("30"));
        assert_eq!(r.get("v"), Some("0"));
        assert_eq!(r.get("t"), Some("15"));
    }

    #[test]
    fn last_time_phrase_wins() {
        let r = run(
            "velocity",
            "After 3 seconds of warmup it accelerates at 2 m/s² for 8 seconds.",
        );
        assert_eq!(r.get("t"), Some("8"));
        assert_eq!(r.get("a"), Some("2"));
    }

    #[test]
    fn bare_acceleration_unit_resolves_via_lenient_fallback() {
        // No "accelerat" stem, so the windowed patterns stay silent; the
        // unambiguous m/s² unit still resolves it in the last tier.
        let r = run("velocity", "A car moves at 5 m/s² for 10 seconds.");
        assert_eq!(r.get("a"), Some("5"));
        assert_eq!(r.get("t"), Some("10"));
    }

    #[test]
    fn normal_force_derived_from_scratch_mass() {
        let r = run(
            "friction",
            "A 2 kg box slides with a coefficient of friction of 0.5. Find the frictional force.",
        );
        assert_eq!(r.get("mu"), Some("0.5"));
        assert_eq!(r.get("normal_force"), Some("19.6"));
        // The formula has no mass variable, so the scratch value stays out.
        assert_eq!(r.get("mass"), None);
    }

    #[test]
    fn explicit_normal_force_beats_derivation() {
        let r = run(
            "friction",
            "A 2 kg box pressed with a normal force of 30 N and a coefficient of friction of 0.4.",
        );
        assert_eq!(r.get("normal_force"), Some("30"));
        assert_eq!(r.get("mu"), Some("0.4"));
    }

    #[test]
    fn height_resolved_by_contextual_scan() {
        let r = run(
            "potentialEnergy",
            "A 10 kg object is raised to a height of 5 m. Find its potential energy.",
        );
        assert_eq!(sorted(&r), vec![("height", "5"), ("mass", "10")]);
    }

    #[test]
    fn work_from_force_and_distance() {
        let r = run(
            "work",
            "A worker applies a force of 50 N to push a crate a distance of 10 m. Find the work done.",
        );
        assert_eq!(sorted(&r), vec![("distance", "10"), ("force", "50")]);
    }

    #[test]
    fn increases_from_to_splits_velocities() {
        let r = run(
            "acceleration",
            "A car increases its speed from 10 m/s to 30 m/s over 4 seconds. Find the acceleration.",
        );
        assert_eq!(r.get("u"), Some("10"));
        assert_eq!(r.get("v"), Some("30"));
        assert_eq!(r.get("t"), Some("4"));
    }

    #[test]
    fn launched_at_guard_skips_angle_phrasing() {
        // "launched at 25 m/s at an angle" must not bind u through the bare
        // "launched at" phrasing; the projectile phrasing catches it instead.
        let r = run(
            "projectileRange",
            "A projectile is launched at 25 m/s at an angle of 45°. How far does it travel?",
        );
        assert_eq!(sorted(&r), vec![("angle", "45"), ("u", "25")]);
    }

    #[test]
    fn one_number_never_feeds_two_variables() {
        let formula = formula_by_id("velocity").unwrap();
        let r = extract("An object accelerates at 3 m/s for 3 seconds.", formula);
        // "3 m/s" feeds acceleration; the time tier must take the second 3,
        // and no offset may be shared.
        assert_eq!(r.get("a"), Some("3"));
        assert_eq!(r.get("t"), Some("3"));
    }

    #[test]
    fn two_numbers_sharing_a_unit_assign_only_one() {
        let r = run(
            "kineticEnergy",
            "A cart moves with a speed of 12 m/s while another moves at 7 m/s. The cart has a mass of 3 kg.",
        );
        assert_eq!(r.get("velocity"), Some("12"));
        assert_eq!(r.get("mass"), Some("3"));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn no_leading_plus_in_values() {
        let r = run(
            "velocity",
            "A car accelerates forward at +4.25 m/s² for +6 seconds starting from rest.",
        );
        assert_eq!(r.get("a"), Some("4.25"));
        assert_eq!(r.get("t"), Some("6"));
        assert_eq!(r.get("u"), Some("0"));
    }

    #[test]
    fn negative_acceleration_kept() {
        let r = run(
            "velocity",
            "A braking car starts from rest then decelerates, accelerating at -4 m/s² for 2 seconds.",
        );
        assert_eq!(r.get("a"), Some("-4"));
    }

    #[test]
    fn unicode_minus_folded() {
        let r = run(
            "velocity",
            "A probe starts from rest and accelerates at \u{2212}3 m/s² for 5 seconds.",
        );
        assert_eq!(r.get("a"), Some("-3"));
    }

    #[test]
    fn missing_variables_are_simply_absent() {
        let r = run("velocity", "Find the final velocity of the car.");
        assert!(r.is_empty());
    }

    #[test]
    fn result_keys_subset_of_formula_keys() {
        let formula = formula_by_id("friction").unwrap();
        let r = extract("A 10 kg crate with a coefficient of friction of 0.3.", formula);
        for key in r.values.keys() {
            assert!(formula.has_variable(key), "{key} not in formula schema");
        }
    }
}
