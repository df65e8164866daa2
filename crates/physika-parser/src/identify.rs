//! Formula identification.
//!
//! A staged cascade over textual signals, each stage short-circuiting:
//!
//! 1. Projectile special cases. Height and range questions share vocabulary
//!    (angle, velocity) with half the catalog, so their composite predicates
//!    run before anything else, height before range.
//! 2. Cross-domain priority rules as an ordered predicate list. The order of
//!    the electrical rules encodes which unknown a problem is most likely
//!    asking for when two of {voltage, current, resistance} are given.
//! 3. Keyword scoring over [`crate::keywords::KEYWORD_RULES`], defaulting to
//!    `"velocity"` when nothing scores.
//!
//! Known misclassification risk, preserved from the documented behavior: a
//! bare `V`/`v` followed by whitespace reads as a voltage mention (it is also
//! the conventional velocity symbol), and text with no recognizable signal at
//! all still identifies as `velocity`. Adversarial input can exploit both.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::keywords::{COMPILED_RULES, score};

macro_rules! signal_re {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(concat!("(?i)", $pattern)).expect(stringify!($name)));
    };
}

signal_re!(
    HAS_VELOCITY,
    r"(?:initial\s+)?(?:speed|velocity)|m/s|\d+\s*m/s|speed\s+of|velocity\s+of"
);
signal_re!(HAS_ANGLE, r"angle|degrees?|°|\d+\s*°|at\s+an?\s+angle");
signal_re!(
    HAS_PROJECTILE,
    r"projectile|rocket|ball|cannonball|object|launched|fired|thrown|shot|bullet|missile|catapult"
);
signal_re!(
    ASKS_MAX_HEIGHT,
    r"maximum\s+height|height\s+reached|peak\s+height|highest\s+point|find.*peak|find.*maximum|calculate.*maximum|what.*maximum|calculate.*its.*maximum|calculate.*height|find.*height|what.*height|peak.*reaches|maximum.*reaches"
);
signal_re!(
    ASKS_RANGE,
    r"range|horizontal\s+distance|how far.*travel|distance.*travel|how far.*go|how far.*land|horizontal.*distance"
);
signal_re!(MENTIONS_HEIGHT, r"height|peak|maximum|highest");
signal_re!(ASKS_DISPLACEMENT, r"displacement|distance.*traveled|how far");
signal_re!(HAS_RESISTANCE, r"resistance|resistor|ohms?|Ω");
signal_re!(HAS_VOLTAGE, r"voltage|potential difference|V\s+(?:[^/]|$)");
signal_re!(
    HAS_CURRENT,
    r"current|amperes?|amps?|A\s+(?:of\s+)?current|flows\s+through|flowing\s+through"
);
signal_re!(
    ASKS_VOLTAGE,
    r"what is.*voltage|find.*voltage|calculate.*voltage|determine.*voltage|how much.*voltage|voltage across|voltage applied|voltage present|what is.*potential difference|find.*potential difference|calculate.*potential difference|determine.*potential difference|how much.*potential difference|potential difference across"
);
signal_re!(
    ASKS_RESISTANCE,
    r"what is.*resistance|find.*resistance|calculate.*resistance|determine.*resistance|how much.*resistance"
);
signal_re!(
    ASKS_CURRENT,
    r"what is.*current|find.*current|calculate.*current|determine.*current|how much.*current"
);
signal_re!(
    ASKS_POWER,
    r"what is.*power|find.*power|calculate.*power|determine.*power|how much.*power"
);
signal_re!(HAS_MASS, r"mass|kg|kilograms?|object.*kg|\d+\s*kg");
signal_re!(HAS_FORCE, r"force|N\s+(?:[^/]|$)|newtons?");
signal_re!(HAS_DISTANCE, r"distance|m\s+(?:[^/]|$)|meters?");
signal_re!(HAS_MU, r"coefficient.*friction|friction.*coefficient|μ|mu\s*=");
signal_re!(
    ASKS_NORMAL_FORCE,
    r"what is.*normal force|find.*normal force|calculate.*normal force|determine.*normal force|force.*table.*exerts|force.*exerts.*upward|force.*exerted.*upward|table.*exerts.*upward|what is.*force.*table|what is.*force.*exerts"
);
signal_re!(
    ASKS_FRICTION,
    r"what is.*frictional force|find.*frictional force|calculate.*frictional force|determine.*frictional force|calculate.*friction|find.*friction"
);
signal_re!(
    ASKS_KINETIC_ENERGY,
    r"what is.*kinetic energy|find.*kinetic energy|calculate.*kinetic energy|determine.*kinetic energy|energy due to.*motion|energy.*motion|calculate.*energy.*motion|find.*energy.*motion"
);
signal_re!(
    ASKS_WORK,
    r"what is.*work|find.*work|calculate.*work|determine.*work|work performed|work done|calculate.*work.*performed|find.*work.*performed"
);

/// Independent boolean signals scanned once per call.
struct Signals {
    velocity: bool,
    angle: bool,
    projectile: bool,
    asks_max_height: bool,
    asks_range: bool,
    mentions_height: bool,
    asks_displacement: bool,
    resistance: bool,
    voltage: bool,
    current: bool,
    asks_voltage: bool,
    asks_resistance: bool,
    asks_current: bool,
    asks_power: bool,
    mass: bool,
    force: bool,
    distance: bool,
    mu: bool,
    asks_normal_force: bool,
    asks_friction: bool,
    asks_kinetic_energy: bool,
    asks_work: bool,
}

impl Signals {
    fn scan(text: &str) -> Self {
        Self {
            velocity: HAS_VELOCITY.is_match(text),
            angle: HAS_ANGLE.is_match(text),
            projectile: HAS_PROJECTILE.is_match(text),
            asks_max_height: ASKS_MAX_HEIGHT.is_match(text),
            asks_range: ASKS_RANGE.is_match(text),
            mentions_height: MENTIONS_HEIGHT.is_match(text),
            asks_displacement: ASKS_DISPLACEMENT.is_match(text),
            resistance: HAS_RESISTANCE.is_match(text),
            voltage: HAS_VOLTAGE.is_match(text),
            current: HAS_CURRENT.is_match(text),
            asks_voltage: ASKS_VOLTAGE.is_match(text),
            asks_resistance: ASKS_RESISTANCE.is_match(text),
            asks_current: ASKS_CURRENT.is_match(text),
            asks_power: ASKS_POWER.is_match(text),
            mass: HAS_MASS.is_match(text),
            force: HAS_FORCE.is_match(text),
            distance: HAS_DISTANCE.is_match(text),
            mu: HAS_MU.is_match(text),
            asks_normal_force: ASKS_NORMAL_FORCE.is_match(text),
            asks_friction: ASKS_FRICTION.is_match(text),
            asks_kinetic_energy: ASKS_KINETIC_ENERGY.is_match(text),
            asks_work: ASKS_WORK.is_match(text),
        }
    }

    /// Composite predicates for projectile maximum height, from strict
    /// (explicit height phrase + projectile noun) to lenient (velocity +
    /// angle + any height word, not a range question).
    fn projectile_height(&self) -> bool {
        let explicit = self.asks_max_height && (self.projectile || (self.velocity && self.angle));
        let strict =
            self.mentions_height && self.velocity && self.angle && !self.asks_range;
        let lenient = strict && !self.asks_displacement;
        let noun_based = self.projectile
            && self.velocity
            && self.angle
            && self.mentions_height
            && !self.asks_range;
        explicit || strict || lenient || noun_based
    }

    fn projectile_range(&self) -> bool {
        self.asks_range && (self.projectile || (self.velocity && self.angle))
    }
}

/// Classifies which catalog formula the problem text refers to.
///
/// Total for non-blank input: when no stage resolves, the answer is
/// `"velocity"`. Idempotent: identical text always yields the same id.
pub fn identify(text: &str) -> &'static str {
    let signals = Signals::scan(text);

    // Stage 1: projectile special cases, height before range.
    if signals.projectile_height() {
        debug!(formula = "projectileHeight", "projectile height composite");
        return "projectileHeight";
    }
    if signals.projectile_range() {
        debug!(formula = "projectileRange", "projectile range composite");
        return "projectileRange";
    }

    // Stage 2: cross-domain priority rules, first match wins.
    let s = &signals;
    let rules: [(bool, &'static str); 8] = [
        (s.force && s.distance && s.asks_work, "work"),
        (s.mass && s.velocity && s.asks_kinetic_energy, "kineticEnergy"),
        (s.mu && s.asks_friction, "friction"),
        (s.mass && s.asks_normal_force, "normalForce"),
        (s.voltage && s.current && s.asks_power, "power"),
        (s.voltage && s.current && s.asks_resistance, "resistance"),
        (s.voltage && s.resistance && s.asks_current, "current"),
        (s.current && s.resistance && s.asks_voltage, "voltage"),
    ];
    for (matched, formula) in rules {
        if matched {
            debug!(formula, "priority rule");
            return formula;
        }
    }

    // Stage 3: keyword scoring, first-encountered order breaks ties.
    let lower = text.to_lowercase();
    let mut best = "velocity";
    let mut best_score = 0;
    for (formula, matchers) in COMPILED_RULES.iter() {
        let s = score(matchers, &lower);
        if s > best_score {
            best_score = s;
            best = formula;
        }
    }
    debug!(formula = best, score = best_score, "keyword scoring");
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kinematics_final_velocity() {
        let text =
            "A car starts from rest and accelerates at 5 m/s² for 10 seconds. Find its final velocity.";
        assert_eq!(identify(text), "velocity");
    }

    #[test]
    fn ohms_law_current() {
        let text = "A 12V battery is connected to a 4Ω resistor. What is the current?";
        assert_eq!(identify(text), "current");
    }

    #[test]
    fn projectile_maximum_height() {
        let text = "A projectile is launched at 20 m/s at an angle of 60° above the horizontal. Find the maximum height.";
        assert_eq!(identify(text), "projectileHeight");
    }

    #[test]
    fn projectile_range() {
        let text =
            "A cannonball is fired at 25 m/s at an angle of 45°. What is the horizontal range?";
        assert_eq!(identify(text), "projectileRange");
    }

    #[test]
    fn height_beats_range_when_both_fire() {
        // Asks for travel distance and peak height in the same breath.
        let text = "A rocket is launched at 40 m/s at an angle of 75°. How far does it travel and what maximum height does it reach?";
        assert_eq!(identify(text), "projectileHeight");
    }

    #[test]
    fn kinetic_energy_priority_rule() {
        let text = "A 5 kg object moving at 10 m/s. Find its kinetic energy.";
        assert_eq!(identify(text), "kineticEnergy");
    }

    #[test]
    fn work_priority_rule() {
        let text = "A force of 50 N pulls a box for a distance of 10 m. Calculate the work done.";
        assert_eq!(identify(text), "work");
    }

    #[test]
    fn friction_priority_rule() {
        let text = "A 10 kg crate slides with a coefficient of kinetic friction of 0.3. Find the frictional force.";
        assert_eq!(identify(text), "friction");
    }

    #[test]
    fn normal_force_priority_rule() {
        let text = "A 10 kg book rests on a table. What is the normal force?";
        assert_eq!(identify(text), "normalForce");
    }

    #[test]
    fn electrical_power_before_resistance() {
        let text = "A 10 V source drives a current of 2 A. Calculate the power dissipated.";
        assert_eq!(identify(text), "power");
    }

    #[test]
    fn electrical_voltage_rule() {
        let text =
            "A current of 2 A flows through a resistance of 5 Ω. Find the voltage across it.";
        assert_eq!(identify(text), "voltage");
    }

    #[test]
    fn defaults_to_velocity_when_nothing_scores() {
        assert_eq!(identify("the quick brown fox jumps over the lazy dog"), "velocity");
    }

    #[test]
    fn identify_is_total_over_catalog() {
        let samples = [
            "Find its final velocity.",
            "How far does it travel?",
            "Calculate the acceleration.",
            "How long does it take?",
            "What is the current?",
            "Find the voltage.",
            "Calculate the resistance in ohms.",
            "Find the power dissipated.",
            "What is the normal force?",
            "Find the frictional force.",
            "Calculate the kinetic energy.",
            "Find the gravitational potential energy.",
            "Calculate the work done.",
            "Find the maximum height of the projectile.",
            "What is the horizontal range of the projectile?",
        ];
        for text in samples {
            let id = identify(text);
            assert!(
                physika_core::formula_by_id(id).is_some(),
                "{text:?} -> {id:?} not in catalog"
            );
        }
    }

    #[test]
    fn identify_is_idempotent() {
        let text = "A 12V battery is connected to a 4Ω resistor. What is the current?";
        assert_eq!(identify(text), identify(text));
    }
}
