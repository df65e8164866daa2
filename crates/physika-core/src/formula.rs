//! Formula data model.
//!
//! A [`FormulaDefinition`] describes one physics relation: its identity, the
//! ordered variables it consumes, which of those are required, and the
//! calculation endpoint that evaluates it. Definitions are immutable and live
//! for the whole program; the catalog in [`crate::catalog`] owns them.

use std::fmt;

use serde::Serialize;

/// One input variable of a formula.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VariableSpec {
    /// Unique key within the formula (e.g. `"u"`, `"voltage"`).
    pub key: &'static str,

    /// Short display label (e.g. `"v₀"`, `"μ"`).
    pub label: &'static str,

    /// Human-readable name (e.g. `"Initial Velocity"`).
    pub name: &'static str,

    /// Unit string; empty for dimensionless variables.
    pub unit: &'static str,

    /// Example value shown in entry forms.
    pub placeholder: &'static str,
}

/// Subject area a formula belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Kinematics,
    Electricity,
    Forces,
    WorkEnergy,
    ProjectileMotion,
}

impl Category {
    /// Returns the display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kinematics => "Kinematics",
            Self::Electricity => "Electricity",
            Self::Forces => "Forces",
            Self::WorkEnergy => "Work & Energy",
            Self::ProjectileMotion => "Projectile Motion",
        }
    }

    /// Parses a display string back into a category.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Kinematics" => Some(Self::Kinematics),
            "Electricity" => Some(Self::Electricity),
            "Forces" => Some(Self::Forces),
            "Work & Energy" => Some(Self::WorkEnergy),
            "Projectile Motion" => Some(Self::ProjectileMotion),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A physics relation the parser can target.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FormulaDefinition {
    /// Unique catalog key (e.g. `"velocity"`, `"projectileHeight"`).
    pub id: &'static str,

    /// Human-readable name (e.g. `"Find Final Velocity"`).
    pub name: &'static str,

    /// Subject area.
    pub category: Category,

    /// Display form of the relation (e.g. `"v = v₀ + at"`).
    pub formula: &'static str,

    /// Calculation endpoint path, relative to the service base URL.
    pub endpoint: &'static str,

    /// Ordered input variables.
    pub variables: &'static [VariableSpec],

    /// Keys that must be present before the endpoint can be called.
    pub required: &'static [&'static str],

    /// Field of the endpoint response holding the computed value.
    pub result_key: &'static str,
}

impl FormulaDefinition {
    /// Looks up a variable by key.
    pub fn variable(&self, key: &str) -> Option<&VariableSpec> {
        self.variables.iter().find(|v| v.key == key)
    }

    /// Returns `true` if `key` is one of this formula's variables.
    pub fn has_variable(&self, key: &str) -> bool {
        self.variable(key).is_some()
    }

    /// Required keys missing from `present`, in schema order.
    pub fn missing_required<'a>(
        &'a self,
        present: impl Fn(&str) -> bool,
    ) -> Vec<&'a VariableSpec> {
        self.required
            .iter()
            .filter(|key| !present(key))
            .filter_map(|key| self.variable(key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn category_round_trip() {
        for cat in [
            Category::Kinematics,
            Category::Electricity,
            Category::Forces,
            Category::WorkEnergy,
            Category::ProjectileMotion,
        ] {
            assert_eq!(Category::parse(cat.as_str()), Some(cat));
        }
        assert_eq!(Category::parse("Thermodynamics"), None);
    }

    #[test]
    fn category_serializes_as_display_string() {
        let json = serde_json::to_string(&Category::WorkEnergy).unwrap();
        assert_eq!(json, "\"Work & Energy\"");
    }
}
