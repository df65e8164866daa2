//! The static formula catalog.
//!
//! Fifteen formulas across five categories. The catalog is the single source
//! of truth for formula identity and variable schemas; the parser and the
//! calculation client are both keyed by it.

use crate::formula::{Category, FormulaDefinition, VariableSpec};

const fn var(
    key: &'static str,
    label: &'static str,
    name: &'static str,
    unit: &'static str,
    placeholder: &'static str,
) -> VariableSpec {
    VariableSpec {
        key,
        label,
        name,
        unit,
        placeholder,
    }
}

static FORMULAS: &[FormulaDefinition] = &[
    // Kinematics
    FormulaDefinition {
        id: "velocity",
        name: "Find Final Velocity",
        category: Category::Kinematics,
        formula: "v = v₀ + at",
        endpoint: "/api/kinematics/velocity",
        variables: &[
            var("u", "v₀", "Initial Velocity", "m/s", "0"),
            var("a", "a", "Acceleration", "m/s²", "9.8"),
            var("t", "t", "Time", "s", "10"),
        ],
        required: &["u", "a", "t"],
        result_key: "result",
    },
    FormulaDefinition {
        id: "displacement",
        name: "Find Displacement",
        category: Category::Kinematics,
        formula: "s = v₀t + ½at²",
        endpoint: "/api/kinematics/displacement",
        variables: &[
            var("u", "v₀", "Initial Velocity", "m/s", "0"),
            var("a", "a", "Acceleration", "m/s²", "9.8"),
            var("t", "t", "Time", "s", "10"),
        ],
        required: &["u", "a", "t"],
        result_key: "result",
    },
    FormulaDefinition {
        id: "acceleration",
        name: "Find Acceleration",
        category: Category::Kinematics,
        formula: "a = (v - v₀) / t",
        endpoint: "/api/kinematics/acceleration",
        variables: &[
            var("v", "v", "Final Velocity", "m/s", "50"),
            var("u", "v₀", "Initial Velocity", "m/s", "0"),
            var("t", "t", "Time", "s", "10"),
        ],
        required: &["v", "u", "t"],
        result_key: "result",
    },
    FormulaDefinition {
        id: "time",
        name: "Find Time",
        category: Category::Kinematics,
        formula: "t = (v - v₀) / a",
        endpoint: "/api/kinematics/time",
        variables: &[
            var("v", "v", "Final Velocity", "m/s", "50"),
            var("u", "v₀", "Initial Velocity", "m/s", "0"),
            var("a", "a", "Acceleration", "m/s²", "9.8"),
        ],
        required: &["v", "u", "a"],
        result_key: "result",
    },
    // Electricity
    FormulaDefinition {
        id: "current",
        name: "Calculate Current",
        category: Category::Electricity,
        formula: "I = V / R",
        endpoint: "/api/electricity/current",
        variables: &[
            var("voltage", "V", "Voltage", "V", "12"),
            var("resistance", "R", "Resistance", "Ω", "4"),
        ],
        required: &["voltage", "resistance"],
        result_key: "result",
    },
    FormulaDefinition {
        id: "voltage",
        name: "Calculate Voltage",
        category: Category::Electricity,
        formula: "V = I × R",
        endpoint: "/api/electricity/voltage",
        variables: &[
            var("current", "I", "Current", "A", "2"),
            var("resistance", "R", "Resistance", "Ω", "5"),
        ],
        required: &["current", "resistance"],
        result_key: "result",
    },
    FormulaDefinition {
        id: "resistance",
        name: "Calculate Resistance",
        category: Category::Electricity,
        formula: "R = V / I",
        endpoint: "/api/electricity/resistance",
        variables: &[
            var("voltage", "V", "Voltage", "V", "220"),
            var("current", "I", "Current", "A", "5"),
        ],
        required: &["voltage", "current"],
        result_key: "result",
    },
    FormulaDefinition {
        id: "power",
        name: "Calculate Power",
        category: Category::Electricity,
        formula: "P = V × I",
        endpoint: "/api/electricity/power",
        variables: &[
            var("voltage", "V", "Voltage", "V", "10"),
            var("current", "I", "Current", "A", "2"),
        ],
        required: &["voltage", "current"],
        result_key: "result",
    },
    // Forces
    FormulaDefinition {
        id: "normalForce",
        name: "Calculate Normal Force",
        category: Category::Forces,
        formula: "N = mg",
        endpoint: "/api/forces/normal",
        variables: &[var("mass", "m", "Mass", "kg", "10")],
        required: &["mass"],
        result_key: "result",
    },
    FormulaDefinition {
        id: "friction",
        name: "Calculate Frictional Force",
        category: Category::Forces,
        formula: "F_f = μN",
        endpoint: "/api/forces/friction",
        variables: &[
            var("mu", "μ", "Coefficient of Friction", "", "0.5"),
            var("normal_force", "N", "Normal Force", "N", "98"),
        ],
        required: &["mu", "normal_force"],
        result_key: "result",
    },
    // Work & Energy
    FormulaDefinition {
        id: "kineticEnergy",
        name: "Calculate Kinetic Energy",
        category: Category::WorkEnergy,
        formula: "KE = ½mv²",
        endpoint: "/api/work_energy/kinetic",
        variables: &[
            var("mass", "m", "Mass", "kg", "2"),
            var("velocity", "v", "Velocity", "m/s", "10"),
        ],
        required: &["mass", "velocity"],
        result_key: "result",
    },
    FormulaDefinition {
        id: "potentialEnergy",
        name: "Calculate Potential Energy",
        category: Category::WorkEnergy,
        formula: "PE = mgh",
        endpoint: "/api/work_energy/potential",
        variables: &[
            var("mass", "m", "Mass", "kg", "10"),
            var("height", "h", "Height", "m", "5"),
        ],
        required: &["mass", "height"],
        result_key: "result",
    },
    FormulaDefinition {
        id: "work",
        name: "Calculate Work",
        category: Category::WorkEnergy,
        formula: "W = F × d",
        endpoint: "/api/work_energy/work",
        variables: &[
            var("force", "F", "Force", "N", "50"),
            var("distance", "d", "Distance", "m", "10"),
        ],
        required: &["force", "distance"],
        result_key: "result",
    },
    // Projectile Motion
    FormulaDefinition {
        id: "projectileHeight",
        name: "Calculate Maximum Height",
        category: Category::ProjectileMotion,
        formula: "H = (v₀²sin²θ) / 2g",
        endpoint: "/api/projectile/height",
        variables: &[
            var("u", "v₀", "Initial Velocity", "m/s", "20"),
            var("angle", "θ", "Angle", "°", "60"),
        ],
        required: &["u", "angle"],
        result_key: "result",
    },
    FormulaDefinition {
        id: "projectileRange",
        name: "Calculate Horizontal Range",
        category: Category::ProjectileMotion,
        formula: "R = (v₀²sin(2θ)) / g",
        endpoint: "/api/projectile/range",
        variables: &[
            var("u", "v₀", "Initial Velocity", "m/s", "20"),
            var("angle", "θ", "Angle", "°", "45"),
        ],
        required: &["u", "angle"],
        result_key: "result",
    },
];

/// All formulas, in catalog order.
pub fn formulas() -> &'static [FormulaDefinition] {
    FORMULAS
}

/// Looks up a formula by id.
pub fn formula_by_id(id: &str) -> Option<&'static FormulaDefinition> {
    FORMULAS.iter().find(|f| f.id == id)
}

/// Formulas belonging to one category, in catalog order.
pub fn formulas_by_category(category: Category) -> Vec<&'static FormulaDefinition> {
    FORMULAS.iter().filter(|f| f.category == category).collect()
}

/// Distinct categories, in first-appearance order.
pub fn categories() -> Vec<Category> {
    let mut seen = Vec::new();
    for f in FORMULAS {
        if !seen.contains(&f.category) {
            seen.push(f.category);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_by_id() {
        let f = formula_by_id("velocity").unwrap();
        assert_eq!(f.name, "Find Final Velocity");
        assert_eq!(f.variables.len(), 3);
        assert!(formula_by_id("antigravity").is_none());
    }

    #[test]
    fn ids_are_unique() {
        for (i, a) in formulas().iter().enumerate() {
            for b in &formulas()[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate formula id");
            }
        }
    }

    #[test]
    fn variable_keys_unique_within_formula() {
        for f in formulas() {
            for (i, a) in f.variables.iter().enumerate() {
                for b in &f.variables[i + 1..] {
                    assert_ne!(a.key, b.key, "duplicate key in formula {}", f.id);
                }
            }
        }
    }

    #[test]
    fn required_keys_are_variable_keys() {
        for f in formulas() {
            for key in f.required {
                assert!(
                    f.has_variable(key),
                    "formula {} requires unknown key {}",
                    f.id,
                    key
                );
            }
        }
    }

    #[test]
    fn endpoints_are_unique_and_rooted() {
        for f in formulas() {
            assert!(f.endpoint.starts_with("/api/"), "{}", f.id);
        }
        for (i, a) in formulas().iter().enumerate() {
            for b in &formulas()[i + 1..] {
                assert_ne!(a.endpoint, b.endpoint);
            }
        }
    }

    #[test]
    fn five_categories() {
        assert_eq!(categories().len(), 5);
        assert_eq!(formulas_by_category(Category::Kinematics).len(), 4);
        assert_eq!(formulas_by_category(Category::Electricity).len(), 4);
        assert_eq!(formulas_by_category(Category::ProjectileMotion).len(), 2);
    }

    #[test]
    fn missing_required_reports_in_schema_order() {
        let f = formula_by_id("velocity").unwrap();
        let missing = f.missing_required(|key| key == "a");
        let keys: Vec<&str> = missing.iter().map(|v| v.key).collect();
        assert_eq!(keys, vec!["u", "t"]);
    }
}
