//! Output formatting helpers for the `px` CLI.

use std::io::{self, Write};

use physika_core::{FormulaDefinition, VariableSpec};
use serde::Serialize;

/// A view model of one catalog formula for JSON output.
#[derive(Serialize)]
pub struct FormulaView {
    pub id: &'static str,
    pub name: &'static str,
    pub category: String,
    pub formula: &'static str,
    pub endpoint: &'static str,
    pub variables: Vec<VariableView>,
    pub required: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct VariableView {
    pub key: &'static str,
    pub label: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
}

impl FormulaView {
    pub fn from_definition(def: &FormulaDefinition) -> Self {
        Self {
            id: def.id,
            name: def.name,
            category: def.category.to_string(),
            formula: def.formula,
            endpoint: def.endpoint,
            variables: def.variables.iter().map(VariableView::from_spec).collect(),
            required: def.required.to_vec(),
        }
    }
}

impl VariableView {
    fn from_spec(spec: &VariableSpec) -> Self {
        Self {
            key: spec.key,
            label: spec.label,
            name: spec.name,
            unit: spec.unit,
        }
    }
}

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print rows as space-aligned columns.
pub fn output_table(rows: &[Vec<String>]) {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    for row in rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i + 1 == row.len() {
                line.push_str(cell);
            } else {
                line.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
            }
        }
        println!("{}", line.trim_end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physika_core::formula_by_id;
    use pretty_assertions::assert_eq;

    #[test]
    fn formula_view_carries_catalog_fields() {
        let def = formula_by_id("current").unwrap();
        let view = FormulaView::from_definition(def);
        assert_eq!(view.id, "current");
        assert_eq!(view.category, "Electricity");
        assert_eq!(view.variables.len(), 2);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["endpoint"], "/api/electricity/current");
    }
}
