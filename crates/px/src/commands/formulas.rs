//! `px formulas` -- list the formula catalog.

use anyhow::{bail, Result};
use physika_core::{categories, formulas, formulas_by_category, FormulaDefinition};

use crate::cli::{FormulasArgs, GlobalArgs};
use crate::output::{output_json, output_table, FormulaView};

/// Execute the `px formulas` command.
pub fn run(global: &GlobalArgs, args: &FormulasArgs) -> Result<()> {
    let selected: Vec<&FormulaDefinition> = match &args.category {
        Some(wanted) => {
            let wanted_lower = wanted.to_lowercase();
            let category = categories()
                .into_iter()
                .find(|c| c.as_str().to_lowercase() == wanted_lower);
            let Some(category) = category else {
                let known: Vec<&str> = categories().iter().map(|c| c.as_str()).collect();
                bail!(
                    "unknown category '{}' (known: {})",
                    wanted,
                    known.join(", ")
                );
            };
            formulas_by_category(category)
        }
        None => formulas().iter().collect(),
    };

    if global.json {
        let views: Vec<FormulaView> = selected
            .iter()
            .map(|f| FormulaView::from_definition(f))
            .collect();
        output_json(&views);
        return Ok(());
    }

    let mut rows: Vec<Vec<String>> = vec![vec![
        "ID".to_string(),
        "NAME".to_string(),
        "CATEGORY".to_string(),
        "FORMULA".to_string(),
    ]];
    for f in &selected {
        rows.push(vec![
            f.id.to_string(),
            f.name.to_string(),
            f.category.to_string(),
            f.formula.to_string(),
        ]);
    }
    output_table(&rows);

    if !global.quiet {
        println!();
        println!("{} formula(s)", selected.len());
    }

    Ok(())
}
