//! `px parse` -- run the parsing pipeline over one problem text.

use anyhow::{Context, Result};
use physika_core::formula_by_id;

use crate::cli::{GlobalArgs, ParseArgs};
use crate::output::output_json;

/// Execute the `px parse` command.
pub fn run(global: &GlobalArgs, args: &ParseArgs) -> Result<()> {
    let parsed = physika_parser::parse(&args.text, args.formula.as_deref())?;
    let formula = formula_by_id(parsed.formula_id)
        .context("parser returned a formula id missing from the catalog")?;

    if global.json {
        output_json(&parsed);
        return Ok(());
    }

    println!("Formula: {} ({})", formula.name, formula.id);
    println!("  {}", formula.formula);

    if parsed.values.is_empty() {
        println!("Values: none found");
    } else {
        println!("Values:");
        for var in formula.variables {
            if let Some(value) = parsed.values.get(var.key) {
                let unit = if var.unit.is_empty() {
                    String::new()
                } else {
                    format!(" {}", var.unit)
                };
                println!("  {} ({}) = {}{}", var.key, var.name, value, unit);
            }
        }
    }

    let missing = formula.missing_required(|key| parsed.values.contains_key(key));
    if !missing.is_empty() && !global.quiet {
        let keys: Vec<&str> = missing.iter().map(|v| v.key).collect();
        println!("Missing required: {}", keys.join(", "));
    }

    Ok(())
}
