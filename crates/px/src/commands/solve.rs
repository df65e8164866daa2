//! `px solve` -- parse a problem and submit it to the calculation service.

use anyhow::{bail, Context, Result};
use physika_client::CalcClient;
use physika_core::formula_by_id;
use tracing::debug;

use crate::cli::{GlobalArgs, SolveArgs};
use crate::output::output_json;

/// Execute the `px solve` command.
pub fn run(global: &GlobalArgs, args: &SolveArgs) -> Result<()> {
    let parsed = physika_parser::parse(&args.text, args.formula.as_deref())?;
    let formula = formula_by_id(parsed.formula_id)
        .context("parser returned a formula id missing from the catalog")?;

    let missing = formula.missing_required(|key| parsed.values.contains_key(key));
    if !missing.is_empty() {
        let keys: Vec<&str> = missing.iter().map(|v| v.key).collect();
        bail!(
            "cannot solve '{}': missing required value(s) {}\nHint: rephrase the problem or fill them in manually",
            formula.id,
            keys.join(", ")
        );
    }

    let client = CalcClient::new(&args.base_url);
    let result = client
        .calculate(formula, &parsed.values)
        .with_context(|| format!("calculation failed for '{}'", formula.id))?;
    debug!(formula = formula.id, result, "calculation succeeded");

    if global.json {
        output_json(&serde_json::json!({
            "formulaId": parsed.formula_id,
            "values": parsed.values,
            "result": result,
        }));
        return Ok(());
    }

    if !global.quiet {
        println!("Formula: {} ({})", formula.name, formula.id);
        println!("  {}", formula.formula);
    }
    println!("Result: {}", result);

    Ok(())
}
