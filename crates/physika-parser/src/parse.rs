//! Parse orchestration: identification, catalog lookup, extraction.

use std::collections::BTreeMap;

use physika_core::formula_by_id;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::extract::extract;
use crate::identify::identify;

/// Why a parse produced no result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Blank or whitespace-only problem text.
    #[error("Please enter a physics problem")]
    EmptyInput,

    /// The identified formula id is missing from the catalog and no usable
    /// fallback selection was supplied.
    #[error("Could not identify a suitable formula for this problem. Please try rephrasing.")]
    UnknownFormula,
}

/// A successful parse: the chosen formula and whatever variable values the
/// text determined. Gaps in `values` are not an error; callers route them to
/// manual entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parsed {
    #[serde(rename = "formulaId")]
    pub formula_id: &'static str,
    pub values: BTreeMap<&'static str, String>,
}

/// Parses a physics problem into a formula selection plus extracted values.
///
/// `current_formula_id` is the caller's existing selection; it is honored
/// only when identification fails to produce a catalog entry, so a confident
/// identification always wins over a stale selection.
pub fn parse(text: &str, current_formula_id: Option<&str>) -> Result<Parsed, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let formula_id = identify(text);
    if let Some(formula) = formula_by_id(formula_id) {
        debug!(formula = formula.id, "parsing with identified formula");
        return Ok(Parsed {
            formula_id: formula.id,
            values: extract(text, formula).values,
        });
    }

    // Identification is total over the catalog, so this path only carries
    // the caller's preserved selection.
    if let Some(formula) = current_formula_id.and_then(formula_by_id) {
        debug!(formula = formula.id, "falling back to current selection");
        return Ok(Parsed {
            formula_id: formula.id,
            values: extract(text, formula).values,
        });
    }

    Err(ParseError::UnknownFormula)
}
