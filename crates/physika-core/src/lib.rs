//! Core types and the formula catalog for the physika system.
//!
//! Everything here is static data: the catalog is compiled in and never
//! changes at runtime.

pub mod catalog;
pub mod formula;

pub use catalog::{categories, formula_by_id, formulas, formulas_by_category};
pub use formula::{Category, FormulaDefinition, VariableSpec};
