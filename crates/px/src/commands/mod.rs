//! Command handlers for the `px` CLI.

pub mod formulas;
pub mod parse_cmd;
pub mod solve;
pub mod version;
