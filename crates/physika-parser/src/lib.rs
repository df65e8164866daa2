//! Natural-language physics problem parsing.
//!
//! The pipeline has three stages:
//! 1. [`identify`] classifies which catalog formula a problem text refers to.
//! 2. [`extract`] pulls numeric variable values out of the text against the
//!    chosen formula's schema, in three fallback tiers.
//! 3. [`parse`] orchestrates both and produces a [`Parsed`] outcome.
//!
//! All stages are pure, synchronous functions of the input text and the
//! static catalog; repeated calls with identical text return identical
//! results.

pub mod extract;
pub mod identify;
pub mod keywords;
pub mod normalize;
pub mod parse;
pub mod patterns;
pub mod tokens;

pub use extract::{ExtractionResult, extract};
pub use identify::identify;
pub use parse::{ParseError, Parsed, parse};
