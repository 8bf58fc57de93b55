// src/eval/mod.rs

//! Sandbox evaluator for candidate configuration text.
//!
//! Candidate source is never handed to a general-purpose interpreter. It is
//! parsed and evaluated by a small, capability-free expression language:
//!
//! - statements: `NAME = value`, one per line; `#` comments; blank lines
//! - values: single/double-quoted strings, integers, floats, `True`/`False`,
//!   lists `[..]`, mappings `{key: value, ..}` (trailing commas allowed)
//! - calls to the fixed helper set: `octet_string`, `integer`, `counter32`,
//!   `ip_address`, `timeticks`
//! - single-parameter lambdas (`lambda oid: ...`) for lazily computed
//!   entries; the body may reference only the parameter and the helpers
//!
//! There is no I/O, no imports, no attribute access and no loops, so a
//! candidate cannot observe or mutate anything outside its own evaluation.
//! Each run starts from a fresh namespace and is bounded by a step budget;
//! the pipeline adds a wall-clock timeout on top.

pub mod interp;
pub mod parser;
pub mod token;
pub mod value;

pub use interp::{Bindings, HELPERS};
pub use value::{Lambda, Value};

use crate::errors::EvalError;

/// Evaluate candidate source into its top-level bindings.
///
/// `max_steps` is the evaluation fuel: every visited expression node costs
/// one step, so even adversarially nested input terminates.
pub fn evaluate(source: &str, max_steps: u64) -> Result<Bindings, EvalError> {
    let tokens = token::lex(source)?;
    let program = parser::parse(tokens)?;
    interp::Interp::new(max_steps).run(&program)
}
