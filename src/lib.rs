//! # fieldenum
//!
//! fieldenum assigns enum values to the fields of a struct. Each field may
//! carry a tag holding an arithmetic expression; `iota` stands for the index
//! of the field, so fields without a tag keep counting from the last tagged
//! one. String fields take their tag or their name.
//!
//! ```
//! use fieldenum::field_enum;
//!
//! field_enum! {
//!     #[derive(Debug)]
//!     pub struct Level: i32 {
//!         Debug,
//!         Info,
//!         Warn = "10",
//!         Error,
//!     }
//! }
//!
//! let level: Level = fieldenum::new(vec![]);
//! assert_eq!((level.Debug, level.Info, level.Warn, level.Error), (0, 1, 10, 11));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::ExprError, interpreter::evaluator::core::Context};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and operator types for the whole grammar.
/// - Attaches source spans to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing, evaluation and generation.
///
/// Every error carries enough context to point at the failing field, the
/// expression text and the sub-expression involved.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator,
///   generator).
/// - Chains errors through `std::error::Error::source`.
pub mod error;
/// Fills struct fields with enum values.
///
/// This module validates the target, applies configuration options, and
/// drives the evaluator field by field.
pub mod generator;
/// Orchestrates expression evaluation.
///
/// This module ties together lexing, parsing, evaluation and the value
/// representation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating expressions.
pub mod interpreter;
/// General utilities for overflow-aware integer arithmetic.
///
/// # Responsibilities
/// - Promote overflowing integer operations to floats instead of wrapping.
/// - Safely convert between `i64` and `f64`.
pub mod util;

pub use crate::{
    error::Error,
    generator::{
        core::{assign, new, try_new},
        options::{ConfigOption, with_func, with_funcs, with_value, with_values},
    },
    interpreter::value::core::Value,
};

/// Evaluates a single expression with `iota = 0`.
///
/// # Errors
/// Returns an error if the expression cannot be parsed or evaluated.
///
/// # Examples
/// ```
/// use fieldenum::{Value, evaluate};
///
/// assert_eq!(evaluate("pow(2, 10)").unwrap(), Value::Int(1024));
/// assert_eq!(evaluate("9223372036854775807 + 1").unwrap(),
///            Value::Float(9_223_372_036_854_775_808.0));
///
/// let err = evaluate("1 <<").unwrap_err();
/// assert!(err.to_string().starts_with("invalid expression \"1 <<\""));
/// ```
pub fn evaluate(source: &str) -> Result<Value, ExprError> {
    Context::new().evaluate(source)
}
