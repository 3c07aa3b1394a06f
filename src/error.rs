/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include unexpected tokens, unbalanced parentheses,
/// invalid literals and trailing input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a parsed expression: operator
/// errors, function errors, unknown identifiers, and `ExprError`, which ties
/// either a parse or a runtime failure to the expression text.
pub mod runtime_error;
/// Field assignment errors.
///
/// Errors raised by the generator while validating a target or writing the
/// computed values into its fields. The top-level `Error` lives here.
pub mod field_error;

pub use field_error::{Error, FieldError};
pub use parse_error::ParseError;
pub use runtime_error::{ExprError, FunctionError, OpError, RuntimeError};
