/// Binary operator evaluation logic.
///
/// Handles the arithmetic, remainder and bitwise operators with the
/// Int -> Float -> Complex promotion rules, and rejects the comparison and
/// logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements identity, negation and bitwise complement.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context, identifier resolution, the builtin
/// constants and the expression entry points.
pub mod core;

/// Function evaluation.
///
/// Handles builtin and custom function calls, argument count checking, and
/// the builtin function library.
pub mod function;
