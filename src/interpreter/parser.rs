/// Parser entry points.
///
/// Defines `ParseResult`, the expression entry point and `parse`, which turns
/// a complete expression text into an AST and rejects trailing input.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from `||` down to the multiplicative
/// operators, all left-associative.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals, identifiers, calls and parenthesized
/// groups.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides the comma-separated list helper and the conversion of literal
/// token text into values.
pub mod utils;
