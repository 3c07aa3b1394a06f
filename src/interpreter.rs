/// The evaluator module computes values from AST nodes.
///
/// The evaluator traverses the AST, resolves identifiers against `iota`, the
/// builtin constants and custom values, applies operators with numeric
/// promotion, and calls builtin or custom functions. It is the core
/// execution engine of the crate.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves identifiers and functions in their fixed lookup order.
/// - Reports runtime errors with the span of the failing sub-expression.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer reads the raw text and produces a stream of tokens, each
/// corresponding to a literal, an identifier, an operator or a delimiter,
/// paired with its byte span.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source spans.
/// - Recognizes every numeric literal form and string literals.
/// - Reports lexical errors for unknown characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST following the usual operator precedence.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with spans.
/// - Converts literal text into values.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Value` enum with its three numeric alternatives
/// and the complex number types.
///
/// # Responsibilities
/// - Defines the `Value` enum and its conversions from primitive types.
/// - Implements complex arithmetic and elementary complex functions.
/// - Provides widening between numeric kinds.
pub mod value;
