use std::iter::Peekable;

use crate::{
    ast::{Expr, Span},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::binary::parse_logical_or,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_logical_or(tokens)
}

/// Tokenizes and parses a complete expression.
///
/// The whole input must form exactly one expression; anything left over after
/// it is reported as [`ParseError::UnexpectedTrailingTokens`]. An empty or
/// truncated input yields [`ParseError::UnexpectedEndOfInput`] spanning the
/// end of the text.
///
/// # Errors
/// Returns a `ParseError` for unknown characters, grammar violations and
/// literals that cannot be converted.
///
/// # Example
/// ```
/// use fieldenum::{
///     ast::{BinaryOperator, Expr},
///     interpreter::parser::core::parse,
/// };
///
/// let expr = parse("1 + 2 * iota").unwrap();
/// assert!(matches!(expr, Expr::Binary { op: BinaryOperator::Add, .. }));
///
/// assert!(parse("1 +").is_err());
/// assert!(parse("(1 + 2").is_err());
/// assert!(parse("1 2").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let expr = match parse_expression(&mut iter) {
        Err(ParseError::UnexpectedEndOfInput { .. }) => {
            let end = source.len();
            return Err(ParseError::UnexpectedEndOfInput { span: Span::new(end, end) });
        },
        result => result?,
    };

    if let Some((tok, span)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: tok.to_string(),
                                                          span:  *span, });
    }

    Ok(expr)
}
