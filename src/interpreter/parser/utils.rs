use std::iter::Peekable;

use crate::{
    ast::{LiteralValue, Span},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::ParseResult,
        value::complex::ComplexNumber,
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// It repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
///
/// # Returns
/// The parsed items and the span of the closing token.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<(Vec<T>, Span)>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, span)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok((items, *span));
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, span)) if tok == closing => return Ok((items, *span)),
            Some((tok, span)) => {
                return Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                         span:  *span, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { span: Span::default() }),
        }
    }
}

/// Converts a literal token into its value.
///
/// # Parameters
/// - `token`: An `Int`, `Float`, `Imaginary` or `Str` token.
/// - `span`: Span of the token, used for error reporting.
///
/// # Errors
/// Returns `ParseError::InvalidLiteral` if the text is malformed, e.g. `09`
/// or `0x_`.
pub(in crate::interpreter::parser) fn literal_from_token(token: &Token,
                                                         span: Span)
                                                         -> ParseResult<LiteralValue> {
    let invalid = || ParseError::InvalidLiteral { literal: token.to_string(),
                                                  span };
    match token {
        Token::Int(text) => parse_int_literal(text).ok_or_else(invalid),
        Token::Float(text) => parse_float_literal(text).map(LiteralValue::Float)
                                                       .ok_or_else(invalid),
        Token::Imaginary(text) => {
            let body = text.strip_suffix('i').ok_or_else(invalid)?;
            let imaginary = parse_float_literal(body).ok_or_else(invalid)?;
            Ok(LiteralValue::Complex(ComplexNumber::new(0.0, imaginary)))
        },
        Token::Str(s) => Ok(LiteralValue::Str(s.clone())),
        _ => Err(invalid()),
    }
}

/// Converts the text of an integer literal into a value.
///
/// Accepts the prefixes `0x`, `0o` and `0b`, the legacy octal form `017` and
/// `_` separators. Literals too large for `i64` become floats.
///
/// # Returns
/// - `Some(LiteralValue::Int)` or `Some(LiteralValue::Float)` on success.
/// - `None`: If a digit is invalid for the radix or no digits remain.
///
/// # Example
/// ```
/// use fieldenum::{ast::LiteralValue, interpreter::parser::utils::parse_int_literal};
///
/// assert_eq!(parse_int_literal("1_000"), Some(LiteralValue::Int(1000)));
/// assert_eq!(parse_int_literal("0x1F"), Some(LiteralValue::Int(31)));
/// assert_eq!(parse_int_literal("017"), Some(LiteralValue::Int(15)));
/// assert_eq!(parse_int_literal("0b101"), Some(LiteralValue::Int(5)));
/// assert_eq!(parse_int_literal("9223372036854775808"),
///            Some(LiteralValue::Float(9.223372036854775808e18)));
/// assert_eq!(parse_int_literal("09"), None);
/// ```
#[must_use]
pub fn parse_int_literal(text: &str) -> Option<LiteralValue> {
    let (radix, body) = if let Some(rest) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        (16, rest)
    } else if let Some(rest) = text.strip_prefix("0o").or_else(|| text.strip_prefix("0O")) {
        (8, rest)
    } else if let Some(rest) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        (2, rest)
    } else if text.len() > 1 && text.starts_with('0') {
        (8, &text[1..])
    } else {
        (10, text)
    };

    let digits: String = body.chars().filter(|&c| c != '_').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    match i64::from_str_radix(&digits, radix) {
        Ok(n) => Some(LiteralValue::Int(n)),
        Err(_) if radix == 10 => digits.parse().ok().map(LiteralValue::Float),
        Err(_) => {
            let value = digits.chars()
                              .filter_map(|c| c.to_digit(radix))
                              .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d));
            Some(LiteralValue::Float(value))
        },
    }
}

/// Converts the text of a floating-point literal into an `f64`.
///
/// `_` separators are removed before parsing. Leading zeros are decimal, so
/// `017.5` is `17.5`.
#[must_use]
pub fn parse_float_literal(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|&c| c != '_').collect();
    cleaned.parse().ok()
}
