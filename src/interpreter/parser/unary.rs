use std::iter::Peekable;

use crate::{
    ast::{Expr, Span, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{literal_from_token, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `+`, `-`, `^` (bitwise complement) and `!`.
/// Unary operators are right-associative, so an input like `-^x` is parsed as
/// `-(^x)`, and bind tighter than every binary operator.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-" | "^" | "!") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Unary`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::Caret, _)) => UnaryOperator::Complement,
        Some((Token::Bang, _)) => UnaryOperator::Not,
        _ => return parse_primary(tokens),
    };

    let Some((_, op_span)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { span: Span::default() });
    };
    let expr = parse_unary(tokens)?;
    let span = op_span.to(expr.span());
    Ok(Expr::Unary { op,
                     expr: Box::new(expr),
                     span })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
///
/// ```text
///     primary := literal
///              | identifier
///              | identifier "(" (expression ("," expression)*)? ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let (token, span) = tokens.next()
                              .ok_or(ParseError::UnexpectedEndOfInput { span: Span::default() })?;

    match token {
        Token::Int(_) | Token::Float(_) | Token::Imaginary(_) | Token::Str(_) => {
            Ok(Expr::Literal { value: literal_from_token(token, *span)?,
                               span:  *span, })
        },
        Token::LParen => parse_grouping(tokens, *span),
        Token::Identifier(name) => parse_identifier_or_call(tokens, name, *span),
        tok => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                 span:  *span, }),
    }
}

/// Parses the rest of a parenthesized expression.
///
/// Expected form `( expression )`, with the opening parenthesis already
/// consumed. The group is kept as an [`Expr::Paren`] node so that error
/// messages can quote it with its parentheses.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
/// - `open`: Span of the opening parenthesis.
///
/// # Errors
/// Returns `ParseError::ExpectedClosingParen` spanning the unclosed group if
/// the next token after the inner expression is not `)`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, open: Span) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, close)) => Ok(Expr::Paren { expr: Box::new(expr),
                                                         span: open.to(*close), }),
        _ => Err(ParseError::ExpectedClosingParen { span: open.to(expr.span()) }),
    }
}

/// Parses an identifier or a function call.
///
/// If the identifier is followed by `(`, the argument list is parsed as a
/// function call. Otherwise the identifier is a value reference; whether it
/// resolves is decided at evaluation time.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the identifier.
/// - `name`: The identifier text.
/// - `span`: Span of the identifier.
///
/// # Returns
/// - [`Expr::Call`] if followed by parentheses,
/// - [`Expr::Identifier`] otherwise.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>,
                                   name: &str,
                                   span: Span)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let (arguments, close) = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
        return Ok(Expr::Call { name: name.to_string(),
                               arguments,
                               span: span.to(close) });
    }

    Ok(Expr::Identifier { name: name.to_string(),
                          span })
}
