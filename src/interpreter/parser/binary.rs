use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Span},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses one left-associative precedence level.
///
/// Repeatedly parses an operand with `parse_operand` and folds it into the
/// tree while the next token maps to an operator of `precedence`.
///
/// # Parameters
/// - `tokens`: Token stream with span information.
/// - `parse_operand`: Parser for the next-tighter level.
/// - `precedence`: The level handled by this call.
///
/// # Returns
/// A left-leaning `Expr::Binary` tree, or the single operand.
fn parse_level<'a, I>(tokens: &mut Peekable<I>,
                      parse_operand: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>,
                      precedence: u8)
                      -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut left = parse_operand(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && op.precedence() == precedence
        {
            tokens.next();
            let right = parse_operand(tokens)?;
            let span = left.span().to(right.span());
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  span };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses logical OR expressions.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::LogicalOr`.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_level(tokens, parse_logical_and, BinaryOperator::LogicalOr.precedence())
}

/// Parses logical AND expressions.
///
/// Grammar: `logical_and := comparison ("&&" comparison)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_level(tokens, parse_comparison, BinaryOperator::LogicalAnd.precedence())
}

/// Parses comparison expressions: `==`, `!=`, `<`, `<=`, `>`, `>=`.
///
/// Grammar: `comparison := additive (cmp_op additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_level(tokens, parse_additive, BinaryOperator::Equal.precedence())
}

/// Parses additive expressions.
///
/// Handles the left-associative operators `+`, `-`, `|` and `^`.
///
/// Grammar: `additive := multiplicative (("+" | "-" | "|" | "^")
/// multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_level(tokens, parse_multiplicative, BinaryOperator::Add.precedence())
}

/// Parses multiplication-level expressions.
///
/// Handles the left-associative operators `*`, `/`, `%`, `<<`, `>>`, `&` and
/// `&^`.
///
/// Grammar: `multiplicative := unary (mul_op unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_level(tokens, parse_unary, BinaryOperator::Mul.precedence())
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that cannot appear between two operands.
///
/// # Example
/// ```
/// use fieldenum::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::AmpersandCaret),
///            Some(BinaryOperator::AndNot));
/// assert_eq!(token_to_binary_operator(&Token::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Ampersand => Some(BinaryOperator::And),
        Token::Pipe => Some(BinaryOperator::Or),
        Token::Caret => Some(BinaryOperator::Xor),
        Token::ShiftLeft => Some(BinaryOperator::Shl),
        Token::ShiftRight => Some(BinaryOperator::Shr),
        Token::AmpersandCaret => Some(BinaryOperator::AndNot),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::DoubleAmpersand => Some(BinaryOperator::LogicalAnd),
        Token::DoublePipe => Some(BinaryOperator::LogicalOr),
        _ => None,
    }
}
