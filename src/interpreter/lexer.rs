use std::fmt::Display;

use logos::Logos;

use crate::{ast::Span, error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in an expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Numeric literals keep their source text; the parser converts them so that
/// conversion failures can be reported with their span.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Imaginary literal tokens, such as `2i`, `1.5i` or `1e3i`.
    #[regex(r"(([0-9][0-9_]*\.[0-9_]*|\.[0-9][0-9_]*)([eE][+-]?[0-9_]+)?|[0-9][0-9_]*([eE][+-]?[0-9_]+)?)i",
            |lex| lex.slice().to_string())]
    Imaginary(String),
    /// Floating-point literal tokens, such as `3.14`, `.5`, `1.` or `2e-10`.
    #[regex(r"([0-9][0-9_]*\.[0-9_]*|\.[0-9][0-9_]*)([eE][+-]?[0-9_]+)?|[0-9][0-9_]*[eE][+-]?[0-9_]+",
            |lex| lex.slice().to_string())]
    Float(String),
    /// Integer literal tokens, such as `42`, `0x2A`, `0o52`, `0b101010` or
    /// `052`.
    #[regex(r"0[xX][0-9a-fA-F_]+|0[oO][0-7_]+|0[bB][01_]+|[0-9][0-9_]*",
            |lex| lex.slice().to_string())]
    Int(String),
    /// Double-quoted string literal tokens, escapes resolved.
    #[regex(r#""([^"\\\n]|\\.)*""#, parse_string)]
    Str(String),
    /// Identifier tokens; value or function names such as `iota` or `pow`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `^`
    #[token("^")]
    Caret,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `&^`
    #[token("&^")]
    AmpersandCaret,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Spaces, tabs and newlines.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Imaginary(s) | Self::Float(s) | Self::Int(s) | Self::Identifier(s) => s,
            Self::Str(s) => return write!(f, "{s:?}"),
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::AmpersandCaret => "&^",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::DoubleAmpersand => "&&",
            Self::DoublePipe => "||",
            Self::Bang => "!",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
            Self::Ignored => " ",
        };
        write!(f, "{text}")
    }
}

/// Splits an expression into tokens paired with their spans.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] for the first character sequence
/// no token matches, such as `$` or an unterminated string.
///
/// # Example
/// ```
/// use fieldenum::{ast::Span, interpreter::lexer::{Token, tokenize}};
///
/// let tokens = tokenize("iota << 2").unwrap();
/// assert_eq!(tokens[0], (Token::Identifier("iota".to_string()), Span::new(0, 4)));
/// assert_eq!(tokens[1], (Token::ShiftLeft, Span::new(5, 7)));
/// assert_eq!(tokens[2], (Token::Int("2".to_string()), Span::new(8, 9)));
///
/// assert!(tokenize("iota $ 1").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, Span)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let span = Span::from(lexer.span());
        if let Ok(tok) = token {
            tokens.push((tok, span));
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     span });
        }
    }

    Ok(tokens)
}

/// Resolves the escapes of a string literal and strips its quotes.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(String)`: The string contents.
/// - `None`: If the literal contains an unknown escape sequence.
fn parse_string(lex: &logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    let inner = slice.get(1..slice.len() - 1)?;
    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next()? {
            '"' => result.push('"'),
            '\\' => result.push('\\'),
            'n' => result.push('\n'),
            't' => result.push('\t'),
            _ => return None,
        }
    }

    Some(result)
}
