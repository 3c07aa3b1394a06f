use crate::ast::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a token that does not fit the grammar at this position, or a
    /// character sequence the lexer does not recognize.
    UnexpectedToken {
        /// The token text encountered.
        token: String,
        /// Where the token sits in the expression.
        span:  Span,
    },
    /// Reached the end of input while an operand was still expected.
    UnexpectedEndOfInput {
        /// An empty span at the end of the expression.
        span: Span,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Where the parenthesis was expected.
        span: Span,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// Where the token sits in the expression.
        span:  Span,
    },
    /// A numeric or string literal could not be converted to a value.
    InvalidLiteral {
        /// The literal as written.
        literal: String,
        /// Where the literal sits in the expression.
        span:    Span,
    },
}

impl ParseError {
    /// Returns the location of the error in the expression.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnexpectedToken { span, .. }
            | Self::UnexpectedEndOfInput { span }
            | Self::ExpectedClosingParen { span }
            | Self::UnexpectedTrailingTokens { span, .. }
            | Self::InvalidLiteral { span, .. } => *span,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, span } => {
                write!(f, "unexpected token \"{token}\" at offset {}", span.start)
            },
            Self::UnexpectedEndOfInput { .. } => write!(f, "unexpected end of expression"),
            Self::ExpectedClosingParen { span } => {
                write!(f, "expected closing parenthesis ')' at offset {}", span.start)
            },
            Self::UnexpectedTrailingTokens { token, span } => write!(f,
                                                                     "extra tokens after expression starting with \"{token}\" at offset {}",
                                                                     span.start),
            Self::InvalidLiteral { literal, .. } => write!(f, "invalid literal \"{literal}\""),
        }
    }
}

impl std::error::Error for ParseError {}
