use std::fmt::Display;

use crate::interpreter::value::complex::ComplexNumber;

/// A half-open byte range `start..end` into the expression source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Offset of the first byte.
    pub start: usize,
    /// Offset one past the last byte.
    pub end:   usize,
}

impl Span {
    /// Creates a span from `start` to `end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the smallest span covering both `self` and `other`.
    ///
    /// ## Example
    /// ```
    /// use fieldenum::ast::Span;
    ///
    /// let joined = Span::new(0, 3).to(Span::new(6, 9));
    /// assert_eq!(joined, Span::new(0, 9));
    /// ```
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        let start = if self.start < other.start { self.start } else { other.start };
        let end = if self.end > other.end { self.end } else { other.end };
        Self { start, end }
    }

    /// Returns the slice of `source` this span points at.
    ///
    /// Out-of-range spans are clamped to the source length.
    #[must_use]
    pub fn slice(self, source: &str) -> &str {
        let end = self.end.min(source.len());
        let start = self.start.min(end);
        source.get(start..end).unwrap_or(source)
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self { start: range.start,
               end:   range.end, }
    }
}

/// Represents a literal value in an expression.
///
/// Integer literals that do not fit into `i64` are stored as `Float`.
/// Imaginary literals such as `2i` are stored as `Complex` with a zero real
/// part.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Int(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// An imaginary literal.
    Complex(ComplexNumber),
    /// A double-quoted string literal, escapes already resolved.
    Str(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<ComplexNumber> for LiteralValue {
    fn from(value: ComplexNumber) -> Self {
        Self::Complex(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant records the byte span it was parsed from so that evaluation
/// errors can quote the failing sub-expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Location in the source.
        span:  Span,
    },
    /// Reference to a named value such as `iota`, `pi` or a custom value.
    Identifier {
        /// Name of the value.
        name: String,
        /// Location in the source.
        span: Span,
    },
    /// A parenthesized expression.
    Paren {
        /// The inner expression.
        expr: Box<Self>,
        /// Location in the source, parentheses included.
        span: Span,
    },
    /// A unary operation.
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Location in the source.
        span: Span,
    },
    /// A binary operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Location in the source.
        span:  Span,
    },
    /// Function call expression (e.g. `pow(2, iota)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Location in the source.
        span:      Span,
    },
}

impl Expr {
    /// Gets the span of `self`.
    /// ## Example
    /// ```
    /// use fieldenum::ast::{Expr, Span};
    ///
    /// let expr = Expr::Identifier { name: "iota".to_string(),
    ///                               span: Span::new(2, 6), };
    ///
    /// assert_eq!(expr.span(), Span::new(2, 6));
    /// ```
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Literal { span, .. }
            | Self::Identifier { span, .. }
            | Self::Paren { span, .. }
            | Self::Unary { span, .. }
            | Self::Binary { span, .. }
            | Self::Call { span, .. } => *span,
        }
    }
}

/// A unary (prefix) operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+x`
    Plus,
    /// `-x`
    Negate,
    /// `^x`, bitwise complement.
    Complement,
    /// `!x`, parsed but never evaluated.
    Not,
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Complement => "^",
            Self::Not => "!",
        };
        write!(f, "{symbol}")
    }
}

/// A binary (infix) operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `&^`, bit clear.
    AndNot,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
}

impl BinaryOperator {
    /// Returns the binding strength of the operator, higher binds tighter.
    ///
    /// ## Example
    /// ```
    /// use fieldenum::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert_eq!(BinaryOperator::Xor.precedence(), BinaryOperator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::LogicalOr => 1,
            Self::LogicalAnd => 2,
            Self::Equal
            | Self::NotEqual
            | Self::Less
            | Self::LessEqual
            | Self::Greater
            | Self::GreaterEqual => 3,
            Self::Add | Self::Sub | Self::Or | Self::Xor => 4,
            Self::Mul | Self::Div | Self::Mod | Self::Shl | Self::Shr | Self::And | Self::AndNot => 5,
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::AndNot => "&^",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
        };
        write!(f, "{symbol}")
    }
}
