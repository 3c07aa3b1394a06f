use std::fmt::Write as _;

use crate::{
    ast::Span,
    error::ParseError,
    interpreter::{
        evaluator::function::core::Arity,
        value::core::{Value, ValueKind},
    },
};

#[derive(Debug, Clone, PartialEq)]
/// An operator was applied to operands it does not support.
pub enum OpError {
    /// The operator parses but has no evaluation rule (`==`, `&&`, `!`, ...).
    Unsupported {
        /// The operator symbol.
        op: String,
    },
    /// A unary operator received an operand of the wrong kind.
    UnaryType {
        /// The operator symbol.
        op:      String,
        /// Kind of the operand.
        operand: ValueKind,
    },
    /// A binary operator received operands of the wrong kinds.
    BinaryType {
        /// The operator symbol.
        op:    String,
        /// Kind of the left operand.
        left:  ValueKind,
        /// Kind of the right operand.
        right: ValueKind,
    },
    /// The right operand of a binary operator has an invalid value, such as a
    /// negative shift amount.
    SecondValue {
        /// The operator symbol.
        op:    String,
        /// The left operand.
        left:  Value,
        /// The right operand.
        right: Value,
    },
}

impl std::fmt::Display for OpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported { op } => write!(f, "unsupported operator \"{op}\""),
            Self::UnaryType { op, operand } => {
                write!(f, "use operator \"{op}\" on unsupported type for {op}({operand})")
            },
            Self::BinaryType { op, left, right } => write!(f,
                                                           "use operator \"{op}\" on unsupported type for ({left}){op}({right})"),
            Self::SecondValue { op, left, right } => write!(f,
                                                            "use operator \"{op}\" on unsupported second value for ({left}){op}({right})"),
        }
    }
}

impl std::error::Error for OpError {}

#[derive(Debug, Clone, PartialEq)]
/// A function call failed before or while computing its result.
pub enum FunctionError {
    /// Neither a builtin nor a custom function has this name.
    NotExisted {
        /// The called name.
        name: String,
    },
    /// The arguments have kinds the function does not accept.
    UnsupportedArgumentType {
        /// The called name.
        name:      String,
        /// Kinds of all arguments, in order.
        arguments: Vec<ValueKind>,
    },
    /// Fewer arguments than the function requires.
    TooFewArguments {
        /// The called name.
        name:     String,
        /// The accepted argument counts.
        expected: Arity,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// More arguments than the function accepts.
    TooManyArguments {
        /// The called name.
        name:     String,
        /// The accepted argument counts.
        expected: Arity,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// A custom function rejected its arguments for another reason.
    InvalidArgument {
        /// The called name.
        name:    String,
        /// Why the arguments were rejected.
        details: String,
    },
}

impl FunctionError {
    /// Builds an [`FunctionError::UnsupportedArgumentType`] from the arguments
    /// of a call.
    #[must_use]
    pub fn unsupported(name: &str, arguments: &[Value]) -> Self {
        Self::UnsupportedArgumentType { name:      name.to_string(),
                                        arguments: arguments.iter().map(Value::kind).collect(), }
    }
}

impl std::fmt::Display for FunctionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotExisted { name } => write!(f, "call non-existed function \"{name}\""),
            Self::UnsupportedArgumentType { name, arguments } => {
                let mut kinds = String::new();
                for (i, kind) in arguments.iter().enumerate() {
                    if i > 0 {
                        kinds.push(' ');
                    }
                    let _ = write!(kinds, "{kind}");
                }
                write!(f, "call function {name}({kinds}) on unsupported type")
            },
            Self::TooFewArguments { name, expected, found } => write!(f,
                                                                      "call function {name} on too few arguments: expected {expected}, found {found}"),
            Self::TooManyArguments { name, expected, found } => write!(f,
                                                                       "call function {name} on too many arguments: expected {expected}, found {found}"),
            Self::InvalidArgument { name, details } => {
                write!(f, "call function {name} on invalid argument: {details}")
            },
        }
    }
}

impl std::error::Error for FunctionError {}

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating a parsed expression.
pub enum RuntimeError {
    /// The identifier is neither `iota`, a builtin constant, nor a custom
    /// value.
    UnknownIdentifier {
        /// The identifier.
        name: String,
        /// Where the identifier sits in the expression.
        span: Span,
    },
    /// An operator rejected its operands.
    Operator {
        /// What went wrong.
        source: OpError,
        /// The operator expression.
        span:   Span,
    },
    /// A function call failed.
    Function {
        /// What went wrong.
        source: FunctionError,
        /// The call expression.
        span:   Span,
    },
}

impl RuntimeError {
    /// Returns the location of the failing sub-expression.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnknownIdentifier { span, .. }
            | Self::Operator { span, .. }
            | Self::Function { span, .. } => *span,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownIdentifier { name, .. } => write!(f, "unsupported identifier \"{name}\""),
            Self::Operator { source, .. } => write!(f, "{source}"),
            Self::Function { source, .. } => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownIdentifier { .. } => None,
            Self::Operator { source, .. } => Some(source),
            Self::Function { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A failure to parse or evaluate one expression, together with its text.
pub enum ExprError {
    /// The expression text is not a valid expression.
    Parse {
        /// The full expression text.
        expression: String,
        /// What went wrong.
        source:     ParseError,
    },
    /// The expression parsed but could not be evaluated.
    Runtime {
        /// The full expression text.
        expression: String,
        /// What went wrong.
        source:     RuntimeError,
    },
}

impl ExprError {
    /// Returns the full expression text.
    #[must_use]
    pub fn expression(&self) -> &str {
        match self {
            Self::Parse { expression, .. } | Self::Runtime { expression, .. } => expression,
        }
    }

    /// Returns the location of the failure in the expression.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Parse { source, .. } => source.span(),
            Self::Runtime { source, .. } => source.span(),
        }
    }
}

impl std::fmt::Display for ExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { expression, source } => {
                write!(f, "invalid expression \"{expression}\": {source}")
            },
            Self::Runtime { expression, source } => write!(f,
                                                           "{source} with expression \"{}\"",
                                                           source.span().slice(expression)),
        }
    }
}

impl std::error::Error for ExprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::Runtime { source, .. } => Some(source),
        }
    }
}
