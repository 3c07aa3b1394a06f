use std::fmt::Display;

use crate::{
    ast::LiteralValue,
    interpreter::value::complex::{Complex32, ComplexNumber},
};

/// Represents a runtime value in the evaluator.
///
/// The three numeric alternatives form a strict promotion order:
/// `Int` -> `Float` -> `Complex`. Mixing `Int` with `Float` produces a
/// `Float`; mixing either with `Complex` produces a `Complex`. `Str` only
/// appears when a string literal or a custom function produces one; every
/// operator and builtin rejects it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64 bit signed integer.
    Int(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// A complex number with `f64` parts.
    Complex(ComplexNumber),
    /// A string.
    Str(String),
}

/// Names the alternative of a [`Value`] in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// [`Value::Int`]
    Int,
    /// [`Value::Float`]
    Float,
    /// [`Value::Complex`]
    Complex,
    /// [`Value::Str`]
    Str,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Int => "int64",
            Self::Float => "float64",
            Self::Complex => "complex128",
            Self::Str => "string",
        };
        write!(f, "{name}")
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Complex(c) => write!(f, "{c}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// Widens every fixed-width signed integer to [`Value::Int`].
macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::Int(i64::from(v))
                }
            }
        )*
    };
}

/// Casts unsigned integers into [`Value::Int`].
///
/// Values above `i64::MAX` wrap around into negative numbers.
macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                #[allow(clippy::cast_possible_wrap)]
                fn from(v: $t) -> Self {
                    Self::Int(v as i64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<isize> for Value {
    #[allow(clippy::cast_possible_truncation)]
    fn from(v: isize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<ComplexNumber> for Value {
    fn from(c: ComplexNumber) -> Self {
        Self::Complex(c)
    }
}

impl From<Complex32> for Value {
    fn from(c: Complex32) -> Self {
        Self::Complex(c.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Int(n) => Self::Int(*n),
            LiteralValue::Float(x) => Self::Float(*x),
            LiteralValue::Complex(c) => Self::Complex(*c),
            LiteralValue::Str(s) => Self::Str(s.clone()),
        }
    }
}

impl Value {
    /// Returns the alternative this value belongs to.
    ///
    /// # Example
    /// ```
    /// use fieldenum::interpreter::value::core::{Value, ValueKind};
    ///
    /// assert_eq!(Value::from(3_u8).kind(), ValueKind::Int);
    /// assert_eq!(Value::from(0.5_f32).kind(), ValueKind::Float);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Complex(_) => ValueKind::Complex,
            Self::Str(_) => ValueKind::Str,
        }
    }

    /// Returns `true` if the value is a `Float` holding `NaN`.
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        matches!(self, Self::Float(x) if x.is_nan())
    }

    /// Widens an `Int` or `Float` to `f64`.
    ///
    /// Integers beyond 2^53 lose precision, exactly like an `as` cast.
    /// Returns `None` for complex numbers and strings.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(x) => Some(*x),
            Self::Complex(_) | Self::Str(_) => None,
        }
    }

    /// Widens any numeric value to a complex number.
    ///
    /// Returns `None` for strings.
    #[must_use]
    pub fn as_complex(&self) -> Option<ComplexNumber> {
        match self {
            Self::Complex(c) => Some(*c),
            _ => self.as_float().map(ComplexNumber::from),
        }
    }

    /// Compares two values bit for bit.
    ///
    /// Unlike `==`, two `NaN` floats with the same payload compare equal and
    /// `0.0` differs from `-0.0`.
    #[must_use]
    pub fn bit_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Complex(a), Self::Complex(b)) => {
                a.real.to_bits() == b.real.to_bits()
                && a.imaginary.to_bits() == b.imaginary.to_bits()
            },
            (Self::Str(a), Self::Str(b)) => a == b,
            _ => false,
        }
    }
}
