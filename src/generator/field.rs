use std::{convert::Infallible, fmt::Display, str::FromStr};

use crate::{
    error::FieldError,
    interpreter::value::{
        complex::{Complex32, ComplexNumber},
        core::{Value, ValueKind},
    },
    util::num::{f64_to_i64_saturating, f64_to_u64_checked},
};

/// The declared type of a field.
///
/// Every primitive type a field can hold has its own variant. Any other type
/// is carried by name in [`FieldType::Other`] so that errors can report it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `isize`
    Isize,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `usize`
    Usize,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// [`Complex32`], two `f32` parts.
    C64,
    /// [`ComplexNumber`], two `f64` parts.
    C128,
    /// `String`
    Str,
    /// Any type the generator cannot fill.
    Other(String),
}

/// The family a [`FieldType`] belongs to.
///
/// Fields of the same family share the same assignment rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Signed integers.
    Signed,
    /// Unsigned integers.
    Unsigned,
    /// Floating-point numbers.
    Float,
    /// Complex numbers.
    Complex,
    /// Strings.
    Str,
    /// Unsupported types.
    Invalid,
}

impl FieldType {
    /// Returns the family of this type.
    ///
    /// # Example
    /// ```
    /// use fieldenum::generator::field::{FieldKind, FieldType};
    ///
    /// assert_eq!(FieldType::U16.kind(), FieldKind::Unsigned);
    /// assert_eq!(FieldType::Other("bool".to_string()).kind(), FieldKind::Invalid);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::Isize => FieldKind::Signed,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize => FieldKind::Unsigned,
            Self::F32 | Self::F64 => FieldKind::Float,
            Self::C64 | Self::C128 => FieldKind::Complex,
            Self::Str => FieldKind::Str,
            Self::Other(_) => FieldKind::Invalid,
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::C64 => "c64",
            Self::C128 => "c128",
            Self::Str => "string",
            Self::Other(name) => name.as_str(),
        };
        write!(f, "{name}")
    }
}

impl FromStr for FieldType {
    type Err = Infallible;

    /// Reads a type name. Unknown names become [`FieldType::Other`].
    ///
    /// # Example
    /// ```
    /// use fieldenum::generator::field::FieldType;
    ///
    /// assert_eq!("u8".parse::<FieldType>(), Ok(FieldType::U8));
    /// assert_eq!("String".parse::<FieldType>(), Ok(FieldType::Str));
    /// assert_eq!("bool".parse::<FieldType>(), Ok(FieldType::Other("bool".to_string())));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "i8" => Self::I8,
            "i16" => Self::I16,
            "i32" => Self::I32,
            "i64" => Self::I64,
            "isize" => Self::Isize,
            "u8" => Self::U8,
            "u16" => Self::U16,
            "u32" => Self::U32,
            "u64" => Self::U64,
            "usize" => Self::Usize,
            "f32" => Self::F32,
            "f64" => Self::F64,
            "c64" | "Complex32" => Self::C64,
            "c128" | "ComplexNumber" => Self::C128,
            "string" | "String" => Self::Str,
            other => Self::Other(other.to_string()),
        })
    }
}

/// A value ready to be stored into a field of the matching [`FieldType`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// `i8`
    I8(i8),
    /// `i16`
    I16(i16),
    /// `i32`
    I32(i32),
    /// `i64`
    I64(i64),
    /// `isize`
    Isize(isize),
    /// `u8`
    U8(u8),
    /// `u16`
    U16(u16),
    /// `u32`
    U32(u32),
    /// `u64`
    U64(u64),
    /// `usize`
    Usize(usize),
    /// `f32`
    F32(f32),
    /// `f64`
    F64(f64),
    /// [`Complex32`]
    C64(Complex32),
    /// [`ComplexNumber`]
    C128(ComplexNumber),
    /// `String`
    Str(String),
}

impl FieldValue {
    /// Returns the type of field this value fits.
    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        match self {
            Self::I8(_) => FieldType::I8,
            Self::I16(_) => FieldType::I16,
            Self::I32(_) => FieldType::I32,
            Self::I64(_) => FieldType::I64,
            Self::Isize(_) => FieldType::Isize,
            Self::U8(_) => FieldType::U8,
            Self::U16(_) => FieldType::U16,
            Self::U32(_) => FieldType::U32,
            Self::U64(_) => FieldType::U64,
            Self::Usize(_) => FieldType::Usize,
            Self::F32(_) => FieldType::F32,
            Self::F64(_) => FieldType::F64,
            Self::C64(_) => FieldType::C64,
            Self::C128(_) => FieldType::C128,
            Self::Str(_) => FieldType::Str,
        }
    }

    /// Returns the evaluator kind this value corresponds to.
    #[must_use]
    pub const fn value_kind(&self) -> ValueKind {
        match self {
            Self::F32(_) | Self::F64(_) => ValueKind::Float,
            Self::C64(_) | Self::C128(_) => ValueKind::Complex,
            Self::Str(_) => ValueKind::Str,
            _ => ValueKind::Int,
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::I8(n) => write!(f, "{n}"),
            Self::I16(n) => write!(f, "{n}"),
            Self::I32(n) => write!(f, "{n}"),
            Self::I64(n) => write!(f, "{n}"),
            Self::Isize(n) => write!(f, "{n}"),
            Self::U8(n) => write!(f, "{n}"),
            Self::U16(n) => write!(f, "{n}"),
            Self::U32(n) => write!(f, "{n}"),
            Self::U64(n) => write!(f, "{n}"),
            Self::Usize(n) => write!(f, "{n}"),
            Self::F32(x) => write!(f, "{x}"),
            Self::F64(x) => write!(f, "{x}"),
            Self::C64(c) => write!(f, "{c}"),
            Self::C128(c) => write!(f, "{c}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// A primitive type that can be a field of a generated enum struct.
///
/// Implemented for every type [`FieldType`] names. The `field_enum!` macro
/// relies on it to describe and write its fields.
pub trait FieldPrimitive: Sized {
    /// The declared type of a field of this type.
    fn field_type() -> FieldType;

    /// Unwraps a [`FieldValue`] of the matching variant.
    ///
    /// # Errors
    /// Returns [`FieldError::InvalidValueType`] if the variant does not match.
    fn from_field_value(value: FieldValue) -> Result<Self, FieldError>;
}

macro_rules! field_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FieldPrimitive for $ty {
                fn field_type() -> FieldType {
                    FieldType::$variant
                }

                fn from_field_value(value: FieldValue) -> Result<Self, FieldError> {
                    match value {
                        FieldValue::$variant(v) => Ok(v),
                        other => Err(FieldError::InvalidValueType { kind:       other.value_kind(),
                                                                    field_type: FieldType::$variant, }),
                    }
                }
            }
        )*
    };
}

field_primitive! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    Complex32 => C64,
    ComplexNumber => C128,
    String => Str,
}

/// Describes one field of a struct.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field name, used as the value of untagged string fields.
    pub name:       String,
    /// Declared type.
    pub field_type: FieldType,
    /// Tag text. `None` if the field carries no tag, `Some("")` for an empty
    /// tag.
    pub tag:        Option<String>,
    /// Whether the field may be written.
    pub settable:   bool,
}

impl FieldDescriptor {
    /// Creates a settable field descriptor.
    pub fn new(name: impl Into<String>, field_type: FieldType, tag: Option<&str>) -> Self {
        Self { name: name.into(),
               field_type,
               tag: tag.map(str::to_string),
               settable: true }
    }

    /// Marks the field as not writable.
    #[must_use]
    pub fn unsettable(mut self) -> Self {
        self.settable = false;
        self
    }
}

/// The structure of a generation target.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A struct with its fields in declaration order.
    Struct(Vec<FieldDescriptor>),
    /// Anything that is not a struct.
    Opaque {
        /// Name of the type.
        type_name: String,
    },
}

/// Gives the generator access to the fields of a struct.
///
/// Usually implemented through the `field_enum!` macro. A hand-written
/// implementation must list the fields in declaration order and accept a
/// [`FieldValue`] for every index it describes.
///
/// # Example
/// ```
/// use fieldenum::{
///     error::FieldError,
///     generator::field::{FieldDescriptor, FieldEnum, FieldPrimitive, FieldType, FieldValue, Shape},
/// };
///
/// #[derive(Default)]
/// struct Level {
///     low:  u8,
///     high: u8,
/// }
///
/// impl FieldEnum for Level {
///     fn shape(&self) -> Shape {
///         Shape::Struct(vec![FieldDescriptor::new("low", FieldType::U8, Some("10")),
///                            FieldDescriptor::new("high", FieldType::U8, Some("iota*100"))])
///     }
///
///     fn set_field(&mut self, index: usize, value: FieldValue) -> Result<(), FieldError> {
///         match index {
///             0 => self.low = u8::from_field_value(value)?,
///             1 => self.high = u8::from_field_value(value)?,
///             _ => return Err(FieldError::MissingField { index }),
///         }
///         Ok(())
///     }
/// }
///
/// let level: Level = fieldenum::try_new(vec![]).unwrap();
/// assert_eq!((level.low, level.high), (10, 100));
/// ```
pub trait FieldEnum {
    /// Describes the target.
    fn shape(&self) -> Shape;

    /// Writes the field at `index`.
    ///
    /// # Errors
    /// Returns a [`FieldError`] if there is no such field or the value does
    /// not fit it.
    fn set_field(&mut self, index: usize, value: FieldValue) -> Result<(), FieldError>;
}

impl<T: FieldEnum + ?Sized> FieldEnum for Box<T> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }

    fn set_field(&mut self, index: usize, value: FieldValue) -> Result<(), FieldError> {
        (**self).set_field(index, value)
    }
}

macro_rules! opaque_field_enum {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldEnum for $ty {
                fn shape(&self) -> Shape {
                    Shape::Opaque { type_name: stringify!($ty).to_string() }
                }

                fn set_field(&mut self, index: usize, _: FieldValue) -> Result<(), FieldError> {
                    Err(FieldError::MissingField { index })
                }
            }
        )*
    };
}

opaque_field_enum!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, char,
                   String);

/// Converts an evaluated value into a value of the declared field type.
///
/// - Signed integer fields take an `Int`, a truncated `Float` or the
///   truncated real part of a `Complex`.
/// - Unsigned integer fields take the same, but reject negative values.
///   Floats convert straight to `u64`, so values up to `2^64` are kept.
/// - Float fields take the real part.
/// - Complex fields take the value widened to a complex number.
/// - String fields take only strings.
///
/// Float to signed integer conversion saturates at the `i64` bounds; a float
/// at or above `2^64` fails for unsigned fields. A result that does not fit a
/// narrower field fails with [`FieldError::OutOfRange`] rather than keeping
/// the low bits the way an `as` cast would.
///
/// # Errors
/// Returns [`FieldError::NegativeToUnsigned`],
/// [`FieldError::OutOfRange`] or [`FieldError::InvalidValueType`].
///
/// # Example
/// ```
/// use fieldenum::{
///     generator::field::{FieldType, FieldValue, coerce},
///     interpreter::value::core::Value,
/// };
///
/// assert_eq!(coerce(Value::Float(2.9), &FieldType::I8), Ok(FieldValue::I8(2)));
/// assert_eq!(coerce(Value::Int(1), &FieldType::F32), Ok(FieldValue::F32(1.0)));
/// assert!(coerce(Value::Int(-1), &FieldType::U32).is_err());
/// assert!(coerce(Value::Int(256), &FieldType::U8).is_err());
/// assert_eq!(coerce(Value::Float(1e19), &FieldType::U64),
///            Ok(FieldValue::U64(10_000_000_000_000_000_000)));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn coerce(value: Value, field_type: &FieldType) -> Result<FieldValue, FieldError> {
    let invalid = |value: &Value| FieldError::InvalidValueType { kind:       value.kind(),
                                                                 field_type: field_type.clone(), };
    let out_of_range = |value: Value| FieldError::OutOfRange { value,
                                                               field_type: field_type.clone() };

    match field_type.kind() {
        FieldKind::Signed => {
            let Some(n) = integer_part(&value) else {
                return Err(invalid(&value));
            };
            let narrowed = match field_type {
                FieldType::I8 => i8::try_from(n).ok().map(FieldValue::I8),
                FieldType::I16 => i16::try_from(n).ok().map(FieldValue::I16),
                FieldType::I32 => i32::try_from(n).ok().map(FieldValue::I32),
                FieldType::Isize => isize::try_from(n).ok().map(FieldValue::Isize),
                _ => Some(FieldValue::I64(n)),
            };
            narrowed.ok_or_else(|| out_of_range(value))
        },
        FieldKind::Unsigned => {
            let negative = match &value {
                Value::Int(n) => *n < 0,
                Value::Float(x) => *x < 0.0,
                Value::Complex(c) => c.real < 0.0,
                Value::Str(_) => return Err(invalid(&value)),
            };
            if negative {
                return Err(FieldError::NegativeToUnsigned { value,
                                                            field_type: field_type.clone() });
            }
            let wide = match &value {
                Value::Int(n) => u64::try_from(*n).ok(),
                Value::Float(x) => f64_to_u64_checked(*x),
                Value::Complex(c) => f64_to_u64_checked(c.real),
                Value::Str(_) => None,
            };
            let Some(n) = wide else {
                return Err(out_of_range(value));
            };
            let narrowed = match field_type {
                FieldType::U8 => u8::try_from(n).ok().map(FieldValue::U8),
                FieldType::U16 => u16::try_from(n).ok().map(FieldValue::U16),
                FieldType::U32 => u32::try_from(n).ok().map(FieldValue::U32),
                FieldType::Usize => usize::try_from(n).ok().map(FieldValue::Usize),
                _ => Some(FieldValue::U64(n)),
            };
            narrowed.ok_or_else(|| out_of_range(value))
        },
        FieldKind::Float => {
            let Some(x) = value.as_complex().map(|c| c.real) else {
                return Err(invalid(&value));
            };
            Ok(match field_type {
                FieldType::F32 => FieldValue::F32(x as f32),
                _ => FieldValue::F64(x),
            })
        },
        FieldKind::Complex => {
            let Some(c) = value.as_complex() else {
                return Err(invalid(&value));
            };
            Ok(match field_type {
                FieldType::C64 => FieldValue::C64(Complex32::new(c.real as f32, c.imaginary as f32)),
                _ => FieldValue::C128(c),
            })
        },
        FieldKind::Str => match value {
            Value::Str(s) => Ok(FieldValue::Str(s)),
            other => Err(invalid(&other)),
        },
        FieldKind::Invalid => Err(invalid(&value)),
    }
}

/// Truncates a numeric value to `i64` for signed fields, using the real part
/// of complex numbers.
fn integer_part(value: &Value) -> Option<i64> {
    match value {
        Value::Int(n) => Some(*n),
        Value::Float(x) => Some(f64_to_i64_saturating(*x)),
        Value::Complex(c) => Some(f64_to_i64_saturating(c.real)),
        Value::Str(_) => None,
    }
}
