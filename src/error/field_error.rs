use crate::{
    error::ExprError,
    generator::field::FieldType,
    interpreter::value::core::{Value, ValueKind},
};

#[derive(Debug, Clone, PartialEq)]
/// A failure to compute or store the value of one field.
pub enum FieldError {
    /// The field's expression failed to parse or evaluate.
    Expression(ExprError),
    /// A negative value was computed for an unsigned field.
    NegativeToUnsigned {
        /// The computed value.
        value:      Value,
        /// The declared type of the field.
        field_type: FieldType,
    },
    /// The computed value does not fit the declared width of the field.
    OutOfRange {
        /// The computed value.
        value:      Value,
        /// The declared type of the field.
        field_type: FieldType,
    },
    /// The computed value has a kind the field cannot hold, such as a string
    /// stored into a numeric field.
    InvalidValueType {
        /// Kind of the computed value.
        kind:       ValueKind,
        /// The declared type of the field.
        field_type: FieldType,
    },
    /// The target has no field at this index.
    MissingField {
        /// The requested index.
        index: usize,
    },
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expression(e) => write!(f, "{e}"),
            Self::NegativeToUnsigned { value, field_type } => {
                write!(f, "assign negative value \"{value}\" to type {field_type}")
            },
            Self::OutOfRange { value, field_type } => {
                write!(f, "assign out of range value \"{value}\" to type {field_type}")
            },
            Self::InvalidValueType { kind, field_type } => {
                write!(f, "assign value with invalid type \"{kind}\" to type {field_type}")
            },
            Self::MissingField { index } => write!(f, "no field at index {index}"),
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Expression(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ExprError> for FieldError {
    fn from(e: ExprError) -> Self {
        Self::Expression(e)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Represents every failure of the field assignment entry points.
///
/// All messages carry the `fieldenum: ` prefix.
pub enum Error {
    /// The target is not a struct.
    InvalidType {
        /// Name of the target type.
        type_name: String,
    },
    /// The first field has a type the generator cannot fill.
    UnsupportedFieldType {
        /// Name of the field.
        field:      String,
        /// The declared type of the field.
        field_type: FieldType,
    },
    /// A field cannot be written (e.g. it is private).
    UnsettableField {
        /// Name of the field.
        field: String,
    },
    /// A field's type differs from the first field's type.
    MixedFieldTypes {
        /// Name of the offending field.
        field:    String,
        /// Type of the first field.
        expected: FieldType,
        /// Type of the offending field.
        found:    FieldType,
    },
    /// A custom value name collides with `iota`, a builtin constant or an
    /// earlier custom value.
    DuplicateValue {
        /// The colliding name.
        name: String,
    },
    /// A custom function name collides with a builtin or an earlier custom
    /// function.
    DuplicateFunction {
        /// The colliding name.
        name: String,
    },
    /// A line of a field layout is not a field declaration.
    InvalidLayout {
        /// The offending line.
        line: String,
    },
    /// Computing or storing one field failed.
    Field {
        /// Name of the field.
        name:   String,
        /// What went wrong.
        source: FieldError,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fieldenum: ")?;
        match self {
            Self::InvalidType { type_name } => write!(f, "invalid type \"{type_name}\""),
            Self::UnsupportedFieldType { field, field_type } => {
                write!(f, "field \"{field}\": invalid type \"{field_type}\"")
            },
            Self::UnsettableField { field } => write!(f, "field \"{field}\": is not settable"),
            Self::MixedFieldTypes { field, expected, found } => write!(f,
                                                                       "fields with different types: field \"{field}\" is {found}, expected {expected}"),
            Self::DuplicateValue { name } => write!(f, "existed value with name \"{name}\""),
            Self::DuplicateFunction { name } => write!(f, "existed function with name \"{name}\""),
            Self::InvalidLayout { line } => write!(f, "invalid field declaration \"{line}\""),
            Self::Field { name, source } => write!(f, "field \"{name}\": {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Field { source, .. } => Some(source),
            _ => None,
        }
    }
}
