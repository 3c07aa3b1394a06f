/// The generation entry points.
///
/// Validates a target, evaluates each field's tag in declaration order and
/// writes the results once every field has a value.
pub mod core;
/// Runtime-described targets.
pub mod dynamic;
/// The field access layer between the generator and concrete structs.
///
/// # Responsibilities
/// - Describes a target's fields through [`field::FieldEnum`].
/// - Names every supported field type.
/// - Converts evaluated values into field values.
pub mod field;
/// The `field_enum!` declaration macro.
pub mod macros;
/// Configuration options: custom values and custom functions.
pub mod options;
