use log::debug;

use crate::{
    ast::Expr,
    error::{Error, ExprError, FieldError},
    generator::{
        field::{FieldDescriptor, FieldEnum, FieldKind, FieldValue, Shape, coerce},
        options::ConfigOption,
    },
    interpreter::{evaluator::core::Context, parser::core::parse},
};

/// Fills every field of `target` with its enum value.
///
/// Options are applied first. The target is then validated: it must be a
/// struct whose fields are all settable and share one supported type. Values
/// are computed for all fields before the first write, so a failing call
/// leaves `target` untouched.
///
/// String fields take their tag text, or their name when untagged. Numeric
/// fields evaluate their tag as an expression where `iota` is the field
/// index:
/// - the first untagged field uses `iota`;
/// - an empty tag restarts counting from `0` at that field;
/// - a tag containing `iota` becomes the new expression as written;
/// - any other tag restarts counting from its value at that field;
/// - an untagged field reuses the most recent expression.
///
/// # Errors
/// Returns an [`Error`] naming the duplicate option, the structural problem
/// or the field whose expression or conversion failed.
///
/// # Example
/// ```
/// use fieldenum::{field_enum, generator::core::assign};
///
/// field_enum! {
///     #[derive(Debug)]
///     pub struct Weekday: u8 {
///         Sunday,
///         Monday,
///         Tuesday,
///     }
/// }
///
/// let mut days = Weekday::default();
/// assign(&mut days, vec![]).unwrap();
/// assert_eq!((days.Sunday, days.Monday, days.Tuesday), (0, 1, 2));
/// ```
pub fn assign<T>(target: &mut T, options: impl IntoIterator<Item=ConfigOption>) -> Result<(), Error>
    where T: FieldEnum + ?Sized
{
    let mut context = Context::new();
    for option in options {
        option.apply(&mut context)?;
    }

    let fields = match target.shape() {
        Shape::Struct(fields) => fields,
        Shape::Opaque { type_name } => return Err(Error::InvalidType { type_name }),
    };
    let kind = validate(&fields)?;

    let values = if kind == FieldKind::Str {
        string_values(&fields)
    } else {
        number_values(&mut context, &fields)?
    };

    for (index, (field, value)) in fields.iter().zip(values).enumerate() {
        target.set_field(index, value)
              .map_err(|source| Error::Field { name: field.name.clone(),
                                               source })?;
    }

    Ok(())
}

/// Creates a `T` and fills it with [`assign`].
///
/// # Errors
/// Returns the error of [`assign`].
///
/// # Example
/// ```
/// use fieldenum::{field_enum, generator::options::with_value, try_new};
///
/// field_enum! {
///     #[derive(Debug)]
///     pub struct Flags: u32 {
///         Read = "1 << iota",
///         Write,
///         Execute,
///     }
/// }
///
/// let flags: Flags = try_new(vec![]).unwrap();
/// assert_eq!((flags.Read, flags.Write, flags.Execute), (1, 2, 4));
///
/// let err = try_new::<Flags>(vec![with_value("iota", 3)]).unwrap_err();
/// assert_eq!(err.to_string(), "fieldenum: existed value with name \"iota\"");
/// ```
pub fn try_new<T>(options: impl IntoIterator<Item=ConfigOption>) -> Result<T, Error>
    where T: FieldEnum + Default
{
    let mut target = T::default();
    assign(&mut target, options)?;
    Ok(target)
}

/// Creates a `T` and fills it with [`assign`].
///
/// Suited to targets whose tags are fixed at compile time, where a failure
/// is a programming error.
///
/// # Panics
/// Panics with the error message if [`assign`] fails.
pub fn new<T>(options: impl IntoIterator<Item=ConfigOption>) -> T
    where T: FieldEnum + Default
{
    match try_new(options) {
        Ok(target) => target,
        Err(e) => panic!("{e}"),
    }
}

/// Checks the fields and returns the kind they share.
///
/// A struct without fields has the `Invalid` kind and nothing to fill.
fn validate(fields: &[FieldDescriptor]) -> Result<FieldKind, Error> {
    let Some(first) = fields.first() else {
        return Ok(FieldKind::Invalid);
    };

    for (index, field) in fields.iter().enumerate() {
        if !field.settable {
            return Err(Error::UnsettableField { field: field.name.clone() });
        }
        if index == 0 && first.field_type.kind() == FieldKind::Invalid {
            return Err(Error::UnsupportedFieldType { field:      field.name.clone(),
                                                     field_type: field.field_type.clone(), });
        }
        if field.field_type != first.field_type {
            return Err(Error::MixedFieldTypes { field:    field.name.clone(),
                                                expected: first.field_type.clone(),
                                                found:    field.field_type.clone(), });
        }
    }

    Ok(first.field_type.kind())
}

fn string_values(fields: &[FieldDescriptor]) -> Vec<FieldValue> {
    fields.iter()
          .map(|field| FieldValue::Str(field.tag.clone().unwrap_or_else(|| field.name.clone())))
          .collect()
}

/// Evaluates the numeric fields in declaration order.
///
/// `baseline` holds the text and tree of the expression untagged fields
/// reuse; it is replaced by every tagged field.
fn number_values(context: &mut Context,
                 fields: &[FieldDescriptor])
                 -> Result<Vec<FieldValue>, Error> {
    let mut values = Vec::with_capacity(fields.len());
    let mut baseline: Option<(String, Expr)> = None;

    for (index, field) in fields.iter().enumerate() {
        let wrap = |source: FieldError| Error::Field { name: field.name.clone(),
                                                       source };
        context.iota = i64::try_from(index).unwrap_or(i64::MAX);

        let (source, expr) = match (&field.tag, baseline.take()) {
            (Some(tag), _) => {
                let source = normalize_tag(tag, index);
                debug!("field \"{}\": new baseline \"{source}\"", field.name);
                let expr = parse_source(&source).map_err(wrap)?;
                (source, expr)
            },
            (None, Some(current)) => current,
            (None, None) => {
                let source = "iota".to_string();
                let expr = parse_source(&source).map_err(wrap)?;
                (source, expr)
            },
        };

        let value = context.evaluate_parsed(&source, &expr)
                           .map_err(|e| wrap(e.into()))?;
        let value = coerce(value, &field.field_type).map_err(wrap)?;
        debug!("field \"{}\" = {value} ({})", field.name, field.field_type);
        values.push(value);

        baseline = Some((source, expr));
    }

    Ok(values)
}

fn parse_source(source: &str) -> Result<Expr, FieldError> {
    parse(source).map_err(|e| ExprError::Parse { expression: source.to_string(),
                                                  source:     e, }
                                  .into())
}

/// Rewrites a tag into the expression evaluated at field `index`.
///
/// # Example
/// ```
/// use fieldenum::generator::core::normalize_tag;
///
/// assert_eq!(normalize_tag("", 3), "iota-3");
/// assert_eq!(normalize_tag(" 10 ", 2), "(iota-2)+(10)");
/// assert_eq!(normalize_tag("iota*iota", 4), "iota*iota");
/// ```
#[must_use]
pub fn normalize_tag(tag: &str, index: usize) -> String {
    let trimmed = tag.trim();
    if tag.is_empty() {
        format!("iota-{index}")
    } else if trimmed.contains("iota") {
        tag.to_string()
    } else {
        format!("(iota-{index})+({trimmed})")
    }
}
