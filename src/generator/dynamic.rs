use crate::{
    error::{Error, FieldError},
    generator::field::{FieldDescriptor, FieldEnum, FieldType, FieldValue, Shape},
};

/// A struct whose fields are described at runtime.
///
/// Used where no Rust type exists for the target, such as in the command
/// line tool. Values start out empty and are filled by
/// [`assign`](crate::generator::core::assign).
///
/// # Example
/// ```
/// use fieldenum::generator::{
///     core::assign,
///     dynamic::DynamicEnum,
///     field::{FieldType, FieldValue},
/// };
///
/// let mut colors = DynamicEnum::parse(FieldType::U8, "Red = 1\nGreen\nBlue").unwrap();
/// assign(&mut colors, vec![]).unwrap();
///
/// assert_eq!(colors.value("Blue"), Some(&FieldValue::U8(3)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicEnum {
    fields: Vec<FieldDescriptor>,
    values: Vec<Option<FieldValue>>,
}

impl DynamicEnum {
    /// Creates an enum from field descriptors.
    #[must_use]
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        let values = vec![None; fields.len()];
        Self { fields, values }
    }

    /// Creates an enum of `field_type` fields from a layout text.
    ///
    /// Fields are separated by newlines or by `;` outside double-quoted
    /// strings. Each one is written as
    /// `Name` (no tag), `Name =` (empty tag) or `Name = tag`. Surrounding
    /// double quotes are stripped from the tag. Blank entries are skipped.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLayout`] if a name is not an identifier.
    ///
    /// # Example
    /// ```
    /// use fieldenum::generator::{dynamic::DynamicEnum, field::FieldType};
    ///
    /// let layout = DynamicEnum::parse(FieldType::Str, "A; B = \"b\"; C =").unwrap();
    /// let tags: Vec<_> = layout.fields().iter().map(|f| f.tag.as_deref()).collect();
    /// assert_eq!(tags, vec![None, Some("b"), Some("")]);
    ///
    /// assert!(DynamicEnum::parse(FieldType::I32, "1st = 3").is_err());
    /// ```
    pub fn parse(field_type: FieldType, layout: &str) -> Result<Self, Error> {
        let fields = declarations(layout).into_iter()
                                         .map(str::trim)
                                         .filter(|line| !line.is_empty())
                                         .map(|line| parse_declaration(&field_type, line))
                                         .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(fields))
    }

    /// Returns the field descriptors in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Returns the value of the named field, if it has been assigned.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .position(|field| field.name == name)
            .and_then(|index| self.values[index].as_ref())
    }

    /// Iterates over the field names and their assigned values.
    pub fn iter(&self) -> impl Iterator<Item=(&str, Option<&FieldValue>)> {
        self.fields
            .iter()
            .zip(&self.values)
            .map(|(field, value)| (field.name.as_str(), value.as_ref()))
    }
}

impl FieldEnum for DynamicEnum {
    fn shape(&self) -> Shape {
        Shape::Struct(self.fields.clone())
    }

    fn set_field(&mut self, index: usize, value: FieldValue) -> Result<(), FieldError> {
        let (Some(field), Some(slot)) = (self.fields.get(index), self.values.get_mut(index)) else {
            return Err(FieldError::MissingField { index });
        };
        if value.field_type() != field.field_type {
            return Err(FieldError::InvalidValueType { kind:       value.value_kind(),
                                                      field_type: field.field_type.clone(), });
        }
        *slot = Some(value);
        Ok(())
    }
}

/// Splits a layout at newlines and at `;` outside double quotes.
fn declarations(layout: &str) -> Vec<&str> {
    let mut parts = Vec::new();

    for line in layout.lines() {
        let mut start = 0;
        let mut quoted = false;
        let mut escaped = false;
        for (i, c) in line.char_indices() {
            match c {
                _ if escaped => escaped = false,
                '\\' if quoted => escaped = true,
                '"' => quoted = !quoted,
                ';' if !quoted => {
                    parts.push(&line[start..i]);
                    start = i + 1;
                },
                _ => {},
            }
        }
        parts.push(&line[start..]);
    }

    parts
}

fn parse_declaration(field_type: &FieldType, line: &str) -> Result<FieldDescriptor, Error> {
    let (name, tag) = match line.split_once('=') {
        Some((name, tag)) => (name.trim(), Some(unquote(tag.trim()))),
        None => (line, None),
    };

    let mut chars = name.chars();
    let is_identifier = chars.next()
                             .is_some_and(|c| c.is_alphabetic() || c == '_')
                        && chars.all(|c| c.is_alphanumeric() || c == '_');
    if !is_identifier {
        return Err(Error::InvalidLayout { line: line.to_string() });
    }

    Ok(FieldDescriptor::new(name, field_type.clone(), tag))
}

fn unquote(tag: &str) -> &str {
    tag.strip_prefix('"')
       .and_then(|t| t.strip_suffix('"'))
       .unwrap_or(tag)
}
