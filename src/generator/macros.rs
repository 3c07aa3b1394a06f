/// Declares a struct of enum values and implements
/// [`FieldEnum`](crate::generator::field::FieldEnum) for it.
///
/// All fields share the type named after the colon and are public. A field
/// may carry a tag with `= "expression"`; an empty tag is written `= ""`.
/// The struct derives `Default`, so it can be built with
/// [`try_new`](crate::try_new) or [`new`](crate::new).
///
/// # Example
/// ```
/// use fieldenum::field_enum;
///
/// field_enum! {
///     #[derive(Debug)]
///     pub struct Size: i64 {
///         _Skip,
///         KB = "1 << (10 * iota)",
///         MB,
///         GB,
///     }
/// }
///
/// let size: Size = fieldenum::new(vec![]);
/// assert_eq!(size.KB, 1024);
/// assert_eq!(size.GB, 1 << 30);
/// ```
#[macro_export]
macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $ty:ty {
            $($field:ident $(= $tag:literal)?),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Default)]
        #[allow(non_snake_case)]
        $vis struct $name {
            $(pub $field: $ty,)*
        }

        impl $crate::generator::field::FieldEnum for $name {
            fn shape(&self) -> $crate::generator::field::Shape {
                $crate::generator::field::Shape::Struct(vec![$(
                    $crate::generator::field::FieldDescriptor::new(
                        stringify!($field),
                        <$ty as $crate::generator::field::FieldPrimitive>::field_type(),
                        $crate::__field_enum_tag!($($tag)?),
                    ),
                )*])
            }

            fn set_field(&mut self,
                         index: usize,
                         value: $crate::generator::field::FieldValue)
                         -> ::std::result::Result<(), $crate::error::FieldError> {
                let mut position = 0_usize;
                $(
                    if index == position {
                        self.$field =
                            <$ty as $crate::generator::field::FieldPrimitive>::from_field_value(value)?;
                        return Ok(());
                    }
                    position += 1;
                )*
                let _ = position;
                Err($crate::error::FieldError::MissingField { index })
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_enum_tag {
    () => {
        None
    };
    ($tag:literal) => {
        Some($tag)
    };
}
