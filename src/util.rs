/// Integer arithmetic helpers.
///
/// Each helper performs one `i64` operation and returns a [`Value`]: the exact
/// integer result when it is representable, or the `f64` result otherwise.
/// Division and remainder by zero never fail; they produce `NaN` or an
/// infinity.
///
/// [`Value`]: crate::interpreter::value::core::Value
pub mod num;
