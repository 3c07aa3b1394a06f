/// Complex number support.
///
/// Defines the `ComplexNumber` type used for arithmetic with real and imaginary
/// parts, the narrow `Complex32` field type, and the elementary complex
/// functions the builtin library dispatches to.
pub mod complex;

/// The `Value` union and its conversions.
///
/// Every fixed-width integer, float and complex type converts into one of the
/// three numeric alternatives of `Value`.
pub mod core;
