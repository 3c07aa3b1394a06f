/// Function call dispatch.
///
/// Defines the builtin table, argument count descriptors and the custom
/// function type, and resolves calls to builtins before custom functions.
pub mod core;
/// Conversion functions: `int`, `float`, `complex`, `real` and `imag`.
pub mod convert;
/// Elementary, trigonometric and hyperbolic functions.
pub mod builtin;
/// The `pow` function implementation.
///
/// Keeps integer powers exact while they fit into `i64`.
pub mod power;
/// `min` and `max` function implementations.
///
/// Returns the smallest or largest of one or more real arguments.
pub mod min_max;
