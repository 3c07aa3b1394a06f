/// Operator dispatch.
pub mod core;
/// `+`, `-`, `*`, `/` and `%` with numeric promotion.
pub mod scalar;
/// `&`, `|`, `^`, `<<`, `>>` and `&^` on integers.
pub mod bitwise;
