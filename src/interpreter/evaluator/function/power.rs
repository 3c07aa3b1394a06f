use crate::{
    error::FunctionError,
    interpreter::{evaluator::function::core::FunctionResult, value::core::Value},
    util::num::pow_i64,
};

/// Evaluates `pow(x, y)`.
///
/// Two integers use exact integer exponentiation while the result fits into
/// `i64` and fall back to floats otherwise. A float operand switches to
/// `f64::powf`; a complex operand switches to the complex power.
///
/// # Example
/// ```
/// use fieldenum::interpreter::{evaluator::function::power::pow, value::core::Value};
///
/// assert_eq!(pow("pow", &[Value::Int(2), Value::Int(10)]).unwrap(), Value::Int(1024));
/// assert_eq!(pow("pow", &[Value::Float(0.5), Value::Int(2)]).unwrap(), Value::Float(0.25));
/// ```
pub fn pow(name: &str, args: &[Value]) -> FunctionResult {
    let unsupported = || FunctionError::unsupported(name, args);
    match args {
        [Value::Int(x), Value::Int(y)] => Ok(pow_i64(*x, *y)),
        [x @ Value::Complex(_), y] | [x, y @ Value::Complex(_)] => {
            let (Some(x), Some(y)) = (x.as_complex(), y.as_complex()) else {
                return Err(unsupported());
            };
            Ok(Value::Complex(x.pow(y)))
        },
        [x, y] => {
            let (Some(x), Some(y)) = (x.as_float(), y.as_float()) else {
                return Err(unsupported());
            };
            Ok(Value::Float(x.powf(y)))
        },
        _ => Err(unsupported()),
    }
}
