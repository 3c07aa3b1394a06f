use std::cmp::Ordering;

use crate::{
    error::FunctionError,
    interpreter::{evaluator::function::core::FunctionResult, value::core::Value},
};

/// Compares two real values, exactly when both are integers.
fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        _ => a.as_float()?.partial_cmp(&b.as_float()?),
    }
}

/// Computes the minimum or maximum of one or more real values.
///
/// The operation is selected by the `name` parameter, which must be `"min"`
/// or `"max"`.
///
/// - `NaN` arguments are skipped; the result is `NaN` only if every argument
///   is `NaN`.
/// - The winning argument keeps its kind, so `max(1, 2.5)` is a float and
///   `max(3, 2.5)` an integer.
/// - On ties the earliest argument wins.
/// - Complex and string arguments are rejected.
///
/// # Example
/// ```
/// use fieldenum::interpreter::{evaluator::function::min_max::min_max, value::core::Value};
///
/// let r = min_max("max", &[Value::Int(3), Value::Float(2.5)]).unwrap();
/// assert_eq!(r, Value::Int(3));
///
/// let r = min_max("min", &[Value::Float(f64::NAN), Value::Int(7), Value::Float(1.5)]).unwrap();
/// assert_eq!(r, Value::Float(1.5));
/// ```
pub fn min_max(name: &str, args: &[Value]) -> FunctionResult {
    let unsupported = || FunctionError::unsupported(name, args);
    if args.iter()
           .any(|v| !matches!(v, Value::Int(_) | Value::Float(_)))
    {
        return Err(unsupported());
    }

    let wanted = if name == "max" { Ordering::Greater } else { Ordering::Less };
    let (first, rest) = args.split_first().ok_or_else(unsupported)?;

    let mut best = first;
    for candidate in rest {
        if best.is_nan() || compare(candidate, best) == Some(wanted) {
            best = candidate;
        }
    }

    Ok(best.clone())
}
