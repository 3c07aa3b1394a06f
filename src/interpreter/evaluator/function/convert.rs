use crate::{
    error::FunctionError,
    interpreter::{
        evaluator::function::core::FunctionResult,
        value::{complex::ComplexNumber, core::Value},
    },
    util::num::f64_to_i64_saturating,
};

/// Converts a number to an integer.
///
/// Floats truncate toward zero and saturate at the `i64` bounds, so
/// `int(inf)` is `i64::MAX`; `NaN` becomes `0`. Complex numbers convert their
/// real part.
///
/// # Example
/// ```
/// use fieldenum::interpreter::{evaluator::function::convert::int, value::core::Value};
///
/// assert_eq!(int("int", &[Value::Float(-2.7)]).unwrap(), Value::Int(-2));
/// assert_eq!(int("int", &[Value::Float(f64::INFINITY)]).unwrap(), Value::Int(i64::MAX));
/// ```
pub fn int(name: &str, args: &[Value]) -> FunctionResult {
    match args {
        [Value::Int(n)] => Ok(Value::Int(*n)),
        [Value::Float(x)] => Ok(Value::Int(f64_to_i64_saturating(*x))),
        [Value::Complex(c)] => Ok(Value::Int(f64_to_i64_saturating(c.real))),
        _ => Err(FunctionError::unsupported(name, args)),
    }
}

/// Converts a number to a float. Complex numbers convert their real part.
pub fn float(name: &str, args: &[Value]) -> FunctionResult {
    match args {
        [Value::Complex(c)] => Ok(Value::Float(c.real)),
        [v] => v.as_float()
                .map(Value::Float)
                .ok_or_else(|| FunctionError::unsupported(name, args)),
        _ => Err(FunctionError::unsupported(name, args)),
    }
}

/// Builds a complex number.
///
/// With one argument, widens any number to a complex number. With two
/// arguments, uses them as the real and imaginary parts; both must be real.
///
/// # Example
/// ```
/// use fieldenum::interpreter::{
///     evaluator::function::convert::complex,
///     value::{complex::ComplexNumber, core::Value},
/// };
///
/// let c = complex("complex", &[Value::Int(1), Value::Float(0.5)]).unwrap();
/// assert_eq!(c, Value::Complex(ComplexNumber::new(1.0, 0.5)));
///
/// let z = Value::Complex(ComplexNumber::new(0.0, 1.0));
/// assert!(complex("complex", &[z, Value::Int(1)]).is_err());
/// ```
pub fn complex(name: &str, args: &[Value]) -> FunctionResult {
    let result = match args {
        [v] => v.as_complex(),
        [Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)] => {
            args[0].as_float()
                   .zip(args[1].as_float())
                   .map(|(re, im)| ComplexNumber::new(re, im))
        },
        _ => None,
    };
    result.map(Value::Complex)
          .ok_or_else(|| FunctionError::unsupported(name, args))
}

/// Returns the real part of a number. Integers and floats are returned
/// unchanged.
pub fn real(name: &str, args: &[Value]) -> FunctionResult {
    match args {
        [v @ (Value::Int(_) | Value::Float(_))] => Ok(v.clone()),
        [Value::Complex(c)] => Ok(Value::Float(c.real)),
        _ => Err(FunctionError::unsupported(name, args)),
    }
}

/// Returns the imaginary part of a number.
///
/// The imaginary part of an integer is the integer `0`, that of a float is
/// `0.0`.
pub fn imag(name: &str, args: &[Value]) -> FunctionResult {
    match args {
        [Value::Int(_)] => Ok(Value::Int(0)),
        [Value::Float(_)] => Ok(Value::Float(0.0)),
        [Value::Complex(c)] => Ok(Value::Float(c.imaginary)),
        _ => Err(FunctionError::unsupported(name, args)),
    }
}
