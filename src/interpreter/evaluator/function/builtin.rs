use crate::{
    error::FunctionError,
    interpreter::{evaluator::function::core::FunctionResult, value::core::Value},
    util::num::abs_i64,
};

/// Applies a unary builtin function to a numeric value.
///
/// The generated functions accept exactly one argument.
/// - Integers are converted to floats before applying the real function.
/// - Floats use the corresponding `f64` method.
/// - Complex values use the complex variant.
///
/// Strings produce an unsupported argument type error.
///
/// # Example
/// ```
/// use fieldenum::interpreter::{evaluator::function::builtin::sin, value::core::Value};
///
/// let x = Value::Float(std::f64::consts::PI / 2.0);
/// let r = sin("sin", &[x]).unwrap();
///
/// assert_eq!(r, Value::Float(1.0));
/// ```
macro_rules! real_complex_builtin {
    ($fname:ident, $real_fn:ident, $complex_fn:ident) => {
        pub fn $fname(name: &str, args: &[Value]) -> FunctionResult {
            match args {
                [Value::Complex(c)] => Ok(Value::Complex(c.$complex_fn())),
                [v] => v.as_float()
                        .map(|x| Value::Float(x.$real_fn()))
                        .ok_or_else(|| FunctionError::unsupported(name, args)),
                _ => Err(FunctionError::unsupported(name, args)),
            }
        }
    };
}

real_complex_builtin!(sqrt, sqrt, sqrt);
real_complex_builtin!(exp, exp, exp);
real_complex_builtin!(log, ln, ln);
real_complex_builtin!(log10, log10, log10);
real_complex_builtin!(sin, sin, sin);
real_complex_builtin!(cos, cos, cos);
real_complex_builtin!(tan, tan, tan);
real_complex_builtin!(asin, asin, asin);
real_complex_builtin!(acos, acos, acos);
real_complex_builtin!(atan, atan, atan);
real_complex_builtin!(sinh, sinh, sinh);
real_complex_builtin!(cosh, cosh, cosh);
real_complex_builtin!(tanh, tanh, tanh);
real_complex_builtin!(asinh, asinh, asinh);
real_complex_builtin!(acosh, acosh, acosh);
real_complex_builtin!(atanh, atanh, atanh);

/// Returns the absolute value of a number.
///
/// Integers stay integers except `i64::MIN`, whose absolute value is only
/// representable as a float. The absolute value of a complex number is its
/// modulus, returned as a float.
///
/// # Example
/// ```
/// use fieldenum::interpreter::{
///     evaluator::function::builtin::abs,
///     value::{complex::ComplexNumber, core::Value},
/// };
///
/// assert_eq!(abs("abs", &[Value::Int(-3)]).unwrap(), Value::Int(3));
///
/// let z = Value::Complex(ComplexNumber::new(3.0, 4.0));
/// assert_eq!(abs("abs", &[z]).unwrap(), Value::Float(5.0));
/// ```
pub fn abs(name: &str, args: &[Value]) -> FunctionResult {
    match args {
        [Value::Int(n)] => Ok(abs_i64(*n)),
        [Value::Float(x)] => Ok(Value::Float(x.abs())),
        [Value::Complex(c)] => Ok(Value::Float(c.abs())),
        _ => Err(FunctionError::unsupported(name, args)),
    }
}
