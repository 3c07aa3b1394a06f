use std::ops;

use crate::{
    ast::BinaryOperator,
    error::OpError,
    interpreter::{
        evaluator::{binary::core::type_error, core::Context},
        value::core::Value,
    },
    util::num::{add_i64, div_i64, mul_i64, rem_i64, sub_i64},
};

/// Applies `+`, `-`, `*` or `/` to two operands of the same type.
fn apply<T>(op: BinaryOperator, left: T, right: T) -> T
    where T: ops::Add<Output = T> + ops::Sub<Output = T> + ops::Mul<Output = T> + ops::Div<Output = T>
{
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        _ => left / right,
    }
}

impl Context {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Two integers stay integers unless the result overflows, in which case
    /// the operation is re-run in `f64`. Integer division truncates toward
    /// zero and never fails: `0 / 0` is `NaN` and `x / 0` is an infinity with
    /// the sign of `x`. Any float operand promotes the other to `f64`; any
    /// complex operand promotes the other to a complex number. The operator
    /// must be one of `Add`, `Sub`, `Mul` or `Div`.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed scalar, or an unsupported type error for strings.
    ///
    /// # Example
    /// ```
    /// use fieldenum::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Div, &Value::Int(7), &Value::Int(2));
    /// assert_eq!(result.unwrap(), Value::Int(3));
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Mul, &Value::Int(i64::MAX), &Value::Int(2));
    /// assert!(matches!(result.unwrap(), Value::Float(_)));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator, left: &Value, right: &Value) -> Result<Value, OpError> {
        match (left, right) {
            (Value::Int(a), Value::Int(b)) => Ok(match op {
                                                  BinaryOperator::Add => add_i64(*a, *b),
                                                  BinaryOperator::Sub => sub_i64(*a, *b),
                                                  BinaryOperator::Mul => mul_i64(*a, *b),
                                                  _ => div_i64(*a, *b),
                                              }),
            (Value::Complex(_), _) | (_, Value::Complex(_)) => {
                let (Some(a), Some(b)) = (left.as_complex(), right.as_complex()) else {
                    return Err(type_error(op, left, right));
                };
                Ok(Value::Complex(apply(op, a, b)))
            },
            _ => {
                let (Some(a), Some(b)) = (left.as_float(), right.as_float()) else {
                    return Err(type_error(op, left, right));
                };
                Ok(Value::Float(apply(op, a, b)))
            },
        }
    }

    /// Evaluates the remainder operator `%`.
    ///
    /// Two integers use truncated remainder, with `x % 0` yielding `NaN` and
    /// `i64::MIN % -1` yielding `0`. A float operand switches to `fmod`
    /// semantics. Complex operands are rejected.
    ///
    /// # Example
    /// ```
    /// use fieldenum::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// assert_eq!(Context::eval_mod(&Value::Int(-7), &Value::Int(3)).unwrap(), Value::Int(-1));
    /// assert_eq!(Context::eval_mod(&Value::Float(7.5), &Value::Int(2)).unwrap(), Value::Float(1.5));
    /// assert!(Context::eval_mod(&Value::Int(1), &Value::Int(0)).unwrap().is_nan());
    /// ```
    pub fn eval_mod(left: &Value, right: &Value) -> Result<Value, OpError> {
        match (left, right) {
            (Value::Int(a), Value::Int(b)) => Ok(rem_i64(*a, *b)),
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                let (Some(a), Some(b)) = (left.as_float(), right.as_float()) else {
                    return Err(type_error(BinaryOperator::Mod, left, right));
                };
                Ok(Value::Float(a % b))
            },
            _ => Err(type_error(BinaryOperator::Mod, left, right)),
        }
    }
}
