use crate::{
    ast::UnaryOperator,
    error::OpError,
    interpreter::{evaluator::core::Context, value::core::Value},
    util::num::neg_i64,
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: identity for integers, floats and complex numbers.
    /// - `Negate`: numeric negation. Negating `i64::MIN` promotes to a float.
    /// - `Complement`: bitwise complement, integers only.
    ///
    /// `Not` parses but is always rejected as an unsupported operator.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The computed `Value`, or an [`OpError`] naming the operator and the
    /// operand kind.
    ///
    /// # Example
    /// ```
    /// use fieldenum::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Int(5)).unwrap();
    /// assert_eq!(v, Value::Int(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Complement, &Value::Int(0)).unwrap();
    /// assert_eq!(v, Value::Int(-1));
    ///
    /// assert!(Context::eval_unary(UnaryOperator::Complement, &Value::Float(1.0)).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> Result<Value, OpError> {
        let type_error = || OpError::UnaryType { op:      op.to_string(),
                                                 operand: value.kind(), };
        match op {
            UnaryOperator::Plus => match value {
                Value::Int(_) | Value::Float(_) | Value::Complex(_) => Ok(value.clone()),
                Value::Str(_) => Err(type_error()),
            },
            UnaryOperator::Negate => match value {
                Value::Int(n) => Ok(neg_i64(*n)),
                Value::Float(x) => Ok(Value::Float(-x)),
                Value::Complex(c) => Ok(Value::Complex(-*c)),
                Value::Str(_) => Err(type_error()),
            },
            UnaryOperator::Complement => match value {
                Value::Int(n) => Ok(Value::Int(!n)),
                _ => Err(type_error()),
            },
            UnaryOperator::Not => Err(OpError::Unsupported { op: op.to_string() }),
        }
    }
}
