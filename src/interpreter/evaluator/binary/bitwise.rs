use crate::{
    ast::BinaryOperator,
    error::OpError,
    interpreter::{
        evaluator::{binary::core::type_error, core::Context},
        value::core::Value,
    },
    util::num::{shl_i64, shr_i64},
};

impl Context {
    /// Evaluates a bitwise operator on two integers.
    ///
    /// Supports `&`, `|`, `^`, `&^` (bit clear), `<<` and `>>` (arithmetic).
    /// Any non-integer operand is an unsupported type. A negative shift
    /// amount is an unsupported second value; shifts of 64 bits or more
    /// shift every bit out.
    ///
    /// # Example
    /// ```
    /// use fieldenum::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_bitwise(BinaryOperator::AndNot, &Value::Int(0b1111), &Value::Int(0b0101));
    /// assert_eq!(v.unwrap(), Value::Int(0b1010));
    ///
    /// let v = Context::eval_bitwise(BinaryOperator::Shl, &Value::Int(1), &Value::Int(-1));
    /// assert!(v.is_err());
    /// ```
    pub fn eval_bitwise(op: BinaryOperator, left: &Value, right: &Value) -> Result<Value, OpError> {
        let (Value::Int(a), Value::Int(b)) = (left, right) else {
            return Err(type_error(op, left, right));
        };
        let (a, b) = (*a, *b);

        let result = match op {
            BinaryOperator::And => a & b,
            BinaryOperator::Or => a | b,
            BinaryOperator::Xor => a ^ b,
            BinaryOperator::AndNot => a & !b,
            BinaryOperator::Shl | BinaryOperator::Shr => {
                let Ok(amount) = u64::try_from(b) else {
                    return Err(OpError::SecondValue { op:    op.to_string(),
                                                      left:  left.clone(),
                                                      right: right.clone(), });
                };
                if op == BinaryOperator::Shl {
                    shl_i64(a, amount)
                } else {
                    shr_i64(a, amount)
                }
            },
            _ => return Err(OpError::Unsupported { op: op.to_string() }),
        };

        Ok(Value::Int(result))
    }
}
