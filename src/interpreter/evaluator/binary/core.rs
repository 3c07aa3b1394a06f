use crate::{
    ast::BinaryOperator,
    error::OpError,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator. Arithmetic operators promote their operands along
    /// Int -> Float -> Complex. Bitwise operators accept integers only.
    /// Comparison and logical operators are parsed but have no evaluation
    /// rule, so they fail with [`OpError::Unsupported`].
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed `Value`, or an [`OpError`] naming the operator and the
    /// offending operands.
    ///
    /// # Example
    /// ```
    /// use fieldenum::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &Value::Int(3), &Value::Float(0.5));
    /// assert_eq!(result.unwrap(), Value::Float(3.5));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Less, &Value::Int(3), &Value::Int(4));
    /// assert!(result.is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> Result<Value, OpError> {
        use BinaryOperator::{
            Add, And, AndNot, Div, Equal, Greater, GreaterEqual, Less, LessEqual, LogicalAnd,
            LogicalOr, Mod, Mul, NotEqual, Or, Shl, Shr, Sub, Xor,
        };

        match op {
            Add | Sub | Mul | Div => Self::eval_scalar_op(op, left, right),
            Mod => Self::eval_mod(left, right),
            And | Or | Xor | Shl | Shr | AndNot => Self::eval_bitwise(op, left, right),
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual | LogicalAnd
            | LogicalOr => Err(OpError::Unsupported { op: op.to_string() }),
        }
    }
}

/// Builds the error for operands whose kinds the operator does not accept.
pub(in crate::interpreter::evaluator) fn type_error(op: BinaryOperator,
                                                    left: &Value,
                                                    right: &Value)
                                                    -> OpError {
    OpError::BinaryType { op:    op.to_string(),
                          left:  left.kind(),
                          right: right.kind(), }
}
