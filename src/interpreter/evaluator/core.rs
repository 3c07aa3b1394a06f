use std::collections::HashMap;

use log::trace;

use crate::{
    ast::Expr,
    error::{Error, ExprError, RuntimeError},
    interpreter::{
        evaluator::function::core::{CustomFunction, is_builtin_function},
        parser::core::parse,
        value::{complex::I, core::Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The golden ratio.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Names of the predefined constants, in lookup order.
pub const BUILTIN_CONSTANTS: &[&str] = &["i", "e", "pi", "Pi", "phi", "Phi", "nan", "NaN", "inf",
                                         "Inf"];

/// Returns the value of a predefined constant.
///
/// # Example
/// ```
/// use fieldenum::interpreter::{evaluator::core::builtin_constant, value::core::Value};
///
/// assert_eq!(builtin_constant("Pi"), Some(Value::Float(std::f64::consts::PI)));
/// assert_eq!(builtin_constant("tau"), None);
/// ```
#[must_use]
pub fn builtin_constant(name: &str) -> Option<Value> {
    match name {
        "i" => Some(Value::Complex(I)),
        "e" => Some(Value::Float(std::f64::consts::E)),
        "pi" | "Pi" => Some(Value::Float(std::f64::consts::PI)),
        "phi" | "Phi" => Some(Value::Float(PHI)),
        "nan" | "NaN" => Some(Value::Float(f64::NAN)),
        "inf" | "Inf" => Some(Value::Float(f64::INFINITY)),
        _ => None,
    }
}

/// Stores the evaluation context of one expression.
///
/// Holds the current `iota` together with the custom values and custom
/// functions registered through the configuration options. Names resolve in a
/// fixed order: `iota` first, then the builtin constants, then custom values.
/// Function names resolve to builtins before custom functions.
///
/// ## Usage
///
/// The generator builds one `Context` per call and updates `iota` before
/// evaluating each field. A `Context` can also be used directly:
///
/// ```
/// use fieldenum::interpreter::{evaluator::core::Context, value::core::Value};
///
/// let mut context = Context::with_iota(3);
/// context.define_value("step", Value::Int(10)).unwrap();
///
/// assert_eq!(context.evaluate("iota * step").unwrap(), Value::Int(30));
/// ```
#[derive(Default)]
pub struct Context {
    /// The index of the field being evaluated.
    pub iota:      i64,
    /// Custom values, keyed by name.
    pub values:    HashMap<String, Value>,
    /// Custom functions, keyed by name.
    pub functions: HashMap<String, CustomFunction>,
}

impl Context {
    /// Creates a context with `iota = 0` and no custom values or functions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context with the given `iota`.
    #[must_use]
    pub fn with_iota(iota: i64) -> Self {
        Self { iota,
               ..Self::default() }
    }

    /// Registers a custom value.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateValue`] if `name` already resolves: `iota`,
    /// a builtin constant, or an earlier custom value.
    pub fn define_value(&mut self, name: impl Into<String>, value: Value) -> Result<(), Error> {
        let name = name.into();
        if self.lookup_value(&name).is_some() {
            return Err(Error::DuplicateValue { name });
        }
        self.values.insert(name, value);
        Ok(())
    }

    /// Registers a custom function.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateFunction`] if `name` is a builtin function or
    /// an earlier custom function.
    pub fn define_function(&mut self,
                           name: impl Into<String>,
                           function: CustomFunction)
                           -> Result<(), Error> {
        let name = name.into();
        if is_builtin_function(&name) || self.functions.contains_key(&name) {
            return Err(Error::DuplicateFunction { name });
        }
        self.functions.insert(name, function);
        Ok(())
    }

    /// Resolves an identifier to its value.
    ///
    /// Returns `None` if the name is neither `iota`, a builtin constant, nor a
    /// custom value.
    #[must_use]
    pub fn lookup_value(&self, name: &str) -> Option<Value> {
        if name == "iota" {
            return Some(Value::Int(self.iota));
        }
        builtin_constant(name).or_else(|| self.values.get(name).cloned())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for AST evaluation. Operands and arguments
    /// are evaluated eagerly from left to right; the first failure aborts the
    /// evaluation and carries the span of the failing sub-expression.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed `Value`.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::Identifier { name, span } => {
                self.lookup_value(name)
                    .ok_or_else(|| RuntimeError::UnknownIdentifier { name: name.clone(),
                                                                     span: *span, })
            },
            Expr::Paren { expr, .. } => self.eval(expr),
            Expr::Unary { op, expr, span } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value).map_err(|source| RuntimeError::Operator { source,
                                                                                         span: *span })
            },
            Expr::Binary { left,
                           op,
                           right,
                           span, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right).map_err(|source| {
                                                         RuntimeError::Operator { source,
                                                                                  span: *span }
                                                     })
            },
            Expr::Call { name,
                         arguments,
                         span, } => self.eval_call(name, arguments, *span),
        }
    }

    /// Evaluates an already parsed expression and attaches `source` to any
    /// failure.
    ///
    /// # Errors
    /// Returns [`ExprError::Runtime`] if evaluation fails.
    pub fn evaluate_parsed(&self, source: &str, expr: &Expr) -> Result<Value, ExprError> {
        let value = self.eval(expr)
                        .map_err(|source_error| ExprError::Runtime { expression: source.to_string(),
                                                                     source:     source_error, })?;
        trace!("evaluated \"{source}\" with iota={} to {value}", self.iota);
        Ok(value)
    }

    /// Parses and evaluates an expression text.
    ///
    /// # Errors
    /// Returns [`ExprError::Parse`] if the text is not a valid expression and
    /// [`ExprError::Runtime`] if evaluation fails.
    ///
    /// # Example
    /// ```
    /// use fieldenum::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let context = Context::with_iota(2);
    /// assert_eq!(context.evaluate("2*(iota+1)").unwrap(), Value::Int(6));
    ///
    /// let err = context.evaluate("iota + unknown").unwrap_err();
    /// assert_eq!(err.to_string(),
    ///            "unsupported identifier \"unknown\" with expression \"unknown\"");
    /// ```
    pub fn evaluate(&self, source: &str) -> Result<Value, ExprError> {
        let expr = parse(source).map_err(|e| ExprError::Parse { expression: source.to_string(),
                                                                source:     e, })?;
        self.evaluate_parsed(source, &expr)
    }
}
