use std::fmt::Display;

use crate::{
    ast::{Expr, Span},
    error::{FunctionError, RuntimeError},
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, convert, min_max, power},
        },
        value::core::Value,
    },
};

/// Result type returned by every function, builtin or custom.
pub type FunctionResult = Result<Value, FunctionError>;

/// A function registered through the configuration options.
///
/// Receives the evaluated arguments in call order. Custom functions can use
/// [`Arity::check`] to validate the argument count.
pub type CustomFunction = Box<dyn Fn(&[Value]) -> FunctionResult>;

/// Type alias for builtin function handlers.
///
/// A builtin receives its own name, for error messages, and the evaluated
/// arguments. The argument count has already been checked against the
/// builtin's [`Arity`].
type BuiltinFn = fn(&str, &[Value]) -> FunctionResult;

/// Specifies the allowed number of arguments for a function.
///
/// - `Exact(n)`: exactly `n` arguments.
/// - `AtLeast(n)`: `n` or more arguments.
/// - `AtMost(n)`: at most `n` arguments.
/// - `Range(lo, hi)`: between `lo` and `hi` arguments, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many.
    Exact(usize),
    /// This many or more.
    AtLeast(usize),
    /// This many or fewer.
    AtMost(usize),
    /// Inclusive bounds.
    Range(usize, usize),
}

impl Arity {
    /// Returns the smallest accepted argument count.
    #[must_use]
    pub const fn min(self) -> usize {
        match self {
            Self::Exact(n) | Self::AtLeast(n) | Self::Range(n, _) => n,
            Self::AtMost(_) => 0,
        }
    }

    /// Returns the largest accepted argument count, if bounded.
    #[must_use]
    pub const fn max(self) -> Option<usize> {
        match self {
            Self::Exact(n) | Self::AtMost(n) | Self::Range(_, n) => Some(n),
            Self::AtLeast(_) => None,
        }
    }

    /// Tests whether `found` arguments satisfy this arity.
    ///
    /// # Errors
    /// Returns [`FunctionError::TooFewArguments`] or
    /// [`FunctionError::TooManyArguments`] naming `name`.
    ///
    /// # Example
    /// ```
    /// use fieldenum::interpreter::evaluator::function::core::Arity;
    ///
    /// assert!(Arity::Range(1, 2).check("complex", 2).is_ok());
    ///
    /// let err = Arity::Exact(2).check("pow", 3).unwrap_err();
    /// assert_eq!(err.to_string(),
    ///            "call function pow on too many arguments: expected exactly 2, found 3");
    /// ```
    pub fn check(self, name: &str, found: usize) -> Result<(), FunctionError> {
        if found < self.min() {
            return Err(FunctionError::TooFewArguments { name: name.to_string(),
                                                        expected: self,
                                                        found });
        }
        if let Some(max) = self.max()
           && found > max
        {
            return Err(FunctionError::TooManyArguments { name: name.to_string(),
                                                         expected: self,
                                                         found });
        }
        Ok(())
    }
}

impl Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "exactly {n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
            Self::AtMost(n) => write!(f, "at most {n}"),
            Self::Range(lo, hi) => write!(f, "{lo} to {hi}"),
        }
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all builtin functions.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "int"     => { arity: Arity::Exact(1),    func: convert::int },
    "float"   => { arity: Arity::Exact(1),    func: convert::float },
    "complex" => { arity: Arity::Range(1, 2), func: convert::complex },
    "real"    => { arity: Arity::Exact(1),    func: convert::real },
    "imag"    => { arity: Arity::Exact(1),    func: convert::imag },
    "max"     => { arity: Arity::AtLeast(1),  func: min_max::min_max },
    "min"     => { arity: Arity::AtLeast(1),  func: min_max::min_max },
    "abs"     => { arity: Arity::Exact(1),    func: builtin::abs },
    "sqrt"    => { arity: Arity::Exact(1),    func: builtin::sqrt },
    "pow"     => { arity: Arity::Exact(2),    func: power::pow },
    "exp"     => { arity: Arity::Exact(1),    func: builtin::exp },
    "log"     => { arity: Arity::Exact(1),    func: builtin::log },
    "log10"   => { arity: Arity::Exact(1),    func: builtin::log10 },
    "sin"     => { arity: Arity::Exact(1),    func: builtin::sin },
    "cos"     => { arity: Arity::Exact(1),    func: builtin::cos },
    "tan"     => { arity: Arity::Exact(1),    func: builtin::tan },
    "asin"    => { arity: Arity::Exact(1),    func: builtin::asin },
    "acos"    => { arity: Arity::Exact(1),    func: builtin::acos },
    "atan"    => { arity: Arity::Exact(1),    func: builtin::atan },
    "sinh"    => { arity: Arity::Exact(1),    func: builtin::sinh },
    "cosh"    => { arity: Arity::Exact(1),    func: builtin::cosh },
    "tanh"    => { arity: Arity::Exact(1),    func: builtin::tanh },
    "asinh"   => { arity: Arity::Exact(1),    func: builtin::asinh },
    "acosh"   => { arity: Arity::Exact(1),    func: builtin::acosh },
    "atanh"   => { arity: Arity::Exact(1),    func: builtin::atanh },
}

/// Returns `true` if `name` is a builtin function.
#[must_use]
pub fn is_builtin_function(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

impl Context {
    /// Evaluates a function call.
    ///
    /// The name is resolved first, builtins before custom functions; an
    /// unknown name fails before any argument is evaluated. Arguments are then
    /// evaluated left to right, the builtin's arity is checked, and the
    /// function is applied.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `span`: Span of the whole call, for error reporting.
    ///
    /// # Returns
    /// The function result, or a `RuntimeError::Function` carrying `span`.
    pub(crate) fn eval_call(&self, name: &str, arguments: &[Expr], span: Span) -> EvalResult<Value> {
        let builtin = BUILTIN_TABLE.iter().find(|b| b.name == name);

        let result = match (builtin, self.functions.get(name)) {
            (Some(builtin), _) => {
                let values = self.eval_arguments(arguments)?;
                builtin.arity
                       .check(name, values.len())
                       .and_then(|()| (builtin.func)(name, &values))
            },
            (None, Some(custom)) => {
                let values = self.eval_arguments(arguments)?;
                custom(&values)
            },
            (None, None) => Err(FunctionError::NotExisted { name: name.to_string() }),
        };

        result.map_err(|source| RuntimeError::Function { source, span })
    }

    /// Evaluates call arguments from left to right, stopping at the first
    /// failure.
    fn eval_arguments(&self, arguments: &[Expr]) -> EvalResult<Vec<Value>> {
        arguments.iter().map(|arg| self.eval(arg)).collect()
    }
}
