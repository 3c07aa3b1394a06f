use crate::{
    error::Error,
    interpreter::{
        evaluator::{
            core::Context,
            function::core::{CustomFunction, FunctionResult},
        },
        value::core::Value,
    },
};

/// Configures one generation call.
///
/// Options are applied in order to a fresh [`Context`] before any field is
/// evaluated. Build them with [`with_values`], [`with_value`],
/// [`with_funcs`] or [`with_func`].
pub struct ConfigOption(Box<dyn FnOnce(&mut Context) -> Result<(), Error>>);

impl ConfigOption {
    /// Wraps a custom configuration step.
    pub fn new(apply: impl FnOnce(&mut Context) -> Result<(), Error> + 'static) -> Self {
        Self(Box::new(apply))
    }

    /// Applies the option to a context.
    ///
    /// # Errors
    /// Returns the error of the wrapped step, usually a duplicate name.
    pub fn apply(self, context: &mut Context) -> Result<(), Error> {
        (self.0)(context)
    }
}

impl std::fmt::Debug for ConfigOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ConfigOption")
    }
}

/// Registers custom values.
///
/// A name that already resolves, such as `iota`, a builtin constant or a
/// value registered earlier, makes the generation call fail.
///
/// # Example
/// ```
/// use fieldenum::{
///     generator::options::with_values,
///     interpreter::{evaluator::core::Context, value::core::Value},
/// };
///
/// let mut context = Context::new();
/// with_values([("a", 1), ("b", 3)]).apply(&mut context).unwrap();
/// assert_eq!(context.lookup_value("b"), Some(Value::Int(3)));
///
/// let err = with_values([("pi", 3)]).apply(&mut context).unwrap_err();
/// assert_eq!(err.to_string(), "fieldenum: existed value with name \"pi\"");
/// ```
pub fn with_values<I, N, V>(values: I) -> ConfigOption
    where I: IntoIterator<Item=(N, V)>,
          N: Into<String>,
          V: Into<Value>
{
    let values: Vec<(String, Value)> = values.into_iter()
                                             .map(|(name, value)| (name.into(), value.into()))
                                             .collect();
    ConfigOption::new(move |context| {
        values.into_iter()
              .try_for_each(|(name, value)| context.define_value(name, value))
    })
}

/// Registers a single custom value.
pub fn with_value(name: impl Into<String>, value: impl Into<Value>) -> ConfigOption {
    with_values([(name.into(), value.into())])
}

/// Registers custom functions.
///
/// A name that is a builtin function or was registered earlier makes the
/// generation call fail.
pub fn with_funcs<I, N>(functions: I) -> ConfigOption
    where I: IntoIterator<Item=(N, CustomFunction)>,
          N: Into<String>
{
    let functions: Vec<(String, CustomFunction)> =
        functions.into_iter()
                 .map(|(name, function)| (name.into(), function))
                 .collect();
    ConfigOption::new(move |context| {
        functions.into_iter()
                 .try_for_each(|(name, function)| context.define_function(name, function))
    })
}

/// Registers a single custom function.
///
/// # Example
/// ```
/// use fieldenum::{
///     generator::options::with_func,
///     interpreter::{evaluator::core::Context, value::core::Value},
/// };
///
/// let mut context = Context::with_iota(4);
/// with_func("half", |args: &[Value]| {
///     Ok(Value::Float(args[0].as_float().unwrap_or_default() / 2.0))
/// }).apply(&mut context)
///   .unwrap();
///
/// assert_eq!(context.evaluate("half(iota)").unwrap(), Value::Float(2.0));
/// ```
pub fn with_func<F>(name: impl Into<String>, function: F) -> ConfigOption
    where F: Fn(&[Value]) -> FunctionResult + 'static
{
    let boxed: CustomFunction = Box::new(function);
    with_funcs([(name.into(), boxed)])
}
