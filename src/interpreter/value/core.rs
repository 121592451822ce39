use crate::{ast::LiteralValue, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Values are produced by evaluating expressions and stored in scopes by
/// assignments. Equality is strict: values of different variants are never
/// equal, so `1 == "1"` is false.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A piece of text, such as a literal or an answer to `ask`.
    Text(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators and boolean literals.
    Boolean(bool),
    /// The absence of a value. Shown as `nil`.
    Absent,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl Value {
    /// Returns whether the value counts as true in a condition.
    ///
    /// Only `Absent` and `false` are falsy. Zero and empty text are truthy.
    ///
    /// # Example
    /// ```
    /// use kodme::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// assert!(!Value::Boolean(false).is_truthy());
    /// assert!(!Value::Absent.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Absent | Self::Boolean(false))
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::ExpectedNumber)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use kodme::{error::RuntimeError, interpreter::value::core::Value};
    ///
    /// assert_eq!(Value::Number(2.5).as_number(1).unwrap(), 2.5);
    ///
    /// let err = Value::from("2.5").as_number(7).unwrap_err();
    /// assert_eq!(err, RuntimeError::ExpectedNumber { line: 7 });
    /// ```
    pub const fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }

    /// Returns a short name of the value's type for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Boolean(_) => "boolean",
            Self::Absent => "nil",
        }
    }

    /// Returns `true` for text values.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

/// Renders a number the way `show` prints it.
///
/// Integral values have no fraction, negative zero prints as `0` and
/// infinities print as `Infinity` and `-Infinity`. Everything else uses the
/// shortest representation that reads back to the same `f64`.
///
/// # Example
/// ```
/// use kodme::interpreter::value::core::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    n.to_string()
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Text(text) => write!(f, "{text}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Absent => write!(f, "nil"),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Text(text) => Self::Text(text.clone()),
            LiteralValue::Boolean(b) => Self::Boolean(*b),
        }
    }
}
