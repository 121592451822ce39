use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a unary operation on a value.
///
/// `Negate` is defined for numbers only.
///
/// # Example
/// ```
/// use kodme::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 1).unwrap();
/// assert_eq!(v, Value::Number(-5.0));
///
/// assert!(eval_unary(UnaryOperator::Negate, &Value::from("5"), 1).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
    match (op, value) {
        (UnaryOperator::Negate, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOperator::Negate, other) => {
            Err(RuntimeError::TypeError { details: format!("cannot negate {}", other.type_name()),
                                          line })
        },
    }
}
