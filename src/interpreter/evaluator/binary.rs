use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        host::Host,
        value::core::Value,
    },
};

impl<H: Host> Context<H> {
    /// Evaluates `and` / `or` with short-circuiting.
    ///
    /// The result is one of the operand values, not a converted boolean:
    /// `or` yields the left value when it is truthy, `and` yields it when it
    /// is falsy, and otherwise the right value is evaluated and returned.
    pub fn eval_logical(&mut self,
                        left: &Expr,
                        op: LogicalOperator,
                        right: &Expr)
                        -> EvalResult<Value> {
        let left = self.eval(left)?;
        let decided = match op {
            LogicalOperator::Or => left.is_truthy(),
            LogicalOperator::And => !left.is_truthy(),
        };

        if decided { Ok(left) } else { self.eval(right) }
    }
}

/// Evaluates a binary operation on two values.
///
/// - `+` concatenates the display forms when either side is text, and adds
///   two numbers.
/// - `-`, `*`, `/` and the comparisons need two numbers. Dividing by zero
///   gives an infinity or `NaN`, never an error.
/// - `==` and `!=` compare variant and content without any coercion.
///
/// # Example
/// ```
/// use kodme::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::core::Value},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, &Value::from("n = "), &Value::Number(3.0), 1);
/// assert_eq!(sum.unwrap(), Value::from("n = 3"));
///
/// let eq = eval_binary(BinaryOperator::Equal, &Value::Number(1.0), &Value::from("1"), 1);
/// assert_eq!(eq.unwrap(), Value::Boolean(false));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    match op {
        BinaryOperator::Equal => Ok(Value::Boolean(left == right)),
        BinaryOperator::NotEqual => Ok(Value::Boolean(left != right)),
        BinaryOperator::Add if left.is_text() || right.is_text() => {
            Ok(Value::Text(format!("{left}{right}")))
        },
        _ => {
            let (Value::Number(l), Value::Number(r)) = (left, right) else {
                return Err(operand_mismatch(op, left, right, line));
            };
            Ok(eval_numeric(op, *l, *r))
        },
    }
}

/// Applies an arithmetic or comparison operator to two numbers.
///
/// Division follows IEEE 754: `1 / 0` is `Infinity` and `0 / 0` is `NaN`.
#[allow(clippy::float_cmp)]
fn eval_numeric(op: BinaryOperator, l: f64, r: f64) -> Value {
    match op {
        BinaryOperator::Add => Value::Number(l + r),
        BinaryOperator::Sub => Value::Number(l - r),
        BinaryOperator::Mul => Value::Number(l * r),
        BinaryOperator::Div => Value::Number(l / r),
        BinaryOperator::Greater => Value::Boolean(l > r),
        BinaryOperator::GreaterEqual => Value::Boolean(l >= r),
        BinaryOperator::Less => Value::Boolean(l < r),
        BinaryOperator::LessEqual => Value::Boolean(l <= r),
        BinaryOperator::Equal => Value::Boolean(l == r),
        BinaryOperator::NotEqual => Value::Boolean(l != r),
    }
}

fn operand_mismatch(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                               left.type_name(),
                                               right.type_name()),
                              line }
}
