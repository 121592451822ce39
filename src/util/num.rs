use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts a repeat count to the number of iterations to run.
///
/// The value is rounded down. NaN, zero and negative values give zero
/// iterations.
///
/// ## Errors
/// Returns `InvalidLoopBounds` for infinite values and for values above
/// `MAX_SAFE_U64_INT`, which cannot be counted exactly.
///
/// ## Parameters
/// - `value`: The evaluated count.
/// - `line`: Source code line number for error reporting.
///
/// ## Example
/// ```
/// use kodme::{
///     error::RuntimeError,
///     util::num::{MAX_SAFE_U64_INT, f64_to_count},
/// };
///
/// assert_eq!(f64_to_count(3.7, 1).unwrap(), 3);
/// assert_eq!(f64_to_count(-2.0, 1).unwrap(), 0);
/// assert_eq!(f64_to_count(f64::NAN, 1).unwrap(), 0);
///
/// let too_big = MAX_SAFE_U64_INT as f64 * 2.0;
/// let err = f64_to_count(too_big, 9).unwrap_err();
/// assert!(matches!(err, RuntimeError::InvalidLoopBounds { line: 9, .. }));
/// ```
#[allow(clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss)]
pub fn f64_to_count(value: f64, line: usize) -> EvalResult<u64> {
    if value.is_nan() || value <= 0.0 {
        return Ok(0);
    }
    if value.is_infinite() {
        return Err(RuntimeError::InvalidLoopBounds { details: "count is infinite".to_string(),
                                                     line });
    }

    let floored = value.floor();
    if floored > MAX_SAFE_U64_INT as f64 {
        return Err(RuntimeError::InvalidLoopBounds { details: format!("count {floored} \
                                                                       exceeds {MAX_SAFE_U64_INT}"),
                                                     line });
    }

    Ok(floored as u64)
}
