/// Numeric conversion helpers.
///
/// Safe conversion from the interpreter's `f64` numbers to integer counts,
/// without silent truncation of values that cannot be counted exactly.
pub mod num;
