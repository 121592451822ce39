/// Core evaluation logic and context management.
///
/// Contains the runtime context that owns the environment and the host, the
/// expression and statement dispatch, and the whole-program entry points.
pub mod core;

/// Statement execution.
///
/// Blocks, conditionals, `show`, declarations and assignments.
pub mod statement;

/// Evaluation of `repeat` loops.
///
/// Counted loops and `repeat until` loops, including validation of the
/// iteration count.
pub mod repeat;

/// Binary operator evaluation logic.
///
/// Arithmetic, text concatenation, comparisons, equality and the
/// short-circuiting `and` / `or`.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;
