#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// The first runtime error aborts the run.
pub enum RuntimeError {
    /// Tried to read an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator received operands it cannot work with.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A repeat count that cannot be iterated.
    InvalidLoopBounds {
        /// Details describing why the count is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The program nests deeper than the evaluator will recurse.
    NestingTooDeep {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Returns the source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::TypeError { line, .. }
            | Self::ExpectedNumber { line }
            | Self::InvalidLoopBounds { line, .. }
            | Self::NestingTooDeep { line } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::ExpectedNumber { line } => write!(f, "Error on line {line}: Expected number."),
            Self::InvalidLoopBounds { details, line } => {
                write!(f, "Error on line {line}: Invalid loop bounds: {details}.")
            },
            Self::NestingTooDeep { line } => write!(f, "Error on line {line}: Too deeply nested."),
        }
    }
}

impl std::error::Error for RuntimeError {}
