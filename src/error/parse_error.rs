#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// Parse errors are recoverable: the parser records them and continues with
/// the next statement, so one run may report several.
pub enum ParseError {
    /// A specific token was required but another one was found.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An expression was required but the token cannot start one.
    ExpectedExpression {
        /// The token encountered.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Blocks, parentheses or operator chains are nested too deeply.
    NestingTooDeep {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Returns the source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::ExpectedExpression { line, .. }
            | Self::ExpectedClosingParen { line }
            | Self::NestingTooDeep { line } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },

            Self::ExpectedExpression { found, line } => {
                write!(f, "Error on line {line}: Expected an expression, found {found}.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::NestingTooDeep { line } => write!(f, "Error on line {line}: Too deeply nested."),
        }
    }
}

impl std::error::Error for ParseError {}
