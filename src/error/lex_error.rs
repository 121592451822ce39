#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
///
/// Lexical errors are fatal: tokenization stops at the first one.
pub enum LexError {
    /// A character that no token rule accepts.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// Byte offset of the character within its line.
        column:    usize,
    },
    /// A dedent that does not return to any enclosing indentation level.
    InconsistentIndentation {
        /// The indentation width of the offending line.
        width: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl LexError {
    /// Returns the source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::InconsistentIndentation { line, .. } => {
                *line
            },
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character,
                                        line,
                                        column, } => write!(f,
                                                            "Error on line {line}: Unexpected character '{character}' at column {column}."),
            Self::InconsistentIndentation { width, line } => write!(f,
                                                                    "Error on line {line}: Inconsistent indentation; {width} does not match any enclosing block."),
        }
    }
}

impl std::error::Error for LexError {}
