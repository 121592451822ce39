/// Lexical errors.
///
/// Raised while turning source text into tokens: characters no rule accepts
/// and dedents that do not line up with an enclosing block.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree.
/// Parse errors are collected; the parser recovers and keeps going.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unknown variables, type mismatches and invalid loop counts.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The phase an [`Error`] comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Tokenization failed.
    Lex,
    /// One or more syntax errors were found.
    Parse,
    /// Evaluation stopped on a runtime error.
    Runtime,
}

/// The outcome of a failed run.
///
/// A run stops at the first lexical error, after parsing when any syntax error
/// was recorded, or at the first runtime error.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Tokenization failed.
    Lex(LexError),
    /// Every syntax error found in the program, in source order.
    Parse(Vec<ParseError>),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the phase the error comes from.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Runtime(_) => ErrorKind::Runtime,
        }
    }

    /// Returns the source line of the error, or of the first syntax error.
    ///
    /// # Example
    /// ```
    /// use kodme::{error::ErrorKind, interpreter::host::ScriptedHost};
    ///
    /// let err = kodme::run("show 1\nshow missing", ScriptedHost::default()).unwrap_err();
    ///
    /// assert_eq!(err.kind(), ErrorKind::Runtime);
    /// assert_eq!(err.line(), 2);
    /// ```
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line(),
            Self::Parse(errors) => errors.first().map_or(0, ParseError::line),
            Self::Runtime(e) => e.line(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(errors) => {
                for (index, error) in errors.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            },
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(errors) => errors.first().map(|e| e as &(dyn std::error::Error + 'static)),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<Vec<ParseError>> for Error {
    fn from(errors: Vec<ParseError>) -> Self {
        Self::Parse(errors)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
