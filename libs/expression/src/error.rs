//! Error types for expression parsing and evaluation

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Parse and evaluation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Syntax error: {0}")]
    SyntaxError(String),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Operator '{operator}' expects {expected} argument(s), got {found}")]
    Arity {
        operator: &'static str,
        expected: String,
        found: usize,
    },

    #[error("Incompatible units: '{from}' vs '{to}'")]
    IncompatibleUnits { from: String, to: String },

    #[error("Expression too deeply nested (max depth: {0})")]
    TooDeep(usize),

    #[error("Evaluation error: {0}")]
    EvaluationError(String),

    #[error("Unit error: {0}")]
    Units(semio_units::Error),
}

impl From<semio_units::Error> for Error {
    fn from(err: semio_units::Error) -> Self {
        match err {
            semio_units::Error::IncompatibleUnits { from, to } => {
                Error::IncompatibleUnits { from, to }
            }
            other => Error::Units(other),
        }
    }
}
