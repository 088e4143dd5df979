use crate::value::ValueKind;
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Failures surfaced by the nullable types. Every variant is returned to the
/// caller; only the best-effort constructors and setters discard them.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("expected a sequence, got {found}")]
    NotASequence { found: ValueKind },

    #[error("element {index} ('{text}') is not a valid {target}: {message}")]
    Parse {
        index: usize,
        text: String,
        target: NumericTarget,
        message: String,
    },

    #[error("cannot scan a {found} value from storage")]
    InvalidInput { found: ValueKind },

    #[error(
        "given value '{value}' is not an explicit string: convert it first to ensure this behaviour is expected"
    )]
    TypeMismatch { value: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Return a stable error kind independent of the message text.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotASequence { .. } => ErrorKind::NotASequence,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::Json(_) => ErrorKind::Json,
        }
    }
}

///
/// ErrorKind
///
/// Stable error-kind taxonomy.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    NotASequence,
    Parse,
    InvalidInput,
    TypeMismatch,
    Json,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotASequence => "not_a_sequence",
            Self::Parse => "parse",
            Self::InvalidInput => "invalid_input",
            Self::TypeMismatch => "type_mismatch",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// NumericTarget
///
/// Element type requested by a typed array conversion.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NumericTarget {
    Int64,
    Float64,
}

impl fmt::Display for NumericTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int64 => f.write_str("int64"),
            Self::Float64 => f.write_str("float64"),
        }
    }
}
