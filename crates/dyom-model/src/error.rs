//! Error types for primitive construction and mission decoding.

use std::fmt;

use dyom_bits::BitsError;
use thiserror::Error;

/// A raw integer does not fit a bounded primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("{what} {value} is below the minimum {min}")]
    Below {
        what: &'static str,
        value: i64,
        min: i64,
    },

    #[error("{what} {value} is above the maximum {max}")]
    Above {
        what: &'static str,
        value: i64,
        max: i64,
    },

    /// The value lies inside the range but in a documented gap.
    #[error("{what} {value} is a reserved id")]
    Reserved { what: &'static str, value: i64 },

    /// The value is not one of the members of a closed enumeration.
    #[error("{value} is not a known {what}")]
    Unknown { what: &'static str, value: i64 },
}

/// Why a single field failed to decode.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeErrorKind {
    #[error("missing required field")]
    Missing,

    #[error("expected {expected}, found {found}")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Bits(#[from] BitsError),

    #[error("value {value} outside {min}..={max}")]
    FloatRange { value: f64, min: f64, max: f64 },

    #[error("text is {len} characters long (max {max})")]
    TooLong { len: usize, max: usize },

    #[error("unknown objective type {tag} at objective {index}")]
    UnknownObjectiveType { index: usize, tag: i64 },

    #[error("{0}")]
    Invalid(String),
}

/// A structural error tied to the field it was raised on.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{path}: {kind}")]
pub struct DecodeError {
    /// Dotted path with list indices, e.g. `objectives[4].health`.
    pub path: String,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Every structural error found while decoding one document, in the
/// order the fields were visited.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecodeErrors(pub Vec<DecodeError>);

impl DecodeErrors {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DecodeError> {
        self.0.iter()
    }

    /// Find the first error raised on an exact path.
    pub fn at(&self, path: &str) -> Option<&DecodeError> {
        self.0.iter().find(|error| error.path == path)
    }
}

impl fmt::Display for DecodeErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} decode error(s)", self.0.len())?;
        for error in &self.0 {
            write!(f, "\n  {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for DecodeErrors {}

impl IntoIterator for DecodeErrors {
    type Item = DecodeError;
    type IntoIter = std::vec::IntoIter<DecodeError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DecodeErrors {
    type Item = &'a DecodeError;
    type IntoIter = std::slice::Iter<'a, DecodeError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

pub type Result<T> = std::result::Result<T, DecodeErrors>;
