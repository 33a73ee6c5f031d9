//! Error taxonomy for field list access.
//!
//! Every failure is reported to the caller of the offending operation; nothing is retried or recovered internally.
//! `NotFound` is an expected outcome callers branch on, the range errors signal misuse of the contract.

use core::fmt;

use thiserror::Error;

/// Classify a [`FieldListError`] into the Python-like exception vocabulary used by generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A positional index or range bound is outside the list.
    IndexError,
    /// A range is malformed (start after end).
    ValueError,
    /// A name lookup matched nothing.
    KeyError,
}

impl ErrorKind {
    /// Return the canonical spelling (e.g. `"IndexError"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::IndexError => "IndexError",
            ErrorKind::ValueError => "ValueError",
            ErrorKind::KeyError => "KeyError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by [`FieldList`](crate::FieldList) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FieldListError {
    #[error("index {index} out of range for field list of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid range: from ({from}) > to ({to})")]
    InvalidRange { from: usize, to: usize },

    #[error("expected to find a field named '{name}'")]
    NotFound { name: String },
}

impl FieldListError {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        FieldListError::OutOfRange { index, len }
    }

    pub(crate) fn invalid_range(from: usize, to: usize) -> Self {
        FieldListError::InvalidRange { from, to }
    }

    pub(crate) fn not_found(name: &str) -> Self {
        tracing::trace!(name, "field lookup found no match");
        FieldListError::NotFound { name: name.to_string() }
    }

    /// Return the exception kind this error maps to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FieldListError::OutOfRange { .. } => ErrorKind::IndexError,
            FieldListError::InvalidRange { .. } => ErrorKind::ValueError,
            FieldListError::NotFound { .. } => ErrorKind::KeyError,
        }
    }

    /// Return true for the recoverable "no such field" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FieldListError::NotFound { .. })
    }

    /// Render as `Kind: message`, the way runtime errors are printed by generated code.
    pub fn to_kind_string(&self) -> String {
        format!("{}: {}", self.kind(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_the_exception_vocabulary() {
        assert_eq!(FieldListError::out_of_range(3, 2).kind(), ErrorKind::IndexError);
        assert_eq!(FieldListError::invalid_range(2, 1).kind(), ErrorKind::ValueError);
        assert_eq!(FieldListError::not_found("x").kind(), ErrorKind::KeyError);
    }

    #[test]
    fn only_not_found_is_recoverable() {
        assert!(FieldListError::not_found("x").is_not_found());
        assert!(!FieldListError::out_of_range(0, 0).is_not_found());
        assert!(!FieldListError::invalid_range(1, 0).is_not_found());
    }

    #[test]
    fn kind_string_is_prefixed() {
        let err = FieldListError::not_found("id");
        assert_eq!(err.to_kind_string(), "KeyError: expected to find a field named 'id'");
    }
}
