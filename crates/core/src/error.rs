// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dagvergunning_domain::DomainError;

/// Errors that can occur in the draft core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A record source yielded a row with a field the domain cannot
    /// represent. The whole load fails; the draft is never partially
    /// populated from a malformed row.
    MalformedRecord {
        /// The field that could not be interpreted.
        field: String,
        /// A human-readable description of the problem.
        message: String,
    },
    /// A stored snapshot contained a value the domain cannot represent.
    MalformedSnapshot {
        /// The snapshot key that could not be interpreted.
        key: String,
        /// A human-readable description of the problem.
        message: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::MalformedRecord { field, message } => {
                write!(f, "Malformed record field '{field}': {message}")
            }
            Self::MalformedSnapshot { key, message } => {
                write!(f, "Malformed snapshot key '{key}': {message}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

/// Errors that can occur while opening an existing permit from a record
/// source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError<E> {
    /// The record source itself failed.
    Source(E),
    /// The source yielded a row the core rejected.
    Record(CoreError),
}

impl<E: std::fmt::Display> std::fmt::Display for LoadError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source(err) => write!(f, "Record source failed: {err}"),
            Self::Record(err) => write!(f, "Record rejected: {err}"),
        }
    }
}

impl<E: std::error::Error> std::error::Error for LoadError<E> {}
