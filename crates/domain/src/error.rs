// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::product::ProductKind;

/// Errors that can occur during domain validation and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Product kind string is not recognized.
    InvalidProductKind(String),
    /// Presence value string is not recognized.
    InvalidPresence(String),
    /// Application status string is not recognized.
    InvalidApplicationStatus(String),
    /// The product kind has no fixed-allocation counterpart.
    NoDefaultCounterpart(ProductKind),
    /// Tab index is outside the editor's tab range.
    InvalidTabIndex {
        /// The out-of-range index.
        index: i64,
    },
    /// Failed to parse a registration timestamp.
    TimestampParse {
        /// The raw timestamp string.
        raw: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a day key.
    DayParse {
        /// The raw day string.
        raw: String,
        /// The parsing error message.
        error: String,
    },
    /// A displayed product count could not be read as a number.
    UnreadableCount {
        /// The product kind whose count was displayed.
        kind: ProductKind,
        /// The displayed text.
        raw: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidProductKind(value) => write!(f, "Unknown product kind: {value}"),
            Self::InvalidPresence(value) => write!(f, "Unknown presence value: {value}"),
            Self::InvalidApplicationStatus(value) => {
                write!(f, "Unknown application status: {value}")
            }
            Self::NoDefaultCounterpart(kind) => {
                write!(f, "Product '{kind}' has no fixed-allocation counterpart")
            }
            Self::InvalidTabIndex { index } => write!(f, "Tab index {index} is out of range"),
            Self::TimestampParse { raw, error } => {
                write!(f, "Failed to parse registration timestamp '{raw}': {error}")
            }
            Self::DayParse { raw, error } => {
                write!(f, "Failed to parse day '{raw}': {error}")
            }
            Self::UnreadableCount { kind, raw } => {
                write!(f, "Displayed count '{raw}' for product '{kind}' is not a number")
            }
        }
    }
}

impl std::error::Error for DomainError {}
