// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Diagnostic events for silently-recovered failures.
//!
//! The draft core preserves the legacy silent-degradation policy: a failure
//! during a tab push or pull leaves the affected field unset and never
//! aborts the operation. Every such suppressed failure additionally emits
//! one [`Diagnostic`] so a host can surface or record what was swallowed.

/// The operation that suppressed a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSource {
    /// Populating the vendor tab from the draft.
    VendorPush,
    /// Populating the summary tab from the draft.
    SummaryPush,
    /// Reading edited values back from the product tab.
    ProductPull,
}

impl DiagnosticSource {
    /// Returns the string representation of this source.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VendorPush => "vendor_push",
            Self::SummaryPush => "summary_push",
            Self::ProductPull => "product_pull",
        }
    }
}

impl std::fmt::Display for DiagnosticSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One suppressed failure, immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The operation that suppressed the failure.
    pub source: DiagnosticSource,
    /// What was swallowed, in human-readable form.
    pub detail: String,
}

impl Diagnostic {
    /// Creates a new `Diagnostic`.
    ///
    /// # Arguments
    ///
    /// * `source` - The operation that suppressed the failure
    /// * `detail` - What was swallowed
    #[must_use]
    pub const fn new(source: DiagnosticSource, detail: String) -> Self {
        Self { source, detail }
    }
}
