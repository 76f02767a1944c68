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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod controller;
mod draft;
mod error;
mod reconcile;
mod record;
mod snapshot;
mod tabs;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use controller::TabSyncController;
pub use draft::DraftPermit;
pub use error::{CoreError, LoadError};
pub use reconcile::{apply_displayed_count, apply_displayed_note, resolve_defaults};
pub use record::{
    PermitRecord, PersistenceSink, RawPermitRecord, RecordSource, VendorDetails, VendorLookup,
};
pub use snapshot::DraftSnapshot;
pub use tabs::{ProductTabView, SummaryTabView, Tab, VendorTabView};
