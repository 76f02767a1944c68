// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dagvergunning_domain::{ApplicationStatus, CountSet, ProductKind, VendorPresence};
use time::Date;

/// The single mutable in-progress permit record for one editing session.
///
/// A draft is either freshly initialized (new permit) or populated from
/// exactly one persisted record (edit mode), never both. It holds no
/// validation logic: sourcing rules and fallback policy live in the
/// reconciliation engine, and the tab sync controller is the only writer
/// during an editing session.
///
/// All optional fields use proper optionals; the legacy `-1` sentinel
/// appears only in the snapshot schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftPermit {
    /// The market this permit is issued for.
    pub market_id: i64,
    /// The day this permit applies to.
    pub day: Date,
    /// The persisted permit identifier. `None` means a new permit.
    pub permit_id: Option<i64>,
    /// The vendor registration number ("erkenningsnummer") as entered,
    /// used to drive the one-shot vendor detail fetch.
    pub registration_number: Option<String>,
    /// The raw registration timestamp as delivered by the backend
    /// (`YYYY-MM-DD hh:mm:ss`), parsed only for display.
    pub registration_timestamp: Option<String>,
    /// The account that registered the permit.
    pub registration_account_id: Option<i64>,
    /// The display name of the registering account.
    pub registration_account_name: Option<String>,
    /// The linked vendor ("koopman").
    pub vendor_id: Option<i64>,
    /// The vendor's initials.
    pub vendor_initials: Option<String>,
    /// The vendor's last name.
    pub vendor_last_name: Option<String>,
    /// URL of the vendor's photo.
    pub vendor_photo_url: Option<String>,
    /// The linked application ("sollicitatie") record.
    pub application_id: Option<i64>,
    /// The application number.
    pub application_number: Option<i64>,
    /// The application status.
    pub application_status: Option<ApplicationStatus>,
    /// Who is standing at the stall.
    pub presence: Option<VendorPresence>,
    /// Total stall length in meters.
    pub total_length: Option<i64>,
    /// Free-form note.
    pub note: Option<String>,
    /// Per-product counts for this permit. Every kind present; unset means
    /// "not yet determined".
    pub product_counts: CountSet,
    /// The vendor's fixed-allocation defaults, sourced once per session.
    /// [`ProductKind::Cleaning`] is never set here; the writers (the
    /// reconciliation engine, record load, snapshot restore) only touch
    /// kinds with a default counterpart.
    pub default_product_counts: CountSet,
}

impl DraftPermit {
    /// Creates an empty draft for a new permit on the given market and day.
    #[must_use]
    pub const fn new(market_id: i64, day: Date) -> Self {
        Self {
            market_id,
            day,
            permit_id: None,
            registration_number: None,
            registration_timestamp: None,
            registration_account_id: None,
            registration_account_name: None,
            vendor_id: None,
            vendor_initials: None,
            vendor_last_name: None,
            vendor_photo_url: None,
            application_id: None,
            application_number: None,
            application_status: None,
            presence: None,
            total_length: None,
            note: None,
            product_counts: CountSet::new(),
            default_product_counts: CountSet::new(),
        }
    }

    /// Returns whether this draft is for a new, not yet persisted permit.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.permit_id.is_none()
    }

    /// Returns the count for a product kind, or `None` when not yet
    /// determined.
    #[must_use]
    pub const fn product_count(&self, kind: ProductKind) -> Option<i64> {
        self.product_counts.get(kind)
    }

    /// Returns the fixed-allocation default for a product kind, or `None`
    /// when not yet resolved (or for kinds without a default counterpart).
    #[must_use]
    pub const fn default_count(&self, kind: ProductKind) -> Option<i64> {
        self.default_product_counts.get(kind)
    }
}
