// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record shapes and the narrow collaborator interfaces.
//!
//! The core never talks to storage or the network directly; it consumes a
//! record source, hands the finished draft to a persistence sink, and asks
//! the host to run the one-shot vendor detail fetch.

use std::str::FromStr;

use dagvergunning_domain::{ApplicationStatus, CountSet, VendorPresence};

use crate::draft::DraftPermit;
use crate::error::CoreError;

/// The row shape a record source yields for one persisted permit: legacy
/// string-coded enums, counts as stored.
///
/// Conversion to [`PermitRecord`] validates the string fields. A row that
/// fails validation fails the whole load; the draft is never populated from
/// part of a malformed row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawPermitRecord {
    /// The persisted permit identifier.
    pub permit_id: i64,
    /// The vendor registration number as entered.
    pub registration_number: Option<String>,
    /// The raw registration timestamp string.
    pub registration_timestamp: Option<String>,
    /// The registering account.
    pub registration_account_id: Option<i64>,
    /// The registering account's display name.
    pub registration_account_name: Option<String>,
    /// The linked vendor.
    pub vendor_id: Option<i64>,
    /// The vendor's initials.
    pub vendor_initials: Option<String>,
    /// The vendor's last name.
    pub vendor_last_name: Option<String>,
    /// URL of the vendor's photo.
    pub vendor_photo_url: Option<String>,
    /// The linked application record.
    pub application_id: Option<i64>,
    /// The application number.
    pub application_number: Option<i64>,
    /// The application status, string-coded ("lot", "soll", "vkk", "vpl",
    /// "?").
    pub application_status: Option<String>,
    /// The presence value, string-coded ("zelf", "niet_aanwezig", ...).
    pub presence: Option<String>,
    /// Total stall length in meters.
    pub total_length: Option<i64>,
    /// Free-form note.
    pub note: Option<String>,
    /// Stored per-product counts.
    pub product_counts: CountSet,
    /// Stored fixed-allocation defaults.
    pub default_product_counts: CountSet,
}

/// A validated permit record, ready to populate a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermitRecord {
    /// The persisted permit identifier.
    pub permit_id: i64,
    /// The vendor registration number as entered.
    pub registration_number: Option<String>,
    /// The raw registration timestamp string.
    pub registration_timestamp: Option<String>,
    /// The registering account.
    pub registration_account_id: Option<i64>,
    /// The registering account's display name.
    pub registration_account_name: Option<String>,
    /// The linked vendor.
    pub vendor_id: Option<i64>,
    /// The vendor's initials.
    pub vendor_initials: Option<String>,
    /// The vendor's last name.
    pub vendor_last_name: Option<String>,
    /// URL of the vendor's photo.
    pub vendor_photo_url: Option<String>,
    /// The linked application record.
    pub application_id: Option<i64>,
    /// The application number.
    pub application_number: Option<i64>,
    /// The application status.
    pub application_status: Option<ApplicationStatus>,
    /// The presence value.
    pub presence: Option<VendorPresence>,
    /// Total stall length in meters.
    pub total_length: Option<i64>,
    /// Free-form note.
    pub note: Option<String>,
    /// Stored per-product counts.
    pub product_counts: CountSet,
    /// Stored fixed-allocation defaults.
    pub default_product_counts: CountSet,
}

impl TryFrom<RawPermitRecord> for PermitRecord {
    type Error = CoreError;

    fn try_from(raw: RawPermitRecord) -> Result<Self, Self::Error> {
        let application_status: Option<ApplicationStatus> = raw
            .application_status
            .as_deref()
            .map(ApplicationStatus::from_str)
            .transpose()
            .map_err(|err| CoreError::MalformedRecord {
                field: String::from("application_status"),
                message: err.to_string(),
            })?;
        let presence: Option<VendorPresence> = raw
            .presence
            .as_deref()
            .map(VendorPresence::from_str)
            .transpose()
            .map_err(|err| CoreError::MalformedRecord {
                field: String::from("presence"),
                message: err.to_string(),
            })?;

        Ok(Self {
            permit_id: raw.permit_id,
            registration_number: raw.registration_number,
            registration_timestamp: raw.registration_timestamp,
            registration_account_id: raw.registration_account_id,
            registration_account_name: raw.registration_account_name,
            vendor_id: raw.vendor_id,
            vendor_initials: raw.vendor_initials,
            vendor_last_name: raw.vendor_last_name,
            vendor_photo_url: raw.vendor_photo_url,
            application_id: raw.application_id,
            application_number: raw.application_number,
            application_status,
            presence,
            total_length: raw.total_length,
            note: raw.note,
            product_counts: raw.product_counts,
            default_product_counts: raw.default_product_counts,
        })
    }
}

/// Vendor identity fields returned by the asynchronous vendor detail fetch.
///
/// Applied to display only; re-applying a late or duplicate response is
/// harmless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorDetails {
    /// The vendor identifier.
    pub vendor_id: i64,
    /// The vendor's initials.
    pub initials: String,
    /// The vendor's last name.
    pub last_name: String,
    /// URL of the vendor's photo.
    pub photo_url: Option<String>,
}

/// A request to fetch vendor details, handed to the host after a record
/// load. The completion callback re-enters the controller on the editor
/// thread via `vendor_details_arrived`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorLookup {
    /// The registration number to look up.
    pub registration_number: String,
}

/// Yields at most one persisted permit row by identifier.
pub trait RecordSource {
    /// The source's own failure type.
    type Error;

    /// Loads the row for a permit, or `None` when no such permit exists
    /// (the new-permit path).
    ///
    /// # Errors
    ///
    /// Returns the source's own error when the lookup itself fails.
    fn permit_by_id(&mut self, permit_id: i64) -> Result<Option<RawPermitRecord>, Self::Error>;
}

/// Accepts the final draft for create or update.
pub trait PersistenceSink {
    /// The sink's own failure type.
    type Error;

    /// Persists the draft. How it is stored is the sink's business.
    ///
    /// # Errors
    ///
    /// Returns the sink's own error when persisting fails.
    fn save(&mut self, draft: &DraftPermit) -> Result<(), Self::Error>;
}
