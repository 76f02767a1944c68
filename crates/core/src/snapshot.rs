// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The flat save/restore schema for a draft permit.
//!
//! Field names are the stable legacy keys of the original storage schema,
//! so snapshots written by the original implementation keep meaning the
//! same thing. Optional numerics are sentinel-coded (`-1` = unset); enums
//! and the day are stored as their legacy strings.

use std::str::FromStr;

use dagvergunning_domain::{
    ApplicationStatus, ProductKind, VendorPresence, decode, encode, format_day, parse_day,
};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::draft::DraftPermit;
use crate::error::CoreError;
use crate::tabs::Tab;

/// A complete serialized draft plus the active tab index.
///
/// Capturing and restoring a snapshot round-trips every draft field
/// exactly, including fully-unset drafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_field_names)]
pub struct DraftSnapshot {
    /// Market identifier.
    pub markt_id: i64,
    /// Permit day, `YYYY-MM-DD`.
    pub dag: String,
    /// Permit identifier, sentinel-coded.
    pub dagvergunning_id: i64,
    /// Vendor registration number as entered.
    pub erkenningsnummer_invoer_waarde: Option<String>,
    /// Raw registration timestamp.
    pub registratie_datumtijd: Option<String>,
    /// Total stall length, sentinel-coded.
    pub totale_lengte: i64,
    /// Application status, legacy string.
    pub status_sollicitatie: Option<String>,
    /// Presence value, legacy string.
    pub aanwezig: Option<String>,
    /// Vendor identifier, sentinel-coded.
    pub koopman_id: i64,
    /// Vendor initials.
    pub voorletters: Option<String>,
    /// Vendor last name.
    pub achternaam: Option<String>,
    /// Vendor photo URL.
    pub foto_medium_url: Option<String>,
    /// Registering account identifier, sentinel-coded.
    pub registratie_account_id: i64,
    /// Registering account name.
    pub account_naam: Option<String>,
    /// Application identifier, sentinel-coded.
    pub sollicitatie_id: i64,
    /// Application number, sentinel-coded.
    pub sollicitatie_nummer: i64,
    /// 3-meter stall count, sentinel-coded.
    pub aantal_3meter_kramen: i64,
    /// 4-meter stall count, sentinel-coded.
    pub aantal_4meter_kramen: i64,
    /// Extra meters count, sentinel-coded.
    pub extra_meters: i64,
    /// Electricity connection count, sentinel-coded.
    pub aantal_elektra: i64,
    /// Heavy-current count, sentinel-coded.
    pub krachtstroom: i64,
    /// Cleaning count, sentinel-coded. No `_vast` counterpart exists.
    pub reiniging: i64,
    /// Default 3-meter stall count, sentinel-coded.
    pub aantal_3meter_kramen_vast: i64,
    /// Default 4-meter stall count, sentinel-coded.
    pub aantal_4meter_kramen_vast: i64,
    /// Default extra meters count, sentinel-coded. Legacy spelling differs
    /// from the non-default column.
    pub aantal_extra_meters_vast: i64,
    /// Default electricity count, sentinel-coded.
    pub aantal_elektra_vast: i64,
    /// Default heavy-current count, sentinel-coded.
    pub krachtstroom_vast: i64,
    /// Free-form note.
    pub notitie: Option<String>,
    /// Active tab index.
    pub current_tab: i64,
}

impl DraftSnapshot {
    /// Captures a draft and the active tab into the snapshot schema.
    #[must_use]
    pub fn capture(draft: &DraftPermit, active_tab: Tab) -> Self {
        Self {
            markt_id: draft.market_id,
            dag: format_day(draft.day),
            dagvergunning_id: encode(draft.permit_id),
            erkenningsnummer_invoer_waarde: draft.registration_number.clone(),
            registratie_datumtijd: draft.registration_timestamp.clone(),
            totale_lengte: encode(draft.total_length),
            status_sollicitatie: draft
                .application_status
                .map(|status| status.as_str().to_string()),
            aanwezig: draft.presence.map(|presence| presence.as_str().to_string()),
            koopman_id: encode(draft.vendor_id),
            voorletters: draft.vendor_initials.clone(),
            achternaam: draft.vendor_last_name.clone(),
            foto_medium_url: draft.vendor_photo_url.clone(),
            registratie_account_id: encode(draft.registration_account_id),
            account_naam: draft.registration_account_name.clone(),
            sollicitatie_id: encode(draft.application_id),
            sollicitatie_nummer: encode(draft.application_number),
            aantal_3meter_kramen: encode(draft.product_count(ProductKind::Stall3m)),
            aantal_4meter_kramen: encode(draft.product_count(ProductKind::Stall4m)),
            extra_meters: encode(draft.product_count(ProductKind::ExtraMeters)),
            aantal_elektra: encode(draft.product_count(ProductKind::Electricity)),
            krachtstroom: encode(draft.product_count(ProductKind::HeavyCurrent)),
            reiniging: encode(draft.product_count(ProductKind::Cleaning)),
            aantal_3meter_kramen_vast: encode(draft.default_count(ProductKind::Stall3m)),
            aantal_4meter_kramen_vast: encode(draft.default_count(ProductKind::Stall4m)),
            aantal_extra_meters_vast: encode(draft.default_count(ProductKind::ExtraMeters)),
            aantal_elektra_vast: encode(draft.default_count(ProductKind::Electricity)),
            krachtstroom_vast: encode(draft.default_count(ProductKind::HeavyCurrent)),
            notitie: draft.note.clone(),
            current_tab: active_tab.index(),
        }
    }

    /// Reconstructs the draft and the active tab from this snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedSnapshot`] when the day, an enum
    /// string, or the tab index cannot be interpreted. Nothing is restored
    /// partially.
    pub fn restore(&self) -> Result<(DraftPermit, Tab), CoreError> {
        let day: Date = parse_day(&self.dag).map_err(|err| CoreError::MalformedSnapshot {
            key: String::from("dag"),
            message: err.to_string(),
        })?;
        let application_status: Option<ApplicationStatus> = self
            .status_sollicitatie
            .as_deref()
            .map(ApplicationStatus::from_str)
            .transpose()
            .map_err(|err| CoreError::MalformedSnapshot {
                key: String::from("status_sollicitatie"),
                message: err.to_string(),
            })?;
        let presence: Option<VendorPresence> = self
            .aanwezig
            .as_deref()
            .map(VendorPresence::from_str)
            .transpose()
            .map_err(|err| CoreError::MalformedSnapshot {
                key: String::from("aanwezig"),
                message: err.to_string(),
            })?;
        let active_tab: Tab =
            Tab::from_index(self.current_tab).map_err(|err| CoreError::MalformedSnapshot {
                key: String::from("current_tab"),
                message: err.to_string(),
            })?;

        let mut draft: DraftPermit = DraftPermit::new(self.markt_id, day);
        draft.permit_id = decode(self.dagvergunning_id);
        draft.registration_number = self.erkenningsnummer_invoer_waarde.clone();
        draft.registration_timestamp = self.registratie_datumtijd.clone();
        draft.registration_account_id = decode(self.registratie_account_id);
        draft.registration_account_name = self.account_naam.clone();
        draft.vendor_id = decode(self.koopman_id);
        draft.vendor_initials = self.voorletters.clone();
        draft.vendor_last_name = self.achternaam.clone();
        draft.vendor_photo_url = self.foto_medium_url.clone();
        draft.application_id = decode(self.sollicitatie_id);
        draft.application_number = decode(self.sollicitatie_nummer);
        draft.application_status = application_status;
        draft.presence = presence;
        draft.total_length = decode(self.totale_lengte);
        draft.note = self.notitie.clone();

        let counts: [(ProductKind, i64); 6] = [
            (ProductKind::Stall3m, self.aantal_3meter_kramen),
            (ProductKind::Stall4m, self.aantal_4meter_kramen),
            (ProductKind::ExtraMeters, self.extra_meters),
            (ProductKind::Electricity, self.aantal_elektra),
            (ProductKind::HeavyCurrent, self.krachtstroom),
            (ProductKind::Cleaning, self.reiniging),
        ];
        for (kind, raw) in counts {
            if let Some(value) = decode(raw) {
                draft.product_counts.set(kind, value);
            }
        }

        let defaults: [(ProductKind, i64); 5] = [
            (ProductKind::Stall3m, self.aantal_3meter_kramen_vast),
            (ProductKind::Stall4m, self.aantal_4meter_kramen_vast),
            (ProductKind::ExtraMeters, self.aantal_extra_meters_vast),
            (ProductKind::Electricity, self.aantal_elektra_vast),
            (ProductKind::HeavyCurrent, self.krachtstroom_vast),
        ];
        for (kind, raw) in defaults {
            if let Some(value) = decode(raw) {
                draft.default_product_counts.set(kind, value);
            }
        }

        Ok((draft, active_tab))
    }
}
