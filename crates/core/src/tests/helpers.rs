// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dagvergunning_domain::{FixedAllocation, ProductKind, VendorPresence};
use time::{Date, Month};

use crate::record::{RawPermitRecord, VendorDetails};
use crate::tabs::{ProductTabView, SummaryTabView, VendorTabView};
use crate::{DraftPermit, PersistenceSink, RecordSource, TabSyncController};

/// A recording vendor tab. Push calls are captured; the pull inputs (the
/// allocation and the presence selection) are plain fields the test sets.
#[derive(Debug, Default)]
pub struct FakeVendorTab {
    pub allocation: FixedAllocation,
    pub selection: Option<VendorPresence>,
    pub shown_vendor: Option<i64>,
    pub shown_details: Vec<VendorDetails>,
    pub shown_registration_time: Option<String>,
    pub note_calls: Vec<Option<String>>,
    pub shown_total_length: Option<i64>,
    pub shown_account_name: Option<String>,
    pub shown_presence: Option<VendorPresence>,
}

impl VendorTabView for FakeVendorTab {
    fn show_vendor(&mut self, vendor_id: i64) {
        self.shown_vendor = Some(vendor_id);
    }

    fn show_vendor_details(&mut self, details: &VendorDetails) {
        self.shown_details.push(details.clone());
    }

    fn show_registration_time(&mut self, display_time: &str) {
        self.shown_registration_time = Some(display_time.to_string());
    }

    fn show_note(&mut self, note: Option<&str>) {
        self.note_calls.push(note.map(str::to_string));
    }

    fn show_total_length(&mut self, meters: i64) {
        self.shown_total_length = Some(meters);
    }

    fn show_account_name(&mut self, name: &str) {
        self.shown_account_name = Some(name.to_string());
    }

    fn show_presence(&mut self, presence: VendorPresence) {
        self.shown_presence = Some(presence);
    }

    fn fixed_allocation(&self) -> FixedAllocation {
        self.allocation
    }

    fn selected_presence(&self) -> Option<VendorPresence> {
        self.selection
    }
}

/// A product tab that behaves like a real one: a pushed count becomes the
/// displayed text, and the test can overwrite displayed text to simulate
/// the user typing.
#[derive(Debug, Default)]
pub struct FakeProductTab {
    displayed: Vec<(ProductKind, String)>,
    note_text: String,
    pub push_count_calls: Vec<(ProductKind, i64)>,
}

impl FakeProductTab {
    /// Simulates the user typing a count.
    pub fn type_count(&mut self, kind: ProductKind, text: &str) {
        self.displayed.retain(|(k, _)| *k != kind);
        self.displayed.push((kind, text.to_string()));
    }

    /// Simulates the user typing the note.
    pub fn type_note(&mut self, text: &str) {
        self.note_text = text.to_string();
    }
}

impl ProductTabView for FakeProductTab {
    fn show_count(&mut self, kind: ProductKind, count: i64) {
        self.push_count_calls.push((kind, count));
        self.displayed.retain(|(k, _)| *k != kind);
        self.displayed.push((kind, count.to_string()));
    }

    fn displayed_count(&self, kind: ProductKind) -> Option<String> {
        self.displayed
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, text)| text.clone())
    }

    fn show_note(&mut self, note: &str) {
        self.note_text = note.to_string();
    }

    fn displayed_note(&self) -> String {
        self.note_text.clone()
    }
}

/// A recording summary tab.
#[derive(Debug, Default)]
pub struct FakeSummaryTab {
    pub shown_vendor: Option<i64>,
    pub shown_details: Vec<VendorDetails>,
    pub shown_registration_time: Option<String>,
    pub note_calls: Vec<Option<String>>,
    pub shown_total_length: Option<i64>,
    pub shown_account_name: Option<String>,
    pub shown_presence_title: Option<String>,
}

impl SummaryTabView for FakeSummaryTab {
    fn show_vendor(&mut self, vendor_id: i64) {
        self.shown_vendor = Some(vendor_id);
    }

    fn show_vendor_details(&mut self, details: &VendorDetails) {
        self.shown_details.push(details.clone());
    }

    fn show_registration_time(&mut self, display_time: &str) {
        self.shown_registration_time = Some(display_time.to_string());
    }

    fn show_note(&mut self, note: Option<&str>) {
        self.note_calls.push(note.map(str::to_string));
    }

    fn show_total_length(&mut self, meters: i64) {
        self.shown_total_length = Some(meters);
    }

    fn show_account_name(&mut self, name: &str) {
        self.shown_account_name = Some(name.to_string());
    }

    fn show_presence_title(&mut self, title: &str) {
        self.shown_presence_title = Some(title.to_string());
    }
}

/// A record source backed by an in-memory row list.
#[derive(Debug, Default)]
pub struct FakeRecordSource {
    pub rows: Vec<(i64, RawPermitRecord)>,
    pub fail: bool,
}

impl RecordSource for FakeRecordSource {
    type Error = String;

    fn permit_by_id(&mut self, permit_id: i64) -> Result<Option<RawPermitRecord>, Self::Error> {
        if self.fail {
            return Err(String::from("source offline"));
        }
        Ok(self
            .rows
            .iter()
            .find(|(id, _)| *id == permit_id)
            .map(|(_, row)| row.clone()))
    }
}

/// A sink that records every draft handed to it.
#[derive(Debug, Default)]
pub struct FakeSink {
    pub saved: Vec<DraftPermit>,
}

impl PersistenceSink for FakeSink {
    type Error = String;

    fn save(&mut self, draft: &DraftPermit) -> Result<(), Self::Error> {
        self.saved.push(draft.clone());
        Ok(())
    }
}

pub fn test_day() -> Date {
    Date::from_calendar_date(2016, Month::March, 7).unwrap()
}

pub fn all_products() -> Vec<ProductKind> {
    ProductKind::ALL.to_vec()
}

pub fn create_test_controller() -> TabSyncController<FakeVendorTab, FakeProductTab, FakeSummaryTab>
{
    TabSyncController::new(
        DraftPermit::new(7, test_day()),
        all_products(),
        FakeVendorTab::default(),
        FakeProductTab::default(),
        FakeSummaryTab::default(),
    )
}

pub fn create_test_allocation(stall_3m: i64, stall_4m: i64) -> FixedAllocation {
    let mut allocation: FixedAllocation = FixedAllocation::new();
    allocation.set(ProductKind::Stall3m, stall_3m).unwrap();
    allocation.set(ProductKind::Stall4m, stall_4m).unwrap();
    allocation
}

pub fn create_test_record() -> RawPermitRecord {
    let mut row: RawPermitRecord = RawPermitRecord {
        permit_id: 42,
        registration_number: Some(String::from("1987.11.03.0922")),
        registration_timestamp: Some(String::from("2016-03-07 09:22:15")),
        registration_account_id: Some(3),
        registration_account_name: Some(String::from("J. Toezichthouder")),
        vendor_id: Some(901),
        vendor_initials: Some(String::from("A.B.")),
        vendor_last_name: Some(String::from("de Vries")),
        vendor_photo_url: None,
        application_id: Some(55),
        application_number: Some(12),
        application_status: Some(String::from("soll")),
        presence: Some(String::from("zelf")),
        total_length: Some(10),
        note: Some(String::from("hoek van de markt")),
        ..RawPermitRecord::default()
    };
    row.product_counts.set(ProductKind::Stall3m, 3);
    row.product_counts.set(ProductKind::Electricity, 1);
    row.default_product_counts.set(ProductKind::Stall3m, 3);
    row
}

pub fn create_test_details() -> VendorDetails {
    VendorDetails {
        vendor_id: 901,
        initials: String::from("A.B."),
        last_name: String::from("de Vries"),
        photo_url: Some(String::from("https://example.test/foto/901.jpg")),
    }
}
