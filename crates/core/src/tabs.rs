// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The editor's tab states and the view interfaces the controller drives.
//!
//! The original expressed the tab state machine as position-indexed
//! switches and looked widgets up reflectively by name. Here the states are
//! an explicit enum and each tab's widgets sit behind a trait, so the
//! kind-to-widget mapping is checked at compile time.

use dagvergunning_domain::{DomainError, FixedAllocation, ProductKind, VendorPresence};

use crate::record::VendorDetails;

/// The three sub-views of the permit editor.
///
/// No terminal state: the machine is session-scoped and keeps cycling until
/// the editor closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Vendor info and registration details.
    Vendor,
    /// Product selection.
    Product,
    /// Read-only summary.
    Summary,
}

impl Tab {
    /// All tabs, in display order.
    pub const ALL: [Self; 3] = [Self::Vendor, Self::Product, Self::Summary];

    /// Returns the position of this tab, as stored in snapshots.
    #[must_use]
    pub const fn index(self) -> i64 {
        match self {
            Self::Vendor => 0,
            Self::Product => 1,
            Self::Summary => 2,
        }
    }

    /// Resolves a stored tab index.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTabIndex`] for indices outside the
    /// editor's tab range.
    pub const fn from_index(index: i64) -> Result<Self, DomainError> {
        match index {
            0 => Ok(Self::Vendor),
            1 => Ok(Self::Product),
            2 => Ok(Self::Summary),
            _ => Err(DomainError::InvalidTabIndex { index }),
        }
    }

    /// Returns the string representation of this tab.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vendor => "vendor",
            Self::Product => "product",
            Self::Summary => "summary",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The vendor tab's view-model, as seen by the controller.
///
/// Display operations are push targets; the two read operations feed the
/// vendor pull (defaults reconciliation and the presence selection).
pub trait VendorTabView {
    /// Shows the linked vendor by identifier; the view resolves the rest.
    fn show_vendor(&mut self, vendor_id: i64);
    /// Shows vendor identity fields fetched from the backend.
    fn show_vendor_details(&mut self, details: &VendorDetails);
    /// Shows the registration display time (`hh:mm`).
    fn show_registration_time(&mut self, display_time: &str);
    /// Shows the note, or hides the note area when `None`.
    fn show_note(&mut self, note: Option<&str>);
    /// Shows the total stall length in meters.
    fn show_total_length(&mut self, meters: i64);
    /// Shows the registering account's name.
    fn show_account_name(&mut self, name: &str);
    /// Shows the presence selection.
    fn show_presence(&mut self, presence: VendorPresence);

    /// The fixed allocation this tab resolved for the vendor/market pair.
    fn fixed_allocation(&self) -> FixedAllocation;
    /// The presence value currently selected by the user.
    fn selected_presence(&self) -> Option<VendorPresence>;
}

/// The product tab's view-model, as seen by the controller.
pub trait ProductTabView {
    /// Shows the count for one product.
    fn show_count(&mut self, kind: ProductKind, count: i64);
    /// The displayed count text for one product, or `None` when the market
    /// does not offer that product.
    fn displayed_count(&self, kind: ProductKind) -> Option<String>;
    /// Shows the note.
    fn show_note(&mut self, note: &str);
    /// The displayed note text.
    fn displayed_note(&self) -> String;
}

/// The summary tab's view-model, as seen by the controller.
///
/// Display-only: the summary tab has no pull operation.
pub trait SummaryTabView {
    /// Shows the linked vendor by identifier.
    fn show_vendor(&mut self, vendor_id: i64);
    /// Shows vendor identity fields fetched from the backend.
    fn show_vendor_details(&mut self, details: &VendorDetails);
    /// Shows the registration display time (`hh:mm`).
    fn show_registration_time(&mut self, display_time: &str);
    /// Shows the note, or hides the note area when `None`.
    fn show_note(&mut self, note: Option<&str>);
    /// Shows the total stall length in meters.
    fn show_total_length(&mut self, meters: i64);
    /// Shows the registering account's name.
    fn show_account_name(&mut self, name: &str);
    /// Shows the human-readable presence label.
    fn show_presence_title(&mut self, title: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_roundtrip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_index(tab.index()), Ok(tab));
        }
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        assert_eq!(
            Tab::from_index(3),
            Err(DomainError::InvalidTabIndex { index: 3 })
        );
        assert_eq!(
            Tab::from_index(-1),
            Err(DomainError::InvalidTabIndex { index: -1 })
        );
    }
}
