// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The tab sync controller: the editor's state machine.
//!
//! All operations run on the single editor thread; the controller takes
//! `&mut self` everywhere and owns the draft outright, so there is no
//! shared or ambient state. The one asynchronous collaborator (the vendor
//! detail fetch) re-enters through [`TabSyncController::vendor_details_arrived`]
//! on the same thread.

use dagvergunning_diag::{Diagnostic, DiagnosticSource};
use dagvergunning_domain::{FixedAllocation, ProductKind, format_registration_time};
use tracing::warn;

use crate::draft::DraftPermit;
use crate::error::{CoreError, LoadError};
use crate::reconcile;
use crate::record::{PermitRecord, PersistenceSink, RecordSource, VendorDetails, VendorLookup};
use crate::snapshot::DraftSnapshot;
use crate::tabs::{ProductTabView, SummaryTabView, Tab, VendorTabView};

/// One tab's view plus its readiness flag.
///
/// Values are pushed into a view only when it has reported ready; a push
/// requested earlier runs as soon as readiness arrives.
#[derive(Debug)]
struct TabSlot<V> {
    view: V,
    ready: bool,
}

impl<V> TabSlot<V> {
    const fn new(view: V) -> Self {
        Self { view, ready: false }
    }
}

/// Orchestrates the draft record across the three editor tabs.
///
/// On every tab change the controller pulls the edited values out of the
/// outgoing tab into the draft (applying the reconciliation rules) and
/// pushes the draft into the incoming tab. The summary tab is read-only
/// and has no pull operation.
#[derive(Debug)]
pub struct TabSyncController<V, P, S> {
    draft: DraftPermit,
    active: Tab,
    /// The products offered on this market; push and pull only touch these.
    market_products: Vec<ProductKind>,
    vendor: TabSlot<V>,
    product: TabSlot<P>,
    summary: TabSlot<S>,
    diagnostics: Vec<Diagnostic>,
}

impl<V, P, S> TabSyncController<V, P, S>
where
    V: VendorTabView,
    P: ProductTabView,
    S: SummaryTabView,
{
    /// Creates a controller for a fresh editing session.
    ///
    /// The initial active tab is [`Tab::Vendor`]; all tabs start unready.
    ///
    /// # Arguments
    ///
    /// * `draft` - The draft record (new or populated from a loaded record)
    /// * `market_products` - The products offered on this market
    /// * `vendor`, `product`, `summary` - The tab view-models
    #[must_use]
    pub const fn new(
        draft: DraftPermit,
        market_products: Vec<ProductKind>,
        vendor: V,
        product: P,
        summary: S,
    ) -> Self {
        Self {
            draft,
            active: Tab::Vendor,
            market_products,
            vendor: TabSlot::new(vendor),
            product: TabSlot::new(product),
            summary: TabSlot::new(summary),
            diagnostics: Vec::new(),
        }
    }

    /// Rebuilds a controller from a serialized snapshot.
    ///
    /// The draft and the active tab index are restored; the fresh views
    /// start unready and are populated as they report readiness.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedSnapshot`] when the snapshot cannot be
    /// interpreted; nothing is restored partially.
    pub fn restore(
        snapshot: &DraftSnapshot,
        market_products: Vec<ProductKind>,
        vendor: V,
        product: P,
        summary: S,
    ) -> Result<Self, CoreError> {
        let (draft, active) = snapshot.restore()?;
        Ok(Self {
            draft,
            active,
            market_products,
            vendor: TabSlot::new(vendor),
            product: TabSlot::new(product),
            summary: TabSlot::new(summary),
            diagnostics: Vec::new(),
        })
    }

    /// The currently active tab.
    #[must_use]
    pub const fn active_tab(&self) -> Tab {
        self.active
    }

    /// The draft record in its current state.
    #[must_use]
    pub const fn draft(&self) -> &DraftPermit {
        &self.draft
    }

    /// The vendor tab's view.
    #[must_use]
    pub const fn vendor_view(&self) -> &V {
        &self.vendor.view
    }

    /// The vendor tab's view, mutably (for forwarding user events).
    pub const fn vendor_view_mut(&mut self) -> &mut V {
        &mut self.vendor.view
    }

    /// The product tab's view.
    #[must_use]
    pub const fn product_view(&self) -> &P {
        &self.product.view
    }

    /// The product tab's view, mutably (for forwarding user events).
    pub const fn product_view_mut(&mut self) -> &mut P {
        &mut self.product.view
    }

    /// The summary tab's view.
    #[must_use]
    pub const fn summary_view(&self) -> &S {
        &self.summary.view
    }

    /// Switches the editor to another tab.
    ///
    /// Pulls the possibly-edited values out of the currently active tab
    /// first, then pushes the draft into the target. The push is skipped
    /// for an unready target and runs once via [`Self::tab_ready`] when the
    /// tab reports in.
    pub fn switch_to(&mut self, target: Tab) {
        self.pull_active();
        self.active = target;
        self.push(target);
    }

    /// Marks a tab as ready.
    ///
    /// If the tab is currently active it is populated immediately with the
    /// draft's then-current values, so a push deferred while the tab was
    /// unready runs exactly once. A repeated readiness signal is a no-op.
    pub fn tab_ready(&mut self, tab: Tab) {
        let already_ready: bool = match tab {
            Tab::Vendor => self.vendor.ready,
            Tab::Product => self.product.ready,
            Tab::Summary => self.summary.ready,
        };
        if already_ready {
            return;
        }
        match tab {
            Tab::Vendor => self.vendor.ready = true,
            Tab::Product => self.product.ready = true,
            Tab::Summary => self.summary.ready = true,
        }
        if self.active == tab {
            self.push(tab);
        }
    }

    /// Serializes the session for process-death survival.
    ///
    /// Pulls the active tab first; inactive tabs were already reconciled
    /// when they were left.
    pub fn save_state(&mut self) -> DraftSnapshot {
        self.pull_active();
        DraftSnapshot::capture(&self.draft, self.active)
    }

    /// Applies a loaded permit record to the draft (edit mode).
    ///
    /// Populates the draft, refreshes the active tab, and returns the
    /// vendor lookup request for the host to run when the record carries a
    /// registration number.
    pub fn record_loaded(&mut self, record: PermitRecord) -> Option<VendorLookup> {
        self.draft.permit_id = Some(record.permit_id);
        self.draft.registration_number = record.registration_number;
        self.draft.registration_timestamp = record.registration_timestamp;
        self.draft.registration_account_id = record.registration_account_id;
        self.draft.registration_account_name = record.registration_account_name;
        self.draft.vendor_id = record.vendor_id;
        self.draft.vendor_initials = record.vendor_initials;
        self.draft.vendor_last_name = record.vendor_last_name;
        self.draft.vendor_photo_url = record.vendor_photo_url;
        self.draft.application_id = record.application_id;
        self.draft.application_number = record.application_number;
        self.draft.application_status = record.application_status;
        self.draft.presence = record.presence;
        self.draft.total_length = record.total_length;
        self.draft.note = record.note;
        self.draft.product_counts = record.product_counts;
        self.draft.default_product_counts = record.default_product_counts;

        self.push(self.active);

        self.draft
            .registration_number
            .as_ref()
            .filter(|number| !number.is_empty())
            .map(|number| VendorLookup {
                registration_number: number.clone(),
            })
    }

    /// Opens an existing permit through a record source.
    ///
    /// An absent row leaves the session on the new-permit path and returns
    /// `None` without touching the draft.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Source`] when the source fails and
    /// [`LoadError::Record`] when the row is malformed; in both cases the
    /// draft is left untouched.
    pub fn open_existing<R: RecordSource>(
        &mut self,
        source: &mut R,
        permit_id: i64,
    ) -> Result<Option<VendorLookup>, LoadError<R::Error>> {
        let Some(raw) = source
            .permit_by_id(permit_id)
            .map_err(LoadError::Source)?
        else {
            return Ok(None);
        };
        let record: PermitRecord = PermitRecord::try_from(raw).map_err(LoadError::Record)?;
        Ok(self.record_loaded(record))
    }

    /// Applies asynchronously fetched vendor details.
    ///
    /// Display-only and idempotent: details go to whichever of the vendor
    /// and summary tabs is ready, regardless of which tab is active, so a
    /// late or duplicate response is harmless.
    pub fn vendor_details_arrived(&mut self, details: &VendorDetails) {
        if self.vendor.ready {
            self.vendor.view.show_vendor_details(details);
        }
        if self.summary.ready {
            self.summary.view.show_vendor_details(details);
        }
    }

    /// Hands the final draft to a persistence sink.
    ///
    /// Pulls the active tab first so last-moment edits are included.
    ///
    /// # Errors
    ///
    /// Returns the sink's own error when persisting fails.
    pub fn commit<K: PersistenceSink>(&mut self, sink: &mut K) -> Result<(), K::Error> {
        self.pull_active();
        sink.save(&self.draft)
    }

    /// Takes the diagnostics recorded for suppressed failures so far.
    pub fn drain_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    fn pull_active(&mut self) {
        match self.active {
            Tab::Vendor => self.pull_vendor(),
            Tab::Product => self.pull_product(),
            // The summary tab is read-only; nothing to pull.
            Tab::Summary => {}
        }
    }

    fn push(&mut self, tab: Tab) {
        match tab {
            Tab::Vendor => self.push_vendor(),
            Tab::Product => self.push_product(),
            Tab::Summary => self.push_summary(),
        }
    }

    /// Vendor pull: resolve the fixed-allocation defaults (first readiness
    /// is the moment they become available) and read the presence
    /// selection.
    fn pull_vendor(&mut self) {
        if !self.vendor.ready {
            return;
        }
        let allocation: FixedAllocation = self.vendor.view.fixed_allocation();
        reconcile::resolve_defaults(&mut self.draft, &allocation);
        if let Some(presence) = self.vendor.view.selected_presence() {
            self.draft.presence = Some(presence);
        }
    }

    /// Product pull: zero-guarded count read-back plus the note rule.
    fn pull_product(&mut self) {
        if !self.product.ready {
            return;
        }
        for &kind in &self.market_products {
            let Some(text) = self.product.view.displayed_count(kind) else {
                continue;
            };
            if let Err(err) = reconcile::apply_displayed_count(&mut self.draft, kind, &text) {
                warn!("product count pull failed: {err}");
                self.diagnostics
                    .push(Diagnostic::new(DiagnosticSource::ProductPull, err.to_string()));
            }
        }
        let note: String = self.product.view.displayed_note();
        reconcile::apply_displayed_note(&mut self.draft, &note);
    }

    fn push_vendor(&mut self) {
        if !self.vendor.ready {
            return;
        }
        if let Some(vendor_id) = self.draft.vendor_id {
            self.vendor.view.show_vendor(vendor_id);
        }
        if let Some(raw) = self.draft.registration_timestamp.clone() {
            match format_registration_time(&raw) {
                Ok(display_time) => self.vendor.view.show_registration_time(&display_time),
                // Field stays unset; the rest of the push proceeds.
                Err(err) => {
                    warn!("registration time format failed: {err}");
                    self.diagnostics
                        .push(Diagnostic::new(DiagnosticSource::VendorPush, err.to_string()));
                }
            }
        }
        self.vendor.view.show_note(self.draft.note.as_deref());
        if let Some(length) = self.draft.total_length {
            self.vendor.view.show_total_length(length);
        }
        if let Some(name) = &self.draft.registration_account_name {
            self.vendor.view.show_account_name(name);
        }
        if let Some(presence) = self.draft.presence {
            self.vendor.view.show_presence(presence);
        }
    }

    fn push_product(&mut self) {
        if !self.product.ready {
            return;
        }
        for &kind in &self.market_products {
            // An undetermined count renders as zero.
            let count: i64 = self.draft.product_count(kind).unwrap_or(0);
            self.product.view.show_count(kind, count);
        }
        if let Some(note) = &self.draft.note {
            self.product.view.show_note(note);
        }
    }

    fn push_summary(&mut self) {
        if !self.summary.ready {
            return;
        }
        if let Some(vendor_id) = self.draft.vendor_id {
            self.summary.view.show_vendor(vendor_id);
        }
        if let Some(raw) = self.draft.registration_timestamp.clone() {
            match format_registration_time(&raw) {
                Ok(display_time) => self.summary.view.show_registration_time(&display_time),
                Err(err) => {
                    warn!("registration time format failed: {err}");
                    self.diagnostics.push(Diagnostic::new(
                        DiagnosticSource::SummaryPush,
                        err.to_string(),
                    ));
                }
            }
        }
        self.summary.view.show_note(self.draft.note.as_deref());
        if let Some(length) = self.draft.total_length {
            self.summary.view.show_total_length(length);
        }
        if let Some(name) = &self.draft.registration_account_name {
            self.summary.view.show_account_name(name);
        }
        if let Some(presence) = self.draft.presence {
            self.summary.view.show_presence_title(presence.title());
        }
    }
}
