// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The reconciliation engine: default sourcing, copy-down fallback, and the
//! pull-side guard rules.
//!
//! All functions are pure mutations of a [`DraftPermit`]; the tab sync
//! controller decides when they run.

use dagvergunning_domain::{DomainError, FixedAllocation, ProductKind};

use crate::draft::DraftPermit;

/// Resolves the draft's default product counts from the vendor's fixed
/// allocation and copies resolved defaults down into unset user counts.
///
/// Runs when the vendor tab becomes ready, i.e. the moment the fixed
/// allocation first becomes available. Per defaultable kind:
///
/// 1. An unset default is sourced from the allocation, exactly once.
///    Defaults already resolved (including by a loaded record) are never
///    overwritten; a missing allocation entry leaves the default unset.
/// 2. An unset user count falls back to the now-resolved default. A count
///    that was ever set, including an explicit `0` from a loaded record,
///    is left alone.
///
/// [`ProductKind::Cleaning`] has no default counterpart and is untouched by
/// both steps. Re-running after defaults are resolved changes nothing.
pub fn resolve_defaults(draft: &mut DraftPermit, allocation: &FixedAllocation) {
    for kind in ProductKind::DEFAULTABLE {
        if draft.default_product_counts.is_unset(kind)
            && let Some(value) = allocation.get(kind)
        {
            draft.default_product_counts.set(kind, value);
        }
        if draft.product_counts.is_unset(kind)
            && let Some(value) = draft.default_product_counts.get(kind)
        {
            draft.product_counts.set(kind, value);
        }
    }
}

/// Reads a displayed product count back into the draft (product-tab pull).
///
/// Empty text is ignored. A displayed `"0"` counts as a genuine override
/// only when the stored value is already set; while the stored value is
/// still unset, a zero is treated as "not yet decided" and not written,
/// so a freshly-rendered zero cannot mask an unset field. Any non-zero
/// value always overwrites.
///
/// # Errors
///
/// Returns [`DomainError::UnreadableCount`] when the text is non-empty but
/// not a number. The draft is untouched; callers log and continue.
pub fn apply_displayed_count(
    draft: &mut DraftPermit,
    kind: ProductKind,
    text: &str,
) -> Result<(), DomainError> {
    if text.is_empty() {
        return Ok(());
    }
    let count: i64 = text.parse().map_err(|_| DomainError::UnreadableCount {
        kind,
        raw: text.to_string(),
    })?;
    if count == 0 && draft.product_counts.is_unset(kind) {
        return Ok(());
    }
    draft.product_counts.set(kind, count);
    Ok(())
}

/// Reads the displayed note text back into the draft.
///
/// Non-empty text always overwrites. Empty text clears the stored note
/// only if a previous value existed; otherwise the note stays unset.
pub fn apply_displayed_note(draft: &mut DraftPermit, text: &str) {
    if text.is_empty() {
        if draft.note.is_some() {
            draft.note = None;
        }
    } else {
        draft.note = Some(text.to_string());
    }
}
