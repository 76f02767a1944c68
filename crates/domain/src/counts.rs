// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::product::ProductKind;

/// A per-product-kind count mapping.
///
/// Every [`ProductKind`] is present at all times; "not yet determined" is
/// `None`, never a missing key. The legacy `-1` sentinel exists only at the
/// snapshot boundary (see the `sentinel` module).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountSet {
    values: [Option<i64>; ProductKind::ALL.len()],
}

impl CountSet {
    /// Creates a count set with every kind unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: [None; ProductKind::ALL.len()],
        }
    }

    /// Returns the count for a kind, or `None` when unset.
    #[must_use]
    pub const fn get(&self, kind: ProductKind) -> Option<i64> {
        self.values[kind.ordinal()]
    }

    /// Sets the count for a kind.
    pub const fn set(&mut self, kind: ProductKind, count: i64) {
        self.values[kind.ordinal()] = Some(count);
    }

    /// Returns a kind to the unset state.
    pub const fn clear(&mut self, kind: ProductKind) {
        self.values[kind.ordinal()] = None;
    }

    /// Returns whether a kind is unset.
    #[must_use]
    pub const fn is_unset(&self, kind: ProductKind) -> bool {
        self.values[kind.ordinal()].is_none()
    }
}

/// A vendor's standing default product counts for a market ("vast").
///
/// This is the shape the vendor sub-view reports from the vendor's
/// application record. [`ProductKind::Cleaning`] has no default counterpart
/// and can never be set here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedAllocation {
    counts: CountSet,
}

impl FixedAllocation {
    /// Creates an allocation with every defaultable kind unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: CountSet::new(),
        }
    }

    /// Sets the default count for a kind.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NoDefaultCounterpart`] for
    /// [`ProductKind::Cleaning`].
    pub fn set(&mut self, kind: ProductKind, count: i64) -> Result<(), DomainError> {
        if !kind.has_default() {
            return Err(DomainError::NoDefaultCounterpart(kind));
        }
        self.counts.set(kind, count);
        Ok(())
    }

    /// Returns the default count for a kind.
    ///
    /// Always `None` for [`ProductKind::Cleaning`].
    #[must_use]
    pub const fn get(&self, kind: ProductKind) -> Option<i64> {
        self.counts.get(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_count_set_has_every_kind_unset() {
        let counts: CountSet = CountSet::new();
        for kind in ProductKind::ALL {
            assert!(counts.is_unset(kind));
            assert_eq!(counts.get(kind), None);
        }
    }

    #[test]
    fn test_set_and_clear_roundtrip() {
        let mut counts: CountSet = CountSet::new();
        counts.set(ProductKind::Stall3m, 2);
        assert_eq!(counts.get(ProductKind::Stall3m), Some(2));
        assert!(!counts.is_unset(ProductKind::Stall3m));

        counts.clear(ProductKind::Stall3m);
        assert!(counts.is_unset(ProductKind::Stall3m));
    }

    #[test]
    fn test_zero_is_a_set_value() {
        let mut counts: CountSet = CountSet::new();
        counts.set(ProductKind::Electricity, 0);
        assert_eq!(counts.get(ProductKind::Electricity), Some(0));
        assert!(!counts.is_unset(ProductKind::Electricity));
    }

    #[test]
    fn test_allocation_rejects_cleaning() {
        let mut allocation: FixedAllocation = FixedAllocation::new();
        assert_eq!(
            allocation.set(ProductKind::Cleaning, 1),
            Err(DomainError::NoDefaultCounterpart(ProductKind::Cleaning))
        );
        assert_eq!(allocation.get(ProductKind::Cleaning), None);
    }

    #[test]
    fn test_allocation_accepts_defaultable_kinds() {
        let mut allocation: FixedAllocation = FixedAllocation::new();
        for kind in ProductKind::DEFAULTABLE {
            assert_eq!(allocation.set(kind, 3), Ok(()));
            assert_eq!(allocation.get(kind), Some(3));
        }
    }
}
