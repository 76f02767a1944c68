// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One billable or allocatable product on a day permit.
///
/// The set is fixed. Every product kind is present in a draft's count
/// mapping at all times; "not yet determined" is an unset value, never a
/// missing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    /// A 3-meter stall.
    Stall3m,
    /// A 4-meter stall.
    Stall4m,
    /// Extra stall meters beyond the standard widths.
    ExtraMeters,
    /// A regular electricity connection.
    Electricity,
    /// A heavy-current connection.
    HeavyCurrent,
    /// Cleaning service. Has no fixed-allocation counterpart.
    Cleaning,
}

impl ProductKind {
    /// All product kinds, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Stall3m,
        Self::Stall4m,
        Self::ExtraMeters,
        Self::Electricity,
        Self::HeavyCurrent,
        Self::Cleaning,
    ];

    /// The product kinds that have a fixed-allocation ("vast") counterpart.
    pub const DEFAULTABLE: [Self; 5] = [
        Self::Stall3m,
        Self::Stall4m,
        Self::ExtraMeters,
        Self::Electricity,
        Self::HeavyCurrent,
    ];

    /// Returns the string representation of this product kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stall3m => "stall_3m",
            Self::Stall4m => "stall_4m",
            Self::ExtraMeters => "extra_meters",
            Self::Electricity => "electricity",
            Self::HeavyCurrent => "heavy_current",
            Self::Cleaning => "cleaning",
        }
    }

    /// Returns the legacy column key for this product's count.
    ///
    /// These spellings come from the original storage schema and are the
    /// stable keys used by the draft snapshot.
    #[must_use]
    pub const fn column(&self) -> &'static str {
        match self {
            Self::Stall3m => "aantal_3meter_kramen",
            Self::Stall4m => "aantal_4meter_kramen",
            Self::ExtraMeters => "extra_meters",
            Self::Electricity => "aantal_elektra",
            Self::HeavyCurrent => "krachtstroom",
            Self::Cleaning => "reiniging",
        }
    }

    /// Returns the legacy column key for this product's fixed-allocation
    /// default, or `None` for products without a default counterpart.
    ///
    /// Note the asymmetric legacy spelling for extra meters: the count
    /// column is `extra_meters` but the default column is
    /// `aantal_extra_meters_vast`.
    #[must_use]
    pub const fn default_column(&self) -> Option<&'static str> {
        match self {
            Self::Stall3m => Some("aantal_3meter_kramen_vast"),
            Self::Stall4m => Some("aantal_4meter_kramen_vast"),
            Self::ExtraMeters => Some("aantal_extra_meters_vast"),
            Self::Electricity => Some("aantal_elektra_vast"),
            Self::HeavyCurrent => Some("krachtstroom_vast"),
            Self::Cleaning => None,
        }
    }

    /// Returns whether this product kind has a fixed-allocation default.
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default_column().is_some()
    }

    /// The position of this kind in [`Self::ALL`], used for array-backed
    /// per-kind storage.
    #[must_use]
    pub(crate) const fn ordinal(self) -> usize {
        match self {
            Self::Stall3m => 0,
            Self::Stall4m => 1,
            Self::ExtraMeters => 2,
            Self::Electricity => 3,
            Self::HeavyCurrent => 4,
            Self::Cleaning => 5,
        }
    }
}

impl FromStr for ProductKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stall_3m" => Ok(Self::Stall3m),
            "stall_4m" => Ok(Self::Stall4m),
            "extra_meters" => Ok(Self::ExtraMeters),
            "electricity" => Ok(Self::Electricity),
            "heavy_current" => Ok(Self::HeavyCurrent),
            "cleaning" => Ok(Self::Cleaning),
            _ => Err(DomainError::InvalidProductKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
