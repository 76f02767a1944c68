// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Who is standing at the stall for this permit.
///
/// The value set and its spellings come from the legacy `aanwezig` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VendorPresence {
    /// The vendor is present in person.
    #[serde(rename = "zelf")]
    Present,
    /// The vendor is absent.
    #[serde(rename = "niet_aanwezig")]
    Absent,
    /// A substitute is present, with permission.
    #[serde(rename = "vervanger_met_toestemming")]
    SubstituteWithPermission,
    /// A substitute is present, without permission.
    #[serde(rename = "vervanger_zonder_toestemming")]
    SubstituteWithoutPermission,
}

impl VendorPresence {
    /// Returns the legacy string value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "zelf",
            Self::Absent => "niet_aanwezig",
            Self::SubstituteWithPermission => "vervanger_met_toestemming",
            Self::SubstituteWithoutPermission => "vervanger_zonder_toestemming",
        }
    }

    /// Returns the human-readable label shown by the summary tab.
    ///
    /// The original mapped value to title through resource arrays; here the
    /// mapping is a static match.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Present => "Zelf aanwezig",
            Self::Absent => "Niet aanwezig",
            Self::SubstituteWithPermission => "Vervanger met toestemming",
            Self::SubstituteWithoutPermission => "Vervanger zonder toestemming",
        }
    }
}

impl FromStr for VendorPresence {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zelf" => Ok(Self::Present),
            "niet_aanwezig" => Ok(Self::Absent),
            "vervanger_met_toestemming" => Ok(Self::SubstituteWithPermission),
            "vervanger_zonder_toestemming" => Ok(Self::SubstituteWithoutPermission),
            _ => Err(DomainError::InvalidPresence(s.to_string())),
        }
    }
}

impl std::fmt::Display for VendorPresence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
