// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The status of the vendor's standing application ("sollicitatie") for the
/// market, from which default allocations derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    /// Daily lot participant.
    #[serde(rename = "lot")]
    Lot,
    /// Regular applicant.
    #[serde(rename = "soll")]
    Application,
    /// Candidate for a fixed space.
    #[serde(rename = "vkk")]
    FixedSpaceCandidate,
    /// Holder of a fixed space.
    #[serde(rename = "vpl")]
    FixedSpaceHolder,
    /// Status not known to the backend.
    #[serde(rename = "?")]
    Undefined,
}

impl ApplicationStatus {
    /// Returns the legacy string value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lot => "lot",
            Self::Application => "soll",
            Self::FixedSpaceCandidate => "vkk",
            Self::FixedSpaceHolder => "vpl",
            Self::Undefined => "?",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lot" => Ok(Self::Lot),
            "soll" => Ok(Self::Application),
            "vkk" => Ok(Self::FixedSpaceCandidate),
            "vpl" => Ok(Self::FixedSpaceHolder),
            "?" => Ok(Self::Undefined),
            _ => Err(DomainError::InvalidApplicationStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
