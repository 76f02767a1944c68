// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod counts;
mod error;
mod presence;
mod product;
mod sentinel;
mod status;
mod timestamp;

pub use counts::{CountSet, FixedAllocation};
pub use error::DomainError;
pub use presence::VendorPresence;
pub use product::ProductKind;
pub use sentinel::{UNSET, decode, encode};
pub use status::ApplicationStatus;
pub use timestamp::{format_day, format_registration_time, parse_day};
