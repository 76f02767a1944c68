// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Legacy date and timestamp formats.
//!
//! The registration timestamp is stored as the raw string the backend
//! delivers (`YYYY-MM-DD hh:mm:ss`) and parsed only when a tab needs the
//! display time. The permit day uses `YYYY-MM-DD`.

use crate::error::DomainError;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

const DAY_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Parses a legacy day key (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns [`DomainError::DayParse`] when the string does not match the
/// legacy format.
pub fn parse_day(raw: &str) -> Result<Date, DomainError> {
    Date::parse(raw, DAY_FORMAT).map_err(|err| DomainError::DayParse {
        raw: raw.to_string(),
        error: err.to_string(),
    })
}

/// Formats a day into its legacy key (`YYYY-MM-DD`).
#[must_use]
pub fn format_day(day: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        day.year(),
        u8::from(day.month()),
        day.day()
    )
}

/// Renders the display time (`hh:mm`) from a raw registration timestamp.
///
/// # Errors
///
/// Returns [`DomainError::TimestampParse`] when the raw string does not
/// match the legacy timestamp format. Callers recover locally: the display
/// field stays unset and the rest of the push proceeds.
pub fn format_registration_time(raw: &str) -> Result<String, DomainError> {
    let parsed: PrimitiveDateTime =
        PrimitiveDateTime::parse(raw, TIMESTAMP_FORMAT).map_err(|err| {
            DomainError::TimestampParse {
                raw: raw.to_string(),
                error: err.to_string(),
            }
        })?;
    Ok(format!("{:02}:{:02}", parsed.hour(), parsed.minute()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use time::Month;

    #[test]
    fn test_day_roundtrip() {
        let day: Date = parse_day("2016-03-07").unwrap();
        assert_eq!(day.year(), 2016);
        assert_eq!(day.month(), Month::March);
        assert_eq!(day.day(), 7);
        assert_eq!(format_day(day), "2016-03-07");
    }

    #[test]
    fn test_malformed_day_is_rejected() {
        assert!(matches!(
            parse_day("07-03-2016"),
            Err(DomainError::DayParse { .. })
        ));
    }

    #[test]
    fn test_registration_time_renders_hours_and_minutes() {
        assert_eq!(
            format_registration_time("2016-03-07 09:05:33"),
            Ok(String::from("09:05"))
        );
    }

    #[test]
    fn test_malformed_registration_timestamp_is_reported() {
        let result: Result<String, DomainError> = format_registration_time("vanochtend vroeg");
        assert!(matches!(result, Err(DomainError::TimestampParse { .. })));
    }
}
