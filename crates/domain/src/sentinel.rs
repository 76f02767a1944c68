// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Legacy sentinel coding for optional numeric fields.
//!
//! The original storage schema coded "unset" as `-1`. In memory this crate
//! uses proper optionals; the sentinel survives only at the snapshot
//! boundary so stored snapshots keep meaning the same thing.

/// The legacy "unset" sentinel.
pub const UNSET: i64 = -1;

/// Encodes an optional value into its sentinel representation.
#[must_use]
pub const fn encode(value: Option<i64>) -> i64 {
    match value {
        Some(v) => v,
        None => UNSET,
    }
}

/// Decodes a sentinel-coded value.
///
/// Any negative value decodes to `None`; legitimate counts and identifiers
/// are never negative in the legacy schema.
#[must_use]
pub const fn decode(raw: i64) -> Option<i64> {
    if raw < 0 { None } else { Some(raw) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_unset_yields_sentinel() {
        assert_eq!(encode(None), UNSET);
    }

    #[test]
    fn test_encode_preserves_values_including_zero() {
        assert_eq!(encode(Some(0)), 0);
        assert_eq!(encode(Some(7)), 7);
    }

    #[test]
    fn test_decode_sentinel_yields_none() {
        assert_eq!(decode(UNSET), None);
        assert_eq!(decode(-7), None);
    }

    #[test]
    fn test_decode_roundtrips_set_values() {
        for value in [0, 1, 42] {
            assert_eq!(decode(encode(Some(value))), Some(value));
        }
    }
}
