// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dagvergunning_domain::{ApplicationStatus, ProductKind, VendorPresence};

use crate::tests::helpers::create_test_record;
use crate::{CoreError, PermitRecord, RawPermitRecord};

#[test]
fn test_valid_record_converts() {
    let record: PermitRecord = PermitRecord::try_from(create_test_record()).unwrap();

    assert_eq!(record.permit_id, 42);
    assert_eq!(record.application_status, Some(ApplicationStatus::Application));
    assert_eq!(record.presence, Some(VendorPresence::Present));
    assert_eq!(record.product_counts.get(ProductKind::Stall3m), Some(3));
    assert_eq!(
        record.default_product_counts.get(ProductKind::Stall3m),
        Some(3)
    );
}

#[test]
fn test_absent_enum_fields_stay_none() {
    let row: RawPermitRecord = RawPermitRecord {
        permit_id: 1,
        ..RawPermitRecord::default()
    };

    let record: PermitRecord = PermitRecord::try_from(row).unwrap();

    assert_eq!(record.application_status, None);
    assert_eq!(record.presence, None);
}

#[test]
fn test_unknown_status_fails_the_whole_record() {
    let mut row: RawPermitRecord = create_test_record();
    row.application_status = Some(String::from("xyz"));

    let result = PermitRecord::try_from(row);

    assert!(matches!(
        result,
        Err(CoreError::MalformedRecord { ref field, .. }) if field == "application_status"
    ));
}

#[test]
fn test_unknown_presence_fails_the_whole_record() {
    let mut row: RawPermitRecord = create_test_record();
    row.presence = Some(String::from("misschien"));

    let result = PermitRecord::try_from(row);

    assert!(matches!(
        result,
        Err(CoreError::MalformedRecord { ref field, .. }) if field == "presence"
    ));
}
