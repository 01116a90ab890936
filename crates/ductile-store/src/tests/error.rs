// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::StoreError;

#[test]
fn test_out_of_range_display() {
    let err = StoreError::OutOfRange { index: 7, len: 4 };
    insta::assert_snapshot!(err.to_string(), @"index 7 out of range for store of length 4");
}

#[test]
fn test_vacant_display() {
    let err = StoreError::Vacant { index: 2 };
    insta::assert_snapshot!(err.to_string(), @"slot 2 is vacant");
}
