// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ductile_test_utils::{insert_schedules, removal_schedules, replay_inserts, replay_removals};

use crate::DynArray;

const MAX_LEN: usize = 7;

#[test]
fn test_every_insert_schedule() {
    for len in 1..=MAX_LEN {
        insert_schedules(len, |schedule| {
            let mut array = DynArray::new();

            for (value, &index) in schedule.iter().enumerate() {
                array
                    .insert_at(index, value)
                    .expect("Failed to insert_at(..)");
            }

            assert_eq!(array.to_vec(), replay_inserts(schedule), "{schedule:?}");
        });
    }
}

#[test]
fn test_every_removal_schedule() {
    for len in 1..=MAX_LEN {
        removal_schedules(len, |schedule| {
            let mut array = DynArray::from_values(0..len).expect("Failed to from_values(..)");

            let removed: Vec<usize> = schedule
                .iter()
                .map(|&index| array.remove_at(index).expect("Failed to remove_at(..)"))
                .collect();

            assert_eq!(removed, replay_removals(schedule), "{schedule:?}");
            assert!(array.is_empty());
        });
    }
}

#[test]
fn test_removal_schedules_through_shrink() {
    // 16 slots: every drain crosses the shrink trigger once
    let len = 9;
    let mut runs = 0;

    removal_schedules(len, |schedule| {
        // 9! schedules; sample every 997th
        runs += 1;
        if runs % 997 != 0 {
            return;
        }

        let mut array = DynArray::from_values(0..len).expect("Failed to from_values(..)");
        let mut model: Vec<usize> = (0..len).collect();

        for &index in schedule {
            assert_eq!(array.remove_at(index), Ok(model.remove(index)));
            assert_eq!(array.to_vec(), model);
        }

        assert_eq!(array.capacity(), 10);
    });

    assert!(runs > 0);
}
