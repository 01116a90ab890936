// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ductile_store::FixedStoreBehaviour;

use crate::DynArray;

fn array_of<T>(values: impl IntoIterator<Item = T>) -> DynArray<T> {
    DynArray::from_values(values).expect("Failed to from_values(..)")
}

// =============================================================================
// iter()
// =============================================================================

#[test]
fn test_iter_yields_live_elements_in_order() {
    let array = array_of([3, 1, 4, 1, 5]);

    let collected: Vec<_> = array.iter().copied().collect();

    assert_eq!(collected, [3, 1, 4, 1, 5]);
}

#[test]
fn test_iter_is_restartable() {
    let array = array_of([1, 2, 3]);

    let first: Vec<_> = array.iter().collect();
    let second: Vec<_> = array.iter().collect();

    assert_eq!(first, second);
}

#[test]
fn test_iter_ends_gracefully_and_stays_ended() {
    let array = array_of([1, 2]);
    let mut iter = array.iter();

    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iter_never_reads_vacant_slots() {
    let mut array = array_of([1, 2, 3, 4]);
    array.remove_at(3).expect("Failed to remove_at(..)");

    assert_eq!(array.iter().count(), 3);
}

#[test]
fn test_iter_size_hint() {
    let array = array_of([1, 2, 3]);
    let mut iter = array.iter();

    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.size_hint(), (2, Some(2)));
}

#[test]
fn test_iter_clone_resumes_from_same_position() {
    let array = array_of(['a', 'b', 'c']);
    let mut iter = array.iter();
    iter.next();

    let rest: Vec<_> = iter.clone().collect();

    assert_eq!(rest, [&'b', &'c']);
    assert_eq!(iter.next(), Some(&'b'));
}

#[test]
fn test_iter_stops_on_store_failure() {
    let mut array = array_of([1, 2, 3]);
    array.change_store_behaviour(FixedStoreBehaviour::FailAtGet);

    assert_eq!(array.iter().next(), None);
    assert_eq!(array.reduce(|acc, x| acc + x, Some(7)), Some(7));
}

#[test]
fn test_iter_walks_full_length_after_failed_mutations() {
    let mut array = array_of([1, 2, 3]);

    array.change_store_behaviour(FixedStoreBehaviour::FailAtSet);
    assert!(array.insert_at(0, 0).is_err());
    array.change_store_behaviour(FixedStoreBehaviour::FailAtTake);
    assert!(array.remove_at(0).is_err());
    array.change_store_behaviour(FixedStoreBehaviour::None);

    assert_eq!(array.iter().count(), array.len());
    assert_eq!(array.reduce(|acc, x| acc + x, None), Some(6));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "vacant slot 1 inside live range of length 3")]
fn test_iter_asserts_on_vacant_live_slot() {
    let mut array = array_of([1, 2, 3]);
    array.take_slot(1).expect("Failed to take_slot(..)");

    let _ = array.iter().count();
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "vacant slot 2 inside live range of length 3")]
fn test_into_iter_asserts_on_vacant_live_slot() {
    let mut array = array_of([1, 2, 3]);
    array.take_slot(2).expect("Failed to take_slot(..)");

    let _ = array.into_iter().count();
}

#[test]
fn test_for_loop_over_reference() {
    let array = array_of([1, 2, 3]);
    let mut sum = 0;

    for value in &array {
        sum += value;
    }

    assert_eq!(sum, 6);
}

// =============================================================================
// into_iter()
// =============================================================================

#[test]
fn test_into_iter_moves_values() {
    let array = array_of([String::from("x"), String::from("y")]);

    let owned: Vec<String> = array.into_iter().collect();

    assert_eq!(owned, ["x", "y"]);
}

#[test]
fn test_into_iter_partial_consumption() {
    let array = array_of([String::from("x"), String::from("y"), String::from("z")]);
    let mut iter = array.into_iter();

    assert_eq!(iter.next().as_deref(), Some("x"));
    assert_eq!(iter.len(), 2);
    // Remaining values are dropped with the iterator
}

#[test]
fn test_into_iter_empty() {
    let array: DynArray<u8> = DynArray::new();
    let mut iter = array.into_iter();

    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}
