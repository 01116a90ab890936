// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Index schedule generators for exhaustive insert/remove testing.
//!
//! A schedule is a list of indices, one per operation. Every generator walks
//! all valid schedules of a given length, so a test can check a sequence
//! against a `Vec` model for every possible order of operations.

/// Depth-first walk over all schedules where position `k` takes a value in
/// `0..radix(k)`.
fn walk<R, F>(schedule: &mut Vec<usize>, len: usize, radix: &R, callback: &mut F)
where
    R: Fn(usize) -> usize,
    F: FnMut(&[usize]),
{
    let depth = schedule.len();

    if depth == len {
        callback(schedule);
        return;
    }

    for choice in 0..radix(depth) {
        schedule.push(choice);
        walk(schedule, len, radix, callback);
        schedule.pop();
    }
}

/// Generates every valid schedule of `len` inserts into an empty sequence.
///
/// The `k`-th insert (0-based) lands at `schedule[k]`, which ranges over
/// `0..=k` (inserting at the current length appends). There are `len!`
/// schedules.
///
/// # Example
/// ```
/// use ductile_test_utils::insert_schedules;
///
/// let mut seen = Vec::new();
/// insert_schedules(3, |schedule| seen.push(schedule.to_vec()));
///
/// assert_eq!(seen.len(), 6); // 3! = 6
/// assert!(seen.contains(&vec![0, 1, 2])); // append, append, append
/// assert!(seen.contains(&vec![0, 0, 0])); // always at the front
/// ```
pub fn insert_schedules<F>(len: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    if len == 0 {
        return;
    }

    let mut schedule = Vec::with_capacity(len);
    walk(&mut schedule, len, &|depth: usize| depth + 1, &mut callback);
}

/// Generates every valid schedule draining a sequence of `len` elements.
///
/// The `k`-th removal (0-based) targets `schedule[k]`, which ranges over
/// `0..len - k`. There are `len!` schedules.
///
/// # Example
/// ```
/// use ductile_test_utils::removal_schedules;
///
/// let mut count = 0;
/// removal_schedules(4, |schedule| {
///     assert_eq!(schedule.len(), 4);
///     assert_eq!(schedule[3], 0); // only one element left
///     count += 1;
/// });
/// assert_eq!(count, 24); // 4! = 24
/// ```
pub fn removal_schedules<F>(len: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    if len == 0 {
        return;
    }

    let mut schedule = Vec::with_capacity(len);
    walk(&mut schedule, len, &|depth: usize| len - depth, &mut callback);
}

/// Replays an insert schedule on a `Vec`, inserting `k` at step `k`.
///
/// # Example
/// ```
/// use ductile_test_utils::replay_inserts;
///
/// assert_eq!(replay_inserts(&[0, 0, 1]), [1, 2, 0]);
/// ```
pub fn replay_inserts(schedule: &[usize]) -> Vec<usize> {
    let mut model = Vec::with_capacity(schedule.len());

    for (value, &index) in schedule.iter().enumerate() {
        model.insert(index, value);
    }

    model
}

/// Replays a removal schedule on `0..schedule.len()`, returning the removed
/// values in order.
///
/// # Example
/// ```
/// use ductile_test_utils::replay_removals;
///
/// assert_eq!(replay_removals(&[1, 1, 0]), [1, 2, 0]);
/// ```
pub fn replay_removals(schedule: &[usize]) -> Vec<usize> {
    let mut model: Vec<usize> = (0..schedule.len()).collect();

    schedule.iter().map(|&index| model.remove(index)).collect()
}
