// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mode finding over grouped input.

use core::cmp::Ordering;

use crate::dyn_array::DynArray;
use crate::error::SequenceError;

/// Returns the most frequent values of `array` and their frequency.
///
/// `array` must be grouped: equal values are contiguous (sorted input is the
/// usual case). Runs of equal length all count as modes, in the order they
/// appear.
///
/// # Errors
///
/// An empty `array` violates the precondition and is reported as
/// [`SequenceError::OutOfRange`] for index 0.
///
/// # Example
///
/// ```rust
/// use ductile_seq::{DynArray, SequenceError, find_mode};
///
/// fn example() -> Result<(), SequenceError> {
///     let array = DynArray::from_values([1, 1, 2, 3, 3, 4])?;
///     let (modes, frequency) = find_mode(&array)?;
///
///     assert_eq!(modes.to_vec(), [1, 3]);
///     assert_eq!(frequency, 2);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub fn find_mode<T>(array: &DynArray<T>) -> Result<(DynArray<T>, usize), SequenceError>
where
    T: PartialEq + Clone,
{
    let mut current = array.get(0)?;
    let mut current_run = 0;
    let mut best_run = 0;
    let mut modes = DynArray::new();

    for value in array {
        if value == current {
            current_run += 1;
            continue;
        }

        close_run(&mut modes, &mut best_run, current, current_run)?;
        current = value;
        current_run = 1;
    }

    // The last run is never closed by a boundary.
    close_run(&mut modes, &mut best_run, current, current_run)?;

    Ok((modes, best_run))
}

fn close_run<T>(
    modes: &mut DynArray<T>,
    best_run: &mut usize,
    value: &T,
    run: usize,
) -> Result<(), SequenceError>
where
    T: Clone,
{
    match run.cmp(best_run) {
        Ordering::Greater => {
            *best_run = run;
            *modes = DynArray::new();
            modes.append(value.clone())?;
        }
        Ordering::Equal => modes.append(value.clone())?,
        Ordering::Less => {}
    }

    Ok(())
}
