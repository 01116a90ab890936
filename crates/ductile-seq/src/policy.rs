// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capacity policy of [`DynArray`](crate::DynArray).
//!
//! Growth doubles a full store. Shrinking only happens on removal, when fewer
//! than a quarter of the slots are live and the store is larger than
//! [`SHRINK_FLOOR`]; the target is computed from the size *before* the removal.

use core::num::NonZeroUsize;

/// Capacity of a freshly created sequence.
pub const INITIAL_CAPACITY: usize = 4;

/// Multiplier applied to a full store.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity a shrink never goes below.
pub const SHRINK_FLOOR: usize = 10;

/// Shrink when `size * SHRINK_DIVISOR < capacity`.
pub const SHRINK_DIVISOR: usize = 4;

pub(crate) const INITIAL_LEN: NonZeroUsize = match NonZeroUsize::new(INITIAL_CAPACITY) {
    Some(len) => len,
    None => panic!("INITIAL_CAPACITY must be non-zero"),
};

/// Capacity after growing a full store of `capacity` slots.
#[inline]
pub fn grown_capacity(capacity: usize) -> usize {
    capacity.saturating_mul(GROWTH_FACTOR)
}

/// Capacity to shrink to before removing from a sequence of `size` live
/// elements, or `None` if the store should stay as it is.
///
/// ```rust
/// use ductile_seq::policy::shrink_target;
///
/// assert_eq!(shrink_target(25, 100), None);
/// assert_eq!(shrink_target(24, 100), Some(48));
/// assert_eq!(shrink_target(2, 16), Some(10));
/// assert_eq!(shrink_target(0, 10), None);
/// ```
pub fn shrink_target(size: usize, capacity: usize) -> Option<usize> {
    if capacity <= SHRINK_FLOOR || size.saturating_mul(SHRINK_DIVISOR) >= capacity {
        return None;
    }

    Some(SHRINK_FLOOR.max(size.saturating_mul(GROWTH_FACTOR)))
}
