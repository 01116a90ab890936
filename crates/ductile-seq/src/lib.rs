// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable sequence over a fixed-length store.
//!
//! `DynArray<T>` gives amortized O(1) append and checked random access on top
//! of a [`FixedStore`](ductile_store::FixedStore), plus bulk operations that
//! always produce independently owned sequences.
//!
//! # Core Guarantees
//!
//! - **Doubling growth**: A full store is replaced by one twice its size
//!   before anything is written; capacity starts at 4.
//! - **Bounded shrink**: Removal shrinks a sparse store (less than a quarter
//!   full, more than 10 slots) to `max(10, 2 * len)`. See [`policy`].
//! - **Check before write**: Every index or range check happens before the
//!   store is touched.
//! - **All or nothing**: Shifts are single rotations of the store and `merge`
//!   rolls back what it appended, so an `Err` leaves the elements unchanged.
//!   Capacity may already have been adjusted by the growth policy.
//! - **No views**: `slice()`, `map()` and `filter()` copy into new sequences.
//!
//! # Example
//!
//! ```rust
//! use ductile_seq::{DynArray, SequenceError};
//!
//! fn example() -> Result<(), SequenceError> {
//!     let mut array = DynArray::from_values([1, 5, 10, 15, 20, 25])?;
//!
//!     let big = array.filter(|x| *x > 10)?;
//!     assert_eq!(big.to_vec(), [15, 20, 25]);
//!
//!     let middle = array.slice(1, 3)?;
//!     assert_eq!(middle.to_vec(), [5, 10, 15]);
//!
//!     array.merge(&middle)?;
//!     assert_eq!(array.len(), 9);
//!
//!     assert!(array.slice(9, 0).is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Logging
//!
//! Reallocations are reported through the [`log`] facade at `trace` level and
//! shrink decisions at `debug` level. No logger is installed by this crate.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod dyn_array;
mod error;
mod iter;
mod mode;

pub mod policy;

#[cfg(test)]
mod tests;

pub use dyn_array::DynArray;
pub use error::SequenceError;
pub use iter::{IntoIter, Iter};
pub use mode::find_mode;
