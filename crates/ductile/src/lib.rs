// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable sequences over a fixed-length store.
//!
//! ---
//!
//! Ductile builds a growable sequence out of a store whose length never
//! changes. Growing and shrinking happen by swapping in a whole new store,
//! following a small, predictable policy.
//!
//! # Features
//!
//! - **Predictable capacity**: starts at 4, doubles when full, shrinks to
//!   `max(10, 2 * len)` once a removal leaves the sequence under a quarter full
//! - **Checked everywhere**: every index is validated; errors are values, never panics
//! - **Functional helpers**: `slice`, `merge`, `map`, `filter`, `reduce`
//! - **Grouped mode**: [`seq::find_mode`] in a single pass over sorted input
//! - **`no_std` compatible**: only needs `alloc`
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! ductile = "0.1.0-rc.1"
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use ductile::seq::{DynArray, SequenceError, find_mode};
//!
//! fn main() -> Result<(), SequenceError> {
//!     let mut array = DynArray::new();
//!     for value in [1, 2, 2, 3, 3, 3] {
//!         array.append(value)?;
//!     }
//!     assert_eq!(array.capacity(), 8);
//!
//!     array.insert_at(0, 0)?;
//!     assert_eq!(array.remove_at(0)?, 0);
//!
//!     let doubled = array.map(|x| x * 2)?;
//!     assert_eq!(doubled.to_vec(), vec![2, 4, 4, 6, 6, 6]);
//!
//!     let (modes, count) = find_mode(&array)?;
//!     assert_eq!((modes.to_vec(), count), (vec![3], 3));
//!
//!     assert_eq!(array.reduce(|acc, x| acc + x, None), Some(14));
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! | Module | Crate | Contents |
//! |---|---|---|
//! | [`store`] | `ductile-store` | `FixedStore`, `StoreError` |
//! | [`seq`] | `ductile-seq` | `DynArray`, `find_mode`, growth `policy`, `SequenceError` |
//!
//! # Testing
//!
//! Enable `test_utils` to inject store failures:
//!
//! ```toml
//! [dev-dependencies]
//! ductile = { version = "0.1.0-rc.1", features = ["test_utils"] }
//! ```

#![cfg_attr(not(test), no_std)]

pub use ductile_seq as seq;
pub use ductile_store as store;

#[cfg(test)]
mod tests;
