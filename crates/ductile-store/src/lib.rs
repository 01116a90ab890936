// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-length, bounds-checked slot array.
//!
//! `FixedStore<T>` is the backing store of every ductile sequence. Its length is
//! chosen once at construction and never changes; every access is checked
//! against it.
//!
//! # Core Guarantees
//!
//! - **Fixed length**: The number of slots is a non-zero value chosen at construction.
//! - **Checked access**: `get()`, `set()` and `take()` fail with
//!   [`StoreError::OutOfRange`] instead of panicking.
//! - **Explicit vacancy**: A slot that was never written (or was moved out of)
//!   reports [`StoreError::Vacant`] rather than exposing a stale value.
//!
//! # Example
//!
//! ```rust
//! use core::num::NonZeroUsize;
//! use ductile_store::{FixedStore, StoreError};
//!
//! fn example() -> Result<(), StoreError> {
//!     let len = NonZeroUsize::new(4).expect("non-zero");
//!     let mut store = FixedStore::new(len);
//!
//!     store.set(0, 10u32)?;
//!     store.set(3, 40u32)?;
//!
//!     assert_eq!(store.get(0), Ok(&10));
//!     assert_eq!(store.get(1), Err(StoreError::Vacant { index: 1 }));
//!     assert_eq!(store.set(4, 50), Err(StoreError::OutOfRange { index: 4, len: 4 }));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject failures for testing error handling paths:
//!
//! ```toml
//! [dev-dependencies]
//! ductile-store = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`FixedStoreBehaviour`] to make the next accesses fail.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod error;
mod fixed_store;

#[cfg(test)]
mod tests;

pub use error::StoreError;
pub use fixed_store::FixedStore;

#[cfg(any(test, feature = "test_utils"))]
pub use fixed_store::FixedStoreBehaviour;
