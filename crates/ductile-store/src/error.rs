// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for ductile-store.

use thiserror::Error;

/// Error type for `FixedStore` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum StoreError {
    /// Index is outside the fixed length of the store.
    #[error("index {index} out of range for store of length {len}")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Fixed length of the store.
        len: usize,
    },

    /// The slot exists but holds no value (never written, or moved out).
    #[error("slot {index} is vacant")]
    Vacant {
        /// Requested index.
        index: usize,
    },
}
