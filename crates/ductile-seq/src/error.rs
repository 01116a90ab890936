// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for ductile-seq.

use ductile_store::StoreError;
use thiserror::Error;

/// Error type for `DynArray` operations.
///
/// Every check happens before the sequence is touched and store failures are
/// rolled back: an `Err` means the operation did not happen.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum SequenceError {
    /// Index outside the valid logical range of the sequence.
    #[error("index {index} out of range for sequence of length {len}")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Logical length of the sequence.
        len: usize,
    },

    /// Slice length does not fit in the sequence from the given start.
    #[error("invalid slice: {length} elements from {start} exceed length {len}")]
    InvalidArgument {
        /// Requested start index.
        start: usize,
        /// Requested number of elements.
        length: usize,
        /// Logical length of the sequence.
        len: usize,
    },

    /// The backing store rejected an access.
    #[error("StoreError: {0}")]
    Store(#[from] StoreError),
}
