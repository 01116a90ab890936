// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Iterators over [`DynArray`].
//!
//! Both iterators read through the checked accessors and report the end of
//! the sequence with `None` instead of failing past the last live index.
//! A vacant slot inside the live range is a broken invariant, asserted in
//! debug builds.

use core::iter::FusedIterator;

use crate::dyn_array::DynArray;

/// Borrowing iterator returned by [`DynArray::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    array: &'a DynArray<T>,
    index: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(array: &'a DynArray<T>) -> Self {
        Self { array, index: 0 }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            array: self.array,
            index: self.index,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.array.get(self.index) {
            Ok(value) => {
                self.index += 1;
                Some(value)
            }
            Err(_) => {
                debug_assert!(
                    !self.array.is_hole(self.index),
                    "vacant slot {} inside live range of length {}",
                    self.index,
                    self.array.len()
                );
                self.index = self.array.len();
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator returned by `DynArray::into_iter`.
///
/// Values are moved out of the store front to back; whatever is left when the
/// iterator is dropped goes with it.
#[derive(Debug)]
pub struct IntoIter<T> {
    array: DynArray<T>,
    index: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(array: DynArray<T>) -> Self {
        Self { array, index: 0 }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.array.take_slot(self.index) {
            Ok(value) => {
                self.index += 1;
                Some(value)
            }
            Err(_) => {
                debug_assert!(
                    !self.array.is_hole(self.index),
                    "vacant slot {} inside live range of length {}",
                    self.index,
                    self.array.len()
                );
                self.index = self.array.len();
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
