// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::num::NonZeroUsize;

use ductile_store::FixedStore;

use crate::error::SequenceError;
use crate::iter::{IntoIter, Iter};
use crate::policy;

/// A growable sequence over a [`FixedStore`].
///
/// `DynArray` tracks a logical `len` and an allocated `capacity` (the length of
/// its store). Slots `[0, len)` hold the live elements in order; slots
/// `[len, capacity)` are vacant and never read.
///
/// - A full store is doubled before an element is added.
/// - On removal, a store less than a quarter full and larger than
///   [`SHRINK_FLOOR`](policy::SHRINK_FLOOR) shrinks to
///   `max(SHRINK_FLOOR, 2 * len)`, using the length before the removal.
/// - Every index check happens before the store is touched.
///
/// # Example
///
/// ```rust
/// use ductile_seq::{DynArray, SequenceError};
///
/// fn example() -> Result<(), SequenceError> {
///     let mut array = DynArray::new();
///     assert_eq!(array.capacity(), 4);
///
///     for value in 0..5u32 {
///         array.append(value)?;
///     }
///     assert_eq!(array.len(), 5);
///     assert_eq!(array.capacity(), 8);
///
///     array.insert_at(0, 100)?;
///     assert_eq!(array.remove_at(1)?, 0);
///     assert_eq!(array.to_vec(), [100, 1, 2, 3, 4]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[derive(Clone)]
pub struct DynArray<T> {
    size: usize,
    store: FixedStore<T>,
}

impl<T> DynArray<T> {
    /// Creates an empty sequence with [`INITIAL_CAPACITY`](policy::INITIAL_CAPACITY) slots.
    pub fn new() -> Self {
        Self {
            size: 0,
            store: FixedStore::new(policy::INITIAL_LEN),
        }
    }

    /// Builds a sequence by appending every value of `values` in order.
    ///
    /// Capacity converges by doubling, exactly as repeated [`append`](Self::append)
    /// would; no single allocation is sized to the input.
    ///
    /// ```rust
    /// use ductile_seq::DynArray;
    ///
    /// let array = DynArray::from_values([1, 2, 3, 4, 5, 6, 7, 8]).expect("Failed to from_values(..)");
    /// assert_eq!(array.len(), 8);
    /// assert_eq!(array.capacity(), 8);
    /// ```
    pub fn from_values<I>(values: I) -> Result<Self, SequenceError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut array = Self::new();

        for value in values {
            array.append(value)?;
        }

        Ok(array)
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    #[inline(always)]
    fn check_index(&self, index: usize) -> Result<(), SequenceError> {
        if index >= self.size {
            return Err(SequenceError::OutOfRange {
                index,
                len: self.size,
            });
        }

        Ok(())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, SequenceError> {
        self.check_index(index)?;
        Ok(self.store.get(index)?)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`] if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, SequenceError> {
        self.check_index(index)?;
        Ok(self.store.get_mut(index)?)
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`] if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        self.check_index(index)?;
        self.store.set(index, value)?;
        Ok(())
    }

    /// Returns the first element, if any.
    pub fn first(&self) -> Option<&T> {
        self.get(0).ok()
    }

    /// Returns the last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.size.checked_sub(1).and_then(|index| self.get(index).ok())
    }

    /// Reallocates the store to exactly `new_capacity` slots, keeping the live
    /// elements in order.
    ///
    /// Silently does nothing unless `new_capacity > len()` and `len() > 0`:
    /// resizing never truncates and is inert on an empty sequence.
    ///
    /// ```rust
    /// use ductile_seq::DynArray;
    ///
    /// let mut array = DynArray::from_values([1, 2, 3]).expect("Failed to from_values(..)");
    ///
    /// array.resize(16);
    /// assert_eq!(array.capacity(), 16);
    ///
    /// array.resize(2); // below len: ignored
    /// assert_eq!(array.capacity(), 16);
    ///
    /// let mut empty: DynArray<u8> = DynArray::new();
    /// empty.resize(8); // empty: ignored
    /// assert_eq!(empty.capacity(), 4);
    /// ```
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity <= self.size || self.size == 0 {
            return;
        }

        let Some(new_len) = NonZeroUsize::new(new_capacity) else {
            return;
        };

        log::trace!(
            "relocating store: capacity {} -> {} ({} live)",
            self.capacity(),
            new_capacity,
            self.size
        );

        self.store.relocate(self.size, new_len);
    }

    #[inline(always)]
    fn grow_if_full(&mut self) {
        if self.size == self.capacity() {
            self.resize(policy::grown_capacity(self.capacity()));
        }
    }

    /// Appends `value` at the end, doubling the capacity first if full.
    pub fn append(&mut self, value: T) -> Result<(), SequenceError> {
        self.grow_if_full();

        self.store.set(self.size, value)?;
        self.size += 1;

        Ok(())
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len()` appends. On error the elements are unchanged, though
    /// a full store may already have been doubled.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`] if `index > len()`.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        if index > self.size {
            return Err(SequenceError::OutOfRange {
                index,
                len: self.size,
            });
        }

        self.grow_if_full();

        // Park the value in the first vacant slot, then rotate it into place.
        self.store.set(self.size, value)?;
        self.store.rotate_right(index, self.size)?;
        self.size += 1;

        Ok(())
    }

    /// Removes and returns the element at `index`, shifting `(index, len)` one
    /// slot left.
    ///
    /// The shrink policy runs before the shift, with the pre-removal length.
    /// On error the elements are unchanged, though the store may already have
    /// shrunk.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`] if `index >= len()`.
    ///
    /// ```rust
    /// use ductile_seq::DynArray;
    ///
    /// let mut array = DynArray::from_values(0..100).expect("Failed to from_values(..)");
    /// for _ in 0..69 {
    ///     array.remove_at(0).expect("Failed to remove_at(..)");
    /// }
    /// assert_eq!((array.len(), array.capacity()), (31, 128));
    ///
    /// // 31 live of 128 slots: shrink to 2 * 31 before removing
    /// array.remove_at(0).expect("Failed to remove_at(..)");
    /// assert_eq!((array.len(), array.capacity()), (30, 62));
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, SequenceError> {
        self.check_index(index)?;

        if let Some(target) = policy::shrink_target(self.size, self.capacity()) {
            log::debug!(
                "shrinking store: {} live of {} slots, target {}",
                self.size,
                self.capacity(),
                target
            );
            self.resize(target);
        }

        let last = self.size - 1;
        self.store.rotate_left(index, last)?;

        match self.store.take(last) {
            Ok(removed) => {
                self.size = last;
                Ok(removed)
            }
            Err(err) => {
                self.store.rotate_right(index, last)?;
                Err(err.into())
            }
        }
    }

    /// Returns a new sequence holding copies of `length` elements from `start`.
    ///
    /// The copy is built by repeated append, so its capacity follows the usual
    /// growth rules.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::OutOfRange`] if `start >= len()`, even when `length == 0`.
    /// - [`SequenceError::InvalidArgument`] if `start + length > len()`.
    pub fn slice(&self, start: usize, length: usize) -> Result<Self, SequenceError>
    where
        T: Clone,
    {
        if start >= self.size {
            return Err(SequenceError::OutOfRange {
                index: start,
                len: self.size,
            });
        }

        let end = start
            .checked_add(length)
            .filter(|end| *end <= self.size)
            .ok_or(SequenceError::InvalidArgument {
                start,
                length,
                len: self.size,
            })?;

        let mut slice = Self::new();

        for index in start..end {
            slice.append(self.get(index)?.clone())?;
        }

        Ok(slice)
    }

    /// Appends copies of every element of `other`, in order.
    ///
    /// Either every element is appended or, on error, none is.
    pub fn merge(&mut self, other: &Self) -> Result<(), SequenceError>
    where
        T: Clone,
    {
        let len = self.size;
        let result = other.iter().try_for_each(|value| self.append(value.clone()));

        self.rollback_on_err(len, result)
    }

    /// Appends a copy of the sequence onto itself: `[a, b, c]` becomes
    /// `[a, b, c, a, b, c]`.
    ///
    /// The source length is captured before the first append. Either every
    /// element is appended or, on error, none is.
    pub fn merge_self(&mut self) -> Result<(), SequenceError>
    where
        T: Clone,
    {
        let len = self.size;
        let result = (0..len).try_for_each(|index| {
            let value = self.get(index)?.clone();
            self.append(value)
        });

        self.rollback_on_err(len, result)
    }

    /// Drops everything appended past `len` if `result` is an error.
    fn rollback_on_err(
        &mut self,
        len: usize,
        result: Result<(), SequenceError>,
    ) -> Result<(), SequenceError> {
        if result.is_err() {
            self.store.vacate_from(len);
            self.size = len;
        }

        result
    }

    /// Returns a new sequence with `f` applied to every element, in order.
    ///
    /// ```rust
    /// use ductile_seq::DynArray;
    ///
    /// let array = DynArray::from_values([1, 5, 10]).expect("Failed to from_values(..)");
    /// let squares = array.map(|x| x * x).expect("Failed to map(..)");
    ///
    /// assert_eq!(squares.to_vec(), [1, 25, 100]);
    /// assert_eq!(array.to_vec(), [1, 5, 10]);
    /// ```
    pub fn map<U, F>(&self, mut f: F) -> Result<DynArray<U>, SequenceError>
    where
        F: FnMut(&T) -> U,
    {
        let mut mapped = DynArray::new();

        for index in 0..self.size {
            mapped.append(f(self.get(index)?))?;
        }

        Ok(mapped)
    }

    /// Returns a new sequence with copies of the elements matching `predicate`, in order.
    pub fn filter<P>(&self, mut predicate: P) -> Result<Self, SequenceError>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let mut filtered = Self::new();

        for index in 0..self.size {
            let value = self.get(index)?;
            if predicate(value) {
                filtered.append(value.clone())?;
            }
        }

        Ok(filtered)
    }

    /// Folds the elements left to right.
    ///
    /// With `initial`, folding starts at the first element. Without it, the
    /// first element seeds the accumulator and folding starts at the second.
    /// An empty sequence yields `initial` (`None` when absent).
    ///
    /// ```rust
    /// use ductile_seq::DynArray;
    ///
    /// let array = DynArray::from_values([100, 5, 10]).expect("Failed to from_values(..)");
    /// assert_eq!(array.reduce(|acc, x| acc + x, None), Some(115));
    /// assert_eq!(array.reduce(|acc, x| acc + x, Some(-1)), Some(114));
    ///
    /// let empty: DynArray<i32> = DynArray::new();
    /// assert_eq!(empty.reduce(|acc, x| acc + x, None), None);
    /// assert_eq!(empty.reduce(|acc, x| acc + x, Some(-1)), Some(-1));
    /// ```
    pub fn reduce<F>(&self, f: F, initial: Option<T>) -> Option<T>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let mut values = self.iter();

        let seed = match initial {
            Some(initial) => initial,
            None => values.next()?.clone(),
        };

        Some(values.fold(seed, f))
    }

    /// Folds the elements left to right into an accumulator of any type.
    pub fn fold<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter().fold(init, f)
    }

    /// Returns an iterator over the live elements.
    ///
    /// Each call starts from the first element.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Copies the live elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &FixedStore<T> {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn change_store_behaviour(&mut self, behaviour: ductile_store::FixedStoreBehaviour) {
        self.store.change_behaviour(behaviour);
    }

    /// `true` if `index` is live but its slot holds no value.
    pub(crate) fn is_hole(&self, index: usize) -> bool {
        index < self.size && matches!(self.store.is_vacant(index), Ok(true))
    }

    pub(crate) fn take_slot(&mut self, index: usize) -> Result<T, SequenceError> {
        self.check_index(index)?;
        Ok(self.store.take(index)?)
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        // Capacity is not part of the value
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynArray<T> {}

struct LiveElements<'a, T>(&'a DynArray<T>);

impl<T: core::fmt::Debug> core::fmt::Debug for LiveElements<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DynArray")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("data", &LiveElements(self))
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
