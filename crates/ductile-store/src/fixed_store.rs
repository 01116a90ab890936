// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use core::num::NonZeroUsize;

use crate::error::StoreError;

/// Test behaviour for injecting failures in `FixedStore` operations.
///
/// This is only available with the `test_utils` feature and allows callers
/// to exercise error handling paths that a correct owner never reaches.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// #[cfg(test)]
/// mod tests {
///     use core::num::NonZeroUsize;
///     use ductile_store::{FixedStore, FixedStoreBehaviour};
///
///     #[test]
///     fn test_handles_set_failure() {
///         let mut store = FixedStore::new(NonZeroUsize::new(2).expect("non-zero"));
///         store.change_behaviour(FixedStoreBehaviour::FailAtSet);
///
///         // Fails even though the index is in range
///         assert!(store.set(0, 1u8).is_err());
///
///         store.change_behaviour(FixedStoreBehaviour::None);
///         assert!(store.set(0, 1u8).is_ok());
///     }
/// }
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FixedStoreBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// `get()` and `get_mut()` fail with `Vacant`.
    FailAtGet,
    /// `set()` fails with `OutOfRange`.
    FailAtSet,
    /// The next `n` calls to `set()` succeed, every later one fails with
    /// `OutOfRange`.
    FailAtSetAfter(usize),
    /// `take()` fails with `Vacant`.
    FailAtTake,
}

/// Fixed-length slot array with bounds-checked access.
///
/// Every slot is either vacant or holds exactly one value. The length is fixed
/// at construction; only [`FixedStore::relocate`] changes it, by swapping in a
/// whole new allocation.
///
/// # Example
///
/// ```rust
/// use core::num::NonZeroUsize;
/// use ductile_store::{FixedStore, StoreError};
///
/// fn example() -> Result<(), StoreError> {
///     let mut store = FixedStore::new(NonZeroUsize::new(3).expect("non-zero"));
///     store.set(0, 'a')?;
///     store.set(1, 'b')?;
///
///     assert_eq!(store.take(0)?, 'a');
///     assert_eq!(store.take(0), Err(StoreError::Vacant { index: 0 }));
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[derive(Clone)]
pub struct FixedStore<T> {
    slots: Box<[Option<T>]>,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: FixedStoreBehaviour,
}

impl<T> core::fmt::Debug for FixedStore<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FixedStore")
            .field("len", &self.len())
            .field("occupied", &self.occupied())
            .finish()
    }
}

impl<T> FixedStore<T> {
    /// Creates a store with `len` vacant slots.
    ///
    /// # Example
    ///
    /// ```rust
    /// use core::num::NonZeroUsize;
    /// use ductile_store::FixedStore;
    ///
    /// let store: FixedStore<u8> = FixedStore::new(NonZeroUsize::new(4).expect("non-zero"));
    /// assert_eq!(store.len(), 4);
    /// assert_eq!(store.occupied(), 0);
    /// ```
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            slots: core::iter::repeat_with(|| None).take(len.get()).collect(),
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: FixedStoreBehaviour::default(),
        }
    }

    /// Changes the failure injection behaviour.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: FixedStoreBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns the fixed number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: a store has at least one slot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of slots currently holding a value.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[inline(always)]
    fn check(&self, index: usize) -> Result<(), StoreError> {
        if index >= self.len() {
            return Err(StoreError::OutOfRange {
                index,
                len: self.len(),
            });
        }

        Ok(())
    }

    /// Returns `true` if the slot at `index` holds no value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::OutOfRange`] if `index >= len()`.
    pub fn is_vacant(&self, index: usize) -> Result<bool, StoreError> {
        self.check(index)?;
        Ok(self.slots[index].is_none())
    }

    /// Returns a reference to the value at `index`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::OutOfRange`] if `index >= len()`.
    /// - [`StoreError::Vacant`] if the slot holds no value.
    pub fn get(&self, index: usize) -> Result<&T, StoreError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, FixedStoreBehaviour::FailAtGet) {
            return Err(StoreError::Vacant { index });
        }

        self.check(index)?;
        self.slots[index]
            .as_ref()
            .ok_or(StoreError::Vacant { index })
    }

    /// Returns a mutable reference to the value at `index`.
    ///
    /// # Errors
    ///
    /// Same as [`FixedStore::get`].
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, StoreError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, FixedStoreBehaviour::FailAtGet) {
            return Err(StoreError::Vacant { index });
        }

        self.check(index)?;
        self.slots[index]
            .as_mut()
            .ok_or(StoreError::Vacant { index })
    }

    /// Writes `value` at `index`, dropping any value the slot held.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::OutOfRange`] if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), StoreError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(
            self.behaviour,
            FixedStoreBehaviour::FailAtSet | FixedStoreBehaviour::FailAtSetAfter(0)
        ) {
            return Err(StoreError::OutOfRange {
                index,
                len: self.len(),
            });
        }

        self.check(index)?;
        self.slots[index] = Some(value);

        #[cfg(any(test, feature = "test_utils"))]
        if let FixedStoreBehaviour::FailAtSetAfter(remaining) = self.behaviour {
            self.behaviour = FixedStoreBehaviour::FailAtSetAfter(remaining - 1);
        }

        Ok(())
    }

    /// Moves the value out of `index`, leaving the slot vacant.
    ///
    /// # Errors
    ///
    /// Same as [`FixedStore::get`].
    pub fn take(&mut self, index: usize) -> Result<T, StoreError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, FixedStoreBehaviour::FailAtTake) {
            return Err(StoreError::Vacant { index });
        }

        self.check(index)?;
        self.slots[index].take().ok_or(StoreError::Vacant { index })
    }

    /// Rotates the slots `start..=end` one position right: every slot moves up
    /// by one and the slot at `end` lands at `start`.
    ///
    /// Nothing is moved out along the way, so a rotation either happens as a
    /// whole or not at all. `start > end` is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::OutOfRange`] if `end >= len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use core::num::NonZeroUsize;
    /// use ductile_store::{FixedStore, StoreError};
    ///
    /// fn example() -> Result<(), StoreError> {
    ///     let mut store = FixedStore::new(NonZeroUsize::new(4).expect("non-zero"));
    ///     store.set(0, 'a')?;
    ///     store.set(1, 'b')?;
    ///     store.set(2, 'x')?;
    ///
    ///     store.rotate_right(0, 2)?;
    ///     assert_eq!(store.get(0), Ok(&'x'));
    ///     assert_eq!(store.get(2), Ok(&'b'));
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn rotate_right(&mut self, start: usize, end: usize) -> Result<(), StoreError> {
        self.check(end)?;

        if start <= end {
            self.slots[start..=end].rotate_right(1);
        }

        Ok(())
    }

    /// Rotates the slots `start..=end` one position left: every slot moves down
    /// by one and the slot at `start` lands at `end`.
    ///
    /// Inverse of [`FixedStore::rotate_right`] over the same range.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::OutOfRange`] if `end >= len()`.
    pub fn rotate_left(&mut self, start: usize, end: usize) -> Result<(), StoreError> {
        self.check(end)?;

        if start <= end {
            self.slots[start..=end].rotate_left(1);
        }

        Ok(())
    }

    /// Drops every value from `index` onwards, leaving those slots vacant.
    ///
    /// An `index` at or past `len()` leaves the store untouched.
    pub fn vacate_from(&mut self, index: usize) {
        if let Some(tail) = self.slots.get_mut(index..) {
            tail.fill_with(|| None);
        }
    }

    /// Swaps the backing allocation for a new one of `new_len` slots.
    ///
    /// The first `keep` slots (clamped to `new_len`) are carried over in order,
    /// everything else in the new allocation is vacant. The old allocation is
    /// dropped as a whole, together with any slot beyond `keep`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use core::num::NonZeroUsize;
    /// use ductile_store::{FixedStore, StoreError};
    ///
    /// fn example() -> Result<(), StoreError> {
    ///     let mut store = FixedStore::new(NonZeroUsize::new(2).expect("non-zero"));
    ///     store.set(0, 1u16)?;
    ///     store.set(1, 2u16)?;
    ///
    ///     store.relocate(2, NonZeroUsize::new(4).expect("non-zero"));
    ///     assert_eq!(store.len(), 4);
    ///     assert_eq!(store.get(1), Ok(&2));
    ///     assert_eq!(store.get(2), Err(StoreError::Vacant { index: 2 }));
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn relocate(&mut self, keep: usize, new_len: NonZeroUsize) {
        let keep = keep.min(self.len()).min(new_len.get());

        let mut old = core::mem::take(&mut self.slots).into_vec();
        old.truncate(keep);

        self.slots = old
            .into_iter()
            .chain(core::iter::repeat_with(|| None))
            .take(new_len.get())
            .collect();
    }
}
