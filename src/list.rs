use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::error::ListError;
use crate::sort;

/// Capacity used by [`DynamicArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Capacity a list grows to when 1.5x growth would not add a slot (capacities 0 and 1).
pub const MIN_GROWTH: usize = 4;

/// An ordered list backed by a single owned, contiguous store.
///
/// The store is allocated with an exact logical capacity and is only replaced
/// when an `add` or `insert` finds it full. Capacity never shrinks, not even on
/// [`clear`](Self::clear).
pub struct DynamicArrayList<T> {
    items: Vec<T>,
    cap: usize,
}

impl<T> DynamicArrayList<T> {
    /// Creates an empty list with room for [`DEFAULT_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list with exactly `capacity` slots.
    ///
    /// A capacity of 0 is allowed; the first insertion grows the store.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            cap: capacity,
        }
    }

    /// Checked constructor for signed capacities.
    ///
    /// Returns [`ListError::InvalidArgument`] when `capacity` is negative or
    /// the store for it cannot be allocated.
    pub fn try_with_capacity(capacity: i64) -> Result<Self, ListError> {
        let invalid = ListError::InvalidArgument { capacity };
        let cap = usize::try_from(capacity).map_err(|_| invalid.clone())?;

        let mut items = Vec::new();
        items.try_reserve_exact(cap).map_err(|_| invalid)?;
        Ok(Self { items, cap })
    }

    /// Number of elements in the list.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of slots in the backing store.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Appends `value` at index `size()`, growing the store if it is full.
    ///
    /// Always returns `true`.
    pub fn add(&mut self, value: T) -> bool {
        if self.items.len() == self.cap {
            self.grow();
        }
        self.items.push(value);
        true
    }

    /// Returns the element at `index`, or `IndexOutOfRange` when `index >= size()`.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Mutable [`get`](Self::get); `index >= size()` returns `IndexOutOfRange`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Inserts `value` at `index`, shifting `[index, size)` one slot right.
    ///
    /// `index == size()` appends. The bound is checked before the store is
    /// touched, so a rejected call leaves the list as it was.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let len = self.items.len();
        if index > len {
            return Err(ListError::IndexOutOfRange { index, len });
        }
        if len == self.cap {
            self.grow();
        }
        self.items.insert(index, value);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// Unlike an append position, `index == size()` is rejected.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        let len = self.items.len();
        if index >= len {
            return Err(ListError::IndexOutOfRange { index, len });
        }
        Ok(self.items.remove(index))
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sorts the list in place with `compare`.
    ///
    /// Uses a last-element-pivot partition sort, so elements that compare
    /// `Equal` may change relative order.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        debug!("sorting {} elements", self.items.len());
        sort::quicksort(&mut self.items, &mut compare);
    }

    /// Sorts ascending by `T`'s natural order.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(Ord::cmp);
    }

    /// Copies the live elements out, in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    fn grow(&mut self) {
        let new_cap = grown_capacity(self.cap);
        trace!("growing list storage from {} to {} slots", self.cap, new_cap);

        let mut store = Vec::with_capacity(new_cap);
        store.extend(self.items.drain(..));
        self.items = store;
        self.cap = new_cap;
    }
}

/// 1.5x growth, with a floor for capacities where that adds nothing.
fn grown_capacity(cap: usize) -> usize {
    let grown = cap.saturating_add(cap / 2);
    if grown > cap {
        grown
    } else {
        MIN_GROWTH.max(cap.saturating_add(1))
    }
}

impl<T> Default for DynamicArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArrayList<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.cap);
        items.extend_from_slice(&self.items);
        Self {
            items,
            cap: self.cap,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for DynamicArrayList<T> {}

impl<T> Extend<T> for DynamicArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for DynamicArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
