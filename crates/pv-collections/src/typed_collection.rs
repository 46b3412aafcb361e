//! An insertion-ordered, growable collection of `T`.

use std::any::type_name;

use pv_core::logging::{self, LifecycleEvent};
use pv_core::{Error, Result};

use crate::aggregate::Aggregate;
use crate::cursor::Cursor;
use crate::forward_iterator::ForwardIterator;

/// A growable sequence of values of one element type, readable through
/// [`Aggregate`] and iterable through fresh, independent cursors.
///
/// Values can only be appended; there is no removal.  `size()` therefore
/// always equals the number of [`add`](Self::add) calls, and `get(i)` returns
/// the `i`-th added value.
///
/// # Example
/// ```
/// use pv_collections::{Aggregate, Cursor, TypedCollection};
///
/// let mut collection = TypedCollection::new();
/// for v in 1..=5 {
///     collection.add(v);
/// }
///
/// let mut it = collection.create_iterator();
/// let mut seen = Vec::new();
/// while it.has_next() {
///     seen.push(it.next().unwrap().to_string());
/// }
/// assert_eq!(seen.join(" "), "1 2 3 4 5");
/// assert!(collection.get(5).is_err());
/// ```
#[derive(Debug)]
pub struct TypedCollection<T> {
    items: Vec<T>,
}

impl<T> TypedCollection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Create an empty collection with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_vec(Vec::with_capacity(capacity))
    }

    fn from_vec(items: Vec<T>) -> Self {
        logging::lifecycle("collection", type_name::<T>(), LifecycleEvent::Created);
        Self { items }
    }

    /// Append `value` at the end.  Amortized O(1), never fails.
    pub fn add(&mut self, value: T) {
        self.items.push(value);
    }

    /// Number of values (same as [`Aggregate::size`]).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Return `true` if nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the values in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> TypedCollection<T> {
    /// An unboxed forward iterator over this collection.
    pub fn iter_forward(&self) -> ForwardIterator<'_, T, Self> {
        ForwardIterator::new(self)
    }
}

impl<T: Clone> Aggregate<T> for TypedCollection<T> {
    fn size(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Result<T> {
        <[T]>::get(&self.items, index)
            .cloned()
            .ok_or(Error::IndexOutOfRange {
                index,
                size: self.items.len(),
            })
    }

    fn create_iterator(&self) -> Box<dyn Cursor<T> + '_> {
        Box::new(self.iter_forward())
    }
}

impl<T> Default for TypedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for TypedCollection<T> {
    fn clone(&self) -> Self {
        Self::from_vec(self.items.clone())
    }
}

impl<T> FromIterator<T> for TypedCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for TypedCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> Drop for TypedCollection<T> {
    fn drop(&mut self) {
        logging::lifecycle("collection", type_name::<T>(), LifecycleEvent::Destroyed);
    }
}
