//! The indexable aggregate contract.
//!
//! [`size`](Aggregate::size) and [`get`](Aggregate::get) are the only
//! primitives a cursor may assume about an aggregate.  Storage stays private,
//! so it can change without touching the iteration contract; slices and
//! `Vec` implement the trait directly as alternative representations.

use pv_core::{Error, Result};

use crate::cursor::Cursor;
use crate::forward_iterator::ForwardIterator;

/// A sized, randomly readable sequence of `T`.
///
/// Mutating an aggregate while a cursor built on it is outstanding is a
/// precondition violation.  For the implementations in this crate the borrow
/// checker rejects it: cursors hold a shared borrow of the aggregate.
pub trait Aggregate<T> {
    /// Number of elements.
    fn size(&self) -> usize;

    /// The element at `index`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index >= self.size()`.
    fn get(&self, index: usize) -> Result<T>;

    /// A new forward cursor positioned before the first element.
    ///
    /// Every call returns an independent cursor; the aggregate neither tracks
    /// nor limits how many are outstanding.
    fn create_iterator(&self) -> Box<dyn Cursor<T> + '_>;

    /// Return `true` if the aggregate has no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<T: Clone> Aggregate<T> for [T] {
    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Result<T> {
        <[T]>::get(self, index)
            .cloned()
            .ok_or(Error::IndexOutOfRange {
                index,
                size: self.len(),
            })
    }

    fn create_iterator(&self) -> Box<dyn Cursor<T> + '_> {
        Box::new(ForwardIterator::new(self))
    }
}

impl<T: Clone> Aggregate<T> for Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Result<T> {
        Aggregate::get(self.as_slice(), index)
    }

    fn create_iterator(&self) -> Box<dyn Cursor<T> + '_> {
        Box::new(ForwardIterator::new(self))
    }
}
