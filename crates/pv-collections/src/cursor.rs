//! The iteration protocol.
//!
//! A [`Cursor`] pulls the elements of one sequence, one at a time, through
//! exactly two operations: [`has_next`](Cursor::has_next) and
//! [`next`](Cursor::next).  Advancing past the end is a usage error reported
//! as [`Error::OutOfElements`](pv_core::Error::OutOfElements), never as a
//! sentinel value.
//!
//! The protocol is deliberately distinct from `std::iter::Iterator`, whose
//! `next` folds "exhausted" into `None`.  Concrete cursors offer an adaptor
//! to `std::iter::Iterator` where that is more convenient (see
//! [`ForwardIterator::values`](crate::ForwardIterator::values)).

use pv_core::Result;

/// A single-pass cursor over elements of type `T`.
pub trait Cursor<T> {
    /// Return `true` if [`next`](Self::next) can be called without error.
    ///
    /// Never changes the cursor position.
    fn has_next(&self) -> bool;

    /// Return the element at the cursor and advance by one.
    ///
    /// # Errors
    /// [`Error::OutOfElements`](pv_core::Error::OutOfElements) if
    /// [`has_next`](Self::has_next) is `false`.
    fn next(&mut self) -> Result<T>;
}

impl<T, C: Cursor<T> + ?Sized> Cursor<T> for Box<C> {
    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<T> {
        (**self).next()
    }
}

impl<T, C: Cursor<T> + ?Sized> Cursor<T> for &mut C {
    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<T> {
        (**self).next()
    }
}

/// Drain `cursor` into a `Vec`, pulling until `has_next` turns `false`.
///
/// # Errors
/// Propagates the first error returned by [`Cursor::next`].
pub fn drain<T, C: Cursor<T> + ?Sized>(cursor: &mut C) -> Result<Vec<T>> {
    let mut out = Vec::new();
    while cursor.has_next() {
        out.push(cursor.next()?);
    }
    Ok(out)
}
