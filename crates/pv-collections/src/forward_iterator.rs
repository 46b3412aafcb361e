//! Forward iteration over any [`Aggregate`].
//!
//! A [`ForwardIterator`] is the state machine `Active(k)` for `k` in
//! `[0, size]`: it starts at `Active(0)`, each successful
//! [`next`](Cursor::next) moves from `Active(k)` to `Active(k + 1)`, and
//! `Active(size)` is terminal.  It holds a shared borrow of the aggregate and
//! the cursor position, nothing else; elements are read through
//! [`Aggregate::get`] one at a time and the storage is never copied.

use std::fmt;
use std::marker::PhantomData;

use pv_core::{Error, Result};

use crate::aggregate::Aggregate;
use crate::cursor::Cursor;

/// A single-pass cursor bound to one aggregate.
///
/// Several forward iterators over the same aggregate each keep their own
/// position and never interfere.  The iterator cannot outlive the aggregate
/// it borrows.
pub struct ForwardIterator<'a, T, A: ?Sized> {
    aggregate: &'a A,
    cursor: usize,
    _item: PhantomData<fn() -> T>,
}

impl<'a, T, A: Aggregate<T> + ?Sized> ForwardIterator<'a, T, A> {
    /// Create an iterator positioned before the first element of
    /// `aggregate`.
    ///
    /// Equivalent to [`Aggregate::create_iterator`] without the boxing.
    pub fn new(aggregate: &'a A) -> Self {
        Self {
            aggregate,
            cursor: 0,
            _item: PhantomData,
        }
    }

    /// The current cursor position (number of successful `next` calls).
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Adapt into a `std::iter::Iterator` over the remaining elements.
    ///
    /// Each item is the result of one [`Cursor::next`] call.  The adaptor
    /// ends at the terminal state, or right after yielding the first error,
    /// so `collect::<Result<Vec<_>>>()` either returns every remaining
    /// element or the error that stopped the walk.
    pub fn values(self) -> Values<'a, T, A> {
        Values {
            inner: self,
            failed: false,
        }
    }
}

impl<T, A: Aggregate<T> + ?Sized> Cursor<T> for ForwardIterator<'_, T, A> {
    fn has_next(&self) -> bool {
        self.cursor < self.aggregate.size()
    }

    fn next(&mut self) -> Result<T> {
        if !self.has_next() {
            return Err(Error::OutOfElements {
                position: self.cursor,
            });
        }
        let value = self.aggregate.get(self.cursor)?;
        self.cursor += 1;
        Ok(value)
    }
}

impl<T, A: ?Sized> fmt::Debug for ForwardIterator<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardIterator")
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

/// `std::iter::Iterator` adaptor returned by [`ForwardIterator::values`].
#[derive(Debug)]
pub struct Values<'a, T, A: ?Sized> {
    inner: ForwardIterator<'a, T, A>,
    failed: bool,
}

impl<T, A: Aggregate<T> + ?Sized> Iterator for Values<'_, T, A> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        if self.failed || !self.inner.has_next() {
            return None;
        }
        let item = Cursor::next(&mut self.inner);
        self.failed = item.is_err();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = self.inner.aggregate.size().saturating_sub(self.inner.cursor);
        // An error from `get` ends the walk early.
        (remaining.min(1), Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_states_to_terminal() {
        let data = [1, 2];
        let mut it = ForwardIterator::new(&data[..]);
        assert_eq!(it.position(), 0);
        assert!(it.has_next());
        assert_eq!(it.next(), Ok(1));
        assert_eq!(it.position(), 1);
        assert_eq!(it.next(), Ok(2));
        assert_eq!(it.position(), 2);
        assert!(!it.has_next());
        assert_eq!(it.next(), Err(Error::OutOfElements { position: 2 }));
        // Failing calls never move the cursor.
        assert_eq!(it.position(), 2);
        assert_eq!(it.next(), Err(Error::OutOfElements { position: 2 }));
    }

    #[test]
    fn has_next_is_pure() {
        let data = ['x'];
        let it = ForwardIterator::new(&data[..]);
        for _ in 0..5 {
            assert!(it.has_next());
        }
        assert_eq!(it.position(), 0);
    }

    #[test]
    fn values_resumes_from_cursor() {
        let data = [1, 2, 3, 4];
        let mut it = ForwardIterator::new(&data[..]);
        it.next().unwrap();
        let rest = it.values();
        assert_eq!(rest.size_hint(), (1, Some(3)));
        assert_eq!(rest.collect::<Result<Vec<_>>>(), Ok(vec![2, 3, 4]));
    }

    /// Reports three elements but cannot read the second one.
    struct Unreadable;

    impl Aggregate<u32> for Unreadable {
        fn size(&self) -> usize {
            3
        }

        fn get(&self, index: usize) -> Result<u32> {
            if index == 1 {
                return Err(Error::Runtime("read failed".into()));
            }
            Ok(index as u32 * 10)
        }

        fn create_iterator(&self) -> Box<dyn Cursor<u32> + '_> {
            Box::new(ForwardIterator::new(self))
        }
    }

    #[test]
    fn values_surfaces_read_error_and_stops() {
        let mut values = ForwardIterator::new(&Unreadable).values();
        assert_eq!(values.next(), Some(Ok(0)));
        assert_eq!(
            values.next(),
            Some(Err(Error::Runtime("read failed".into())))
        );
        assert_eq!(values.next(), None);
        assert_eq!(values.size_hint(), (0, Some(0)));
    }

    #[test]
    fn values_collect_reports_read_error() {
        let collected: Result<Vec<u32>> = ForwardIterator::new(&Unreadable).values().collect();
        assert_eq!(collected, Err(Error::Runtime("read failed".into())));
    }

    #[test]
    fn cursor_next_keeps_position_on_read_error() {
        let mut it = ForwardIterator::new(&Unreadable);
        assert_eq!(it.next(), Ok(0));
        assert!(it.next().is_err());
        assert_eq!(it.position(), 1);
        assert!(it.has_next());
    }

    #[test]
    fn works_over_dyn_aggregate() {
        let data = vec![String::from("a"), String::from("b")];
        let aggregate: &dyn Aggregate<String> = &data;
        let mut it = ForwardIterator::new(aggregate);
        assert_eq!(it.next().unwrap(), "a");
        assert_eq!(it.next().unwrap(), "b");
        assert!(!it.has_next());
    }
}
