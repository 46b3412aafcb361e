//! # pv-collections
//!
//! Typed iteration for polyvisit: the [`Cursor`] iteration protocol, the
//! [`Aggregate`] random-access contract, the [`ForwardIterator`] built on it
//! and the [`TypedCollection`] that hands out fresh iterators on demand.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Indexable aggregate contract (`size` / `get`).
pub mod aggregate;

/// The `has_next` / `next` iteration protocol.
pub mod cursor;

/// Forward cursor over any aggregate.
pub mod forward_iterator;

/// Insertion-ordered typed collection.
pub mod typed_collection;

pub use aggregate::Aggregate;
pub use cursor::{drain, Cursor};
pub use forward_iterator::{ForwardIterator, Values};
pub use typed_collection::TypedCollection;
