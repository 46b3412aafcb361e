//! Error types for polyvisit.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below.  Visitor
//! operations that need to give up with a message use the [`fail!`] macro.
//!
//! [`fail!`]: crate::fail

use thiserror::Error;

/// The top-level error type used throughout polyvisit.
///
/// Both indexing and iteration errors are precondition violations: they are
/// raised at the offending call and never retried or replaced by a default
/// value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error (raised by [`fail!`](crate::fail)).
    #[error("{0}")]
    Runtime(String),

    /// An aggregate was indexed outside `[0, size)`.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: usize,
        /// The size of the aggregate.
        size: usize,
    },

    /// An iterator was advanced past its terminal state.
    #[error("no more elements (cursor at {position})")]
    OutOfElements {
        /// The cursor position at which `next` was called.
        position: usize,
    },
}

/// Shorthand `Result` type used throughout polyvisit.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use pv_core::{fail, errors::Error};
/// fn always_err() -> pv_core::errors::Result<()> {
///     fail!("visitor gave up on {}", "Shere Khan");
/// }
/// assert_eq!(always_err(), Err(Error::Runtime("visitor gave up on Shere Khan".into())));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
