//! # pv-zoo
//!
//! Double-dispatch visitation over an owned, heterogeneous structure.
//!
//! * [`Animal`] is the element capability, with the closed variant set
//!   [`Lion`] and [`Tiger`].
//! * [`AnimalVisitor`] is the visitor protocol: one
//!   [`Visitor<T>`](pv_core::Visitor) operation per variant.
//! * [`Zoo`] owns its animals and drives a visitor across all of them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Element capability and its concrete variants.
pub mod animal;

/// Visitor protocol and the feeding visitor.
pub mod visitor;

/// The owning object structure.
pub mod zoo;

pub use animal::{Animal, Lion, Tiger};
pub use visitor::{AnimalVisitor, FeedingVisitor};
pub use zoo::Zoo;
