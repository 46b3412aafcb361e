//! # polyvisit
//!
//! Typed iteration and double-dispatch visitation over owned heterogeneous
//! structures.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `pv-*` crates.
//!
//! ## Quick start
//!
//! Pull elements out of a typed collection:
//!
//! ```rust
//! use polyvisit::collections::{Aggregate, Cursor, TypedCollection};
//!
//! let collection: TypedCollection<i32> = (1..=5).collect();
//! let mut it = collection.create_iterator();
//! let mut total = 0;
//! while it.has_next() {
//!     total += it.next()?;
//! }
//! assert_eq!(total, 15);
//! # Ok::<(), polyvisit::core::Error>(())
//! ```
//!
//! Push a visitor through an owning structure:
//!
//! ```rust
//! use polyvisit::core::{Result, Visitor};
//! use polyvisit::zoo::{Lion, Tiger, Zoo};
//!
//! #[derive(Default)]
//! struct Census {
//!     lions: usize,
//!     tigers: usize,
//! }
//!
//! impl Visitor<Lion> for Census {
//!     fn visit(&mut self, _lion: &Lion) -> Result<()> {
//!         self.lions += 1;
//!         Ok(())
//!     }
//! }
//!
//! impl Visitor<Tiger> for Census {
//!     fn visit(&mut self, _tiger: &Tiger) -> Result<()> {
//!         self.tigers += 1;
//!         Ok(())
//!     }
//! }
//!
//! let mut zoo = Zoo::new();
//! zoo.add(Lion::new("Simba"));
//! zoo.add(Lion::new("Mufasa"));
//! zoo.add(Tiger::new("Shere Khan"));
//!
//! let mut census = Census::default();
//! zoo.accept(&mut census)?;
//! assert_eq!((census.lions, census.tigers), (2, 1));
//! # Ok::<(), polyvisit::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, settings, logging targets and pattern traits.
pub use pv_core as core;

/// Iteration protocol, aggregates and typed collections.
pub use pv_collections as collections;

/// Visitable animals, the visitor protocol and the owning zoo.
pub use pv_zoo as zoo;

pub use pv_core::{Error, Result};
