//! The visitable element family.
//!
//! The family is closed: [`Lion`] and [`Tiger`] are its only variants.  Both
//! implement [`Animal`], whose single operation [`accept`](Animal::accept)
//! performs the first dispatch (through the `dyn Animal` vtable).  Each
//! variant's `accept` body then calls the [`Visitor`] operation for its own
//! concrete type, which is the second dispatch, resolved at compile time by
//! `Self` rather than by the visitor's runtime type.
//!
//! Adding a variant means adding a `Visitor<NewVariant>` supertrait to
//! [`AnimalVisitor`] and updating every concrete visitor.

use std::fmt;

use pv_core::logging::{self, LifecycleEvent};
use pv_core::{Result, Visitor};

use crate::visitor::AnimalVisitor;

/// The common capability of every element in a [`Zoo`](crate::Zoo).
///
/// `accept` never mutates the element, and visitors only ever see the
/// concrete variant through a shared reference.
pub trait Animal: fmt::Debug {
    /// The variant's kind, e.g. `"lion"`.
    fn kind(&self) -> &'static str;

    /// The name given at construction.
    fn name(&self) -> &str;

    /// Call back into the `visitor` operation matching this element's
    /// concrete variant.
    ///
    /// # Errors
    /// Whatever the visitor operation returns, unchanged.
    fn accept(&self, visitor: &mut dyn AnimalVisitor) -> Result<()>;
}

/// A lion.
#[derive(Debug)]
pub struct Lion {
    name: String,
}

impl Lion {
    /// Create a lion called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        logging::lifecycle("lion", &name, LifecycleEvent::Created);
        Self { name }
    }

    /// The lion's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Animal for Lion {
    fn kind(&self) -> &'static str {
        "lion"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn accept(&self, visitor: &mut dyn AnimalVisitor) -> Result<()> {
        Visitor::<Lion>::visit(visitor, self)
    }
}

impl Drop for Lion {
    fn drop(&mut self) {
        logging::lifecycle("lion", &self.name, LifecycleEvent::Destroyed);
    }
}

/// A tiger.
#[derive(Debug)]
pub struct Tiger {
    name: String,
}

impl Tiger {
    /// Create a tiger called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        logging::lifecycle("tiger", &name, LifecycleEvent::Created);
        Self { name }
    }

    /// The tiger's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Animal for Tiger {
    fn kind(&self) -> &'static str {
        "tiger"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn accept(&self, visitor: &mut dyn AnimalVisitor) -> Result<()> {
        Visitor::<Tiger>::visit(visitor, self)
    }
}

impl Drop for Tiger {
    fn drop(&mut self) {
        logging::lifecycle("tiger", &self.name, LifecycleEvent::Destroyed);
    }
}
