//! Visitor pattern building block.
//!
//! A visitor's per-variant operations are expressed as one
//! [`Visitor<T>`] implementation per visited type `T`.  A closed visitor
//! protocol is then simply a trait whose supertraits are `Visitor<A> +
//! Visitor<B> + ...` for every variant of the element family; a concrete
//! visitor that forgets one variant fails to implement the protocol and is
//! rejected at compile time.
//!
//! Elements select the matching operation from inside their own `accept`
//! body, where `Self` is known statically:
//!
//! ```
//! use pv_core::patterns::visitor::Visitor;
//! use pv_core::Result;
//!
//! struct Leaf(u32);
//!
//! impl Leaf {
//!     fn accept(&self, visitor: &mut dyn Visitor<Leaf>) -> Result<()> {
//!         visitor.visit(self)
//!     }
//! }
//!
//! struct Sum(u32);
//!
//! impl Visitor<Leaf> for Sum {
//!     fn visit(&mut self, leaf: &Leaf) -> Result<()> {
//!         self.0 += leaf.0;
//!         Ok(())
//!     }
//! }
//!
//! let mut sum = Sum(0);
//! Leaf(3).accept(&mut sum).unwrap();
//! Leaf(4).accept(&mut sum).unwrap();
//! assert_eq!(sum.0, 7);
//! ```

/// A visitor that can inspect objects of type `T`.
///
/// The visited object is only borrowed, and only for the duration of the
/// call.  Errors returned here are propagated unchanged by whoever drives the
/// traversal.
pub trait Visitor<T: ?Sized> {
    /// Visit an object of type `T`.
    fn visit(&mut self, visitable: &T) -> crate::errors::Result<()>;
}
