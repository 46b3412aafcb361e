//! The visitor protocol for the [`Animal`](crate::Animal) family.

use pv_core::logging::{self, targets, LifecycleEvent};
use pv_core::{Result, Visitor};

use crate::animal::{Lion, Tiger};

/// A total visitor over the closed animal family: one operation per variant.
///
/// Every type implementing both `Visitor<Lion>` and `Visitor<Tiger>` is an
/// `AnimalVisitor`; anything less is rejected at compile time.
///
/// ```compile_fail
/// use pv_core::{Result, Visitor};
/// use pv_zoo::{Lion, Zoo};
///
/// struct OnlyLions;
///
/// impl Visitor<Lion> for OnlyLions {
///     fn visit(&mut self, _lion: &Lion) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// // `OnlyLions` has no `Visitor<Tiger>` operation.
/// Zoo::new().accept(&mut OnlyLions).unwrap();
/// ```
pub trait AnimalVisitor: Visitor<Lion> + Visitor<Tiger> {}

impl<V: Visitor<Lion> + Visitor<Tiger>> AnimalVisitor for V {}

/// Feeds every animal it visits and keeps a log of the meals served.
///
/// The meal log is state owned by the visitor; the animals themselves are
/// only read.
#[derive(Debug)]
pub struct FeedingVisitor {
    meals: Vec<String>,
}

impl FeedingVisitor {
    /// Create a visitor that has served no meals yet.
    pub fn new() -> Self {
        logging::lifecycle("visitor", "feeding", LifecycleEvent::Created);
        Self { meals: Vec::new() }
    }

    /// The meals served so far, in visiting order.
    pub fn meals(&self) -> &[String] {
        &self.meals
    }

    fn serve(&mut self, meal: String) -> Result<()> {
        tracing::info!(target: targets::VISITOR, "{meal}");
        self.meals.push(meal);
        Ok(())
    }
}

impl Default for FeedingVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor<Lion> for FeedingVisitor {
    fn visit(&mut self, lion: &Lion) -> Result<()> {
        self.serve(format!("Feeding to Lion: {}", lion.name()))
    }
}

impl Visitor<Tiger> for FeedingVisitor {
    fn visit(&mut self, tiger: &Tiger) -> Result<()> {
        self.serve(format!("Feeding to Tiger: {}", tiger.name()))
    }
}

impl Drop for FeedingVisitor {
    fn drop(&mut self) {
        logging::lifecycle("visitor", "feeding", LifecycleEvent::Destroyed);
    }
}
