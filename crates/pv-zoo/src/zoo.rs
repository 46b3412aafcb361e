//! The object structure: a zoo that owns its animals outright.

use pv_core::logging::{self, targets, LifecycleEvent};
use pv_core::{Result, Settings};

use crate::animal::Animal;
use crate::visitor::AnimalVisitor;

/// An insertion-ordered, exclusively owned collection of animals.
///
/// Animals are moved in with [`add_animal`](Self::add_animal) and stay until
/// the zoo is dropped, which drops each of them exactly once.  There is no way
/// to take an animal back out, and visitors only borrow them for the duration
/// of a single visit.
///
/// # Example
/// ```
/// use pv_zoo::{FeedingVisitor, Lion, Tiger, Zoo};
///
/// let mut zoo = Zoo::new();
/// zoo.add(Lion::new("Simba"));
/// zoo.add(Tiger::new("Shere Khan"));
///
/// let mut feeder = FeedingVisitor::new();
/// zoo.accept(&mut feeder).unwrap();
/// assert_eq!(
///     feeder.meals(),
///     &["Feeding to Lion: Simba", "Feeding to Tiger: Shere Khan"]
/// );
/// ```
#[derive(Debug)]
pub struct Zoo {
    name: String,
    animals: Vec<Box<dyn Animal>>,
}

impl Zoo {
    /// Create an empty zoo named `"zoo"`.
    pub fn new() -> Self {
        Self::with_name("zoo")
    }

    /// Create an empty zoo with the given name (used in diagnostics only).
    pub fn with_name(name: impl Into<String>) -> Self {
        let name = name.into();
        logging::lifecycle("zoo", &name, LifecycleEvent::Created);
        Self {
            name,
            animals: Vec::new(),
        }
    }

    /// The zoo's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Take ownership of `animal`.
    pub fn add_animal(&mut self, animal: Box<dyn Animal>) {
        self.animals.push(animal);
    }

    /// Take ownership of `animal`, boxing it.
    pub fn add(&mut self, animal: impl Animal + 'static) {
        self.add_animal(Box::new(animal));
    }

    /// Number of animals owned.
    pub fn len(&self) -> usize {
        self.animals.len()
    }

    /// Return `true` if the zoo owns no animals.
    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// Push every animal, in insertion order, through `visitor`.
    ///
    /// The zoo is borrowed immutably for the whole traversal, so a visitor
    /// cannot add animals while it runs.
    ///
    /// # Errors
    /// The first error returned by a visitor operation, unchanged.  The
    /// remaining animals are not visited.
    pub fn accept(&self, visitor: &mut dyn AnimalVisitor) -> Result<()> {
        let span = tracing::debug_span!(
            target: targets::TRAVERSAL,
            "zoo.accept",
            zoo = %self.name,
            animals = self.animals.len()
        );
        let _entered = span.enter();

        let markers = Settings::instance().traversal_markers();
        if markers {
            tracing::debug!(target: targets::TRAVERSAL, "---START---");
        }
        for (index, animal) in self.animals.iter().enumerate() {
            tracing::trace!(
                target: targets::TRAVERSAL,
                index,
                kind = animal.kind(),
                name = animal.name(),
                "dispatching"
            );
            animal.accept(visitor)?;
        }
        if markers {
            tracing::debug!(target: targets::TRAVERSAL, "----END----");
        }
        Ok(())
    }
}

impl Default for Zoo {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Zoo {
    fn drop(&mut self) {
        logging::lifecycle("zoo", &self.name, LifecycleEvent::Destroyed);
    }
}
