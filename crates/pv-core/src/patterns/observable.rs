//! Subject / Observer notification.
//!
//! A flat broadcast list: a [`Subject`] keeps non-owning references to its
//! [`Observer`]s and calls [`Observer::update`] on each of them when
//! [`Subject::notify`] is invoked.  Dispatch is single (on the observer only)
//! and there are no typed variants, which keeps this mechanism separate from
//! the double-dispatch [`Visitor`](crate::patterns::visitor::Visitor)
//! protocol.
//!
//! Observers are held as `Weak` references, so attaching never extends an
//! observer's lifetime; observers that have been dropped are pruned on the
//! next notification.  Everything works through `&self` via `RefCell` /
//! `Cell`, matching the single-threaded traversal model of the crate.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// An object that broadcasts its state changes to attached observers.
pub trait Subject {
    /// Attach an observer to receive future notifications.
    fn attach(&self, observer: Weak<dyn Observer>);

    /// Detach a previously attached observer.
    ///
    /// Detaching an observer that is not attached is a no-op.
    fn detach(&self, observer: &Weak<dyn Observer>);

    /// Notify all currently attached observers.
    fn notify(&self);

    /// The state observers read when notified.
    fn state(&self) -> i32;
}

/// An object that reacts to notifications from a [`Subject`].
pub trait Observer {
    /// Called by every subject this observer is attached to on `notify`.
    fn update(&self, subject: &dyn Subject);
}

/// Observer-list bookkeeping that can be embedded in any [`Subject`]
/// implementation.
#[derive(Default)]
pub struct ObserverList {
    observers: RefCell<Vec<Weak<dyn Observer>>>,
}

impl ObserverList {
    /// Create a new, empty observer list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer.  Attaching the same observer twice notifies it
    /// twice.
    pub fn attach(&self, observer: Weak<dyn Observer>) {
        self.observers.borrow_mut().push(observer);
    }

    /// Remove every occurrence of `observer` (by pointer equality).
    pub fn detach(&self, observer: &Weak<dyn Observer>) {
        self.observers
            .borrow_mut()
            .retain(|o| !Weak::ptr_eq(o, observer));
    }

    /// Number of attached observers that are still alive.
    pub fn len(&self) -> usize {
        self.observers
            .borrow()
            .iter()
            .filter(|o| o.strong_count() > 0)
            .count()
    }

    /// Return `true` if no live observer is attached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call `update(subject)` on all live observers, pruning dead references.
    pub fn notify(&self, subject: &dyn Subject) {
        // Snapshot first so observers may attach / detach from `update`.
        let live: Vec<Rc<dyn Observer>> = self
            .observers
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .collect();
        self.observers.borrow_mut().retain(|o| o.strong_count() > 0);
        for observer in live {
            observer.update(subject);
        }
    }
}

/// A subject carrying a single integer state.
///
/// Setting the state does not notify by itself; callers decide when to
/// broadcast by calling [`Subject::notify`].
#[derive(Default)]
pub struct StateSubject {
    state: Cell<i32>,
    observers: ObserverList,
}

impl StateSubject {
    /// Create a subject with state `0` and no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current state without notifying.
    pub fn set_state(&self, state: i32) {
        self.state.set(state);
    }

    /// Number of live attached observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Subject for StateSubject {
    fn attach(&self, observer: Weak<dyn Observer>) {
        self.observers.attach(observer);
    }

    fn detach(&self, observer: &Weak<dyn Observer>) {
        self.observers.detach(observer);
    }

    fn notify(&self) {
        tracing::trace!(
            target: crate::logging::targets::NOTIFY,
            state = self.state.get(),
            observers = self.observers.len(),
            "notifying observers"
        );
        self.observers.notify(self);
    }

    fn state(&self) -> i32 {
        self.state.get()
    }
}

/// An observer that mirrors the state of the last subject that notified it.
#[derive(Debug, Default)]
pub struct StateObserver {
    state: Cell<Option<i32>>,
    updates: Cell<usize>,
}

impl StateObserver {
    /// Create an observer that has not been updated yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last observed state, or `None` before the first update.
    pub fn state(&self) -> Option<i32> {
        self.state.get()
    }

    /// How many updates this observer has received.
    pub fn updates(&self) -> usize {
        self.updates.get()
    }
}

impl Observer for StateObserver {
    fn update(&self, subject: &dyn Subject) {
        let state = subject.state();
        self.state.set(Some(state));
        self.updates.set(self.updates.get() + 1);
        tracing::debug!(
            target: crate::logging::targets::NOTIFY,
            state,
            updates = self.updates.get(),
            "observer updated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weak(observer: &Rc<StateObserver>) -> Weak<dyn Observer> {
        let observer: Rc<dyn Observer> = observer.clone();
        Rc::downgrade(&observer)
    }

    #[test]
    fn attach_set_and_notify() {
        let subject = StateSubject::new();
        let observer = Rc::new(StateObserver::new());
        subject.attach(weak(&observer));

        subject.set_state(1);
        assert_eq!(observer.state(), None);
        subject.notify();
        assert_eq!(observer.state(), Some(1));

        subject.set_state(2);
        subject.notify();
        assert_eq!(observer.state(), Some(2));
        assert_eq!(observer.updates(), 2);
    }

    #[test]
    fn detach_stops_notifications() {
        let subject = StateSubject::new();
        let observer = Rc::new(StateObserver::new());
        let handle = weak(&observer);
        subject.attach(handle.clone());
        subject.detach(&handle);
        subject.set_state(7);
        subject.notify();
        assert_eq!(observer.updates(), 0);
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn detach_only_removes_that_observer() {
        let subject = StateSubject::new();
        let first = Rc::new(StateObserver::new());
        let second = Rc::new(StateObserver::new());
        let first_handle = weak(&first);
        subject.attach(first_handle.clone());
        subject.attach(weak(&second));
        subject.detach(&first_handle);
        subject.set_state(3);
        subject.notify();
        assert_eq!(first.state(), None);
        assert_eq!(second.state(), Some(3));
    }

    #[test]
    fn dropped_observer_pruned() {
        let subject = StateSubject::new();
        {
            let observer = Rc::new(StateObserver::new());
            subject.attach(weak(&observer));
            assert_eq!(subject.observer_count(), 1);
        }
        subject.notify();
        assert_eq!(subject.observers.observers.borrow().len(), 0);
    }

    #[test]
    fn attaching_does_not_own_observer() {
        let subject = StateSubject::new();
        let observer = Rc::new(StateObserver::new());
        subject.attach(weak(&observer));
        assert_eq!(Rc::strong_count(&observer), 1);
    }

    #[test]
    fn update_emits_notify_event() {
        use std::sync::{Arc, Mutex};

        let sink = Arc::new(Mutex::new(Vec::<u8>::new()));
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .with_writer(move || WriteInto(writer.clone()))
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let subject = StateSubject::new();
            let observer = Rc::new(StateObserver::new());
            subject.attach(weak(&observer));
            subject.set_state(5);
            subject.notify();
        });

        let output = String::from_utf8_lossy(&sink.lock().unwrap()).into_owned();
        let line = output
            .lines()
            .find(|l| l.contains("observer updated"))
            .unwrap_or_else(|| panic!("no update event in {output:?}"));
        assert!(line.contains("polyvisit::notify"));
        assert!(line.contains("state=5"));
        assert!(line.contains("updates=1"));
    }

    struct WriteInto(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for WriteInto {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
