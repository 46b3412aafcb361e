//! Global library settings.
//!
//! [`Settings`] is a process-wide singleton accessed via a
//! `std::sync::OnceLock`.  It controls which diagnostic events the library
//! emits; it never changes traversal or visitation semantics.
//!
//! Each test that changes a setting should restore it when done, preferably
//! through [`ScopedLifecycleEvents`] or [`ScopedTraversalMarkers`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

/// Process-wide settings used by the polyvisit crates.
pub struct Settings {
    /// Emit creation / destruction events for collections, zoos and animals.
    lifecycle_events: AtomicBool,
    /// Emit the start / end markers around an object-structure traversal.
    traversal_markers: AtomicBool,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            lifecycle_events: AtomicBool::new(true),
            traversal_markers: AtomicBool::new(true),
        })
    }

    /// Whether lifecycle events are emitted (default `true`).
    pub fn lifecycle_events(&self) -> bool {
        self.lifecycle_events.load(Ordering::Relaxed)
    }

    /// Enable or disable lifecycle events.
    pub fn set_lifecycle_events(&self, enabled: bool) {
        self.lifecycle_events.store(enabled, Ordering::Relaxed);
    }

    /// Whether traversal start / end markers are emitted (default `true`).
    pub fn traversal_markers(&self) -> bool {
        self.traversal_markers.load(Ordering::Relaxed)
    }

    /// Enable or disable traversal markers.
    pub fn set_traversal_markers(&self, enabled: bool) {
        self.traversal_markers.store(enabled, Ordering::Relaxed);
    }
}

/// Overrides [`Settings::lifecycle_events`] for the lifetime of the guard and
/// restores the previous value on drop.
///
/// ```
/// use pv_core::{ScopedLifecycleEvents, Settings};
///
/// let before = Settings::instance().lifecycle_events();
/// {
///     let _quiet = ScopedLifecycleEvents::new(false);
///     assert!(!Settings::instance().lifecycle_events());
/// }
/// assert_eq!(Settings::instance().lifecycle_events(), before);
/// ```
pub struct ScopedLifecycleEvents {
    previous: bool,
}

impl ScopedLifecycleEvents {
    /// Set lifecycle events to `enabled` until the guard is dropped.
    pub fn new(enabled: bool) -> Self {
        let settings = Settings::instance();
        let previous = settings.lifecycle_events();
        settings.set_lifecycle_events(enabled);
        Self { previous }
    }
}

impl Drop for ScopedLifecycleEvents {
    fn drop(&mut self) {
        Settings::instance().set_lifecycle_events(self.previous);
    }
}

/// Overrides [`Settings::traversal_markers`] for the lifetime of the guard and
/// restores the previous value on drop.
pub struct ScopedTraversalMarkers {
    previous: bool,
}

impl ScopedTraversalMarkers {
    /// Set traversal markers to `enabled` until the guard is dropped.
    pub fn new(enabled: bool) -> Self {
        let settings = Settings::instance();
        let previous = settings.traversal_markers();
        settings.set_traversal_markers(enabled);
        Self { previous }
    }
}

impl Drop for ScopedTraversalMarkers {
    fn drop(&mut self) {
        Settings::instance().set_traversal_markers(self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_guard_restores_previous_value() {
        let settings = Settings::instance();
        let before = settings.lifecycle_events();
        {
            let _guard = ScopedLifecycleEvents::new(!before);
            assert_eq!(settings.lifecycle_events(), !before);
            {
                let _inner = ScopedLifecycleEvents::new(before);
                assert_eq!(settings.lifecycle_events(), before);
            }
            assert_eq!(settings.lifecycle_events(), !before);
        }
        assert_eq!(settings.lifecycle_events(), before);
    }

    #[test]
    fn traversal_markers_guard_restores_previous_value() {
        let settings = Settings::instance();
        let before = settings.traversal_markers();
        {
            let _guard = ScopedTraversalMarkers::new(!before);
            assert_eq!(settings.traversal_markers(), !before);
        }
        assert_eq!(settings.traversal_markers(), before);
    }
}
