//! Logging facilities for polyvisit.
//!
//! polyvisit uses the `tracing` crate for instrumentation.  The library only
//! emits events; to see them, install a subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_max_level(tracing::Level::DEBUG)
//!         .init();
//!
//!     // build a zoo, visit it...
//! }
//! ```
//!
//! Lifecycle events (creation and destruction of collections, zoos and
//! animals) are `debug` events under [`targets::LIFECYCLE`] and can be turned
//! off globally through [`Settings`](crate::Settings).

use std::fmt;

use crate::settings::Settings;

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=polyvisit::traversal=debug`.
pub mod targets {
    /// Creation / destruction of owned objects.
    pub const LIFECYCLE: &str = "polyvisit::lifecycle";
    /// Object-structure traversal (start / end markers, per-element dispatch).
    pub const TRAVERSAL: &str = "polyvisit::traversal";
    /// Events emitted by concrete visitors.
    pub const VISITOR: &str = "polyvisit::visitor";
    /// Subject / observer notifications.
    pub const NOTIFY: &str = "polyvisit::notify";
}

/// A point in an object's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// The object was constructed.
    Created,
    /// The object was dropped.
    Destroyed,
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleEvent::Created => write!(f, "created"),
            LifecycleEvent::Destroyed => write!(f, "destroyed"),
        }
    }
}

/// Emit a lifecycle event for an object of the given `kind` (e.g. `"lion"`),
/// identified by `label` (e.g. its name).
///
/// Does nothing when [`Settings::lifecycle_events`] is off.
pub fn lifecycle(kind: &'static str, label: &str, event: LifecycleEvent) {
    if !Settings::instance().lifecycle_events() {
        return;
    }
    tracing::debug!(
        target: targets::LIFECYCLE,
        kind,
        label,
        %event,
        "{kind} {label} {event}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_event_display() {
        assert_eq!(LifecycleEvent::Created.to_string(), "created");
        assert_eq!(LifecycleEvent::Destroyed.to_string(), "destroyed");
    }

    #[test]
    fn targets_share_prefix() {
        for target in [
            targets::LIFECYCLE,
            targets::TRAVERSAL,
            targets::VISITOR,
            targets::NOTIFY,
        ] {
            assert!(target.starts_with("polyvisit::"));
        }
    }
}
