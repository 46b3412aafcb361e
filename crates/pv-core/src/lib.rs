//! # pv-core
//!
//! Core types, traits, and error definitions for polyvisit.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – the error type, global `Settings`, the
//! `tracing` targets and lifecycle events, the generic `Visitor<T>` trait and
//! the Subject/Observer collaborator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `fail!` macro.
pub mod errors;

/// `tracing` targets and lifecycle events.
pub mod logging;

/// Design patterns: visitor, observable.
pub mod patterns;

/// Global library settings.
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use logging::LifecycleEvent;
pub use patterns::visitor::Visitor;
pub use settings::{ScopedLifecycleEvents, ScopedTraversalMarkers, Settings};
