//! Patterns sub-module: visitor, observable.

pub mod observable;
pub mod visitor;
