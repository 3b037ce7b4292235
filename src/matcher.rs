//! Predicates over whole invocations.
//!
//! A matcher answers whether an [`Invocation`] is one a registered
//! rule cares about. The shipped variants match by operation name
//! ([`operation`]), by per-argument constraints ([`arguments`]), by
//! the absence of arguments ([`no_arguments`]), or as a conjunction of
//! other matchers ([`AllOf`]).

mod all_of;
mod arguments;
mod no_arguments;
mod operation;

pub use all_of::AllOf;
pub use arguments::{arguments, Arguments};
pub use no_arguments::{no_arguments, NoArguments};
pub use operation::{operation, OperationName};

use crate::Invocation;

/// A pure predicate over an [`Invocation`].
pub trait InvocationMatcher: Send {
    fn matches(&self, invocation: &Invocation) -> bool;

    /// One-line rendering of what this matcher accepts, used in
    /// expectation and failure messages.
    fn expectation(&self) -> String;
}
