//! Response-producing behaviors for matched invocations.
//!
//! The shipped stubs either return a fixed value ([`value`]), run a
//! closure over the invocation ([`from_fn`]), simulate a collaborator
//! error ([`fail`]), or reject the invocation outright
//! ([`Unexpected`], the dispatcher's default fallback).

mod fail;
mod from_fn;
mod return_value;
mod unexpected;

pub use fail::{fail, Fail, SimulatedFailure};
pub use from_fn::{from_fn, FromFn};
pub use return_value::{value, Return};
pub use unexpected::Unexpected;

use crate::{Failure, Invocation, Value};

/// Produces the answer for a matched invocation.
///
/// A stub may keep internal state across calls but must not retain
/// the invocation beyond the call.
pub trait Stub: Send {
    fn invoke(&mut self, invocation: &Invocation) -> Result<Value, Failure>;

    /// One-line rendering of the response this stub produces.
    fn describe(&self) -> String;
}
