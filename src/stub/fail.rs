use std::{
    error::Error,
    fmt::{self, Formatter},
};

use super::Stub;
use crate::{Failure, Invocation, Value};

/// The error a [`Fail`] stub raises.
///
/// Wrapped in [`Failure::Stub`], which no layer ever rewrites, so the
/// test observes it exactly as configured.
#[derive(Debug)]
pub struct SimulatedFailure(String);

impl fmt::Display for SimulatedFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for SimulatedFailure {}

/// Simulates an error response from the real collaborator.
pub struct Fail(String);

impl Stub for Fail {
    fn invoke(&mut self, _: &Invocation) -> Result<Value, Failure> {
        Err(Failure::Stub(Box::new(SimulatedFailure(self.0.clone()))))
    }

    fn describe(&self) -> String {
        format!("fails with {:?}", self.0)
    }
}

/// Creates a [`Fail`] stub.
pub fn fail(message: impl Into<String>) -> Fail {
    Fail(message.into())
}
