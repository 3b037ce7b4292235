use std::fmt;

use super::Stub;
use crate::{Failure, Invocation, Value};

/// Runs a closure over the invocation to produce the answer.
///
/// The closure may fail, which makes this the building block for
/// stubs that simulate fallible collaborators.
pub struct FromFn {
    description: String,
    behavior: Box<dyn FnMut(&Invocation) -> Result<Value, Failure> + Send>,
}

impl Stub for FromFn {
    fn invoke(&mut self, invocation: &Invocation) -> Result<Value, Failure> {
        (self.behavior)(invocation)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }
}

/// Creates a [`FromFn`] stub.
///
/// The description is used verbatim when the stub is rendered in
/// diagnostics.
///
/// ```
/// use dynamock::{stub::{self, Stub}, Value};
///
/// let mut echo = stub::from_fn("echoes its first argument", |invocation| {
///     Ok(invocation.arguments()[0].clone())
/// });
///
/// let answer = echo.invoke(&dynamock::invocation!("echo", 42)).unwrap();
/// assert_eq!(answer, Value::of(42));
/// ```
pub fn from_fn(
    description: impl fmt::Display,
    behavior: impl FnMut(&Invocation) -> Result<Value, Failure> + Send + 'static,
) -> FromFn {
    FromFn {
        description: description.to_string(),
        behavior: Box::new(behavior),
    }
}
