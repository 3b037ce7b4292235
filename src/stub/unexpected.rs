use super::Stub;
use crate::{Failure, Invocation, Value};

/// Rejects every invocation with [`Failure::Unexpected`].
///
/// This is the dispatcher's default fallback, so unconfigured calls
/// fail loudly instead of answering with a made-up value. Replace it
/// through
/// [`set_default_stub`](crate::InvocationDispatcher::set_default_stub)
/// for a lenient mock.
pub struct Unexpected;

impl Stub for Unexpected {
    fn invoke(&mut self, invocation: &Invocation) -> Result<Value, Failure> {
        Err(Failure::Unexpected(invocation.clone()))
    }

    fn describe(&self) -> String {
        "fails on any invocation".to_string()
    }
}
