use super::Stub;
use crate::{ArgValue, Failure, Invocation, Value};

/// Returns a clone of the same fixed value on every invocation.
pub struct Return(Value);

impl Stub for Return {
    fn invoke(&mut self, _: &Invocation) -> Result<Value, Failure> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("returns {:?}", self.0)
    }
}

/// Creates a [`Return`] stub.
///
/// ```
/// use dynamock::stub::{self, Stub};
///
/// let mut ok = stub::value("ok");
/// let answer = ok.invoke(&dynamock::invocation!("anything")).unwrap();
/// assert_eq!(answer.downcast_ref::<&str>(), Some(&"ok"));
/// ```
pub fn value<T: ArgValue>(value: T) -> Return {
    Return(Value::of(value))
}
