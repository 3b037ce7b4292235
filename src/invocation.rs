use std::fmt::{self, Formatter};

use crate::Value;

/// An immutable record of one intercepted call: the operation's
/// identity plus its ordered argument values.
///
/// The host interception mechanism builds one of these for every call
/// against a stand-in and hands it to
/// [`DynamicMock::invoke`](crate::DynamicMock::invoke).
#[derive(Clone, Debug)]
pub struct Invocation {
    operation: String,
    arguments: Vec<Value>,
}

impl Invocation {
    pub fn new(operation: impl Into<String>, arguments: Vec<Value>) -> Self {
        Invocation {
            operation: operation.into(),
            arguments,
        }
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.operation)?;

        let mut arguments = self.arguments.iter();
        if let Some(first) = arguments.next() {
            write!(f, "{:?}", first)?;
            arguments.try_for_each(|argument| write!(f, ", {:?}", argument))?;
        }

        f.write_str(")")
    }
}

/// Builds an [`Invocation`] from an operation name and plain values.
///
/// Each value is erased through [`Value::of`](crate::Value::of).
///
/// ```
/// let invocation = dynamock::invocation!("resize", 800, 600);
/// assert_eq!(invocation.operation(), "resize");
/// assert_eq!(invocation.to_string(), "resize(800, 600)");
/// ```
#[macro_export]
macro_rules! invocation {
    ($operation:expr $(, $argument:expr)* $(,)?) => {
        $crate::Invocation::new($operation, vec![$($crate::Value::of($argument)),*])
    };
}
