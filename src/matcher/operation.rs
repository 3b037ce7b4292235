use super::InvocationMatcher;
use crate::Invocation;

/// Matches invocations of a single named operation.
pub struct OperationName(String);

impl InvocationMatcher for OperationName {
    fn matches(&self, invocation: &Invocation) -> bool {
        invocation.operation() == self.0
    }

    fn expectation(&self) -> String {
        self.0.clone()
    }
}

/// Creates an [`OperationName`] matcher.
///
/// ```
/// use dynamock::matcher::{self, InvocationMatcher};
///
/// let save = matcher::operation("save");
/// assert!(save.matches(&dynamock::invocation!("save", 1)));
/// assert!(!save.matches(&dynamock::invocation!("load", 1)));
/// ```
pub fn operation(name: impl Into<String>) -> OperationName {
    OperationName(name.into())
}
