use super::InvocationMatcher;
use crate::Invocation;

/// Matches invocations that carry no arguments at all.
pub struct NoArguments;

impl InvocationMatcher for NoArguments {
    fn matches(&self, invocation: &Invocation) -> bool {
        invocation.arguments().is_empty()
    }

    fn expectation(&self) -> String {
        "()".to_string()
    }
}

/// Creates a [`NoArguments`] matcher.
pub fn no_arguments() -> NoArguments {
    NoArguments
}
