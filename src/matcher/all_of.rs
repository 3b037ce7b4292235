use super::InvocationMatcher;
use crate::Invocation;

/// Conjunction of matchers: accepts an invocation only when every
/// component does.
///
/// An empty conjunction accepts everything. Components render in
/// registration order, so an operation-name matcher followed by an
/// arguments matcher reads as `op(constraints)`.
#[derive(Default)]
pub struct AllOf(Vec<Box<dyn InvocationMatcher>>);

impl AllOf {
    pub fn new() -> Self {
        AllOf::default()
    }

    pub fn push(&mut self, matcher: impl InvocationMatcher + 'static) {
        self.0.push(Box::new(matcher));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl InvocationMatcher for AllOf {
    fn matches(&self, invocation: &Invocation) -> bool {
        self.0.iter().all(|matcher| matcher.matches(invocation))
    }

    fn expectation(&self) -> String {
        self.0
            .iter()
            .map(|matcher| matcher.expectation())
            .collect::<Vec<_>>()
            .concat()
    }
}
