use super::InvocationMatcher;
use crate::{
    constraint::{Constraint, IntoConstraints},
    Invocation,
};

/// Matches invocations whose arguments satisfy a list of constraints,
/// one constraint per argument.
///
/// An invocation with a different number of arguments never matches.
pub struct Arguments(Vec<Box<dyn Constraint>>);

impl InvocationMatcher for Arguments {
    fn matches(&self, invocation: &Invocation) -> bool {
        let arguments = invocation.arguments();

        arguments.len() == self.0.len()
            && self
                .0
                .iter()
                .zip(arguments)
                .all(|(constraint, argument)| constraint.matches(argument))
    }

    fn expectation(&self) -> String {
        let constraints: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        format!("({})", constraints.join(", "))
    }
}

/// Creates an [`Arguments`] matcher from a tuple of constraints.
///
/// Remember the trailing comma when passing a single constraint.
///
/// ```
/// use dynamock::{constraint, matcher::{self, InvocationMatcher}};
///
/// let expected = matcher::arguments((constraint::eq(42), constraint::any()));
/// assert!(expected.matches(&dynamock::invocation!("op", 42, "anything")));
/// assert!(!expected.matches(&dynamock::invocation!("op", 7, "anything")));
/// assert!(!expected.matches(&dynamock::invocation!("op", 42)));
/// ```
pub fn arguments(constraints: impl IntoConstraints) -> Arguments {
    Arguments(constraints.into_constraints())
}
