use std::{
    any,
    fmt::{self, Formatter},
};

use super::Constraint;
use crate::Value;

/// Equality constraint.
///
/// Matches only if the argument has the same concrete type as the
/// expected value and compares equal to it. An `i32` expectation never
/// matches an `i64` argument, no matter the numbers.
pub struct Eq<Expected>(Expected);

impl<Expected> Constraint for Eq<Expected>
where
    Expected: any::Any + fmt::Debug + PartialEq + Send,
{
    fn matches(&self, actual: &Value) -> bool {
        actual.downcast_ref::<Expected>() == Some(&self.0)
    }
}

impl<Expected: fmt::Debug> fmt::Display for Eq<Expected> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Creates an [`Eq`](struct@Eq) constraint.
///
/// ```
/// use dynamock::{constraint::{self, Constraint}, Value};
///
/// let forty_two = constraint::eq(42);
/// assert!(forty_two.matches(&Value::of(42)));
/// assert!(!forty_two.matches(&Value::of(7)));
/// assert!(!forty_two.matches(&Value::of(42i64)));
/// ```
pub fn eq<Expected>(expected: Expected) -> Eq<Expected>
where
    Expected: any::Any + fmt::Debug + PartialEq + Send,
{
    Eq(expected)
}
