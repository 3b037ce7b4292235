use std::fmt::{self, Formatter};

use super::Constraint;
use crate::Value;

struct FromFn<F> {
    message: String,
    predicate: F,
}

impl<F> Constraint for FromFn<F>
where
    F: Fn(&Value) -> bool + Send,
{
    fn matches(&self, value: &Value) -> bool {
        let predicate = &self.predicate;
        predicate(value)
    }
}

impl<F> fmt::Display for FromFn<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Returns a [`Constraint`] backed by the provided closure.
///
/// The returned constraint renders as `message` in expectation
/// output. For anything beyond a one-liner, implement [`Constraint`]
/// directly so the message can be more specific.
///
/// ```
/// use dynamock::{constraint::{self, Constraint}, Value};
///
/// let small = constraint::from_fn(
///     |value: &Value| value.downcast_ref::<i32>().map_or(false, |n| *n < 10),
///     "< 10",
/// );
/// assert!(small.matches(&Value::of(7)));
/// assert!(!small.matches(&Value::of(12)));
/// ```
pub fn from_fn(
    predicate: impl Fn(&Value) -> bool + Send,
    message: impl fmt::Display,
) -> impl Constraint {
    FromFn {
        predicate,
        message: message.to_string(),
    }
}

/// Returns a [`Constraint`] that renders as the closure's source text.
///
/// ```
/// use dynamock::{constraint::Constraint, Value};
///
/// let has_i32 = dynamock::from_fn!(|value: &Value| value.is::<i32>());
/// assert!(has_i32.matches(&Value::of(3)));
/// assert!(!has_i32.matches(&Value::of("three")));
/// ```
#[macro_export]
macro_rules! from_fn {
    ($predicate:expr) => {
        $crate::constraint::from_fn($predicate, stringify!($predicate))
    };
}
