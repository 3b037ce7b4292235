use std::fmt::{self, Formatter};

use super::Constraint;
use crate::Value;

/// A constraint satisfied by every value.
pub struct Any;

impl Constraint for Any {
    fn matches(&self, _: &Value) -> bool {
        true
    }
}

impl fmt::Display for Any {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("_")
    }
}

/// Creates an [`Any`] constraint.
///
/// ```
/// use dynamock::{constraint::{self, Constraint}, Value};
///
/// assert!(constraint::any().matches(&Value::of("anything")));
/// ```
pub fn any() -> Any {
    Any
}
