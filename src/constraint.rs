//! Argument predicates consumed by
//! [`matcher::arguments`](crate::matcher::arguments).
//!
//! A constraint judges a single [`Value`]; the shipped ones cover
//! equality ([`eq`]), match-anything ([`any`]) and ad-hoc closures
//! ([`from_fn`]). Anything implementing [`Constraint`] plugs in the
//! same way.

mod any;
mod eq;
mod from_fn;

pub use any::{any, Any};
pub use eq::{eq, Eq};
pub use from_fn::from_fn;

use std::fmt;

use crate::Value;

/// A predicate over a single argument value.
///
/// Pure and side-effect-free. The [`fmt::Display`] rendering is used
/// verbatim in expectation and failure messages, so keep it short.
pub trait Constraint: fmt::Display + Send {
    fn matches(&self, value: &Value) -> bool;
}

/// Conversion into a constraint list, one constraint per argument.
///
/// Implemented for tuples of [`Constraint`] of up to ten elements so
/// that [`matcher::arguments`](crate::matcher::arguments) can take its
/// expectations as a tuple. Remember the trailing comma when passing a
/// single constraint: `(eq(42),)`.
pub trait IntoConstraints {
    fn into_constraints(self) -> Vec<Box<dyn Constraint>>;
}

impl IntoConstraints for Vec<Box<dyn Constraint>> {
    fn into_constraints(self) -> Vec<Box<dyn Constraint>> {
        self
    }
}

impl IntoConstraints for () {
    fn into_constraints(self) -> Vec<Box<dyn Constraint>> {
        vec![]
    }
}

impl<C: Constraint + 'static> IntoConstraints for (C,) {
    fn into_constraints(self) -> Vec<Box<dyn Constraint>> {
        vec![Box::new(self.0)]
    }
}

// (a,b,c) => tuple!(b,c)
macro_rules! peel {
    ($idx:tt, $($other:tt),+) => (tuple! { $($other),+ })
}

// implement IntoConstraints for tuples of Constraints
macro_rules! tuple {
    ($idx:tt) => ();
    ($($idx:tt),+) => (
        paste::paste! {
            impl<$([<C $idx>]: Constraint + 'static),+> IntoConstraints for ($([<C $idx>],)+) {
                fn into_constraints(self) -> Vec<Box<dyn Constraint>> {
                    let ($([<c $idx>],)+) = self;
                    vec![$(Box::new([<c $idx>]) as Box<dyn Constraint>),+]
                }
            }
        }
        peel! { $($idx),+ }
    )
}

tuple! { 10, 9, 8, 7, 6, 5, 4, 3, 2, 1 }
