use std::fmt::{self, Formatter};

use crate::{
    mocker::Invokable,
    stub::{Stub, Unexpected},
    Failure, Invocation, Value,
};

/// The ordered rule set plus the matching/fallback algorithm.
///
/// Invokables are kept in insertion order and consulted in reverse,
/// so the last registered rule wins when two overlap. Later, more
/// specific expectations set up mid-test shadow earlier catch-all
/// stubs without needing removal.
pub struct InvocationDispatcher {
    invokables: Vec<Box<dyn Invokable>>,
    default_stub: Box<dyn Stub>,
}

impl Default for InvocationDispatcher {
    fn default() -> Self {
        InvocationDispatcher {
            invokables: vec![],
            default_stub: Box::new(Unexpected),
        }
    }
}

impl InvocationDispatcher {
    pub fn new() -> Self {
        InvocationDispatcher::default()
    }

    /// Appends an invokable. Overlapping rules are allowed; the later
    /// one shadows by dispatch order, not by overwriting.
    pub fn add(&mut self, invokable: impl Invokable + 'static) {
        self.invokables.push(Box::new(invokable));
    }

    /// Answers `invocation` with the most recently added invokable
    /// that matches it, falling back to the default stub when none
    /// does. Whatever the chosen stub raises propagates unmodified.
    pub fn dispatch(&mut self, invocation: &Invocation) -> Result<Value, Failure> {
        for invokable in self.invokables.iter_mut().rev() {
            if invokable.matches(invocation) {
                return invokable.invoke(invocation);
            }
        }

        self.default_stub.invoke(invocation)
    }

    /// Fails with [`Failure::Unmet`] naming every invokable whose
    /// usage obligation was not met. Invokables without obligations
    /// are skipped, so a dispatcher holding only bare stubs always
    /// verifies.
    pub fn verify(&self) -> Result<(), Failure> {
        let unmet: Vec<String> = self
            .invokables
            .iter()
            .filter(|invokable| !invokable.is_satisfied())
            .map(|invokable| {
                invokable
                    .describe()
                    .unwrap_or_else(|| "a hidden invokable".to_string())
            })
            .collect();

        if unmet.is_empty() {
            Ok(())
        } else {
            Err(Failure::Unmet(unmet.join("\n")))
        }
    }

    /// Drops every invokable. The default stub stays.
    pub fn clear(&mut self) {
        self.invokables.clear();
    }

    /// Replaces the fallback used when no invokable matches.
    pub fn set_default_stub(&mut self, stub: impl Stub + 'static) {
        self.default_stub = Box::new(stub);
    }
}

impl fmt::Display for InvocationDispatcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut described = self
            .invokables
            .iter()
            .filter_map(|invokable| invokable.describe())
            .peekable();

        if described.peek().is_none() {
            return f.write_str("no invokables registered");
        }

        f.write_str("registered invokables:")?;
        described.try_for_each(|description| write!(f, "\n  {}", description))
    }
}
