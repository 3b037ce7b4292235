use std::{
    error::Error,
    fmt::{self, Formatter},
};

use crate::Invocation;

/// A failure raised while dispatching against a mock or verifying it.
///
/// Only the expectation-category variants ([`Unexpected`] and
/// [`Unmet`]) are ever rewrapped into [`Mock`]; a [`Stub`] failure
/// simulates a collaborator error and passes through every layer
/// untouched.
///
/// [`Unexpected`]: Failure::Unexpected
/// [`Unmet`]: Failure::Unmet
/// [`Mock`]: Failure::Mock
/// [`Stub`]: Failure::Stub
#[derive(Debug)]
pub enum Failure {
    /// No registered invokable matched the invocation and the default
    /// stub fails loudly.
    Unexpected(Invocation),
    /// One or more invokables with a usage obligation were not used as
    /// required.
    Unmet(String),
    /// An expectation failure rewrapped at the mock boundary with the
    /// mock's identity and dispatcher state attached.
    Mock(MockFailure),
    /// A stub deliberately simulated an error from the real
    /// collaborator.
    Stub(Box<dyn Error + Send>),
}

impl Failure {
    pub(crate) fn is_expectation(&self) -> bool {
        matches!(self, Failure::Unexpected(_) | Failure::Unmet(_))
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Unexpected(invocation) => {
                write!(f, "unexpected invocation {}", invocation)
            }
            Failure::Unmet(description) => f.write_str(description),
            Failure::Mock(failure) => fmt::Display::fmt(failure, f),
            Failure::Stub(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Failure::Stub(error) => Some(error.as_ref()),
            _ => None,
        }
    }
}

/// The context-rich failure a test sees when a mock's expectations
/// were violated: the mock's name, the offending invocation, and a
/// rendering of every user-registered invokable at the time of the
/// failure.
///
/// Constructed once, at the interception boundary, so a failing test
/// points at the call that went wrong rather than at dispatch
/// internals.
#[derive(Debug)]
pub struct MockFailure {
    pub mock: String,
    pub invocation: Invocation,
    pub dispatcher: String,
    pub message: String,
}

impl fmt::Display for MockFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.mock, self.message)?;
        writeln!(f, "  invoked: {}", self.invocation)?;
        f.write_str(&self.dispatcher)
    }
}

impl Error for MockFailure {}
