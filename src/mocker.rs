use crate::{
    matcher::{AllOf, InvocationMatcher},
    stub::Stub,
    Failure, Invocation, Value,
};

/// A registered rule inside an
/// [`InvocationDispatcher`](crate::InvocationDispatcher): whether an
/// invocation is mine, what to answer, whether my usage obligations
/// were met, and how to render myself.
pub trait Invokable: Send {
    fn matches(&self, invocation: &Invocation) -> bool;

    fn invoke(&mut self, invocation: &Invocation) -> Result<Value, Failure>;

    /// Whether every usage obligation on this invokable has been met.
    /// Bare stubs carry no obligation and always answer `true`.
    fn is_satisfied(&self) -> bool;

    /// Rendering for diagnostics. `None` keeps the invokable out of
    /// every failure and verification message.
    fn describe(&self) -> Option<String>;
}

/// How many matching calls an [`InvocationMocker`] requires.
#[derive(Clone, Copy, Debug)]
pub enum Expected {
    /// A bare stub: answers as often as asked, never unsatisfied.
    Any,
    AtLeastOnce,
    /// Exactly `n` calls. Once the budget is spent the mocker stops
    /// matching, so further calls fall through to older entries.
    Exactly(usize),
}

/// The concrete [`Invokable`]: a conjunction of matchers paired with
/// one stub, an optional call-count obligation, and a hidden flag for
/// entries that should stay out of diagnostics.
///
/// Built fluently:
///
/// ```
/// use dynamock::{constraint, matcher, stub, Expected, InvocationMocker};
///
/// let rule = InvocationMocker::new(stub::value("ok"))
///     .with(matcher::operation("bar"))
///     .with(matcher::arguments((constraint::eq(42),)))
///     .expect(Expected::AtLeastOnce);
/// ```
pub struct InvocationMocker {
    matcher: AllOf,
    stub: Box<dyn Stub>,
    expected: Expected,
    calls: usize,
    hidden: bool,
}

impl InvocationMocker {
    /// A mocker that matches every invocation and answers with `stub`.
    /// Narrow it down with [`with`](Self::with).
    pub fn new(stub: impl Stub + 'static) -> Self {
        InvocationMocker {
            matcher: AllOf::new(),
            stub: Box::new(stub),
            expected: Expected::Any,
            calls: 0,
            hidden: false,
        }
    }

    /// Adds `matcher` to the conjunction.
    pub fn with(mut self, matcher: impl InvocationMatcher + 'static) -> Self {
        self.matcher.push(matcher);
        self
    }

    /// Attaches a call-count obligation checked by `verify`.
    pub fn expect(mut self, expected: Expected) -> Self {
        self.expected = expected;
        self
    }

    /// Keeps this mocker out of all diagnostic output.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    fn obligation(&self) -> String {
        match self.expected {
            Expected::Any => String::new(),
            Expected::AtLeastOnce => {
                format!(" [expected at least once, called {} times]", self.calls)
            }
            Expected::Exactly(required) => {
                format!(" [expected {} times, called {} times]", required, self.calls)
            }
        }
    }
}

impl Invokable for InvocationMocker {
    fn matches(&self, invocation: &Invocation) -> bool {
        if let Expected::Exactly(required) = self.expected {
            if self.calls >= required {
                return false;
            }
        }

        self.matcher.matches(invocation)
    }

    fn invoke(&mut self, invocation: &Invocation) -> Result<Value, Failure> {
        self.calls += 1;
        self.stub.invoke(invocation)
    }

    fn is_satisfied(&self) -> bool {
        match self.expected {
            Expected::Any => true,
            Expected::AtLeastOnce => self.calls >= 1,
            Expected::Exactly(required) => self.calls == required,
        }
    }

    fn describe(&self) -> Option<String> {
        if self.hidden {
            return None;
        }

        let matched = if self.matcher.is_empty() {
            "<any invocation>".to_string()
        } else {
            self.matcher.expectation()
        };

        Some(format!(
            "{}: {}{}",
            matched,
            self.stub.describe(),
            self.obligation()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constraint, matcher, stub};

    #[test]
    fn matches_only_when_every_matcher_accepts() {
        let mocker = InvocationMocker::new(stub::value(1))
            .with(matcher::operation("fetch"))
            .with(matcher::arguments((constraint::eq(3),)));

        assert!(mocker.matches(&crate::invocation!("fetch", 3)));
        assert!(!mocker.matches(&crate::invocation!("fetch", 4)));
        assert!(!mocker.matches(&crate::invocation!("store", 3)));
    }

    #[test]
    fn spent_budget_stops_matching() {
        let mut mocker = InvocationMocker::new(stub::value(1)).expect(Expected::Exactly(1));
        let invocation = crate::invocation!("fetch");

        assert!(mocker.matches(&invocation));
        mocker.invoke(&invocation).unwrap();
        assert!(mocker.is_satisfied());
        assert!(!mocker.matches(&invocation));
    }

    #[test]
    fn hidden_mockers_do_not_describe_themselves() {
        let mocker = InvocationMocker::new(stub::value(1))
            .with(matcher::operation("fetch"))
            .hidden();

        assert_eq!(mocker.describe(), None);
    }

    #[test]
    fn description_names_matchers_stub_and_obligation() {
        let mocker = InvocationMocker::new(stub::value("ok"))
            .with(matcher::operation("bar"))
            .with(matcher::arguments((constraint::eq(42),)))
            .expect(Expected::AtLeastOnce);

        assert_eq!(
            mocker.describe().unwrap(),
            "bar(42): returns \"ok\" [expected at least once, called 0 times]"
        );
    }
}
