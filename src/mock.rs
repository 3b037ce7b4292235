use std::{
    any,
    collections::hash_map::DefaultHasher,
    fmt::{self, Formatter},
    hash::{Hash, Hasher},
    sync::atomic::{AtomicU64, Ordering},
};

use parking_lot::Mutex;

use crate::{
    constraint,
    error::{Failure, MockFailure},
    matcher,
    mocker::{Invokable, InvocationMocker},
    stub::{self, Stub},
    Invocation, InvocationDispatcher, Value,
};

/// Operation name the hidden string-form default answers to. The host
/// interception mechanism must route the stand-in's string rendering
/// through this operation for the default to apply.
pub const TO_STRING: &str = "to_string";

/// Operation name the hidden equality default answers to. The call is
/// expected to carry one argument: the [`MockId`] of the compared
/// stand-in.
pub const EQ: &str = "eq";

/// Operation name the hidden hash default answers to.
pub const HASH: &str = "hash";

static NEXT_MOCK_ID: AtomicU64 = AtomicU64::new(0);

/// Identity token of a stand-in object.
///
/// Minted once per mock and never reused, it is the crate's rendition
/// of reference identity: a stand-in exposes its token, and the hidden
/// equality default compares tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MockId(u64);

impl MockId {
    fn next() -> Self {
        MockId(NEXT_MOCK_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// The externally visible mock identity: a name, the mocked type, and
/// exclusive ownership of one [`InvocationDispatcher`].
///
/// The dispatcher is reachable only through this surface
/// ([`add`](Self::add), [`set_default_stub`](Self::set_default_stub),
/// [`reset`](Self::reset)); it sits behind a mutex so a stand-in can
/// hold a shared handle to the mock while the test keeps configuring
/// it.
///
/// ```
/// use dynamock::{constraint, matcher, stub, DynamicMock, Expected, InvocationMocker};
///
/// trait Greeter {
///     fn greet(&self, name: &str) -> String;
/// }
///
/// let mock = DynamicMock::new::<dyn Greeter>("mockGreeter");
/// mock.add(
///     InvocationMocker::new(stub::value(String::from("hi, bob")))
///         .with(matcher::operation("greet"))
///         .with(matcher::arguments((constraint::eq("bob"),)))
///         .expect(Expected::AtLeastOnce),
/// );
///
/// let greeting = mock.invoke(dynamock::invocation!("greet", "bob")).unwrap();
/// assert_eq!(greeting.downcast_ref::<String>(), Some(&String::from("hi, bob")));
/// mock.verify().unwrap();
/// ```
pub struct DynamicMock {
    name: String,
    mocked_type: &'static str,
    id: MockId,
    dispatcher: Mutex<InvocationDispatcher>,
}

impl DynamicMock {
    /// Creates a mock standing in for `T`, seeded with hidden defaults
    /// for the generic object protocols (string form, equality, hash).
    pub fn new<T: ?Sized>(name: impl Into<String>) -> Self {
        DynamicMock::with_dispatcher::<T>(name, InvocationDispatcher::new())
    }

    /// Like [`new`](Self::new) but over a caller-provided dispatcher,
    /// e.g. one with a lenient default stub already in place.
    pub fn with_dispatcher<T: ?Sized>(
        name: impl Into<String>,
        dispatcher: InvocationDispatcher,
    ) -> Self {
        let mock = DynamicMock {
            name: name.into(),
            mocked_type: any::type_name::<T>(),
            id: MockId::next(),
            dispatcher: Mutex::new(dispatcher),
        };

        mock.seed_defaults(&mut mock.dispatcher.lock());
        mock
    }

    /// Derives the conventional mock name for a type:
    /// `mockRenderer` for `path::to::Renderer`.
    pub fn name_from_type<T: ?Sized>() -> String {
        let name = any::type_name::<T>();
        let name = name.split('<').next().unwrap_or(name);
        let short = name.rsplit("::").next().unwrap_or(name);
        format!("mock{}", short.trim_start_matches("dyn "))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mocked_type(&self) -> &'static str {
        self.mocked_type
    }

    /// The stand-in identity token the hidden equality default
    /// compares against.
    pub fn id(&self) -> MockId {
        self.id
    }

    /// Entry point for the host interception mechanism.
    ///
    /// Forwards to the dispatcher. An expectation-category failure
    /// ([`Failure::Unexpected`] or [`Failure::Unmet`]) is caught here,
    /// once, and rewrapped as [`Failure::Mock`] carrying the mock's
    /// name, the offending invocation, and the dispatcher's registered
    /// rules. Anything else, notably [`Failure::Stub`], passes through
    /// untouched.
    pub fn invoke(&self, invocation: Invocation) -> Result<Value, Failure> {
        let mut dispatcher = self.dispatcher.lock();

        match dispatcher.dispatch(&invocation) {
            Err(failure) if failure.is_expectation() => Err(Failure::Mock(MockFailure {
                mock: self.name.clone(),
                message: failure.to_string(),
                dispatcher: dispatcher.to_string(),
                invocation,
            })),
            result => result,
        }
    }

    /// Checks every registered usage obligation. A failure is re-raised
    /// with this mock's name prefixed so it stays attributable when
    /// several mocks are in play.
    pub fn verify(&self) -> Result<(), Failure> {
        self.dispatcher
            .lock()
            .verify()
            .map_err(|failure| Failure::Unmet(format!("{}: {}", self.name, failure)))
    }

    /// Registers an invokable. Per the dispatcher's ordering, it
    /// shadows everything registered before it, hidden defaults
    /// included.
    pub fn add(&self, invokable: impl Invokable + 'static) {
        self.dispatcher.lock().add(invokable);
    }

    /// Replaces the fallback for unmatched invocations.
    pub fn set_default_stub(&self, stub: impl Stub + 'static) {
        self.dispatcher.lock().set_default_stub(stub);
    }

    /// Forgets every invokable added since construction or the last
    /// reset and re-seeds the hidden defaults. Name, mocked type and
    /// identity survive.
    pub fn reset(&self) {
        let mut dispatcher = self.dispatcher.lock();
        dispatcher.clear();
        self.seed_defaults(&mut dispatcher);
    }

    fn seed_defaults(&self, dispatcher: &mut InvocationDispatcher) {
        dispatcher.add(
            InvocationMocker::new(stub::value(self.name.clone()))
                .with(matcher::operation(TO_STRING))
                .with(matcher::no_arguments())
                .hidden(),
        );

        let id = self.id;
        dispatcher.add(
            InvocationMocker::new(stub::from_fn(
                "returns whether equal to the stand-in",
                move |invocation: &Invocation| {
                    let same = invocation
                        .arguments()
                        .first()
                        .map_or(false, |argument| argument.downcast_ref::<MockId>() == Some(&id));
                    Ok(Value::of(same))
                },
            ))
            .with(matcher::operation(EQ))
            .with(matcher::arguments((constraint::any(),)))
            .hidden(),
        );

        dispatcher.add(
            InvocationMocker::new(stub::value(self.identity_hash()))
                .with(matcher::operation(HASH))
                .with(matcher::no_arguments())
                .hidden(),
        );
    }

    // Depends only on the identity token, so repeated calls and calls
    // across resets agree.
    fn identity_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.id.hash(&mut hasher);
        hasher.finish()
    }
}

impl fmt::Display for DynamicMock {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
