use dynamock::{
    constraint, invocation, matcher, stub, DynamicMock, Failure, InvocationMocker, Value,
};

trait Repository {
    fn fetch(&self, key: i32) -> String;
}

#[test]
fn last_registered_rule_wins() {
    let mock = DynamicMock::new::<dyn Repository>("mockRepository");

    mock.add(InvocationMocker::new(stub::value("first")).with(matcher::operation("fetch")));
    mock.add(InvocationMocker::new(stub::value("second")).with(matcher::operation("fetch")));

    let answer = mock.invoke(invocation!("fetch", 1)).unwrap();
    assert_eq!(answer.downcast_ref::<&str>(), Some(&"second"));
}

#[test]
fn specific_rule_added_later_shadows_catch_all() {
    let mock = DynamicMock::new::<dyn Repository>("mockRepository");

    mock.add(InvocationMocker::new(stub::value("anything")).with(matcher::operation("fetch")));
    mock.add(
        InvocationMocker::new(stub::value("forty-two"))
            .with(matcher::operation("fetch"))
            .with(matcher::arguments((constraint::eq(42),))),
    );

    let specific = mock.invoke(invocation!("fetch", 42)).unwrap();
    assert_eq!(specific.downcast_ref::<&str>(), Some(&"forty-two"));

    let fallback = mock.invoke(invocation!("fetch", 7)).unwrap();
    assert_eq!(fallback.downcast_ref::<&str>(), Some(&"anything"));
}

#[test]
fn unmatched_invocation_fails_naming_the_call() {
    let mock = DynamicMock::new::<dyn Repository>("mockRepository");

    let failure = mock.invoke(invocation!("missing", 7)).unwrap_err();

    let failure = match failure {
        Failure::Mock(failure) => failure,
        other => panic!("expected a mock failure, got: {}", other),
    };
    assert_eq!(failure.mock, "mockRepository");
    assert_eq!(failure.invocation.operation(), "missing");
    assert_eq!(failure.message, "unexpected invocation missing(7)");
}

#[test]
fn mock_failure_lists_registered_rules_but_not_hidden_defaults() {
    let mock = DynamicMock::new::<dyn Repository>("mockRepository");
    mock.add(
        InvocationMocker::new(stub::value("ok"))
            .with(matcher::operation("fetch"))
            .with(matcher::arguments((constraint::eq(42),))),
    );

    let failure = mock.invoke(invocation!("fetch", 7)).unwrap_err();
    let rendered = failure.to_string();

    assert!(rendered.contains("mockRepository: unexpected invocation fetch(7)"));
    assert!(rendered.contains("fetch(42): returns \"ok\""));
    assert!(!rendered.contains("to_string"));
    assert!(!rendered.contains("hash"));
}

#[test]
fn default_stub_override_answers_unmatched_invocations() {
    let mock = DynamicMock::new::<dyn Repository>("mockRepository");
    mock.set_default_stub(stub::value(0));

    let answer = mock.invoke(invocation!("fetch", 9)).unwrap();
    assert_eq!(answer.downcast_ref::<i32>(), Some(&0));
}

#[test]
fn exhausted_exact_rule_falls_through_to_older_entries() {
    let mock = DynamicMock::new::<dyn Repository>("mockRepository");

    mock.add(InvocationMocker::new(stub::value("older")).with(matcher::operation("fetch")));
    mock.add(
        InvocationMocker::new(stub::value("newer"))
            .with(matcher::operation("fetch"))
            .expect(dynamock::Expected::Exactly(1)),
    );

    let first = mock.invoke(invocation!("fetch", 1)).unwrap();
    assert_eq!(first.downcast_ref::<&str>(), Some(&"newer"));

    let second = mock.invoke(invocation!("fetch", 1)).unwrap();
    assert_eq!(second.downcast_ref::<&str>(), Some(&"older"));
}

#[test]
fn mock_over_a_lenient_dispatcher_keeps_its_default_stub() {
    let mut dispatcher = dynamock::InvocationDispatcher::new();
    dispatcher.set_default_stub(stub::value("lenient"));

    let mock = DynamicMock::with_dispatcher::<dyn Repository>("mockRepository", dispatcher);

    let answer = mock.invoke(invocation!("never_stubbed")).unwrap();
    assert_eq!(answer.downcast_ref::<&str>(), Some(&"lenient"));
}

#[test]
fn stub_failures_pass_through_unwrapped() {
    let mock = DynamicMock::new::<dyn Repository>("mockRepository");
    mock.add(
        InvocationMocker::new(stub::fail("connection refused")).with(matcher::operation("fetch")),
    );

    let failure = mock.invoke(invocation!("fetch", 1)).unwrap_err();

    match failure {
        Failure::Stub(error) => assert_eq!(error.to_string(), "connection refused"),
        other => panic!("expected the simulated failure verbatim, got: {}", other),
    }
}

#[test]
fn custom_stub_sees_the_invocation() {
    let mock = DynamicMock::new::<dyn Repository>("mockRepository");
    mock.add(
        InvocationMocker::new(stub::from_fn("doubles its argument", |invocation| {
            let argument = invocation.arguments()[0]
                .downcast_ref::<i32>()
                .copied()
                .unwrap_or(0);
            Ok(Value::of(argument * 2))
        }))
        .with(matcher::operation("fetch")),
    );

    let answer = mock.invoke(invocation!("fetch", 21)).unwrap();
    assert_eq!(answer.downcast_ref::<i32>(), Some(&42));
}
