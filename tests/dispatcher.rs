use dynamock::{
    invocation, matcher, stub, Failure, InvocationDispatcher, InvocationMocker,
};

#[test]
fn empty_dispatcher_rejects_with_unexpected() {
    let mut dispatcher = InvocationDispatcher::new();

    let failure = dispatcher.dispatch(&invocation!("ping")).unwrap_err();

    match failure {
        Failure::Unexpected(invocation) => assert_eq!(invocation.operation(), "ping"),
        other => panic!("expected an unexpected-invocation failure, got: {}", other),
    }
}

#[test]
fn clear_drops_rules_but_keeps_the_default_stub() {
    let mut dispatcher = InvocationDispatcher::new();
    dispatcher.set_default_stub(stub::value("fallback"));
    dispatcher.add(InvocationMocker::new(stub::value("stubbed")).with(matcher::operation("ping")));

    dispatcher.clear();

    let answer = dispatcher.dispatch(&invocation!("ping")).unwrap();
    assert_eq!(answer.downcast_ref::<&str>(), Some(&"fallback"));
}

#[test]
fn scan_order_is_reverse_insertion() {
    let mut dispatcher = InvocationDispatcher::new();
    dispatcher.add(InvocationMocker::new(stub::value(1)).with(matcher::operation("ping")));
    dispatcher.add(InvocationMocker::new(stub::value(2)).with(matcher::operation("ping")));
    dispatcher.add(InvocationMocker::new(stub::value(3)).with(matcher::operation("pong")));

    let answer = dispatcher.dispatch(&invocation!("ping")).unwrap();
    assert_eq!(answer.downcast_ref::<i32>(), Some(&2));
}

#[test]
fn no_arguments_matcher_rejects_calls_with_arguments() {
    let mut dispatcher = InvocationDispatcher::new();
    dispatcher.add(
        InvocationMocker::new(stub::value("bare"))
            .with(matcher::operation("ping"))
            .with(matcher::no_arguments()),
    );

    let answer = dispatcher.dispatch(&invocation!("ping")).unwrap();
    assert_eq!(answer.downcast_ref::<&str>(), Some(&"bare"));

    assert!(dispatcher.dispatch(&invocation!("ping", 1)).is_err());
}

#[test]
fn rendering_lists_rules_in_insertion_order() {
    let mut dispatcher = InvocationDispatcher::new();
    assert_eq!(dispatcher.to_string(), "no invokables registered");

    dispatcher.add(InvocationMocker::new(stub::value(1)).with(matcher::operation("ping")));
    dispatcher.add(InvocationMocker::new(stub::fail("boom")).with(matcher::operation("pong")));

    assert_eq!(
        dispatcher.to_string(),
        "registered invokables:\n  ping: returns 1\n  pong: fails with \"boom\""
    );
}
