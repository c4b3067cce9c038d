//! End-to-end tests exercising the engine the way a call-interception
//! layer would: route a recorded call through a list of expectations, and
//! render a diagnostic when nothing accepts it.

use std::collections::HashMap;

use standin::{
    args, AnyValue, Between, Equal, Expectation, ExpectedCalls, IndexedArgument, MapKey,
    MatchError, Pattern, UnexpectedCallError, Value, ValueSerializer,
};

/// Find the first expectation accepting the call and answer through it.
/// This mirrors what a mock object does per intercepted method call.
fn dispatch(
    method: &str,
    expectations: &mut [Expectation],
    call: &[Value],
) -> Result<Value, UnexpectedCallError> {
    for expectation in expectations.iter_mut() {
        if expectation.matches(call) {
            return expectation
                .match_call(call)
                .map_err(|e| UnexpectedCallError::new(method).with_cause(e));
        }
    }
    Err(UnexpectedCallError::new(method).with_message("no expectation matched"))
}

#[test]
fn test_dispatch_routes_to_the_first_matching_expectation() {
    let mut fetch_by_id = Expectation::new(vec![Box::new(Between::new(1, 100))]);
    fetch_by_id.set_return_value("by-id");
    let mut fetch_by_name = Expectation::new(vec![Box::new(Pattern::new(r"^[a-z]+$"))]);
    fetch_by_name.set_return_value("by-name");
    let mut expectations = vec![fetch_by_id, fetch_by_name];

    assert_eq!(
        dispatch("fetch", &mut expectations, &args![7]).unwrap(),
        Value::from("by-id")
    );
    assert_eq!(
        dispatch("fetch", &mut expectations, &args!["ada"]).unwrap(),
        Value::from("by-name")
    );

    assert_eq!(expectations[0].match_count(), 1);
    assert_eq!(expectations[1].match_count(), 1);
}

#[test]
fn test_unmatched_call_renders_a_diagnostic() {
    let serializer = ValueSerializer::new();
    let mut expectations = vec![Expectation::equal_to(args!["read", 1])];

    let err = dispatch("handle", &mut expectations, &args!["write", 2]).unwrap_err();
    assert_eq!(err.method(), "handle");
    assert_eq!(err.message(), Some("no expectation matched"));

    // The owner renders what the call actually carried.
    let rendered = serializer.serialize_args(&args!["write", 2]).join(", ");
    assert_eq!(rendered, "String: 5 bytes: \"write\", Integer: 2");
    assert_eq!(expectations[0].match_count(), 0);
}

#[test]
fn test_rejected_match_call_chains_the_cause() {
    let mut strict = Expectation::equal_to(args![1]);

    let err = strict.match_call(&args![2]).unwrap_err();
    let carrier = UnexpectedCallError::new("save").with_cause(err);

    match carrier.cause() {
        Some(MatchError::NotMatched { expectation, args }) => {
            assert_eq!(expectation, "equal to Integer: 1");
            assert_eq!(args, &args![2]);
        }
        other => panic!("expected a NotMatched cause, got {:?}", other),
    }
    // And it is reachable through the std error chain too.
    assert!(std::error::Error::source(&carrier).is_some());
}

#[test]
fn test_verification_pass_reads_advisory_counts() {
    let mut save = Expectation::any_arguments();
    save.set_expected_calls(ExpectedCalls::Times(2));
    let mut log = Expectation::any_arguments();

    save.match_call(&args!["a"]).unwrap();
    save.match_call(&args!["b"]).unwrap();
    log.match_call(&args!["entry"]).unwrap();

    // What a teardown/verify step does with each expectation.
    assert!(save.is_satisfied());
    assert!(log.is_satisfied());
    assert_eq!(save.match_count(), 2);
    assert_eq!(save.expected_calls(), ExpectedCalls::Times(2));
}

#[test]
fn test_mapped_returns_drive_a_stubbed_lookup() {
    let mut translate = Expectation::new(vec![
        Box::new(AnyValue::new()),
        Box::new(Equal::new("en")),
    ]);
    translate.set_return_map(
        IndexedArgument::new(0),
        HashMap::from([
            (MapKey::from("hello"), Value::from("hallo")),
            (MapKey::from("bye"), Value::from("tschuess")),
        ]),
    );

    assert_eq!(
        translate.match_call(&args!["hello", "en"]).unwrap(),
        Value::from("hallo")
    );
    assert_eq!(
        translate.match_call(&args!["bye", "en"]).unwrap(),
        Value::from("tschuess")
    );

    let err = translate.match_call(&args!["unknown", "en"]).unwrap_err();
    assert_eq!(
        err,
        MatchError::MissingKey {
            key: MapKey::from("unknown")
        }
    );
    // Three accepted calls, even though the last lookup faulted.
    assert_eq!(translate.match_count(), 3);
}

#[cfg(feature = "json")]
#[test]
fn test_recorded_json_calls_replay_against_expectations() {
    use serde_json::json;

    let recorded = vec![json!("login"), json!(3), json!({"remember": true})];
    let call: Vec<Value> = recorded.into_iter().map(Value::from).collect();

    let mut expectation = Expectation::new(vec![
        Box::new(Equal::new("login")),
        Box::new(Between::new(0, 5)),
        Box::new(standin::StringKeyedMap::new()),
    ]);
    expectation.set_return_value(true);

    assert_eq!(expectation.match_call(&call).unwrap(), Value::Bool(true));
}
