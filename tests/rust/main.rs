use std::sync::Arc;

use _search_error_classifier::{raise_if_error, ClassifiedError, ErrorKind, RestRequest};
use rstest::rstest;
use serde_json::{json, Value};

fn classify(status: u16, body: Value) -> ClassifiedError {
    raise_if_error(status, &body, None).expect_err("status >= 400 must be classified")
}

#[rstest]
#[case(200, json!({"error": "IndexMissingException[[foo] missing]"}))]
#[case(201, json!("garbage"))]
#[case(304, Value::Null)]
#[case(399, json!({"error": {"type": "index_not_found_exception"}}))]
fn success_status_passes_through(#[case] status: u16, #[case] body: Value) {
    assert!(raise_if_error(status, &body, None).is_ok());
}

#[rstest]
#[case(400, json!({}))]
#[case(500, json!({"status": 500}))]
#[case(503, json!("Service Unavailable"))]
#[case(502, json!([1, 2, 3]))]
#[case(400, Value::Null)]
fn body_without_error_key_is_unknown(#[case] status: u16, #[case] body: Value) {
    let error = classify(status, body.clone());
    assert_eq!(error.kind, ErrorKind::Unknown);
    assert!(error.message.contains(&status.to_string()));
    assert!(error.message.contains(&body.to_string()));
    assert_eq!(error.raw_result, body);
}

#[test]
fn not_found_without_error_key() {
    let error = classify(404, json!({}));
    assert_eq!(error.kind, ErrorKind::NotFound);
    assert_eq!(error.message, "Item not found");
    assert_eq!(error.status, 404);
}

#[rstest]
#[case("IndexAlreadyExistsException[[foo] already exists]", ErrorKind::IndexAlreadyExists, "[foo] already exists")]
#[case("IndexMissingException[[foo] missing]", ErrorKind::IndexMissing, "[foo] missing")]
#[case("DocumentAlreadyExistsEngineException[[idx][0] [t][1]: document already exists]", ErrorKind::DocumentAlreadyExists, "[idx][0] [t][1]: document already exists")]
#[case("ClusterBlockException[blocked by: [FORBIDDEN/8/index write (api)];]", ErrorKind::ClusterBlock, "blocked by: [FORBIDDEN/8/index write (api)];")]
#[case("ElasticSearchIllegalArgumentException[bad value]", ErrorKind::IllegalArgument, "bad value")]
#[case("InvalidIndexNameException[[Foo] Invalid index name [Foo], must be lowercase]", ErrorKind::InvalidIndexName, "[Foo] Invalid index name [Foo], must be lowercase")]
#[case("ReplicationShardOperationFailedException[[idx][2] ]", ErrorKind::ReplicationShardOperationFailed, "[idx][2] ")]
#[case("SearchPhaseExecutionException[Failed to execute phase [query]]", ErrorKind::SearchPhaseExecutionFailure, "Failed to execute phase [query]")]
#[case("ReduceSearchPhaseException[Failed to execute phase [fetch]]", ErrorKind::ReduceSearchPhaseFailure, "Failed to execute phase [fetch]")]
#[case("DocumentMissingException[[t][1]: document missing]", ErrorKind::DocumentMissing, "[t][1]: document missing")]
fn legacy_exception_names(
    #[case] error: &str,
    #[case] expected_kind: ErrorKind,
    #[case] expected_message: &str,
) {
    let classified = classify(400, json!({ "error": error }));
    assert_eq!(classified.kind, expected_kind);
    assert_eq!(classified.message, expected_message);
}

#[test]
fn nested_cause_uses_last_segment() {
    let error = classify(
        500,
        json!({"error": "SomeWrapper; nested: TypeMissingException[[t] missing]"}),
    );
    assert_eq!(error.kind, ErrorKind::TypeMissing);
    assert_eq!(error.message, "[t] missing");
}

#[test]
fn deepest_of_several_nested_causes_wins() {
    let error = classify(
        500,
        json!({"error": "RemoteTransportException[x]; nested: IndexMissingException[[a] missing]; nested: VersionConflictEngineException[[t][1]: version conflict]"}),
    );
    assert_eq!(error.kind, ErrorKind::VersionConflict);
    assert_eq!(error.message, "[t][1]: version conflict");
}

#[rstest]
#[case("[foo] missing", ErrorKind::NotFound, "[foo] missing")]
#[case("[foo] Already exists", ErrorKind::AlreadyExists, "[foo] Already exists")]
#[case("Wrapper[x]; nested: [bar] missing", ErrorKind::NotFound, "[bar] missing")]
fn trailing_patterns(
    #[case] error: &str,
    #[case] expected_kind: ErrorKind,
    #[case] expected_message: &str,
) {
    let classified = classify(400, json!({ "error": error }));
    assert_eq!(classified.kind, expected_kind);
    assert_eq!(classified.message, expected_message);
}

#[test]
fn trailing_pattern_message_is_whole_error_string() {
    let error = classify(404, json!({"error": "[foo] missing"}));
    assert_eq!(error.kind, ErrorKind::NotFound);
    assert_eq!(error.message, "[foo] missing");
}

#[test]
fn unrecognized_legacy_string_is_unknown() {
    let error = classify(500, json!({"error": "NullPointerException[null]"}));
    assert_eq!(error.kind, ErrorKind::Unknown);
    assert_eq!(error.message, "NullPointerException[null]");
}

#[rstest]
#[case("index_not_found_exception", ErrorKind::IndexMissing)]
#[case("resource_already_exists_exception", ErrorKind::IndexAlreadyExists)]
#[case("reduce_search_phase_exception", ErrorKind::ReduceSearchPhaseFailure)]
#[case("version_conflict_engine_exception", ErrorKind::VersionConflict)]
#[case("illegal_argument_exception", ErrorKind::IllegalArgument)]
#[case("search_phase_execution_exception", ErrorKind::SearchPhaseExecutionFailure)]
fn structured_type_tags(#[case] tag: &str, #[case] expected_kind: ErrorKind) {
    let error = classify(400, json!({"error": {"type": tag, "reason": "no such index"}}));
    assert_eq!(error.kind, expected_kind);
    assert_eq!(error.message, "no such index");
}

#[test]
fn structured_error_without_reason_uses_generated_message() {
    let body = json!({"error": {"type": "index_not_found_exception", "index": "foo"}, "status": 404});
    let error = classify(404, body.clone());
    assert_eq!(error.kind, ErrorKind::IndexMissing);
    assert!(error.message.starts_with("unknown reason: "));
    assert!(error.message.contains("index_not_found_exception"));
    assert_eq!(error.raw_result, body);
}

#[test]
fn unknown_type_tag_falls_back_to_stringified_error() {
    let error = classify(400, json!({"error": {"type": "totally_unknown_tag"}}));
    assert_eq!(error.kind, ErrorKind::Unknown);
    assert_eq!(error.message, r#"{"type":"totally_unknown_tag"}"#);
}

#[test]
fn request_is_passed_through_unchanged() {
    let request = Arc::new(
        RestRequest::new("PUT", "/stories-index").with_body(json!({"settings": {}})),
    );
    let body = json!({"error": {"type": "resource_already_exists_exception", "reason": "index [stories-index/x] already exists"}});

    let error = raise_if_error(400, &body, Some(Arc::clone(&request))).unwrap_err();

    assert!(error.is_already_exists());
    let carried = error.request.expect("request must be carried");
    assert!(Arc::ptr_eq(&carried, &request));
    assert_eq!(*carried, RestRequest::new("PUT", "/stories-index").with_body(json!({"settings": {}})));
}

#[rstest]
#[case(404, json!({}))]
#[case(400, json!({"error": "SomeWrapper; nested: TypeMissingException[[t] missing]"}))]
#[case(400, json!({"error": {"type": "totally_unknown_tag"}}))]
#[case(500, json!("garbage"))]
fn classification_is_idempotent(#[case] status: u16, #[case] body: Value) {
    let first = classify(status, body.clone());
    let second = classify(status, body);
    assert_eq!(first.kind, second.kind);
    assert_eq!(first.message, second.message);
}

#[test]
fn classification_is_consistent_across_threads() {
    let handles = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                classify(400, json!({"error": "IndexMissingException[[foo] missing]"})).kind
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), ErrorKind::IndexMissing);
    }
}

#[rstest]
#[case(ErrorKind::NotFound, true, false)]
#[case(ErrorKind::IndexMissing, true, false)]
#[case(ErrorKind::AlreadyExists, false, true)]
#[case(ErrorKind::IndexAlreadyExists, false, true)]
#[case(ErrorKind::Unknown, false, false)]
fn idempotency_predicates(
    #[case] kind: ErrorKind,
    #[case] not_found: bool,
    #[case] already_exists: bool,
) {
    assert_eq!(kind.is_not_found(), not_found);
    assert_eq!(kind.is_already_exists(), already_exists);
}
