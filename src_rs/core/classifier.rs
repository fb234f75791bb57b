// 목적:
// - HTTP 상태 코드와 디코딩된 응답 본문으로 실패 여부를 판정하고 오류를 분류한다.
//
// 설명:
// - status < 400 은 본문을 보지 않고 통과시킨다.
// - 레거시 문자열 오류("Name[message]", "; nested: " 연결)와
//   구조화 오류({"type", "reason"})를 각각의 분기에서 해석한다.
// - 어떤 테이블에도 걸리지 않으면 Unknown으로 떨어지므로 400 이상은 항상 오류가 된다.
//
// 디자인 패턴:
// - 순수 함수(Pure Function) + 정적 디스패치 테이블(Static Dispatch Table).
//
// 참조:
// - src_rs/core/tables.rs
// - src_rs/core/classified.rs

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::core::classified::{ClassifiedError, RestRequest};
use crate::core::error_kind::ErrorKind;
use crate::core::tables::{kind_by_name, kind_by_trailing_pattern, kind_by_type_tag};

const NESTED_SEPARATOR: &str = "; nested: ";
const NOT_FOUND_MESSAGE: &str = "Item not found";

/// 응답이 오류이면 분류된 오류를 반환한다.
///
/// `Ok(())`는 성공 응답을 뜻한다. 400 이상의 status는 본문 형태와 무관하게
/// 정확히 하나의 `ClassifiedError`로 귀결된다.
pub fn raise_if_error(
    status: u16,
    body: &Value,
    request: Option<Arc<RestRequest>>,
) -> Result<(), ClassifiedError> {
    tracing::trace!(status, "응답 상태 분류 시작");

    if status < 400 {
        return Ok(());
    }

    let error = classify_failure(status, body, request);
    tracing::debug!(
        status,
        kind = error.kind.as_str(),
        message = %error.message,
        "검색 백엔드 오류 분류"
    );
    Err(error)
}

fn classify_failure(
    status: u16,
    body: &Value,
    request: Option<Arc<RestRequest>>,
) -> ClassifiedError {
    let fail = |kind: ErrorKind, message: String| {
        ClassifiedError::new(kind, message, status, body.clone(), request.clone())
    };

    let error = match body.as_object().and_then(|object| object.get("error")) {
        Some(error) => error,
        None if status == 404 && body.is_object() => {
            return fail(ErrorKind::NotFound, NOT_FOUND_MESSAGE.to_string());
        }
        None => {
            return fail(
                ErrorKind::Unknown,
                format!("Unknown exception type: {}, {}", status, body),
            );
        }
    };

    match error {
        Value::String(text) => {
            let innermost = innermost_cause(text);
            let (kind, message) = match_legacy_error(innermost)
                .unwrap_or_else(|| (ErrorKind::Unknown, innermost.to_string()));
            fail(kind, message)
        }
        Value::Object(object) => {
            let (kind, message) = match_structured_error(object)
                .unwrap_or_else(|| (ErrorKind::Unknown, error.to_string()));
            fail(kind, message)
        }
        other => fail(ErrorKind::Unknown, other.to_string()),
    }
}

/// 마지막 `"; nested: "` 뒤의 가장 안쪽 원인만 남긴다.
fn innermost_cause(error: &str) -> &str {
    match error.rfind(NESTED_SEPARATOR) {
        Some(index) => &error[index + NESTED_SEPARATOR.len()..],
        None => error,
    }
}

fn match_legacy_error(error: &str) -> Option<(ErrorKind, String)> {
    if let Some((name, rest)) = error.split_once('[') {
        if let Some(kind) = kind_by_name(name) {
            let message = rest.strip_suffix(']').unwrap_or(rest);
            return Some((kind, message.to_string()));
        }
    }

    kind_by_trailing_pattern(error).map(|kind| (kind, error.to_string()))
}

fn match_structured_error(error: &Map<String, Value>) -> Option<(ErrorKind, String)> {
    let kind = error
        .get("type")
        .and_then(Value::as_str)
        .and_then(kind_by_type_tag)?;

    let message = match error.get("reason") {
        Some(Value::String(reason)) => reason.clone(),
        Some(reason) => reason.to_string(),
        None => format!("unknown reason: {}", Value::Object(error.clone())),
    };

    Some((kind, message))
}
