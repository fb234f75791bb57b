// 목적:
// - 전송 계층이 받은 HTTP 응답을 분류기 입력으로 변환한다.
//
// 설명:
// - 본문은 JSON으로 디코딩하고, 디코딩할 수 없으면 원문 문자열을 그대로 담아 분류기에 넘긴다.
// - 요청 전송/재시도/커넥션 관리는 이 모듈의 책임이 아니다.
//
// 디자인 패턴:
// - 어댑터(Adapter).
//
// 참조:
// - src_rs/core/classifier.rs

use std::sync::Arc;

use reqwest::Response;
use serde_json::Value;

use crate::core::classified::RestRequest;
use crate::core::classifier::raise_if_error;
use crate::core::errors::{CoreError, CoreResult};

/// 응답 본문 원문을 분류기가 받는 값으로 디코딩한다.
pub fn decode_body(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }

    serde_json::from_str(trimmed).unwrap_or_else(|error| {
        tracing::trace!(%error, "응답 본문이 JSON이 아니므로 원문 문자열로 유지");
        Value::String(raw.to_string())
    })
}

/// status/본문 원문 쌍을 분류하고 성공 시 디코딩된 본문을 반환한다.
pub fn check_raw_response(
    status: u16,
    raw_body: &str,
    request: Option<Arc<RestRequest>>,
) -> CoreResult<Value> {
    let body = decode_body(raw_body);
    raise_if_error(status, &body, request)?;
    Ok(body)
}

/// reqwest 응답을 읽어 분류하고 성공 시 디코딩된 본문을 반환한다.
pub async fn check_response(
    response: Response,
    request: Option<Arc<RestRequest>>,
) -> CoreResult<Value> {
    let status = response.status().as_u16();
    let raw_body = response
        .text()
        .await
        .map_err(|error| CoreError::Http(format!("응답 본문 읽기 실패: {}", error)))?;

    check_raw_response(status, &raw_body, request)
}
