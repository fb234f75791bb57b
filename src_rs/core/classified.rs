// 목적:
// - 분류 결과 오류 값과 원 요청 서술자를 정의한다.
//
// 설명:
// - ClassifiedError는 kind/message/status/raw_result/request를 그대로 보존한다.
// - request는 진단용 역참조이며 분류기가 수정하거나 소유권을 가져가지 않는다.
//
// 디자인 패턴:
// - 팩토리 생성자(Factory Constructor) + 직렬화 페이로드(Payload DTO).
//
// 참조:
// - src_rs/core/classifier.rs
// - src_rs/api/error_bridge.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::core::error_kind::ErrorKind;
use crate::core::errors::{CoreError, CoreResult};

/// 오류를 일으킨 원 요청의 진단용 서술자다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestRequest {
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub params: BTreeMap<String, String>,
    #[serde(default)]
    pub body: Option<Value>,
}

impl RestRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            params: BTreeMap::new(),
            body: None,
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// 외부에서 받은 요청 서술자를 검증한다.
    pub fn validate(&self) -> CoreResult<()> {
        if self.method.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "request.method는 비어 있을 수 없습니다".to_string(),
            ));
        }

        if self.path.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "request.path는 비어 있을 수 없습니다".to_string(),
            ));
        }

        Ok(())
    }
}

/// 검색 백엔드 응답에서 분류된 실패다.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message} (status={status})")]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub message: String,
    pub status: u16,
    pub raw_result: Value,
    pub request: Option<Arc<RestRequest>>,
}

impl ClassifiedError {
    /// kind 태그로부터 구체 오류 값을 만든다.
    pub fn new(
        kind: ErrorKind,
        message: impl Into<String>,
        status: u16,
        raw_result: Value,
        request: Option<Arc<RestRequest>>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            status,
            raw_result,
            request,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind.is_not_found()
    }

    pub fn is_already_exists(&self) -> bool {
        self.kind.is_already_exists()
    }

    pub fn to_payload(&self) -> ClassifiedErrorPayload {
        ClassifiedErrorPayload {
            kind: self.kind,
            message: self.message.clone(),
            status: self.status,
            raw_result: self.raw_result.clone(),
            request: self.request.as_deref().cloned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedErrorPayload {
    pub kind: ErrorKind,
    pub message: String,
    pub status: u16,
    pub raw_result: Value,
    pub request: Option<RestRequest>,
}
