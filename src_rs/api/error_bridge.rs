// 목적:
// - Python에서 호출 가능한 오류 분류 브릿지 클래스를 제공한다.
//
// 설명:
// - status와 응답 본문 원문(JSON 문자열)을 받아 Rust 분류기를 실행하고,
//   분류된 오류를 JSON 문자열로 반환하거나 RuntimeError로 올린다.
//
// 디자인 패턴:
// - 파사드(Facade) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/core/response.rs

use std::sync::Arc;

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::classified::RestRequest;
use crate::core::errors::{CoreError, CoreResult};
use crate::core::response::check_raw_response;
use crate::telemetry::init_tracing_once;

/// Python에 노출되는 오류 분류 브릿지 클래스다.
#[pyclass(name = "ErrorBridge")]
pub struct PyErrorBridge;

#[pymethods]
impl PyErrorBridge {
    /// 브릿지 객체를 생성하고 진단 로그 구독자를 준비한다.
    #[new]
    pub fn new() -> Self {
        init_tracing_once();
        Self
    }

    /// 응답을 분류해 오류 페이로드(JSON)를 반환한다. 성공 응답이면 None이다.
    #[pyo3(signature = (status, body_json, request_json=None))]
    pub fn classify(
        &self,
        status: u16,
        body_json: &str,
        request_json: Option<&str>,
    ) -> PyResult<Option<String>> {
        classify_to_json(status, body_json, request_json)
            .map_err(|error| PyValueError::new_err(error.to_string()))
    }

    /// 응답이 오류이면 분류된 페이로드(JSON)를 담은 RuntimeError를 발생시킨다.
    #[pyo3(signature = (status, body_json, request_json=None))]
    pub fn raise_if_error(
        &self,
        status: u16,
        body_json: &str,
        request_json: Option<&str>,
    ) -> PyResult<()> {
        match self.classify(status, body_json, request_json)? {
            Some(payload) => Err(PyRuntimeError::new_err(payload)),
            None => Ok(()),
        }
    }
}

fn classify_to_json(
    status: u16,
    body_json: &str,
    request_json: Option<&str>,
) -> CoreResult<Option<String>> {
    let request = request_json.map(parse_request).transpose()?.map(Arc::new);

    match check_raw_response(status, body_json, request) {
        Ok(_) => Ok(None),
        Err(CoreError::Classified(classified)) => serde_json::to_string(&classified.to_payload())
            .map(Some)
            .map_err(|error| CoreError::Serialization(format!("분류 결과 직렬화 실패: {}", error))),
        Err(other) => Err(other),
    }
}

fn parse_request(request_json: &str) -> CoreResult<RestRequest> {
    let request: RestRequest = serde_json::from_str(request_json).map_err(|error| {
        CoreError::Serialization(format!("요청 페이로드 JSON 파싱에 실패했습니다: {}", error))
    })?;
    request.validate()?;
    Ok(request)
}
