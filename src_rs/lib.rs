#![cfg_attr(feature = "python", allow(non_local_definitions))]

// 목적:
// - 검색 백엔드 오류 분류 코어의 진입점을 제공한다.
//
// 설명:
// - Rust 라이브러리로는 core 모듈의 분류기를 직접 사용한다.
// - python 기능을 켜면 Python 바인딩 모듈을 함께 빌드한다.
//
// 디자인 패턴:
// - 계층형 모듈 구조(api/core/telemetry).
//
// 참조:
// - src_rs/core/classifier.rs
// - src_rs/api/error_bridge.rs

pub mod core;
pub mod telemetry;

#[cfg(feature = "python")]
pub mod api;

pub use crate::core::classified::{ClassifiedError, ClassifiedErrorPayload, RestRequest};
pub use crate::core::classifier::raise_if_error;
pub use crate::core::error_kind::ErrorKind;
pub use crate::core::errors::{CoreError, CoreResult};

#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::types::PyModule;

#[cfg(feature = "python")]
#[pymodule]
fn _search_error_classifier(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<api::error_bridge::PyErrorBridge>()?;
    Ok(())
}
