// 목적:
// - Rust 코어 계층의 표준 오류 타입을 정의한다.
//
// 설명:
// - 입력/HTTP/직렬화 오류와 분류 결과 오류를 명시적으로 구분해 호출자에 전달한다.
//
// 디자인 패턴:
// - 도메인 오류 열거형(Domain Error Enum).
//
// 참조:
// - src_rs/core/classified.rs
// - src_rs/core/response.rs

use thiserror::Error;

use crate::core::classified::ClassifiedError;

/// 코어 계층에서 공통으로 사용하는 오류 열거형이다.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("입력값이 유효하지 않습니다: {0}")]
    InvalidInput(String),
    #[error("HTTP 응답 처리에 실패했습니다: {0}")]
    Http(String),
    #[error("직렬화/역직렬화에 실패했습니다: {0}")]
    Serialization(String),
    #[error(transparent)]
    Classified(#[from] ClassifiedError),
}

pub type CoreResult<T> = Result<T, CoreError>;
