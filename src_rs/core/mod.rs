// 목적:
// - 핵심 런타임 계층 모듈을 선언한다.
//
// 설명:
// - 오류 분류기, 정적 테이블, 오류 모델, 응답 어댑터를 분리해 유지보수성을 높인다.
//
// 디자인 패턴:
// - 명시적 오류 모델(Explicit Error Model).
//
// 참조:
// - src_rs/core/classifier.rs
// - src_rs/core/tables.rs
// - src_rs/core/errors.rs

pub mod classified;
pub mod classifier;
pub mod error_kind;
pub mod errors;
pub mod response;
pub mod tables;
