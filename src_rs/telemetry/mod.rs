// 목적:
// - 진단 로그 구독자 초기화를 제공한다.
//
// 설명:
// - RUST_LOG 형식의 필터를 따르며, 이미 구독자가 있으면 아무것도 하지 않는다.
// - 분류기의 진단 이벤트는 이 필터로 켜고 끌 수 있다.
//
// 참조:
// - src_rs/core/classifier.rs
// - src_rs/api/error_bridge.rs

use tracing_subscriber::{fmt, EnvFilter};

/// 전역 tracing 구독자를 한 번만 설치한다.
///
/// 이번 호출로 설치했으면 true, 이미 설치돼 있었으면 false를 반환한다.
pub fn init_tracing_once() -> bool {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .is_ok()
}
