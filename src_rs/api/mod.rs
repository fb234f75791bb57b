// 목적:
// - Python FFI 경계 모듈을 선언한다.
//
// 설명:
// - 오류 분류 브릿지를 Python 계층에서 하나의 클래스로 사용할 수 있게 한다.
//
// 디자인 패턴:
// - 모듈 분리(Module Separation).
//
// 참조:
// - src_rs/api/error_bridge.rs

pub mod error_bridge;
