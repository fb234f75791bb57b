// 목적:
// - 오류 분류에 쓰는 정적 조회 테이블을 제공한다.
//
// 설명:
// - 레거시 예외 이름 테이블, 메시지 접미사 테이블, 구조화 오류 type 태그 테이블을 분리한다.
// - 이름/태그 테이블은 최초 조회 시 한 번만 구성되고 이후 읽기 전용이다.
// - 접미사 테이블은 선언 순서가 곧 우선순위다.
//
// 디자인 패턴:
// - 정적 디스패치 테이블(Static Dispatch Table).
//
// 참조:
// - src_rs/core/classifier.rs

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::core::error_kind::ErrorKind;

const NAME_ENTRIES: &[(&str, ErrorKind)] = &[
    ("DocumentAlreadyExistsEngineException", ErrorKind::DocumentAlreadyExists),
    ("DocumentAlreadyExistsException", ErrorKind::DocumentAlreadyExists),
    ("TypeMissingException", ErrorKind::TypeMissing),
    ("VersionConflictEngineException", ErrorKind::VersionConflict),
    ("ClusterBlockException", ErrorKind::ClusterBlock),
    ("ElasticSearchIllegalArgumentException", ErrorKind::IllegalArgument),
    ("IndexAlreadyExistsException", ErrorKind::IndexAlreadyExists),
    ("IndexMissingException", ErrorKind::IndexMissing),
    ("InvalidIndexNameException", ErrorKind::InvalidIndexName),
    ("MapperParsingException", ErrorKind::MapperParsing),
    ("ReduceSearchPhaseException", ErrorKind::ReduceSearchPhaseFailure),
    (
        "ReplicationShardOperationFailedException",
        ErrorKind::ReplicationShardOperationFailed,
    ),
    ("SearchPhaseExecutionException", ErrorKind::SearchPhaseExecutionFailure),
    ("DocumentMissingException", ErrorKind::DocumentMissing),
];

const TYPE_TAG_ENTRIES: &[(&str, ErrorKind)] = &[
    ("index_not_found_exception", ErrorKind::IndexMissing),
    ("resource_already_exists_exception", ErrorKind::IndexAlreadyExists),
    ("reduce_search_phase_exception", ErrorKind::ReduceSearchPhaseFailure),
    ("version_conflict_engine_exception", ErrorKind::VersionConflict),
    ("illegal_argument_exception", ErrorKind::IllegalArgument),
    ("search_phase_execution_exception", ErrorKind::SearchPhaseExecutionFailure),
    ("mapper_parsing_exception", ErrorKind::MapperParsing),
    ("invalid_index_name_exception", ErrorKind::InvalidIndexName),
    ("cluster_block_exception", ErrorKind::ClusterBlock),
    ("document_missing_exception", ErrorKind::DocumentMissing),
];

/// 메시지 끝에 붙는 설명 문구로만 식별되는 오류 패턴이다.
pub const TRAILING_PATTERNS: &[(&str, ErrorKind)] = &[
    ("] missing", ErrorKind::NotFound),
    ("] Already exists", ErrorKind::AlreadyExists),
];

static NAME_TABLE: LazyLock<HashMap<&'static str, ErrorKind>> =
    LazyLock::new(|| NAME_ENTRIES.iter().copied().collect());

static TYPE_TAG_TABLE: LazyLock<HashMap<&'static str, ErrorKind>> =
    LazyLock::new(|| TYPE_TAG_ENTRIES.iter().copied().collect());

/// 레거시 예외 이름(`IndexMissingException` 등)으로 kind를 찾는다.
pub fn kind_by_name(name: &str) -> Option<ErrorKind> {
    NAME_TABLE.get(name).copied()
}

/// 구조화 오류의 `type` 태그로 kind를 찾는다.
pub fn kind_by_type_tag(tag: &str) -> Option<ErrorKind> {
    TYPE_TAG_TABLE.get(tag).copied()
}

/// 선언 순서상 처음으로 일치하는 접미사 패턴의 kind를 반환한다.
pub fn kind_by_trailing_pattern(error: &str) -> Option<ErrorKind> {
    TRAILING_PATTERNS
        .iter()
        .find(|(pattern, _)| error.ends_with(*pattern))
        .map(|(_, kind)| *kind)
}
