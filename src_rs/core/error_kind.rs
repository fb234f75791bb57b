// 목적:
// - 검색 백엔드 실패 범주를 나타내는 태그 열거형을 정의한다.
//
// 설명:
// - 모든 범주는 일반 범주(Unknown) 아래의 평탄한 잎 노드이며 서로를 감싸지 않는다.
// - 호출자는 kind로 분기하고 message/status/raw_result는 표시/로그 용도로만 쓴다.
//
// 디자인 패턴:
// - 태그 열거형(Tagged Enum).
//
// 참조:
// - src_rs/core/tables.rs
// - src_rs/core/classified.rs

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    DocumentAlreadyExists,
    DocumentMissing,
    TypeMissing,
    VersionConflict,
    ClusterBlock,
    IllegalArgument,
    IndexAlreadyExists,
    IndexMissing,
    InvalidIndexName,
    MapperParsing,
    ReduceSearchPhaseFailure,
    ReplicationShardOperationFailed,
    SearchPhaseExecutionFailure,
    /// 식별할 수 없는 모든 실패를 담는 일반 범주다.
    Unknown,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::AlreadyExists => "already_exists",
            Self::DocumentAlreadyExists => "document_already_exists",
            Self::DocumentMissing => "document_missing",
            Self::TypeMissing => "type_missing",
            Self::VersionConflict => "version_conflict",
            Self::ClusterBlock => "cluster_block",
            Self::IllegalArgument => "illegal_argument",
            Self::IndexAlreadyExists => "index_already_exists",
            Self::IndexMissing => "index_missing",
            Self::InvalidIndexName => "invalid_index_name",
            Self::MapperParsing => "mapper_parsing",
            Self::ReduceSearchPhaseFailure => "reduce_search_phase_failure",
            Self::ReplicationShardOperationFailed => "replication_shard_operation_failed",
            Self::SearchPhaseExecutionFailure => "search_phase_execution_failure",
            Self::Unknown => "unknown",
        }
    }

    /// 대상 리소스가 없다는 의미의 범주인지 판정한다.
    pub fn is_not_found(self) -> bool {
        matches!(
            self,
            Self::NotFound | Self::IndexMissing | Self::DocumentMissing | Self::TypeMissing
        )
    }

    /// 생성 요청이 이미 존재하는 리소스와 충돌했는지 판정한다.
    ///
    /// 멱등 생성(create-if-absent)을 구현하는 호출자가 이 값으로 실패를 흡수한다.
    pub fn is_already_exists(self) -> bool {
        matches!(
            self,
            Self::AlreadyExists | Self::IndexAlreadyExists | Self::DocumentAlreadyExists
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
