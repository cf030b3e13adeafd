// ==========================================
// 편입예상시점 산정 시스템 - 엔진 치명 오류
// ==========================================
// 치명 오류: 내부 불변식 위반 → 실행 즉시 중단, 출력 없음
// 비치명 위반은 ViolationLog 로 간다 (이 타입과 섞지 않는다)
// ==========================================

use crate::domain::allocation::RankError;
use thiserror::Error;

/// 시각 필드 구분 (센티널 검사 메시지용)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampField {
    Birth,
    ProgramStart,
}

impl std::fmt::Display for TimestampField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimestampField::Birth => write!(f, "생년월일"),
            TimestampField::ProgramStart => write!(f, "박사과정진입일"),
        }
    }
}

/// 센티널 시각의 어느 성분이 어긋났는지
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentinelComponent {
    Hour,
    Minute,
    Second,
}

impl std::fmt::Display for SentinelComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentinelComponent::Hour => write!(f, "hour"),
            SentinelComponent::Minute => write!(f, "minute"),
            SentinelComponent::Second => write!(f, "second"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    // ===== 입력 정규화 =====
    #[error("{student_id} {field}: wrong {component} {actual}")]
    MalformedSentinel {
        student_id: String,
        field: TimestampField,
        component: SentinelComponent,
        actual: u32,
    },

    // ===== 실행 파라미터 =====
    #[error("정원은 1 이상이어야 함: {0}")]
    InvalidCapacity(usize),

    // ===== 기간별 불변식 =====
    #[error(
        "wrong sum ({year}): picked {picked} + carry {carry_general} + {carry_medical} != pool {pool_general} + {pool_medical}"
    )]
    ConservationViolated {
        year: i32,
        picked: usize,
        carry_general: usize,
        carry_medical: usize,
        pool_general: usize,
        pool_medical: usize,
    },

    #[error("should be empty ({year}): carry {carry_general} + {carry_medical}")]
    LeftoverAtTermination {
        year: i32,
        carry_general: usize,
        carry_medical: usize,
    },

    #[error("pool did not shrink ({year}): {before} -> {after}")]
    PoolNotShrinking {
        year: i32,
        before: usize,
        after: usize,
    },

    #[error("배정 기간 상한 초과: {max_periods}개 기간 (시작 {start_year})")]
    PeriodCapExceeded { start_year: i32, max_periods: usize },

    // ===== 배정 결과 =====
    #[error(transparent)]
    Rank(#[from] RankError),
}

pub type EngineResult<T> = Result<T, EngineError>;
