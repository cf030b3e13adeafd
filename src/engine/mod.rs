// ==========================================
// 편입예상시점 산정 시스템 - 엔진 계층
// ==========================================
// 책임: 입력 정규화, 등급 분류, 기간별 배정, 다기간 스케줄링
// 원칙: 파일 입출력 없음, 단일 스레드 동기 실행
// 오류: 비치명 위반 → ViolationLog, 치명 오류 → EngineError
// ==========================================

pub mod anchor_resolver;
pub mod error;
pub mod normalization;
pub mod period_allocator;
pub mod scheduler;
pub mod tier_classifier;
pub mod violation_log;

// 핵심 엔진 재노출
pub use anchor_resolver::AnchorResolver;
pub use error::{EngineError, EngineResult, SentinelComponent, TimestampField};
pub use normalization::{normalize_timestamp, render_timestamp, CandidateNormalizer};
pub use period_allocator::{spring_transition_date, PeriodAllocation, PeriodAllocator};
pub use scheduler::{fall_transition_date, MultiPeriodScheduler, PeriodSummary, ScheduleResult};
pub use tier_classifier::{AlternativeTiers, GeneralTiers, MedicalTiers, TierClassifier};
pub use violation_log::ViolationLog;
