// ==========================================
// 편입예상시점 산정 시스템 - 핵심 라이브러리
// ==========================================
// 대상: 박사과정 전문연구요원 편입 대상자
// 기능: 연도별 정원 하에서 편입 시점/우선순위 산정
// 실행: 단일 스레드 동기 배치
// ==========================================

// 국제화 초기화
rust_i18n::i18n!("locales", fallback = "ko");

// ==========================================
// 모듈 선언
// ==========================================

// 도메인 계층 - 엔티티와 타입
pub mod domain;

// 엔진 계층 - 배정 규칙
pub mod engine;

// 입력 계층 - 외부 표 파일
pub mod importer;

// 출력 계층 - 결과 시트
pub mod report;

// 설정 계층 - 실행 설정
pub mod config;

// 로그 시스템
pub mod logging;

// 국제화
pub mod i18n;

// API 계층 - 산정 진입점
pub mod api;

// ==========================================
// 핵심 타입 재노출
// ==========================================

// 도메인 타입
pub use domain::types::{FitnessStatus, HalfYear, ReasonCode};

// 도메인 엔티티
pub use domain::{Allocation, Candidate, CandidatePools, ProgramStart, RawCandidateRecord, ScheduledCandidate};

// 엔진
pub use engine::{
    AnchorResolver, CandidateNormalizer, EngineError, MultiPeriodScheduler, PeriodAllocator,
    TierClassifier, ViolationLog,
};

// 출력
pub use report::{ReportFormat, ReportWriter};

// 설정
pub use config::{ConfigError, RunConfig};

// API
pub use api::{ApiError, PlannerApi, RunReport};

// ==========================================
// 상수 정의
// ==========================================

// 시스템 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 시스템 이름
pub const APP_NAME: &str = "편입예상시점 산정 시스템";
