// ==========================================
// 편입예상시점 산정 시스템 - 설정 계층
// ==========================================
// 책임: 실행 설정 로드/검증
// 우선순위: CLI 인자 > 설정 파일 > 환경 변수 > 기본값
// ==========================================

pub mod run_config;

pub use run_config::{
    ConfigError, ConfigResult, RunConfig, DEFAULT_MAX_PERIODS, MAX_PERIODS_ENV,
};
