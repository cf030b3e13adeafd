// ==========================================
// 편입예상시점 산정 시스템 - API 계층 오류 타입
// ==========================================
// 책임: 계층별 오류를 하나의 API 오류로 통합
// 모든 오류는 중단 사유를 그대로 보존한다
// ==========================================

use crate::config::ConfigError;
use crate::engine::EngineError;
use crate::importer::ImportError;
use crate::report::ReportError;
use thiserror::Error;

/// API 계층 오류 타입
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 입력/설정 오류
    // ==========================================
    #[error("입력 파일 오류: {0}")]
    Import(#[from] ImportError),

    #[error("실행 설정 오류: {0}")]
    Config(#[from] ConfigError),

    // ==========================================
    // 산정 중단 (치명적 불변식 위반)
    // ==========================================
    #[error("산정 중단: {0}")]
    Engine(#[from] EngineError),

    // ==========================================
    // 출력 오류
    // ==========================================
    #[error("결과 출력 실패: {0}")]
    Report(#[from] ReportError),
}

impl ApiError {
    /// 배정 단계에서 중단되었는지 여부
    pub fn is_engine_abort(&self) -> bool {
        matches!(self, ApiError::Engine(_))
    }
}

/// Result 타입 별칭
pub type ApiResult<T> = Result<T, ApiError>;
