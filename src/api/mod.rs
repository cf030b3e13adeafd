// ==========================================
// 편입예상시점 산정 시스템 - API 계층
// ==========================================
// 책임: 입력 → 정규화 → 스케줄링 → 출력 조립
// CLI와 통합 테스트의 유일한 진입점
// ==========================================

pub mod error;
pub mod planner_api;

// 핵심 타입 재노출
pub use error::{ApiError, ApiResult};
pub use planner_api::{PlannerApi, RunReport};
