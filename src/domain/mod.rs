// ==========================================
// 편입예상시점 산정 시스템 - 도메인 계층
// ==========================================
// 책임: 대상자 엔티티, 타입, 배정 결과 정의
// 원칙: 파일 입출력/엔진 로직 없음
// ==========================================

pub mod allocation;
pub mod candidate;
pub mod types;

// 핵심 타입 재노출
pub use allocation::{Allocation, RankError, ScheduledCandidate};
pub use candidate::{Candidate, CandidatePools, ProgramStart, RawCandidateRecord};
pub use types::{parse_medical_token, FitnessStatus, HalfYear, ReasonCode, MEDICAL_TRACK_TOKEN};
