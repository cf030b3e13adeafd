// ==========================================
// 편입예상시점 산정 시스템 - 배정 결과 모델
// ==========================================
// Candidate::pick 은 대상자를 소비하고 ScheduledCandidate 를 돌려준다.
// 같은 대상자가 두 번 배정될 수 없으며, 순위는 한 번만 부여된다.
// ==========================================

use crate::domain::candidate::Candidate;
use crate::domain::types::ReasonCode;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 순위 부여 오류
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    #[error("순위 중복 부여: {student_id} (기존 {existing}, 신규 {requested})")]
    AlreadyRanked {
        student_id: String,
        existing: u32,
        requested: u32,
    },

    #[error("순위 부여 대상 아님: {student_id} ({reason:?})")]
    NotRankable {
        student_id: String,
        reason: ReasonCode,
    },

    #[error("순위는 1 이상이어야 함: {student_id}")]
    ZeroRank { student_id: String },
}

// ==========================================
// Allocation - 배정 결과
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub schedule_date: NaiveDate,  // 편입예상시점
    pub reason: ReasonCode,        // 편입 사유
    pub rank: u32,                 // 우선순위 (0 = 미부여)
    pub transition_semester: i32,  // 편입시점 학기
    pub transition_age: i32,       // 편입시점 나이
}

// ==========================================
// ScheduledCandidate - 배정 완료 대상자
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledCandidate {
    candidate: Candidate,
    allocation: Allocation,
}

impl Candidate {
    /// 편입 확정
    ///
    /// 편입시점 학기 = (편입연도 − 진입연도) × 2 + (편입월 − 진입월) / 6 + 1
    pub fn pick(self, date: NaiveDate, reason: ReasonCode) -> ScheduledCandidate {
        let start = self.program_start();
        let month_delta = date.month() as i32 - start.month() as i32;
        let transition_semester = (date.year() - start.year) * 2 + month_delta / 6 + 1;
        let transition_age = date.year() - self.birth().year();

        ScheduledCandidate {
            allocation: Allocation {
                schedule_date: date,
                reason,
                rank: 0,
                transition_semester,
                transition_age,
            },
            candidate: self,
        }
    }
}

impl ScheduledCandidate {
    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    pub fn allocation(&self) -> &Allocation {
        &self.allocation
    }

    pub fn student_id(&self) -> &str {
        self.candidate.student_id()
    }

    pub fn rank(&self) -> u32 {
        self.allocation.rank
    }

    pub fn reason(&self) -> ReasonCode {
        self.allocation.reason
    }

    /// 전역 순위 부여 (한 번만, 현역 흐름만)
    pub fn assign_rank(&mut self, rank: u32) -> Result<(), RankError> {
        if !self.allocation.reason.is_ranked() {
            return Err(RankError::NotRankable {
                student_id: self.student_id().to_string(),
                reason: self.allocation.reason,
            });
        }
        if rank == 0 {
            return Err(RankError::ZeroRank {
                student_id: self.student_id().to_string(),
            });
        }
        if self.allocation.rank != 0 {
            return Err(RankError::AlreadyRanked {
                student_id: self.student_id().to_string(),
                existing: self.allocation.rank,
                requested: rank,
            });
        }
        self.allocation.rank = rank;
        Ok(())
    }
}
