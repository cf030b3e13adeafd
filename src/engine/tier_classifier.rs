// ==========================================
// 편입예상시점 산정 시스템 - 우선순위 등급 분류기
// ==========================================
// 한 기간(연도) 기준으로 세 풀을 등급별로 나눈다.
// 순수 함수: 배정/기록 없음. 각 등급 안에서는 입력 순서 유지.
// ==========================================

use crate::domain::candidate::Candidate;

/// 의무사관후보생/보충역 편입 가능 학기
pub const READY_SEMESTER: i32 = 3;
/// 보충역 가을 편입 학기
pub const FALL_READY_SEMESTER: i32 = 2;
/// 연령 상한
pub const AGE_LIMIT: i32 = 29;
/// 고학기 기준
pub const SENIOR_SEMESTER: i32 = 6;

/// 보충역 풀 분류 결과
#[derive(Debug, Clone, Default)]
pub struct AlternativeTiers {
    pub advanced_ready: Vec<Candidate>, // 3학기 이상 → 3월 편입
    pub fall_ready: Vec<Candidate>,     // 정확히 2학기 → 9월 편입
    pub not_yet_ready: Vec<Candidate>,  // 다음 해로 이월
}

/// 의무사관후보생 풀 분류 결과
#[derive(Debug, Clone, Default)]
pub struct MedicalTiers {
    pub ready: Vec<Candidate>, // 3학기 이상, 필수 편입
    pub carry: Vec<Candidate>, // 다음 해로 이월
}

/// 일반 현역 풀 분류 결과
#[derive(Debug, Clone, Default)]
pub struct GeneralTiers {
    pub age_out: Vec<Candidate>,     // 29세 이상
    pub senior_out: Vec<Candidate>,  // 6학기 이상
    pub junior_pool: Vec<Candidate>, // 정원 경쟁
}

// ==========================================
// TierClassifier - 등급 분류기
// ==========================================
pub struct TierClassifier {
    // 무상태 엔진
}

impl TierClassifier {
    pub fn new() -> Self {
        Self {}
    }

    /// 보충역 풀 분류
    pub fn classify_alternative(&self, pool: Vec<Candidate>, year: i32) -> AlternativeTiers {
        let (advanced_ready, rest): (Vec<_>, Vec<_>) = pool
            .into_iter()
            .partition(|c| c.semester_at(year) >= READY_SEMESTER);
        let (fall_ready, not_yet_ready) = rest
            .into_iter()
            .partition(|c| c.semester_at(year) == FALL_READY_SEMESTER);

        AlternativeTiers {
            advanced_ready,
            fall_ready,
            not_yet_ready,
        }
    }

    /// 의무사관후보생 풀 분류
    pub fn classify_medical(&self, pool: Vec<Candidate>, year: i32) -> MedicalTiers {
        let (ready, carry) = pool
            .into_iter()
            .partition(|c| c.semester_at(year) >= READY_SEMESTER);
        MedicalTiers { ready, carry }
    }

    /// 일반 현역 풀 분류
    ///
    /// 연령 기준이 학기 기준보다 먼저 적용된다.
    pub fn classify_general(&self, pool: Vec<Candidate>, year: i32) -> GeneralTiers {
        let (age_out, young): (Vec<_>, Vec<_>) = pool
            .into_iter()
            .partition(|c| c.age_at(year) >= AGE_LIMIT);
        let (senior_out, junior_pool) = young
            .into_iter()
            .partition(|c| c.semester_at(year) >= SENIOR_SEMESTER);

        GeneralTiers {
            age_out,
            senior_out,
            junior_pool,
        }
    }
}

impl Default for TierClassifier {
    fn default() -> Self {
        Self::new()
    }
}
