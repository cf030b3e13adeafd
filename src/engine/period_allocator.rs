// ==========================================
// 편입예상시점 산정 시스템 - 기간별 정원 배정 엔진
// ==========================================
// 원칙: 필수 등급(의무사관후보생 → 29세 → 6학기 이상)은 정원과 무관하게 편입,
//       남은 정원만 일반 풀에서 (진입 반기, 생년월일) 오름차순으로 채운다.
// 입력: 일반 현역 풀 + 의무사관후보생 풀 + 연도 + 정원
// 출력: 편입 목록(순위 순서) + 일반 이월 풀 + 의무사관후보생 이월 풀
// ==========================================

use crate::domain::allocation::ScheduledCandidate;
use crate::domain::candidate::Candidate;
use crate::domain::types::ReasonCode;
use crate::engine::tier_classifier::{TierClassifier, AGE_LIMIT, READY_SEMESTER};
use crate::engine::violation_log::ViolationLog;
use chrono::NaiveDate;
use tracing::{debug, instrument};

/// 6학기 이상 등급에서 허용되는 최대 학기
pub const SENIOR_MAX_SEMESTER: i32 = 7;
/// 일반 편입월 (3월 1일)
pub const SPRING_TRANSITION_MONTH: u32 = 3;

/// 해당 연도 3월 1일
pub fn spring_transition_date(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, SPRING_TRANSITION_MONTH, 1).unwrap_or(NaiveDate::MIN)
}

/// 단일 기간 배정 결과
#[derive(Debug, Clone)]
pub struct PeriodAllocation {
    /// 편입 목록: 의무사관후보생, 29세, 6학기 이상, 일반 순
    pub picked: Vec<ScheduledCandidate>,
    pub carry_general: Vec<Candidate>,
    pub carry_medical: Vec<Candidate>,
    /// 필수 등급 인원 (의무사관후보생 + 29세 + 6학기 이상)
    pub mandatory_count: usize,
}

// ==========================================
// PeriodAllocator - 기간별 배정 엔진
// ==========================================
pub struct PeriodAllocator {
    classifier: TierClassifier,
}

impl PeriodAllocator {
    pub fn new() -> Self {
        Self {
            classifier: TierClassifier::new(),
        }
    }

    /// 한 기간 배정
    ///
    /// # 인자
    /// - `general`: 일반 현역 풀
    /// - `medical`: 의무사관후보생 풀
    /// - `year`: 기준 연도
    /// - `capacity`: 해당 기간 정원
    /// - `log`: 비치명 위반 기록처
    #[instrument(skip(self, general, medical, log), fields(
        general_count = general.len(),
        medical_count = medical.len()
    ))]
    pub fn allocate(
        &self,
        general: Vec<Candidate>,
        medical: Vec<Candidate>,
        year: i32,
        capacity: usize,
        log: &mut ViolationLog,
    ) -> PeriodAllocation {
        let date = spring_transition_date(year);
        let medical_tiers = self.classifier.classify_medical(medical, year);
        let general_tiers = self.classifier.classify_general(general, year);

        let medical_ready = medical_tiers.ready.len();
        let age_out = general_tiers.age_out.len();
        let senior_out = general_tiers.senior_out.len();
        let mut picked = Vec::with_capacity(capacity.max(medical_ready + age_out + senior_out));

        // 1) 의무사관후보생: 3학기 필수 편입
        for candidate in medical_tiers.ready {
            let semester = candidate.semester_at(year);
            log.check(semester == READY_SEMESTER, || {
                format!("{}: 의무사관후보생 {}학기", candidate.student_id(), semester)
            });
            picked.push(candidate.pick(date, ReasonCode::MedicalOfficer));
        }

        // 2) 29세
        for candidate in general_tiers.age_out {
            let age = candidate.age_at(year);
            log.check(age == AGE_LIMIT, || {
                format!("{}: {}세", candidate.student_id(), age)
            });
            picked.push(candidate.pick(date, ReasonCode::AgeLimit));
        }

        // 3) 6학기 이상
        for candidate in general_tiers.senior_out {
            let semester = candidate.semester_at(year);
            log.check(semester <= SENIOR_MAX_SEMESTER, || {
                format!("{}: {}학기", candidate.student_id(), semester)
            });
            picked.push(candidate.pick(date, ReasonCode::SeniorSemester));
        }

        // 4) 남은 정원: 일반 풀
        let mandatory_count = medical_ready + age_out + senior_out;
        let remaining = match capacity.checked_sub(mandatory_count) {
            Some(remaining) => remaining,
            None => {
                log.record(format!(
                    "{} 정원 부족: {} < {} + {} + {}",
                    year, capacity, medical_ready, age_out, senior_out
                ));
                0
            }
        };

        let mut junior = general_tiers.junior_pool;
        // 안정 정렬: 동일 키는 입력 순서 유지
        junior.sort_by(|a, b| a.seniority_key().cmp(&b.seniority_key()));

        let take = remaining.min(junior.len());
        let carry_general = junior.split_off(take);
        for candidate in junior {
            picked.push(candidate.pick(date, ReasonCode::Default));
        }

        debug!(
            medical_ready,
            age_out,
            senior_out,
            junior_picked = take,
            carry_general = carry_general.len(),
            carry_medical = medical_tiers.carry.len(),
            "기간 배정 완료"
        );

        PeriodAllocation {
            picked,
            carry_general,
            carry_medical: medical_tiers.carry,
            mandatory_count,
        }
    }
}

impl Default for PeriodAllocator {
    fn default() -> Self {
        Self::new()
    }
}
