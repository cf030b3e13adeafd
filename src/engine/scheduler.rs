// ==========================================
// 편입예상시점 산정 시스템 - 다기간 배정 스케줄러
// ==========================================
// 시작 연도부터 한 해씩 진행하며 기간별 배정을 반복한다.
// 매 기간: 배정 → 보존 검사 → 순위 부여 → 보충역 처리 → 결과 누적
// 종료: 편입 인원 < 정원 (이때 이월 풀은 비어 있어야 함)
// 불변식: 종료하지 않는 기간마다 현역 풀 크기가 줄어든다.
//         상한(max_periods)을 넘기면 치명 오류.
// ==========================================

use crate::domain::allocation::ScheduledCandidate;
use crate::domain::candidate::{Candidate, CandidatePools};
use crate::domain::types::ReasonCode;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::period_allocator::{spring_transition_date, PeriodAllocator};
use crate::engine::tier_classifier::TierClassifier;
use crate::engine::violation_log::ViolationLog;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{error, info, instrument};

/// 보충역 가을 편입월 (9월 1일)
pub const FALL_TRANSITION_MONTH: u32 = 9;

/// 해당 연도 9월 1일
pub fn fall_transition_date(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, FALL_TRANSITION_MONTH, 1).unwrap_or(NaiveDate::MIN)
}

/// 기간별 요약 (로그/보고용)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    pub year: i32,
    pub pool_general: usize,
    pub pool_medical: usize,
    pub pool_alternative: usize,
    pub picked: usize,
    pub mandatory: usize,
    pub alternative_spring: usize,
    pub alternative_fall: usize,
    pub carry_general: usize,
    pub carry_medical: usize,
    pub carry_alternative: usize,
    pub first_rank: Option<u32>,
}

/// 스케줄 결과
#[derive(Debug, Clone)]
pub struct ScheduleResult {
    /// 출력 순서: 기간마다 보충역(3월), 현역 편입, 보충역(9월)
    pub entries: Vec<ScheduledCandidate>,
    pub periods: Vec<PeriodSummary>,
}

// ==========================================
// MultiPeriodScheduler - 다기간 스케줄러
// ==========================================
pub struct MultiPeriodScheduler {
    allocator: PeriodAllocator,
    classifier: TierClassifier,
    max_periods: usize,
}

impl MultiPeriodScheduler {
    /// # 인자
    /// - `max_periods`: 기간 수 상한
    pub fn new(max_periods: usize) -> Self {
        Self {
            allocator: PeriodAllocator::new(),
            classifier: TierClassifier::new(),
            max_periods,
        }
    }

    pub fn max_periods(&self) -> usize {
        self.max_periods
    }

    /// 전체 스케줄 산정
    ///
    /// # 인자
    /// - `pools`: 신체등급별로 나눈 대상자 풀
    /// - `start_year`: 시작 연도
    /// - `capacity`: 기간별 정원 (1 이상)
    /// - `log`: 비치명 위반 기록처
    #[instrument(skip(self, pools, log), fields(
        general = pools.general.len(),
        medical = pools.medical.len(),
        alternative = pools.alternative.len(),
        max_periods = self.max_periods
    ))]
    pub fn schedule(
        &self,
        pools: CandidatePools,
        start_year: i32,
        capacity: usize,
        log: &mut ViolationLog,
    ) -> EngineResult<ScheduleResult> {
        if capacity == 0 {
            return Err(EngineError::InvalidCapacity(capacity));
        }

        let CandidatePools {
            mut general,
            mut medical,
            mut alternative,
        } = pools;

        let mut year = start_year;
        let mut next_rank: u32 = 1;
        let mut entries = Vec::new();
        let mut periods = Vec::new();

        for _ in 0..self.max_periods {
            let pool_general = general.len();
            let pool_medical = medical.len();
            let pool_alternative = alternative.len();

            // ==========================================
            // 1. 기간 배정
            // ==========================================
            let allocation = self
                .allocator
                .allocate(general, medical, year, capacity, log);

            // ==========================================
            // 2. 보존 검사
            // ==========================================
            let picked_count = allocation.picked.len();
            let carry_general_count = allocation.carry_general.len();
            let carry_medical_count = allocation.carry_medical.len();
            if picked_count + carry_general_count + carry_medical_count
                != pool_general + pool_medical
            {
                error!(year, "기간 인원 보존 위반");
                return Err(EngineError::ConservationViolated {
                    year,
                    picked: picked_count,
                    carry_general: carry_general_count,
                    carry_medical: carry_medical_count,
                    pool_general,
                    pool_medical,
                });
            }

            // ==========================================
            // 3. 순위 부여 (배정 순서 그대로)
            // ==========================================
            let mut picked = allocation.picked;
            for (offset, scheduled) in picked.iter_mut().enumerate() {
                scheduled.assign_rank(next_rank + offset as u32)?;
            }

            // ==========================================
            // 4. 보충역
            // ==========================================
            let alternative_tiers = self.classifier.classify_alternative(alternative, year);
            let spring: Vec<_> = alternative_tiers
                .advanced_ready
                .into_iter()
                .map(|c| c.pick(spring_transition_date(year), ReasonCode::AlternativeService))
                .collect();
            let fall: Vec<_> = alternative_tiers
                .fall_ready
                .into_iter()
                .map(|c| c.pick(fall_transition_date(year), ReasonCode::AlternativeService))
                .collect();
            let not_yet_ready = alternative_tiers.not_yet_ready;

            let summary = PeriodSummary {
                year,
                pool_general,
                pool_medical,
                pool_alternative,
                picked: picked_count,
                mandatory: allocation.mandatory_count,
                alternative_spring: spring.len(),
                alternative_fall: fall.len(),
                carry_general: carry_general_count,
                carry_medical: carry_medical_count,
                carry_alternative: not_yet_ready.len(),
                first_rank: picked.first().map(|s| s.rank()),
            };
            info!(
                year,
                picked = summary.picked,
                mandatory = summary.mandatory,
                alternative_spring = summary.alternative_spring,
                alternative_fall = summary.alternative_fall,
                carry_general = summary.carry_general,
                carry_medical = summary.carry_medical,
                "기간 배정 요약"
            );
            periods.push(summary);

            // ==========================================
            // 5. 결과 누적
            // ==========================================
            entries.extend(spring);
            entries.extend(picked);
            entries.extend(fall);

            // ==========================================
            // 6. 종료 판정
            // ==========================================
            if picked_count < capacity {
                if carry_general_count + carry_medical_count != 0 {
                    error!(year, carry_general_count, carry_medical_count, "종료 시 이월 풀 잔존");
                    return Err(EngineError::LeftoverAtTermination {
                        year,
                        carry_general: carry_general_count,
                        carry_medical: carry_medical_count,
                    });
                }
                self.record_unassigned(&not_yet_ready, year, log);

                info!(
                    periods = periods.len(),
                    entries = entries.len(),
                    last_year = year,
                    "스케줄 산정 완료"
                );
                return Ok(ScheduleResult { entries, periods });
            }

            let before = pool_general + pool_medical;
            let after = carry_general_count + carry_medical_count;
            if after >= before {
                error!(year, before, after, "현역 풀이 줄지 않음");
                return Err(EngineError::PoolNotShrinking {
                    year,
                    before,
                    after,
                });
            }

            year += 1;
            general = allocation.carry_general;
            medical = allocation.carry_medical;
            alternative = not_yet_ready;
            // 정원 부족으로 정원보다 많이 편입된 기간은 편입 인원만큼 넘겨 순위 중복을 막는다
            next_rank += capacity.max(picked_count) as u32;
        }

        error!(start_year, max_periods = self.max_periods, "배정 기간 상한 초과");
        Err(EngineError::PeriodCapExceeded {
            start_year,
            max_periods: self.max_periods,
        })
    }

    /// 종료 시점까지 편입시점이 정해지지 않은 보충역
    fn record_unassigned(&self, remaining: &[Candidate], year: i32, log: &mut ViolationLog) {
        for candidate in remaining {
            log.record(format!(
                "{}: 보충역 {}학기 미배정",
                candidate.student_id(),
                candidate.semester_at(year)
            ));
        }
    }
}
