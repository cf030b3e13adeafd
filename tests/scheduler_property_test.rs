// ==========================================
// MultiPeriodScheduler 속성 테스트
// ==========================================
// 임의 코호트에 대해 확인:
// - 기간별 인원 보존
// - 순위는 1부터 엄격히 증가
// - 현역은 정확히 한 번 편입, 보충역은 최대 한 번
// - 기간 내 등급 순서와 일반 풀 정렬
// - 종료 기간만 정원 미달
// ==========================================

mod helpers;

use chrono::{Datelike, Duration};
use helpers::candidate_builder::*;
use proptest::prelude::*;
use std::collections::HashMap;
use transition_planner::domain::candidate::{Candidate, CandidatePools};
use transition_planner::domain::types::{HalfYear, ReasonCode};
use transition_planner::engine::{MultiPeriodScheduler, ViolationLog};

const START_YEAR: i32 = 2024;

fn tier_index(reason: ReasonCode) -> u8 {
    match reason {
        ReasonCode::MedicalOfficer => 0,
        ReasonCode::AgeLimit => 1,
        ReasonCode::SeniorSemester => 2,
        ReasonCode::Default => 3,
        ReasonCode::AlternativeService => 4,
    }
}

fn cohort_strategy() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec(
        (0u8..10, 1990i32..=2000, 0i64..365, 2018i32..=2024, any::<bool>()),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (kind, birth_year, day, start_year, spring))| {
                let half = if spring { HalfYear::Spring } else { HalfYear::Fall };
                let builder = CandidateBuilder::new(&format!("C{:03}", i))
                    .born_on(date(birth_year, 1, 1) + Duration::days(day));
                match kind {
                    0 => builder.alternative().started(start_year, half),
                    // 의무사관후보생은 시작 연도에 이미 3학기 이상
                    1 => builder.medical().started(start_year.min(2022), half),
                    _ => builder.started(start_year, half),
                }
                .build()
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_schedule_invariants(cohort in cohort_strategy(), capacity in 1usize..8) {
        let total = cohort.len();
        let service_ids: Vec<String> = cohort
            .iter()
            .filter(|c| c.is_service_eligible())
            .map(|c| c.student_id().to_string())
            .collect();

        let mut log = ViolationLog::new();
        let result = MultiPeriodScheduler::new(100)
            .schedule(CandidatePools::partition(cohort), START_YEAR, capacity, &mut log)
            .unwrap();

        // 기간별 보존
        for period in &result.periods {
            prop_assert_eq!(
                period.picked + period.carry_general + period.carry_medical,
                period.pool_general + period.pool_medical
            );
        }

        // 종료 기간만 정원 미달
        let (last, rest) = result.periods.split_last().unwrap();
        prop_assert!(last.picked < capacity);
        prop_assert_eq!(last.carry_general + last.carry_medical, 0);
        for period in rest {
            prop_assert!(period.picked >= capacity);
        }

        // 순위: 1부터 엄격히 증가
        let ranks: Vec<u32> = result
            .entries
            .iter()
            .filter(|e| e.reason().is_ranked())
            .map(|e| e.rank())
            .collect();
        if let Some(first) = ranks.first() {
            prop_assert_eq!(*first, 1);
        }
        for pair in ranks.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }

        // 현역은 정확히 한 번, 보충역은 순위 없음
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for entry in &result.entries {
            *seen.entry(entry.student_id()).or_default() += 1;
            if entry.reason() == ReasonCode::AlternativeService {
                prop_assert_eq!(entry.rank(), 0);
            } else {
                prop_assert!(entry.rank() > 0);
            }
        }
        prop_assert!(seen.values().all(|&n| n == 1));
        for id in &service_ids {
            prop_assert!(seen.contains_key(id.as_str()));
        }

        // 미배정 보충역까지 합치면 전원
        let unassigned = log
            .messages()
            .iter()
            .filter(|m| m.ends_with("미배정"))
            .count();
        prop_assert_eq!(result.entries.len() + unassigned, total);

        // 기간 내 등급 순서, 일반 풀 정렬
        let mut by_year: HashMap<i32, Vec<_>> = HashMap::new();
        for entry in result.entries.iter().filter(|e| e.reason().is_ranked()) {
            by_year
                .entry(entry.allocation().schedule_date.year())
                .or_default()
                .push(entry);
        }
        for entries in by_year.values() {
            for pair in entries.windows(2) {
                prop_assert!(tier_index(pair[0].reason()) <= tier_index(pair[1].reason()));
                if pair[0].reason() == ReasonCode::Default && pair[1].reason() == ReasonCode::Default {
                    prop_assert!(
                        pair[0].candidate().seniority_key() <= pair[1].candidate().seniority_key()
                    );
                }
            }
        }
    }
}
