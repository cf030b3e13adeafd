// ==========================================
// 편입예상시점 산정 시스템 - 입력 시각 정규화
// ==========================================
// 상류 스프레드시트 도구는 날짜 전용 값을 전날 23:59:08 로 내보낸다.
// 1) 시/분/초가 정확히 23:59:08 인지 검사 (불일치 = 치명 오류)
// 2) +52초 보정 → 실제 날짜의 00:00:00
// 3) 출력 렌더링 시에만 추가로 +9시간 (report 모듈)
// 두 보정값은 기존 입력 검증 결과와 일치해야 하므로 상수로 고정한다.
// ==========================================

use crate::domain::candidate::{Candidate, RawCandidateRecord};
use crate::engine::anchor_resolver::AnchorResolver;
use crate::engine::error::{EngineError, EngineResult, SentinelComponent, TimestampField};
use crate::engine::violation_log::ViolationLog;
use chrono::{Duration, NaiveDateTime, Timelike};
use tracing::{debug, error, instrument};

pub const SENTINEL_HOUR: u32 = 23;
pub const SENTINEL_MINUTE: u32 = 59;
pub const SENTINEL_SECOND: u32 = 8;

/// 입력 보정값 (초)
pub const INGEST_CORRECTION_SECONDS: i64 = 52;
/// 출력 보정값 (시간)
pub const RENDER_OFFSET_HOURS: i64 = 9;

/// 센티널 검사 + 입력 보정
pub fn normalize_timestamp(
    student_id: &str,
    field: TimestampField,
    raw: NaiveDateTime,
) -> EngineResult<NaiveDateTime> {
    let checks = [
        (SentinelComponent::Hour, raw.hour(), SENTINEL_HOUR),
        (SentinelComponent::Minute, raw.minute(), SENTINEL_MINUTE),
        (SentinelComponent::Second, raw.second(), SENTINEL_SECOND),
    ];

    for (component, actual, expected) in checks {
        if actual != expected {
            error!(
                student_id = %student_id,
                field = %field,
                raw = %raw,
                "센티널 시각 불일치"
            );
            return Err(EngineError::MalformedSentinel {
                student_id: student_id.to_string(),
                field,
                component,
                actual,
            });
        }
    }

    Ok(raw + Duration::seconds(INGEST_CORRECTION_SECONDS))
}

/// 출력용 시각 (+9시간)
pub fn render_timestamp(normalized: NaiveDateTime) -> NaiveDateTime {
    normalized + Duration::hours(RENDER_OFFSET_HOURS)
}

// ==========================================
// CandidateNormalizer - 원시 레코드 → Candidate
// ==========================================
pub struct CandidateNormalizer {
    anchor_resolver: AnchorResolver,
}

impl CandidateNormalizer {
    pub fn new() -> Self {
        Self {
            anchor_resolver: AnchorResolver::new(),
        }
    }

    /// 레코드 1건 정규화
    pub fn normalize(
        &self,
        record: RawCandidateRecord,
        log: &mut ViolationLog,
    ) -> EngineResult<Candidate> {
        let birth = normalize_timestamp(&record.student_id, TimestampField::Birth, record.birth_raw)?;
        let raw_program_start = normalize_timestamp(
            &record.student_id,
            TimestampField::ProgramStart,
            record.program_start_raw,
        )?;
        let program_start = self
            .anchor_resolver
            .resolve(&record.student_id, raw_program_start, log);

        Ok(Candidate::new(
            record.student_id,
            record.fitness_status,
            record.medical_track,
            birth,
            raw_program_start,
            program_start,
        ))
    }

    /// 전체 레코드 정규화
    ///
    /// 하나라도 센티널이 어긋나면 배정 전에 중단한다.
    #[instrument(skip(self, records, log), fields(records_count = records.len()))]
    pub fn normalize_all(
        &self,
        records: Vec<RawCandidateRecord>,
        log: &mut ViolationLog,
    ) -> EngineResult<Vec<Candidate>> {
        let candidates = records
            .into_iter()
            .map(|record| self.normalize(record, log))
            .collect::<EngineResult<Vec<_>>>()?;

        debug!(candidates_count = candidates.len(), "입력 정규화 완료");
        Ok(candidates)
    }
}

impl Default for CandidateNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{FitnessStatus, HalfYear};
    use chrono::{Datelike, NaiveDate};

    fn raw(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    fn record(birth: NaiveDateTime, start: NaiveDateTime) -> RawCandidateRecord {
        RawCandidateRecord {
            student_id: "20230001".to_string(),
            fitness_status: FitnessStatus::ServiceEligible,
            medical_track: false,
            birth_raw: birth,
            program_start_raw: start,
            row_number: 1,
        }
    }

    #[test]
    fn test_normalize_timestamp_shifts_to_midnight() {
        let out = normalize_timestamp("S", TimestampField::Birth, raw(1995, 12, 31, 23, 59, 8))
            .unwrap();
        assert_eq!(out, raw(1996, 1, 1, 0, 0, 0));
        assert_eq!(out.year(), 1996);
    }

    #[test]
    fn test_normalize_timestamp_rejects_each_component() {
        let err = normalize_timestamp("S", TimestampField::Birth, raw(1995, 1, 1, 0, 0, 0))
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::MalformedSentinel {
                component: SentinelComponent::Hour,
                actual: 0,
                ..
            }
        ));

        let err = normalize_timestamp("S", TimestampField::Birth, raw(1995, 1, 1, 23, 58, 8))
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::MalformedSentinel {
                component: SentinelComponent::Minute,
                ..
            }
        ));

        let err = normalize_timestamp(
            "S",
            TimestampField::ProgramStart,
            raw(1995, 1, 1, 23, 59, 9),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EngineError::MalformedSentinel {
                component: SentinelComponent::Second,
                field: TimestampField::ProgramStart,
                ..
            }
        ));
    }

    #[test]
    fn test_render_timestamp() {
        let out = render_timestamp(raw(2024, 3, 1, 0, 0, 0));
        assert_eq!(out, raw(2024, 3, 1, 9, 0, 0));
    }

    #[test]
    fn test_normalize_record() {
        let normalizer = CandidateNormalizer::new();
        let mut log = ViolationLog::new();
        let candidate = normalizer
            .normalize(
                record(raw(1996, 5, 9, 23, 59, 8), raw(2023, 2, 28, 23, 59, 8)),
                &mut log,
            )
            .unwrap();

        assert_eq!(candidate.birth(), raw(1996, 5, 10, 0, 0, 0));
        assert_eq!(candidate.raw_program_start(), raw(2023, 3, 1, 0, 0, 0));
        assert_eq!(candidate.program_start().half, HalfYear::Spring);
        assert!(log.is_empty());
    }

    #[test]
    fn test_normalize_all_aborts_on_first_bad_record() {
        let normalizer = CandidateNormalizer::new();
        let mut log = ViolationLog::new();
        let records = vec![
            record(raw(1996, 5, 9, 23, 59, 8), raw(2023, 2, 28, 23, 59, 8)),
            record(raw(1996, 5, 10, 0, 0, 0), raw(2023, 2, 28, 23, 59, 8)),
        ];
        assert!(normalizer.normalize_all(records, &mut log).is_err());
    }
}
