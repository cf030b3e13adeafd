// ==========================================
// 편입예상시점 산정 시스템 - 대상자 도메인 모델
// ==========================================
// Candidate: 입력 후 불변. 배정 결과는 allocation.rs 의
// ScheduledCandidate 로 분리된다 (pick 은 Candidate 를 소비)
// ==========================================

use crate::domain::types::{FitnessStatus, HalfYear};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// ProgramStart - 박사과정 진입 반기
// ==========================================
// 항상 3월 1일 또는 9월 1일에 정렬된다
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProgramStart {
    pub year: i32,
    pub half: HalfYear,
}

impl ProgramStart {
    pub fn new(year: i32, half: HalfYear) -> Self {
        Self { year, half }
    }

    pub fn month(&self) -> u32 {
        self.half.anchor_month()
    }

    /// 기준점 날짜 (해당 연도 3/1 또는 9/1)
    pub fn date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month(), 1)
            .unwrap_or(NaiveDate::MIN)
    }
}

// ==========================================
// Candidate - 대상자 (박사과정생 1인)
// ==========================================
// 불변식: 신체등급/의무사관후보생 여부는 생성 이후 변경 불가
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    student_id: String,
    fitness_status: FitnessStatus,
    medical_track: bool,
    birth: NaiveDateTime,             // 보정 완료 (+52초)
    raw_program_start: NaiveDateTime, // 보정 완료 (+52초), 실제 진입 시각
    program_start: ProgramStart,
}

impl Candidate {
    pub fn new(
        student_id: impl Into<String>,
        fitness_status: FitnessStatus,
        medical_track: bool,
        birth: NaiveDateTime,
        raw_program_start: NaiveDateTime,
        program_start: ProgramStart,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            fitness_status,
            medical_track,
            birth,
            raw_program_start,
            program_start,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn fitness_status(&self) -> FitnessStatus {
        self.fitness_status
    }

    /// 현역일 때만 의미가 있다
    pub fn is_medical_track(&self) -> bool {
        self.medical_track
    }

    pub fn is_service_eligible(&self) -> bool {
        self.fitness_status == FitnessStatus::ServiceEligible
    }

    pub fn birth(&self) -> NaiveDateTime {
        self.birth
    }

    pub fn raw_program_start(&self) -> NaiveDateTime {
        self.raw_program_start
    }

    pub fn program_start(&self) -> ProgramStart {
        self.program_start
    }

    // ==========================================
    // 파생 계산
    // ==========================================

    /// 해당 연도(3월 기준) 학기 수
    ///
    /// 봄 진입은 그해 3월이 1학기, 가을 진입은 이듬해 3월이 2학기.
    pub fn semester_at(&self, year: i32) -> i32 {
        let offset = match self.program_start.half {
            HalfYear::Spring => 1,
            HalfYear::Fall => 0,
        };
        (year - self.program_start.year) * 2 + offset
    }

    /// 연 나이 (year − 출생연도)
    pub fn age_at(&self, year: i32) -> i32 {
        year - self.birth.year()
    }

    /// 정렬 키: (진입 반기, 생년월일)
    pub fn seniority_key(&self) -> (ProgramStart, NaiveDateTime) {
        (self.program_start, self.birth)
    }
}

// ==========================================
// RawCandidateRecord - 입력 중간 구조체
// ==========================================
// 파일 파싱 → 필드 매핑 → 이 구조체
// 시각 값은 상류 도구가 남긴 그대로(보정 전)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCandidateRecord {
    pub student_id: String,
    pub fitness_status: FitnessStatus,
    pub medical_track: bool,
    pub birth_raw: NaiveDateTime,
    pub program_start_raw: NaiveDateTime,

    // 메타 정보
    pub row_number: usize,
}

// ==========================================
// CandidatePools - 배정 입력 풀 3종
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct CandidatePools {
    pub general: Vec<Candidate>,     // 현역, 일반
    pub medical: Vec<Candidate>,     // 현역, 의무사관후보생
    pub alternative: Vec<Candidate>, // 보충역
}

impl CandidatePools {
    /// 신체등급 → 의무사관후보생 여부 순으로 분할 (입력 순서 유지)
    pub fn partition(candidates: Vec<Candidate>) -> Self {
        let mut pools = CandidatePools::default();
        for candidate in candidates {
            if !candidate.is_service_eligible() {
                pools.alternative.push(candidate);
            } else if candidate.is_medical_track() {
                pools.medical.push(candidate);
            } else {
                pools.general.push(candidate);
            }
        }
        pools
    }

    pub fn len(&self) -> usize {
        self.general.len() + self.medical.len() + self.alternative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
