// ==========================================
// 테스트 데이터 빌더 - 통합 테스트용
// ==========================================
// 날짜는 모두 "실제 날짜" 기준으로 받는다.
// 원시 레코드는 전날 23:59:08 센티널 형태로 만든다.
// ==========================================

#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use transition_planner::domain::candidate::{Candidate, ProgramStart, RawCandidateRecord};
use transition_planner::domain::types::{FitnessStatus, HalfYear};

/// 실제 날짜 → 센티널 원시 시각 (전날 23:59:08)
pub fn sentinel(date: NaiveDate) -> NaiveDateTime {
    date.pred_opt()
        .unwrap()
        .and_hms_opt(23, 59, 8)
        .unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ==========================================
// Candidate 빌더
// ==========================================

pub struct CandidateBuilder {
    student_id: String,
    fitness_status: FitnessStatus,
    medical_track: bool,
    birth: NaiveDate,
    start_year: i32,
    half: HalfYear,
    row_number: usize,
}

impl CandidateBuilder {
    pub fn new(student_id: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            fitness_status: FitnessStatus::ServiceEligible,
            medical_track: false,
            birth: date(1998, 5, 10),
            start_year: 2023,
            half: HalfYear::Spring,
            row_number: 1,
        }
    }

    pub fn alternative(mut self) -> Self {
        self.fitness_status = FitnessStatus::AlternativeServiceTrack;
        self
    }

    pub fn medical(mut self) -> Self {
        self.medical_track = true;
        self
    }

    pub fn born(self, y: i32, m: u32, d: u32) -> Self {
        self.born_on(date(y, m, d))
    }

    pub fn born_on(mut self, birth: NaiveDate) -> Self {
        self.birth = birth;
        self
    }

    pub fn started(mut self, year: i32, half: HalfYear) -> Self {
        self.start_year = year;
        self.half = half;
        self
    }

    pub fn row(mut self, row_number: usize) -> Self {
        self.row_number = row_number;
        self
    }

    fn start_date(&self) -> NaiveDate {
        date(self.start_year, self.half.anchor_month(), 1)
    }

    /// 정규화가 끝난 Candidate
    pub fn build(self) -> Candidate {
        let start = self.start_date().and_time(NaiveTime::MIN);
        Candidate::new(
            self.student_id,
            self.fitness_status,
            self.medical_track,
            self.birth.and_time(NaiveTime::MIN),
            start,
            ProgramStart::new(self.start_year, self.half),
        )
    }

    /// 센티널 시각이 들어간 원시 레코드
    pub fn build_record(self) -> RawCandidateRecord {
        RawCandidateRecord {
            student_id: self.student_id.clone(),
            fitness_status: self.fitness_status,
            medical_track: self.medical_track,
            birth_raw: sentinel(self.birth),
            program_start_raw: sentinel(self.start_date()),
            row_number: self.row_number,
        }
    }
}

// ==========================================
// 일괄 생성
// ==========================================

/// 서로 다른 생일을 가진 일반 현역 n명 (2023년 봄 진입)
///
/// id: `{prefix}{i:02}`, i가 작을수록 생일이 빠르다.
pub fn juniors(prefix: &str, count: usize) -> Vec<Candidate> {
    (0..count)
        .map(|i| {
            CandidateBuilder::new(&format!("{}{:02}", prefix, i))
                .born_on(date(1998, 1, 1) + Duration::days(i as i64))
                .build()
        })
        .collect()
}
