// ==========================================
// 편입예상시점 산정 시스템 - 출력 행
// ==========================================
// 대상자 1명 = 고정 10열
// 날짜 열은 모두 +9시간 보정 후 날짜만 표기 (YYYY.M.D)
// ==========================================

use crate::domain::allocation::ScheduledCandidate;
use crate::domain::types::MEDICAL_TRACK_TOKEN;
use crate::engine::normalization::render_timestamp;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};

/// 출력 시트 헤더 (열 순서 고정)
pub const HEADERS: [&str; 10] = [
    "학번",
    "신체등급",
    "생년월일",
    "박사과정진입일",
    "의무사관후보생",
    "편입예상시점",
    "편입시점학기",
    "편입시점나이",
    "우선순위",
    "비고",
];

const DATE_FORMAT: &str = "%Y.%-m.%-d";

/// 날짜 열 표기 (YYYY.M.D)
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn serialize_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_date(*date))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    #[serde(rename = "학번")]
    pub student_id: String,
    #[serde(rename = "신체등급")]
    pub fitness_label: String,
    #[serde(rename = "생년월일")]
    #[serde(serialize_with = "serialize_date")]
    pub birth_date: NaiveDate,
    #[serde(rename = "박사과정진입일")]
    #[serde(serialize_with = "serialize_date")]
    pub program_start_date: NaiveDate,
    #[serde(rename = "의무사관후보생")]
    pub medical_label: String,
    #[serde(rename = "편입예상시점")]
    #[serde(serialize_with = "serialize_date")]
    pub schedule_date: NaiveDate,
    #[serde(rename = "편입시점학기")]
    pub transition_semester: i32,
    #[serde(rename = "편입시점나이")]
    pub transition_age: i32,
    #[serde(rename = "우선순위")]
    pub rank: u32,
    #[serde(rename = "비고")]
    pub reason: String,
}

/// +9시간 보정 후 날짜 부분
fn render_date(timestamp: NaiveDateTime) -> NaiveDate {
    render_timestamp(timestamp).date()
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

impl From<&ScheduledCandidate> for ScheduleRow {
    fn from(scheduled: &ScheduledCandidate) -> Self {
        let candidate = scheduled.candidate();
        let allocation = scheduled.allocation();

        ScheduleRow {
            student_id: candidate.student_id().to_string(),
            fitness_label: candidate.fitness_status().label().to_string(),
            birth_date: render_date(candidate.birth()),
            program_start_date: render_date(candidate.raw_program_start()),
            medical_label: if candidate.is_medical_track() {
                MEDICAL_TRACK_TOKEN.to_string()
            } else {
                String::new()
            },
            schedule_date: render_date(midnight(allocation.schedule_date)),
            transition_semester: allocation.transition_semester,
            transition_age: allocation.transition_age,
            rank: allocation.rank,
            reason: allocation.reason.label().to_string(),
        }
    }
}

impl ScheduleRow {
    /// 헤더 순서대로의 셀 문자열
    pub fn cells(&self) -> [String; 10] {
        [
            self.student_id.clone(),
            self.fitness_label.clone(),
            format_date(self.birth_date),
            format_date(self.program_start_date),
            self.medical_label.clone(),
            format_date(self.schedule_date),
            self.transition_semester.to_string(),
            self.transition_age.to_string(),
            self.rank.to_string(),
            self.reason.clone(),
        ]
    }
}
