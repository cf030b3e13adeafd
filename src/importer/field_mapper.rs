// ==========================================
// 편입예상시점 산정 시스템 - 필드 매퍼 구현
// ==========================================
// 열 이름 계약: 학번 / 신체등급 / 의무사관후보생 / 생년월일 / 박사과정진입일
// 시각 값은 보정 없이 그대로 옮긴다 (센티널 검사는 엔진 정규화 단계)
// ==========================================

use crate::domain::candidate::RawCandidateRecord;
use crate::domain::types::{parse_medical_token, FitnessStatus};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::{FieldMapper as FieldMapperTrait, RawRow};
use chrono::{Duration, NaiveDate, NaiveDateTime};

pub const COL_STUDENT_ID: &str = "학번";
pub const COL_FITNESS: &str = "신체등급";
pub const COL_MEDICAL: &str = "의무사관후보생";
pub const COL_BIRTH: &str = "생년월일";
pub const COL_PROGRAM_START: &str = "박사과정진입일";

/// 문자열 시각 형식
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y.%m.%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
];

pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn map_to_raw_candidate(
        &self,
        row: &RawRow,
        row_number: usize,
    ) -> ImportResult<RawCandidateRecord> {
        let student_id = self.require(row, COL_STUDENT_ID, row_number)?;

        let fitness_raw = self.require(row, COL_FITNESS, row_number)?;
        let fitness_status =
            FitnessStatus::from_token(&fitness_raw).ok_or_else(|| ImportError::InvalidToken {
                row: row_number,
                field: COL_FITNESS.to_string(),
                value: fitness_raw.clone(),
            })?;

        let medical_raw = self.get_string(row, COL_MEDICAL).unwrap_or_default();
        let medical_track =
            parse_medical_token(&medical_raw).ok_or_else(|| ImportError::InvalidToken {
                row: row_number,
                field: COL_MEDICAL.to_string(),
                value: medical_raw.clone(),
            })?;

        Ok(RawCandidateRecord {
            student_id,
            fitness_status,
            medical_track,
            birth_raw: self.parse_timestamp(row, COL_BIRTH, row_number)?,
            program_start_raw: self.parse_timestamp(row, COL_PROGRAM_START, row_number)?,
            row_number,
        })
    }
}

impl FieldMapper {
    /// 문자열 필드 (열 이름 별칭 지원)
    fn get_string(&self, row: &RawRow, key: &str) -> Option<String> {
        let aliases: &[&str] = match key {
            COL_STUDENT_ID => &[COL_STUDENT_ID, "학생번호"],
            COL_PROGRAM_START => &[COL_PROGRAM_START, "진입일"],
            _ => &[],
        };

        std::iter::once(key)
            .chain(aliases.iter().copied())
            .filter_map(|alias| row.get(alias))
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn require(&self, row: &RawRow, key: &str, row_number: usize) -> ImportResult<String> {
        self.get_string(row, key)
            .ok_or_else(|| ImportError::MissingField {
                row: row_number,
                field: key.to_string(),
            })
    }

    /// 시각 필드 파싱 (문자열 또는 Excel 일련번호)
    fn parse_timestamp(
        &self,
        row: &RawRow,
        key: &str,
        row_number: usize,
    ) -> ImportResult<NaiveDateTime> {
        let value = self.require(row, key, row_number)?;
        parse_timestamp_text(&value).ok_or_else(|| ImportError::TimestampFormatError {
            row: row_number,
            field: key.to_string(),
            value,
        })
    }
}

/// 셀 문자열 → 시각
pub fn parse_timestamp_text(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| value.parse::<f64>().ok().and_then(excel_serial_to_datetime))
}

/// Excel 일련번호 → 시각 (1899-12-30 기준, 초 단위 반올림)
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let seconds = (serial * 86_400.0).round() as i64;
    epoch.checked_add_signed(Duration::seconds(seconds))
}
