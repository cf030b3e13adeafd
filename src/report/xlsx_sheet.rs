// ==========================================
// 편입예상시점 산정 시스템 - Excel 결과 시트
// ==========================================
// 시트 1개 ("대상자")
// 헤더: 굵게 + 얇은 테두리
// 날짜 열: 날짜 셀 (표시 형식 yyyy.m.d), 숫자 열: 숫자 셀
// 열 너비: 셀 표기 문자 수 (한글 2칸), 최소 10
// ==========================================

use crate::report::row::{ScheduleRow, HEADERS};
use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{ColNum, ExcelDateTime, Format, FormatBorder, Workbook, XlsxError};

/// 결과 시트 이름
pub const SHEET_NAME: &str = "대상자";

const DATE_NUM_FORMAT: &str = "yyyy.m.d";
const MIN_COLUMN_WIDTH: usize = 10;

// 날짜 셀 열 (생년월일, 박사과정진입일, 편입예상시점)
const BIRTH_COL: ColNum = 2;
const PROGRAM_START_COL: ColNum = 3;
const SCHEDULE_COL: ColNum = 5;

fn is_hangul_syllable(ch: char) -> bool {
    ('\u{ac00}'..='\u{d7af}').contains(&ch)
}

/// 셀 표기 너비 (한글 음절 2칸, 나머지 1칸)
pub fn display_width(text: &str) -> usize {
    text.chars()
        .map(|ch| if is_hangul_syllable(ch) { 2 } else { 1 })
        .sum()
}

/// 헤더와 모든 행을 기준으로 한 열 너비
pub fn column_widths(rows: &[ScheduleRow]) -> [usize; 10] {
    let mut widths = [MIN_COLUMN_WIDTH; 10];
    for (col, header) in HEADERS.iter().enumerate() {
        widths[col] = widths[col].max(display_width(header));
    }
    for row in rows {
        for (col, cell) in row.cells().iter().enumerate() {
            widths[col] = widths[col].max(display_width(cell));
        }
    }
    widths
}

fn excel_date(date: NaiveDate) -> Result<ExcelDateTime, XlsxError> {
    // 범위 밖 연도는 from_ymd 가 오류로 돌려준다
    let year = u16::try_from(date.year()).unwrap_or(0);
    ExcelDateTime::from_ymd(year, date.month() as u8, date.day() as u8)
}

/// 결과 행 → 통합 문서
pub fn build_workbook(rows: &[ScheduleRow]) -> Result<Workbook, XlsxError> {
    let header_format = Format::new().set_bold().set_border(FormatBorder::Thin);
    let date_format = Format::new().set_num_format(DATE_NUM_FORMAT);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as ColNum, *header, &header_format)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let r = index as u32 + 1;
        worksheet.write_string(r, 0, row.student_id.as_str())?;
        worksheet.write_string(r, 1, row.fitness_label.as_str())?;
        worksheet.write_datetime_with_format(
            r,
            BIRTH_COL,
            &excel_date(row.birth_date)?,
            &date_format,
        )?;
        worksheet.write_datetime_with_format(
            r,
            PROGRAM_START_COL,
            &excel_date(row.program_start_date)?,
            &date_format,
        )?;
        worksheet.write_string(r, 4, row.medical_label.as_str())?;
        worksheet.write_datetime_with_format(
            r,
            SCHEDULE_COL,
            &excel_date(row.schedule_date)?,
            &date_format,
        )?;
        worksheet.write_number(r, 6, row.transition_semester)?;
        worksheet.write_number(r, 7, row.transition_age)?;
        worksheet.write_number(r, 8, row.rank)?;
        worksheet.write_string(r, 9, row.reason.as_str())?;
    }

    for (col, width) in column_widths(rows).iter().enumerate() {
        worksheet.set_column_width(col as ColNum, *width as f64)?;
    }

    Ok(workbook)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, reason: &str) -> ScheduleRow {
        ScheduleRow {
            student_id: id.to_string(),
            fitness_label: "현역".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1997, 5, 10).unwrap(),
            program_start_date: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
            medical_label: String::new(),
            schedule_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            transition_semester: 3,
            transition_age: 27,
            rank: 1,
            reason: reason.to_string(),
        }
    }

    #[test]
    fn test_display_width_counts_hangul_twice() {
        assert_eq!(display_width("학번"), 4);
        assert_eq!(display_width("2024.3.1"), 8);
        assert_eq!(display_width("29세"), 4);
    }

    #[test]
    fn test_column_widths() {
        let widths = column_widths(&[row("2023000000001", "의무사관후보생")]);

        // 학번: 값 13자 > 최소 10
        assert_eq!(widths[0], 13);
        // 박사과정진입일: 한글 7자 = 14
        assert_eq!(widths[3], 14);
        // 편입예상시점: 12
        assert_eq!(widths[5], 12);
        // 우선순위: 8 → 최소 10
        assert_eq!(widths[8], 10);
        // 비고: 값 의무사관후보생 = 14
        assert_eq!(widths[9], 14);
    }

    #[test]
    fn test_build_workbook_to_buffer() {
        let mut workbook = build_workbook(&[row("20230001", "")]).unwrap();
        let buffer = workbook.save_to_buffer().unwrap();
        // xlsx 는 zip 컨테이너
        assert!(buffer.starts_with(b"PK"));
    }
}
