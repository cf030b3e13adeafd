// ==========================================
// 편입예상시점 산정 시스템 - 입력 모듈 오류 타입
// ==========================================
// 도구: thiserror 파생 매크로
// 입력 오류는 모두 배정 전 단계에서 실행을 중단시킨다
// ==========================================

use thiserror::Error;

/// 입력 모듈 오류 타입
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 파일 관련 =====
    #[error("파일 없음: {0}")]
    FileNotFound(String),

    #[error("지원하지 않는 파일 형식: {0} (.xlsx/.xls/.csv 만 지원)")]
    UnsupportedFormat(String),

    #[error("파일 읽기 실패: {0}")]
    FileReadError(String),

    #[error("Excel 파싱 실패: {0}")]
    ExcelParseError(String),

    #[error("CSV 파싱 실패: {0}")]
    CsvParseError(String),

    // ===== 필드 매핑 =====
    #[error("필수 필드 누락 (행 {row}): {field}")]
    MissingField { row: usize, field: String },

    #[error("허용되지 않는 값 (행 {row}, 필드 {field}): {value}")]
    InvalidToken {
        row: usize,
        field: String,
        value: String,
    },

    #[error("시각 형식 오류 (행 {row}, 필드 {field}): {value}")]
    TimestampFormatError {
        row: usize,
        field: String,
        value: String,
    },

    // ===== 데이터 품질 =====
    #[error("학번 중복 (행 {row}): {student_id} (최초 행 {first_row})")]
    DuplicateStudentId {
        row: usize,
        student_id: String,
        first_row: usize,
    },
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 타입 별칭
pub type ImportResult<T> = Result<T, ImportError>;
