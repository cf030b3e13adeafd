// ==========================================
// 편입예상시점 산정 시스템 - 출력 계층
// ==========================================
// 책임: 배정 결과 → 출력 행 → 결과 파일
// 배정 로직 없음
// ==========================================

pub mod row;
pub mod writer;
pub mod xlsx_sheet;

pub use row::{ScheduleRow, HEADERS};
pub use writer::{
    ReportError, ReportFormat, ReportResult, ReportWriter, CSV_OUTPUT_FILE_NAME, OUTPUT_FILE_NAME,
};
pub use xlsx_sheet::SHEET_NAME;
