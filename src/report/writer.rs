// ==========================================
// 편입예상시점 산정 시스템 - 결과 파일 출력
// ==========================================
// 기본: Excel (편입예상시점.xlsx, 시트 "대상자")
// 선택: CSV (편입예상시점.csv, UTF-8 BOM 포함)
// ==========================================

use crate::domain::allocation::ScheduledCandidate;
use crate::report::row::{ScheduleRow, HEADERS};
use crate::report::xlsx_sheet::build_workbook;
use csv::WriterBuilder;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, instrument};

/// 출력 파일 이름 (Excel)
pub const OUTPUT_FILE_NAME: &str = "편입예상시점.xlsx";
/// 출력 파일 이름 (CSV)
pub const CSV_OUTPUT_FILE_NAME: &str = "편입예상시점.csv";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("출력 디렉터리 생성 실패 ({path}): {message}")]
    CreateDir { path: String, message: String },

    #[error("출력 파일 쓰기 실패: {0}")]
    Write(String),

    #[error("지원하지 않는 출력 형식: {0} (xlsx/csv 만 지원)")]
    UnsupportedFormat(String),
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Write(err.to_string())
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        ReportError::Write(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ReportError::Write(err.to_string())
    }
}

pub type ReportResult<T> = Result<T, ReportError>;

// ==========================================
// 출력 형식
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ReportFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            ReportFormat::Xlsx => OUTPUT_FILE_NAME,
            ReportFormat::Csv => CSV_OUTPUT_FILE_NAME,
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xlsx" => Ok(ReportFormat::Xlsx),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(ReportError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Xlsx => write!(f, "xlsx"),
            ReportFormat::Csv => write!(f, "csv"),
        }
    }
}

// ==========================================
// ReportWriter
// ==========================================
pub struct ReportWriter {
    format: ReportFormat,
}

impl ReportWriter {
    pub fn new() -> Self {
        Self::with_format(ReportFormat::default())
    }

    pub fn with_format(format: ReportFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// 출력 순서 그대로 행 변환
    pub fn rows(&self, entries: &[ScheduledCandidate]) -> Vec<ScheduleRow> {
        entries.iter().map(ScheduleRow::from).collect()
    }

    /// 임의의 출력 대상에 CSV 기록
    pub fn write_csv_to<W: Write>(&self, writer: W, rows: &[ScheduleRow]) -> ReportResult<()> {
        let mut writer = writer;
        writer.write_all(UTF8_BOM)?;

        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
        csv_writer.write_record(HEADERS)?;
        for row in rows {
            csv_writer.write_record(row.cells())?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Excel 통합 문서 바이트
    pub fn xlsx_bytes(&self, rows: &[ScheduleRow]) -> ReportResult<Vec<u8>> {
        let mut workbook = build_workbook(rows)?;
        Ok(workbook.save_to_buffer()?)
    }

    /// 출력 디렉터리에 결과 파일 기록
    ///
    /// # 반환
    /// 기록한 파일 경로
    #[instrument(skip(self, output_dir, entries), fields(
        output_dir = %output_dir.as_ref().display(),
        format = %self.format,
        rows = entries.len()
    ))]
    pub fn write_file<P: AsRef<Path>>(
        &self,
        output_dir: P,
        entries: &[ScheduledCandidate],
    ) -> ReportResult<PathBuf> {
        let dir = output_dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| ReportError::CreateDir {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;

        let path = dir.join(self.format.file_name());
        let rows = self.rows(entries);
        match self.format {
            ReportFormat::Xlsx => fs::write(&path, self.xlsx_bytes(&rows)?)?,
            ReportFormat::Csv => {
                let file = File::create(&path)?;
                self.write_csv_to(BufWriter::new(file), &rows)?;
            }
        }

        info!(path = %path.display(), "결과 파일 기록 완료");
        Ok(path)
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}
