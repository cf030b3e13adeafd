// ==========================================
// 편입예상시점 산정 시스템 - 대상자 입력기
// ==========================================
// 흐름: 파싱 → 필드 매핑 → 학번 중복 검사
// 오류가 하나라도 있으면 전체 입력을 거부한다 (배정 전 중단)
// ==========================================

use crate::domain::candidate::RawCandidateRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper as FieldMapperImpl;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::importer_trait::{FieldMapper, FileParser, RawRow};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

// ==========================================
// CandidateImporter
// ==========================================
pub struct CandidateImporter {
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
}

impl CandidateImporter {
    pub fn new(file_parser: Box<dyn FileParser>, field_mapper: Box<dyn FieldMapper>) -> Self {
        Self {
            file_parser,
            field_mapper,
        }
    }

    /// 확장자 자동 판별 파서 + 기본 매퍼
    pub fn with_defaults() -> Self {
        Self::new(Box::new(UniversalFileParser), Box::new(FieldMapperImpl))
    }

    /// 파일 → 원시 레코드
    #[instrument(skip(self, file_path), fields(file_path = %file_path.as_ref().display()))]
    pub fn import_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<RawCandidateRecord>> {
        debug!("단계 1: 파일 파싱");
        let rows = self.file_parser.parse_to_raw_records(file_path.as_ref())?;
        info!(total_rows = rows.len(), "파일 파싱 완료");

        debug!("단계 2: 필드 매핑");
        self.map_rows(&rows)
    }

    /// 원시 행 → 원시 레코드 (+ 중복 검사)
    pub fn map_rows(&self, rows: &[RawRow]) -> ImportResult<Vec<RawCandidateRecord>> {
        let mut records = Vec::with_capacity(rows.len());
        let mut seen: HashMap<String, usize> = HashMap::with_capacity(rows.len());

        for (idx, row) in rows.iter().enumerate() {
            let row_number = idx + 1;
            let record = self
                .field_mapper
                .map_to_raw_candidate(row, row_number)
                .map_err(|e| {
                    warn!(row_number, error = %e, "필드 매핑 실패");
                    e
                })?;

            if let Some(&first_row) = seen.get(&record.student_id) {
                return Err(ImportError::DuplicateStudentId {
                    row: row_number,
                    student_id: record.student_id,
                    first_row,
                });
            }
            seen.insert(record.student_id.clone(), row_number);
            records.push(record);
        }

        info!(records = records.len(), "필드 매핑 완료");
        Ok(records)
    }
}

impl Default for CandidateImporter {
    fn default() -> Self {
        Self::with_defaults()
    }
}
