// ==========================================
// 편입예상시점 산정 시스템 - 입력 인터페이스
// ==========================================
// 입력 파이프라인: 파일 파싱 → 필드 매핑 → 중복 검사
// 구현: file_parser.rs / field_mapper.rs / candidate_importer.rs
// ==========================================

use crate::domain::candidate::RawCandidateRecord;
use crate::importer::error::ImportResult;
use std::collections::HashMap;
use std::path::Path;

/// 원시 행 (열 이름 → 셀 문자열)
pub type RawRow = HashMap<String, String>;

// ==========================================
// FileParser Trait
// ==========================================
// 구현체: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 파일을 원시 행 목록으로 파싱
    ///
    /// 첫 행은 헤더, 완전히 빈 행은 건너뛴다.
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRow>>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
pub trait FieldMapper: Send + Sync {
    /// 원시 행 → RawCandidateRecord
    ///
    /// # 인자
    /// - `row`: 원시 행
    /// - `row_number`: 데이터 행 번호 (1부터, 헤더 제외)
    fn map_to_raw_candidate(
        &self,
        row: &RawRow,
        row_number: usize,
    ) -> ImportResult<RawCandidateRecord>;
}
