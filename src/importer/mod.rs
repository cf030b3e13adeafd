// ==========================================
// 편입예상시점 산정 시스템 - 입력 계층
// ==========================================
// 책임: 외부 표 파일 → RawCandidateRecord
// 지원: Excel, CSV
// ==========================================

pub mod candidate_importer;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;

// 핵심 타입 재노출
pub use candidate_importer::CandidateImporter;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper as FieldMapperImpl;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};

// Trait 재노출
pub use importer_trait::{FieldMapper, FileParser, RawRow};
