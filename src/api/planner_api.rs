// ==========================================
// 편입예상시점 산정 시스템 - 산정 API
// ==========================================
// 흐름:
// 1. 설정 검증
// 2. 원시 레코드 정규화 (센티널 검사, 학기 기준 보정)
// 3. 신체등급별 풀 분리
// 4. 다기간 스케줄링
// 5. 위반 기록 정렬 후 반환
// ==========================================
// 실행마다 새 ViolationLog를 만든다 (전역 상태 없음)
// ==========================================

use crate::api::error::ApiResult;
use crate::config::RunConfig;
use crate::domain::allocation::ScheduledCandidate;
use crate::domain::candidate::{CandidatePools, RawCandidateRecord};
use crate::engine::{CandidateNormalizer, MultiPeriodScheduler, PeriodSummary, ViolationLog};
use crate::importer::CandidateImporter;
use crate::report::{ReportFormat, ReportWriter};
use std::path::{Path, PathBuf};
use tracing::{error, info, info_span};
use uuid::Uuid;

/// 1회 산정 결과
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_id: String,
    /// 출력 순서 그대로
    pub entries: Vec<ScheduledCandidate>,
    /// 정렬된 위반 기록
    pub violations: Vec<String>,
    pub periods: Vec<PeriodSummary>,
}

impl RunReport {
    /// 우선순위가 부여된 인원 수
    pub fn ranked_count(&self) -> usize {
        self.entries.iter().filter(|e| e.rank() > 0).count()
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

// ==========================================
// PlannerApi
// ==========================================
pub struct PlannerApi {
    importer: CandidateImporter,
    normalizer: CandidateNormalizer,
    writer: ReportWriter,
}

impl PlannerApi {
    pub fn new() -> Self {
        Self::with_importer(CandidateImporter::with_defaults())
    }

    pub fn with_importer(importer: CandidateImporter) -> Self {
        Self {
            importer,
            normalizer: CandidateNormalizer::new(),
            writer: ReportWriter::new(),
        }
    }

    /// 결과 파일 형식 지정 (기본 xlsx)
    pub fn with_report_format(mut self, format: ReportFormat) -> Self {
        self.writer = ReportWriter::with_format(format);
        self
    }

    /// 원시 레코드로 산정
    ///
    /// # 인자
    /// - `records`: 입력 레코드 (입력 순서 유지)
    /// - `config`: 시작 연도, 정원, 기간 수 상한
    ///
    /// # 반환
    /// - Ok(RunReport): 배정 결과 + 위반 기록
    /// - Err(ApiError): 설정 오류 또는 치명적 불변식 위반 (결과 없음)
    pub fn run(&self, records: Vec<RawCandidateRecord>, config: &RunConfig) -> ApiResult<RunReport> {
        let run_id = Uuid::new_v4().to_string();
        let span = info_span!(
            "planning_run",
            run_id = %run_id,
            start_year = config.start_year,
            capacity = config.capacity
        );
        let _enter = span.enter();

        config.validate()?;
        info!(records_count = records.len(), "산정 시작");

        let mut log = ViolationLog::new();

        // ==========================================
        // 정규화 → 풀 분리
        // ==========================================
        let candidates = self
            .normalizer
            .normalize_all(records, &mut log)
            .map_err(|e| {
                error!(error = %e, "입력 정규화 중단");
                e
            })?;
        let pools = CandidatePools::partition(candidates);

        // ==========================================
        // 다기간 스케줄링
        // ==========================================
        let scheduler = MultiPeriodScheduler::new(config.max_periods);
        let result = scheduler
            .schedule(pools, config.start_year, config.capacity, &mut log)
            .map_err(|e| {
                error!(error = %e, "스케줄링 중단");
                e
            })?;

        let violations = log.into_sorted();
        info!(
            entries = result.entries.len(),
            periods = result.periods.len(),
            violations = violations.len(),
            "산정 완료"
        );

        Ok(RunReport {
            run_id,
            entries: result.entries,
            violations,
            periods: result.periods,
        })
    }

    /// 파일 입력 → 산정 → 결과 파일 출력
    ///
    /// 산정이 중단되면 결과 파일을 만들지 않는다.
    ///
    /// # 반환
    /// 산정 결과와 기록한 파일 경로
    pub fn run_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output_dir: Q,
        config: &RunConfig,
    ) -> ApiResult<(RunReport, PathBuf)> {
        let records = self.importer.import_file(input)?;
        let report = self.run(records, config)?;
        let path = self.writer.write_file(output_dir, &report.entries)?;
        Ok((report, path))
    }
}

impl Default for PlannerApi {
    fn default() -> Self {
        Self::new()
    }
}
