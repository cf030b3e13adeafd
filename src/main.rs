// ==========================================
// 편입예상시점 산정 시스템 - 명령행 진입점
// ==========================================
// 사용: transition-planner run --input <파일> --year <연도> --capacity <정원>
// 위반 기록은 stderr, 결과 파일(xlsx 기본, csv 선택)은 출력 디렉터리에 기록
// 치명 오류 시 결과 파일 없이 0이 아닌 코드로 종료
// ==========================================

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use transition_planner::config::RunConfig;
use transition_planner::i18n::{self, t, t_with_args};
use transition_planner::{logging, PlannerApi, ReportFormat};

#[derive(Parser, Debug)]
#[command(
    name = "transition-planner",
    about = "박사과정 전문연구요원 편입예상시점 산정",
    version
)]
struct Cli {
    /// JSON 형식 로그 출력
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 대상자 파일로 편입 시점 산정
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// 입력 파일 (.xlsx / .xls / .csv)
    #[arg(long)]
    input: PathBuf,
    /// 출력 디렉터리 (기본: 문서 폴더)
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// 시작 연도
    #[arg(long)]
    year: Option<i32>,
    /// 기간별 정원
    #[arg(long)]
    capacity: Option<usize>,
    /// 기간 수 상한
    #[arg(long)]
    max_periods: Option<usize>,
    /// 실행 설정 JSON 파일
    #[arg(long)]
    config: Option<PathBuf>,
    /// 안내 문구 언어 (ko / en)
    #[arg(long, default_value = i18n::DEFAULT_LOCALE)]
    locale: String,
    /// 결과 파일 형식 (xlsx / csv)
    #[arg(long, default_value = "xlsx")]
    format: ReportFormat,
    /// 기간별 요약을 JSON으로 stdout에 출력
    #[arg(long)]
    periods_json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    match cli.command {
        Command::Run(args) => run(args),
    }
}

/// 설정 병합: 설정 파일 → CLI 인자 덮어쓰기
fn resolve_config(args: &RunArgs) -> Result<RunConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let mut config = RunConfig::from_json_file(path)
                .with_context(|| format!("설정 파일 로드 실패: {}", path.display()))?;
            if let Some(year) = args.year {
                config.start_year = year;
            }
            if let Some(capacity) = args.capacity {
                config.capacity = capacity;
            }
            config
        }
        None => {
            let year = args
                .year
                .ok_or_else(|| anyhow!("--year 또는 --config 가 필요합니다"))?;
            let capacity = args
                .capacity
                .ok_or_else(|| anyhow!("--capacity 또는 --config 가 필요합니다"))?;
            RunConfig::new(year, capacity).with_env_max_periods()?
        }
    };

    if let Some(max_periods) = args.max_periods {
        config.max_periods = max_periods;
    }
    config.validate()?;
    Ok(config)
}

fn run(args: RunArgs) -> Result<()> {
    i18n::set_locale(&args.locale);

    let config = resolve_config(&args)?;
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => dirs::document_dir().ok_or_else(|| anyhow!(t("cli.no_output_dir")))?,
    };

    info!("==================================================");
    info!("{} v{}", t("cli.banner"), transition_planner::VERSION);
    info!("==================================================");

    let api = PlannerApi::new().with_report_format(args.format);
    let (report, path) = api
        .run_file(&args.input, &output_dir, &config)
        .map_err(|e| anyhow!(t_with_args("cli.aborted", &[("reason", &e.to_string())])))?;

    if report.has_violations() {
        eprintln!(
            "{}",
            t_with_args(
                "cli.violations_title",
                &[("count", &report.violations.len().to_string())]
            )
        );
        for violation in &report.violations {
            eprintln!("{}", violation);
        }
    }

    if args.periods_json {
        println!("{}", serde_json::to_string_pretty(&report.periods)?);
    }

    eprintln!("{}", t("cli.completed"));
    eprintln!(
        "{}",
        t_with_args(
            "cli.summary",
            &[
                ("entries", &report.entries.len().to_string()),
                ("ranked", &report.ranked_count().to_string()),
                ("periods", &report.periods.len().to_string()),
            ]
        )
    );
    eprintln!(
        "{}",
        t_with_args("cli.output_written", &[("path", &path.display().to_string())])
    );

    Ok(())
}
