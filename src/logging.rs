// ==========================================
// 로그 시스템 초기화
// ==========================================
// tracing + tracing-subscriber 사용
// 로그 수준은 환경 변수로 설정
// 로그는 stderr로 출력 (stdout은 CLI 결과 전용)
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 로그 시스템 초기화
///
/// # 환경 변수
/// - RUST_LOG: 로그 수준 필터 (기본: info)
///   예: RUST_LOG=debug 또는 RUST_LOG=transition_planner=trace
///
/// # 예시
/// ```no_run
/// use transition_planner::logging;
/// logging::init();
/// ```
pub fn init() {
    init_with_default("info");
}

/// 기본 필터를 지정해 초기화 (RUST_LOG가 있으면 그것을 우선)
pub fn init_with_default(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .try_init();
}

/// JSON 형식 로그 초기화 (수집기 연동용)
pub fn init_json() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_current_span(true)
        .try_init();
}

/// 테스트용 로그 초기화
///
/// 더 자세한 수준 사용, 중복 호출 허용
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
