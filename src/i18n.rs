// ==========================================
// 국제화 (i18n) 모듈
// ==========================================
// rust-i18n 사용
// 한국어(기본), 영어 지원
// CLI 안내 문구 전용: 위반 문구와 비고 값은 데이터 규약이므로 번역하지 않는다
// ==========================================
// 참고: rust_i18n::i18n! 매크로는 lib.rs에서 초기화
// ==========================================

/// 기본 언어
pub const DEFAULT_LOCALE: &str = "ko";

/// 지원 언어 목록
pub const SUPPORTED_LOCALES: [&str; 2] = ["ko", "en"];

/// 현재 언어
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 언어 설정
///
/// # 인자
/// - locale: 언어 코드 ("ko" 또는 "en"). 그 외 값은 기본 언어로 대체
pub fn set_locale(locale: &str) {
    if SUPPORTED_LOCALES.contains(&locale) {
        rust_i18n::set_locale(locale);
    } else {
        rust_i18n::set_locale(DEFAULT_LOCALE);
    }
}

/// 메시지 번역 (인자 없음)
///
/// # 예시
/// ```no_run
/// use transition_planner::i18n::t;
/// let msg = t("cli.completed");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 메시지 번역 (인자 포함)
///
/// # 예시
/// ```no_run
/// use transition_planner::i18n::t_with_args;
/// let msg = t_with_args("cli.output_written", &[("path", "/tmp/out.csv")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
