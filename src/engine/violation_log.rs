// ==========================================
// 편입예상시점 산정 시스템 - 비치명 위반 기록
// ==========================================
// 도메인 규칙 위반을 모아 두었다가 실행 종료 시 정렬하여 보고한다.
// 기록 후에도 배정은 계속된다.
// 실행마다 새로 만들거나 clear() 로 비운다.
// ==========================================

use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct ViolationLog {
    messages: Vec<String>,
}

impl ViolationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 위반 기록
    pub fn record(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(violation = %message, "도메인 규칙 위반");
        self.messages.push(message);
    }

    /// 조건이 거짓이면 기록 (조건을 그대로 돌려준다)
    pub fn check(&mut self, ok: bool, message: impl FnOnce() -> String) -> bool {
        if !ok {
            self.record(message());
        }
        ok
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// 기록 순서 그대로
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// 사전순 정렬된 최종 보고
    pub fn into_sorted(mut self) -> Vec<String> {
        self.messages.sort();
        self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_sort() {
        let mut log = ViolationLog::new();
        log.record("b: 30세");
        log.record("a: 8학기");
        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[0], "b: 30세");
        assert_eq!(log.into_sorted(), vec!["a: 8학기", "b: 30세"]);
    }

    #[test]
    fn test_check_records_only_failures() {
        let mut log = ViolationLog::new();
        assert!(log.check(true, || "never".to_string()));
        assert!(!log.check(false, || "x: 1월 진입".to_string()));
        assert_eq!(log.messages(), &["x: 1월 진입".to_string()]);
    }

    #[test]
    fn test_clear() {
        let mut log = ViolationLog::new();
        log.record("m");
        log.clear();
        assert!(log.is_empty());
    }
}
