// ==========================================
// 편입예상시점 산정 시스템 - 진입 반기 기준점 산출
// ==========================================
// 규칙: 2·3월 진입 → 3월 기준점, 8·9월 진입 → 9월 기준점
// 그 외 월: 비치명 위반 기록 후 1~6월 → 3월, 7~12월 → 9월
// ==========================================

use crate::domain::candidate::ProgramStart;
use crate::domain::types::HalfYear;
use crate::engine::violation_log::ViolationLog;
use chrono::{Datelike, NaiveDateTime};

/// 봄 학기 허용 진입월
pub const SPRING_WINDOW: [u32; 2] = [2, 3];
/// 가을 학기 허용 진입월
pub const FALL_WINDOW: [u32; 2] = [8, 9];

/// AnchorResolver - 진입일 → 반기 기준점
pub struct AnchorResolver {
    // 무상태
}

impl AnchorResolver {
    pub fn new() -> Self {
        Self {}
    }

    /// 진입 시각(보정 완료)으로부터 기준점 산출
    ///
    /// # 인자
    /// - `student_id`: 위반 메시지용 학번
    /// - `start`: 보정된 진입 시각
    /// - `log`: 허용 범위 밖 진입월 기록처
    pub fn resolve(
        &self,
        student_id: &str,
        start: NaiveDateTime,
        log: &mut ViolationLog,
    ) -> ProgramStart {
        let month = start.month();

        let half = if SPRING_WINDOW.contains(&month) {
            HalfYear::Spring
        } else if FALL_WINDOW.contains(&month) {
            HalfYear::Fall
        } else {
            log.record(format!("{}: {}월 진입", student_id, month));
            // 반년 단순 분할로 대체
            if month <= 6 {
                HalfYear::Spring
            } else {
                HalfYear::Fall
            }
        };

        ProgramStart::new(start.year(), half)
    }
}

impl Default for AnchorResolver {
    fn default() -> Self {
        Self::new()
    }
}
