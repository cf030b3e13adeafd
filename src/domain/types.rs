// ==========================================
// 편입예상시점 산정 시스템 - 도메인 타입 정의
// ==========================================
// 신체등급 / 편입 사유 / 반기 기준점
// 사유 문자열은 출력 시트의 데이터 계약이므로 고정 리터럴을 사용한다
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 신체등급 (Fitness Status)
// ==========================================
// 입력 시 고정, 이후 변경 불가
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FitnessStatus {
    ServiceEligible,         // 현역
    AlternativeServiceTrack, // 보충역
}

impl FitnessStatus {
    pub const SERVICE_ELIGIBLE_TOKEN: &'static str = "현역";
    pub const ALTERNATIVE_SERVICE_TOKEN: &'static str = "보충역";

    /// 입력 토큰 → 신체등급 (두 토큰 외에는 None)
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            Self::SERVICE_ELIGIBLE_TOKEN => Some(FitnessStatus::ServiceEligible),
            Self::ALTERNATIVE_SERVICE_TOKEN => Some(FitnessStatus::AlternativeServiceTrack),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FitnessStatus::ServiceEligible => Self::SERVICE_ELIGIBLE_TOKEN,
            FitnessStatus::AlternativeServiceTrack => Self::ALTERNATIVE_SERVICE_TOKEN,
        }
    }
}

impl fmt::Display for FitnessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitnessStatus::ServiceEligible => write!(f, "SERVICE_ELIGIBLE"),
            FitnessStatus::AlternativeServiceTrack => write!(f, "ALTERNATIVE_SERVICE_TRACK"),
        }
    }
}

// ==========================================
// 의무사관후보생 표기
// ==========================================
pub const MEDICAL_TRACK_TOKEN: &str = "O";

/// 의무사관후보생 토큰 해석 ("O" / 빈칸)
///
/// "X" 는 빈칸과 같게 취급한다.
pub fn parse_medical_token(token: &str) -> Option<bool> {
    match token.trim() {
        MEDICAL_TRACK_TOKEN => Some(true),
        "" | "X" => Some(false),
        _ => None,
    }
}

// ==========================================
// 편입 사유 (Reason Code)
// ==========================================
// 순서: 배정 우선순위 순
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    MedicalOfficer,      // 의무사관후보생 3학기
    AgeLimit,            // 만 29세 도달
    SeniorSemester,      // 6학기 이상
    Default,             // 일반 (사유 없음)
    AlternativeService,  // 보충역
}

impl ReasonCode {
    /// 출력 시트 '비고' 열에 들어가는 문자열
    pub fn label(&self) -> &'static str {
        match self {
            ReasonCode::MedicalOfficer => "의무사관후보생",
            ReasonCode::AgeLimit => "29세",
            ReasonCode::SeniorSemester => "7학기",
            ReasonCode::Default => "",
            ReasonCode::AlternativeService => "보충역",
        }
    }

    /// 순위가 부여되는 배정 흐름(현역/의무사관후보생)인지
    pub fn is_ranked(&self) -> bool {
        !matches!(self, ReasonCode::AlternativeService)
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReasonCode::MedicalOfficer => write!(f, "MEDICAL_OFFICER"),
            ReasonCode::AgeLimit => write!(f, "AGE_LIMIT"),
            ReasonCode::SeniorSemester => write!(f, "SENIOR_SEMESTER"),
            ReasonCode::Default => write!(f, "DEFAULT"),
            ReasonCode::AlternativeService => write!(f, "ALTERNATIVE_SERVICE"),
        }
    }
}

// ==========================================
// 반기 기준점 (Half-year Anchor)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HalfYear {
    Spring, // 3월 1일
    Fall,   // 9월 1일
}

impl HalfYear {
    pub fn anchor_month(&self) -> u32 {
        match self {
            HalfYear::Spring => 3,
            HalfYear::Fall => 9,
        }
    }
}

impl fmt::Display for HalfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalfYear::Spring => write!(f, "SPRING"),
            HalfYear::Fall => write!(f, "FALL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitness_token_roundtrip() {
        assert_eq!(
            FitnessStatus::from_token("현역"),
            Some(FitnessStatus::ServiceEligible)
        );
        assert_eq!(
            FitnessStatus::from_token(" 보충역 "),
            Some(FitnessStatus::AlternativeServiceTrack)
        );
        assert_eq!(FitnessStatus::from_token("면제"), None);
        assert_eq!(FitnessStatus::AlternativeServiceTrack.label(), "보충역");
    }

    #[test]
    fn test_medical_token() {
        assert_eq!(parse_medical_token("O"), Some(true));
        assert_eq!(parse_medical_token(""), Some(false));
        assert_eq!(parse_medical_token("X"), Some(false));
        assert_eq!(parse_medical_token("Y"), None);
    }

    #[test]
    fn test_display_uses_code_form() {
        // 표시 문자열은 serde 직렬화 값과 같은 코드 형식
        let cases = [
            (
                FitnessStatus::AlternativeServiceTrack.to_string(),
                serde_json::to_value(FitnessStatus::AlternativeServiceTrack).unwrap(),
            ),
            (
                ReasonCode::AgeLimit.to_string(),
                serde_json::to_value(ReasonCode::AgeLimit).unwrap(),
            ),
            (
                ReasonCode::MedicalOfficer.to_string(),
                serde_json::to_value(ReasonCode::MedicalOfficer).unwrap(),
            ),
        ];
        for (display, serialized) in cases {
            assert_eq!(serialized, display.as_str());
        }
        assert_eq!(ReasonCode::AgeLimit.to_string(), "AGE_LIMIT");
        assert_eq!(FitnessStatus::ServiceEligible.to_string(), "SERVICE_ELIGIBLE");
    }

    #[test]
    fn test_reason_labels() {
        assert_eq!(ReasonCode::Default.label(), "");
        assert_eq!(ReasonCode::AgeLimit.label(), "29세");
        assert!(!ReasonCode::AlternativeService.is_ranked());
        assert!(ReasonCode::SeniorSemester.is_ranked());
    }
}
