// ==========================================
// 편입예상시점 산정 시스템 - 실행 설정
// ==========================================
// 시작 연도, 기간별 정원, 기간 수 상한
// JSON 파일 로드 지원 (serde_json)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// 기간 수 상한 기본값
pub const DEFAULT_MAX_PERIODS: usize = 100;

/// 기간 수 상한 환경 변수
pub const MAX_PERIODS_ENV: &str = "TRANSITION_PLANNER_MAX_PERIODS";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("설정 파일 읽기 실패 ({path}): {message}")]
    ReadFailed { path: String, message: String },

    #[error("설정 파일 형식 오류 ({path}): {message}")]
    ParseFailed { path: String, message: String },

    #[error("정원은 1 이상이어야 합니다: {0}")]
    InvalidCapacity(usize),

    #[error("기간 수 상한은 1 이상이어야 합니다: {0}")]
    InvalidMaxPeriods(usize),

    #[error("환경 변수 {name} 값이 올바르지 않습니다: {value}")]
    InvalidEnv { name: String, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// RunConfig
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub start_year: i32,
    pub capacity: usize,
    #[serde(default = "default_max_periods")]
    pub max_periods: usize,
}

fn default_max_periods() -> usize {
    DEFAULT_MAX_PERIODS
}

impl RunConfig {
    /// 기간 수 상한은 기본값 사용
    pub fn new(start_year: i32, capacity: usize) -> Self {
        Self {
            start_year,
            capacity,
            max_periods: DEFAULT_MAX_PERIODS,
        }
    }

    pub fn with_max_periods(mut self, max_periods: usize) -> Self {
        self.max_periods = max_periods;
        self
    }

    /// JSON 설정 파일 로드 (검증 포함)
    ///
    /// `max_periods`가 없으면 환경 변수, 그다음 기본값을 따른다.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&text).map_err(|e| match e {
            ConfigError::ParseFailed { message, .. } => ConfigError::ParseFailed {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| ConfigError::ParseFailed {
                path: String::new(),
                message: e.to_string(),
            })?;
        let has_max_periods = value.get("max_periods").is_some();

        let mut config: RunConfig =
            serde_json::from_value(value).map_err(|e| ConfigError::ParseFailed {
                path: String::new(),
                message: e.to_string(),
            })?;
        if !has_max_periods {
            config.max_periods = max_periods_from_env()?;
        }

        config.validate()?;
        debug!(?config, "실행 설정 로드");
        Ok(config)
    }

    /// 환경 변수를 반영한 기본 기간 수 상한으로 설정
    pub fn with_env_max_periods(mut self) -> ConfigResult<Self> {
        self.max_periods = max_periods_from_env()?;
        Ok(self)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.capacity == 0 {
            return Err(ConfigError::InvalidCapacity(self.capacity));
        }
        if self.max_periods == 0 {
            return Err(ConfigError::InvalidMaxPeriods(self.max_periods));
        }
        Ok(())
    }
}

fn max_periods_from_env() -> ConfigResult<usize> {
    match std::env::var(MAX_PERIODS_ENV) {
        Ok(value) => parse_max_periods(&value),
        Err(_) => Ok(DEFAULT_MAX_PERIODS),
    }
}

fn parse_max_periods(value: &str) -> ConfigResult<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidEnv {
            name: MAX_PERIODS_ENV.to_string(),
            value: value.to_string(),
        })
}
