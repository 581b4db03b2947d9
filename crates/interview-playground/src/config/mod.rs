use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::playground::rubric::BALANCED_TOTAL;

/// Distinguishes runtime behavior for different stages of the playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub content: ContentConfig,
    pub rubric: RubricConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("PLAYGROUND_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let questions_path = optional_path("PLAYGROUND_QUESTIONS_PATH");
        let dimensions_path = optional_path("PLAYGROUND_RUBRIC_PATH");

        let balance_target = match env::var("PLAYGROUND_BALANCE_TARGET") {
            Ok(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidBalanceTarget { value: raw })?,
            Err(_) => BALANCED_TOTAL,
        };

        let log_level = env::var("PLAYGROUND_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            content: ContentConfig {
                questions_path,
                dimensions_path,
            },
            rubric: RubricConfig { balance_target },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn optional_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Optional JSON files replacing the built-in content tables.
#[derive(Debug, Clone, Default)]
pub struct ContentConfig {
    pub questions_path: Option<PathBuf>,
    pub dimensions_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct RubricConfig {
    pub balance_target: i64,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidBalanceTarget { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBalanceTarget { value } => write!(
                f,
                "PLAYGROUND_BALANCE_TARGET must be an integer (found '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("PLAYGROUND_ENV");
        env::remove_var("PLAYGROUND_LOG_LEVEL");
        env::remove_var("PLAYGROUND_QUESTIONS_PATH");
        env::remove_var("PLAYGROUND_RUBRIC_PATH");
        env::remove_var("PLAYGROUND_BALANCE_TARGET");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.rubric.balance_target, 100);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.content.questions_path.is_none());
        assert!(config.content.dimensions_path.is_none());
    }

    #[test]
    fn reads_content_overrides_and_environment() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PLAYGROUND_ENV", "CI");
        env::set_var("PLAYGROUND_QUESTIONS_PATH", "content/questions.json");
        env::set_var("PLAYGROUND_RUBRIC_PATH", "   ");
        env::set_var("PLAYGROUND_BALANCE_TARGET", " 80 ");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(
            config.content.questions_path,
            Some(PathBuf::from("content/questions.json"))
        );
        assert!(config.content.dimensions_path.is_none());
        assert_eq!(config.rubric.balance_target, 80);
        reset_env();
    }

    #[test]
    fn unknown_environment_and_missing_files_do_not_fail_config() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PLAYGROUND_ENV", "staging");
        env::set_var("PLAYGROUND_QUESTIONS_PATH", "/nonexistent/questions.json");
        let config = AppConfig::load().expect("paths are checked when content loads");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(
            config.content.questions_path,
            Some(PathBuf::from("/nonexistent/questions.json"))
        );
        reset_env();
    }

    #[test]
    fn rejects_non_numeric_balance_target() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PLAYGROUND_BALANCE_TARGET", "one hundred");
        match AppConfig::load() {
            Err(ConfigError::InvalidBalanceTarget { value }) => assert_eq!(value, "one hundred"),
            other => panic!("expected invalid balance target, got {other:?}"),
        }
        reset_env();
    }
}
