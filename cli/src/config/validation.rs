use super::app::AppConfig;
use crate::error::{AppError, AppResult};

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid default_theme: '{id}' ({reason})")]
    DefaultTheme { id: String, reason: String },
    #[error("Invalid themes_dir: '{path}' is not a directory")]
    ThemesDirNotDirectory { path: String },
    #[error("Invalid logging.level: '{level}'")]
    LogLevel { level: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::DefaultTheme { id, reason } => {
                format!(
                    "Default theme id is not valid!\n\n\
                    Your configured value: {id}\n\
                    Reason: {reason}\n\n\
                    Please update default_theme in prism.toml."
                )
            }
            ConfigValidationError::ThemesDirNotDirectory { path } => {
                format!(
                    "Themes directory is not a directory!\n\n\
                    Your configured value: {path}\n\n\
                    Please point themes_dir in prism.toml at a directory of theme records."
                )
            }
            ConfigValidationError::LogLevel { level } => {
                format!(
                    "Unknown log level!\n\n\
                    Your configured value: {level}\n\
                    Valid levels: trace, debug, info, warn, error\n\n\
                    Please update logging.level in prism.toml."
                )
            }
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
    ValidationError(Vec<ConfigValidationError>),
}

impl ConfigLoadResult {
    pub fn into_result(self) -> AppResult<AppConfig> {
        match self {
            ConfigLoadResult::Success(config) => Ok(*config),
            ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => {
                Err(AppError::Config(msg))
            }
            ConfigLoadResult::ValidationError(errors) => {
                let messages: Vec<String> = errors.iter().map(|e| e.user_message()).collect();
                Err(AppError::Config(format!(
                    "Configuration validation failed:\n{}",
                    messages.join("\n\n")
                )))
            }
        }
    }
}
