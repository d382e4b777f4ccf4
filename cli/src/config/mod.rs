use config::{Config, Environment, File};
use log::LevelFilter;
use serde::Deserialize;
use std::path::Path;

pub mod app;
pub mod validation;

pub use app::AppConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_STEM: &str = "prism";
pub const ENV_PREFIX: &str = "PRISM";

/// Load configuration from an optional file and `PRISM__*` environment
/// variables, the latter taking precedence.
///
/// An explicitly given file must exist; the default `prism.toml` is optional.
pub fn load_config(file: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let file_source = match file {
        Some(path) => File::from(path).required(true),
        None => File::with_name(CONFIG_FILE_STEM).required(false),
    };
    let env_source = Environment::with_prefix(ENV_PREFIX).separator("__");

    let config = match Config::builder()
        .add_source(file_source)
        .add_source(env_source)
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your prism.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => match app_config.validate() {
            Ok(()) => ConfigLoadResult::Success(Box::new(app_config)),
            Err(errors) => ConfigLoadResult::ValidationError(errors),
        },
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn level_filter(&self) -> LevelFilter {
        Self::parse_level(self.level()).unwrap_or(LevelFilter::Info)
    }

    pub fn with_level(mut self, level: &str) -> Self {
        self.level = Some(level.to_string());
        self
    }

    pub fn parse_level(level: &str) -> Option<LevelFilter> {
        match level.to_lowercase().as_str() {
            "trace" => Some(LevelFilter::Trace),
            "debug" => Some(LevelFilter::Debug),
            "info" => Some(LevelFilter::Info),
            "warn" | "warning" => Some(LevelFilter::Warn),
            "error" => Some(LevelFilter::Error),
            "off" => Some(LevelFilter::Off),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let logging = LoggingConfig::default();
        assert_eq!(logging.level(), "info");
        assert_eq!(logging.file(), None);
        assert_eq!(logging.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_parse_level_is_case_insensitive() {
        assert_eq!(LoggingConfig::parse_level("DEBUG"), Some(LevelFilter::Debug));
        assert_eq!(LoggingConfig::parse_level("warning"), Some(LevelFilter::Warn));
        assert_eq!(LoggingConfig::parse_level("verbose"), None);
    }
}
