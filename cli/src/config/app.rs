use super::LoggingConfig;
use super::validation::{ConfigLoadResult, ConfigValidationError};
use crate::error::AppResult;
use crate::validation::{RecordValidationError, ThemeIdValidator, Validator};
use engine::theme::DEFAULT_THEME_ID;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const THEMES_SUBDIR: &str = "prism/themes";
const LOCAL_THEMES_DIR: &str = "themes";

/// Main application configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    themes_dir: Option<PathBuf>,
    default_theme: Option<String>,
    output: Option<PathBuf>,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if let Some(id) = &self.default_theme {
            if let Err(RecordValidationError::InvalidThemeId { reason, .. }) =
                ThemeIdValidator.validate(id)
            {
                errors.push(ConfigValidationError::DefaultTheme {
                    id: id.clone(),
                    reason,
                });
            }
        }

        if let Some(dir) = &self.themes_dir {
            if dir.exists() && !dir.is_dir() {
                errors.push(ConfigValidationError::ThemesDirNotDirectory {
                    path: dir.display().to_string(),
                });
            }
        }

        if LoggingConfig::parse_level(self.logging.level()).is_none() {
            errors.push(ConfigValidationError::LogLevel {
                level: self.logging.level().to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Configured themes directory, or `<config dir>/prism/themes`, or
    /// `./themes` on platforms without a config directory.
    pub fn themes_dir(&self) -> PathBuf {
        match &self.themes_dir {
            Some(dir) => dir.clone(),
            None => dirs::config_dir()
                .map(|dir| dir.join(THEMES_SUBDIR))
                .unwrap_or_else(|| PathBuf::from(LOCAL_THEMES_DIR)),
        }
    }

    pub fn default_theme(&self) -> &str {
        self.default_theme.as_deref().unwrap_or(DEFAULT_THEME_ID)
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Command-line flags take precedence over file and environment values.
    pub fn with_themes_dir(mut self, dir: PathBuf) -> Self {
        self.themes_dir = Some(dir);
        self
    }

    pub fn with_log_level(mut self, level: &str) -> Self {
        self.logging = self.logging.with_level(level);
        self
    }

    /// Validate again after command-line overrides were layered on.
    pub fn into_validated(self) -> AppResult<Self> {
        match self.validate() {
            Ok(()) => Ok(self),
            Err(errors) => ConfigLoadResult::ValidationError(errors).into_result(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.default_theme(), DEFAULT_THEME_ID);
        assert!(config.themes_dir().ends_with("themes"));
        assert_eq!(config.output(), None);
        assert_ok!(config.validate());
    }

    #[test]
    fn test_invalid_values_are_all_reported() {
        let config = AppConfig {
            default_theme: Some("bad id".to_string()),
            ..AppConfig::default()
        }
        .with_log_level("loud");

        let errors = assert_err!(config.validate());
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ConfigValidationError::DefaultTheme { .. }));
        assert!(matches!(errors[1], ConfigValidationError::LogLevel { .. }));
    }

    #[test]
    fn test_log_level_override_is_revalidated() {
        assert_ok!(AppConfig::default().with_log_level("debug").into_validated());

        let err = assert_err!(AppConfig::default().with_log_level("loud").into_validated());
        assert!(err.to_string().contains("Unknown log level"));
    }
}
