use crate::error::AppError;
use std::path::Path;

/// Core validation trait that all validators must implement.
///
/// Validators hold no state of their own, so they can be stored next to the
/// code that uses them and shared freely.
///
/// # Type Parameters
///
/// * `T` - The type of data being validated (can be unsized like `str`)
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}

/// Record file extensions the host can read.
pub const RECORD_EXTENSIONS: &[&str] = &["json", "toml"];

const MAX_THEME_ID_LEN: usize = 64;

/// Validation errors for user-supplied theme ids and record paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    InvalidThemeId { id: String, reason: String },
    InvalidRecordPath { path: String, reason: String },
    UnsupportedExtension { path: String },
}

impl RecordValidationError {
    pub fn user_message(&self) -> String {
        match self {
            RecordValidationError::InvalidThemeId { id, reason } => {
                format!(
                    "Invalid theme id: '{id}'\n\n\
                    Reason: {reason}\n\n\
                    Theme ids may contain letters, digits, hyphens and underscores."
                )
            }
            RecordValidationError::InvalidRecordPath { path, reason } => {
                format!(
                    "Invalid theme record path: '{path}'\n\n\
                    Reason: {reason}"
                )
            }
            RecordValidationError::UnsupportedExtension { path } => {
                format!(
                    "Unsupported theme record: '{path}'\n\n\
                    Expected one of: {}",
                    RECORD_EXTENSIONS.join(", ")
                )
            }
        }
    }
}

impl From<RecordValidationError> for AppError {
    fn from(error: RecordValidationError) -> Self {
        AppError::Validation(error.user_message())
    }
}

/// Validator for theme ids, which double as record file stems.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeIdValidator;

impl Validator<str> for ThemeIdValidator {
    type Error = RecordValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let invalid = |reason: &str| RecordValidationError::InvalidThemeId {
            id: input.to_string(),
            reason: reason.to_string(),
        };

        if input.is_empty() {
            return Err(invalid("Id cannot be empty"));
        }
        if input.len() > MAX_THEME_ID_LEN {
            return Err(invalid("Id too long (max 64 characters)"));
        }
        if !input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(invalid("Id contains invalid characters"));
        }
        if input.starts_with(['-', '_']) || input.ends_with(['-', '_']) {
            return Err(invalid("Id cannot start or end with hyphens or underscores"));
        }

        Ok(())
    }
}

/// Validator for record files given on the command line. Only the path is
/// inspected; whether the file exists is left to the read.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordPathValidator;

impl Validator<Path> for RecordPathValidator {
    type Error = RecordValidationError;

    fn validate(&self, input: &Path) -> Result<(), Self::Error> {
        if input.as_os_str().is_empty() {
            return Err(RecordValidationError::InvalidRecordPath {
                path: String::new(),
                reason: "Path cannot be empty".to_string(),
            });
        }
        if record_extension(input).is_none() {
            return Err(RecordValidationError::UnsupportedExtension {
                path: input.display().to_string(),
            });
        }
        Ok(())
    }
}

/// The lowercase record extension of `path`, if it is one the host reads.
pub fn record_extension(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    RECORD_EXTENSIONS
        .iter()
        .copied()
        .find(|known| *known == extension)
}
