use engine::ThemeError;
use std::fmt::Display;

/// Application-wide error types for the `prism` command-line host.
///
/// # Error Categories
///
/// - [`Config`] - configuration loading and validation errors
/// - [`Io`] - reading theme records or writing stylesheets
/// - [`Theme`] - failures reported by the theme engine
/// - [`Validation`] - user input (theme ids, record paths) that was rejected
///
/// The engine recovers from most of its own failures, so [`Theme`] mostly
/// carries errors from the fetch seam and from strict commands such as
/// `prism check`.
///
/// [`Config`]: AppError::Config
/// [`Io`]: AppError::Io
/// [`Theme`]: AppError::Theme
/// [`Validation`]: AppError::Validation
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Config(String),

    Io(String),

    Theme(String),

    Validation(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Io(msg) => write!(f, "IO Error: {msg}"),
            AppError::Theme(msg) => write!(f, "Theme Error: {msg}"),
            AppError::Validation(msg) => write!(f, "Validation Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ThemeError> for AppError {
    fn from(err: ThemeError) -> Self {
        AppError::Theme(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
