use thiserror::Error;

/// Failures that can occur while resolving and applying a theme.
///
/// None of these escape the engine's public query surface. Each variant has a
/// documented recovery path:
///
/// - [`StructuralValidation`] - the record shape is wrong; the validator
///   substitutes the default subtree or leaf.
/// - [`Conversion`] - a color string could not be parsed; the converter
///   returns its neutral fallback.
/// - [`ApplicationFailure`] - the style sink rejected a write; the
///   applicator logs it and keeps writing.
/// - [`RegistryMiss`] - an unknown theme id was requested; the registry
///   answers with its default theme.
/// - [`Source`] - the persistence collaborator could not produce a record;
///   the manager applies what the registry already holds.
///
/// [`StructuralValidation`]: ThemeError::StructuralValidation
/// [`Conversion`]: ThemeError::Conversion
/// [`ApplicationFailure`]: ThemeError::ApplicationFailure
/// [`RegistryMiss`]: ThemeError::RegistryMiss
/// [`Source`]: ThemeError::Source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("Invalid theme structure at '{path}': {reason}")]
    StructuralValidation { path: String, reason: String },

    #[error("Invalid color value: '{input}'")]
    Conversion { input: String },

    #[error("Failed to write style property '{property}': {reason}")]
    ApplicationFailure { property: String, reason: String },

    #[error("Theme '{id}' is not registered")]
    RegistryMiss { id: String },

    #[error("Failed to fetch theme '{id}': {reason}")]
    Source { id: String, reason: String },
}

impl ThemeError {
    pub fn registry_miss(id: &str) -> Self {
        ThemeError::RegistryMiss { id: id.to_string() }
    }

    pub fn application_failure(property: &str, reason: impl Into<String>) -> Self {
        ThemeError::ApplicationFailure {
            property: property.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for engine operations
pub type ThemeResult<T> = Result<T, ThemeError>;
