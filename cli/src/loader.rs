use crate::error::{AppError, AppResult};
use crate::validation::{
    RecordPathValidator, RecordValidationError, ThemeIdValidator, Validator, record_extension,
};
use async_trait::async_trait;
use engine::{ThemeError, ThemeRegistry, ThemeResult, ThemeSource};
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};

/// Theme source backed by a directory of `<id>.json` / `<id>.toml` records.
pub struct FileThemeSource {
    themes_dir: PathBuf,
    id_validator: ThemeIdValidator,
}

impl FileThemeSource {
    pub fn new(themes_dir: impl Into<PathBuf>) -> Self {
        Self {
            themes_dir: themes_dir.into(),
            id_validator: ThemeIdValidator,
        }
    }

    pub fn themes_dir(&self) -> &Path {
        &self.themes_dir
    }

    /// Path of the record for `id`. JSON wins when both formats exist.
    pub async fn record_path(&self, id: &str) -> AppResult<PathBuf> {
        self.id_validator.validate(id)?;

        for extension in ["json", "toml"] {
            let path = self.themes_dir.join(format!("{id}.{extension}"));
            if tokio::fs::try_exists(&path).await.unwrap_or(false) {
                return Ok(path);
            }
        }

        Err(AppError::Io(format!(
            "No record for theme '{id}' in '{}'",
            self.themes_dir.display()
        )))
    }

    /// Ids of every readable record in the directory, sorted. A missing
    /// directory has no themes.
    pub async fn discover(&self) -> AppResult<Vec<String>> {
        if !tokio::fs::try_exists(&self.themes_dir).await.unwrap_or(false) {
            log::debug!(
                "Themes directory '{}' does not exist",
                self.themes_dir.display()
            );
            return Ok(Vec::new());
        }

        let mut entries = tokio::fs::read_dir(&self.themes_dir).await.map_err(|e| {
            AppError::Io(format!(
                "Failed to read themes directory '{}': {e}",
                self.themes_dir.display()
            ))
        })?;

        let mut ids = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| AppError::Io(format!("Failed to read directory entry: {e}")))?
        {
            let path = entry.path();
            if record_extension(&path).is_none() {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if self.id_validator.validate(id).is_ok() && !ids.iter().any(|known| known == id) {
                ids.push(id.to_string());
            }
        }

        ids.sort();
        Ok(ids)
    }

    /// Fetch and register every discovered record. Records that fail to load
    /// are skipped with a warning.
    pub async fn load_all(&self, registry: &mut ThemeRegistry) -> AppResult<usize> {
        let mut loaded = 0;
        for id in self.discover().await? {
            match self.fetch_theme(&id).await {
                Ok(raw) => {
                    registry.register_theme(&id, raw);
                    loaded += 1;
                }
                Err(e) => log::warn!("Skipping theme record: {e}"),
            }
        }
        log::info!(
            "Loaded {loaded} theme(s) from '{}'",
            self.themes_dir.display()
        );
        Ok(loaded)
    }
}

#[async_trait]
impl ThemeSource for FileThemeSource {
    async fn fetch_theme(&self, id: &str) -> ThemeResult<Value> {
        let source_error = |reason: String| ThemeError::Source {
            id: id.to_string(),
            reason,
        };

        let path = self
            .record_path(id)
            .await
            .map_err(|e| source_error(e.to_string()))?;
        read_record(&path)
            .await
            .map_err(|e| source_error(e.to_string()))
    }
}

/// Read a JSON or TOML record into a raw value without interpreting it.
pub async fn read_record(path: &Path) -> AppResult<Value> {
    RecordPathValidator.validate(path)?;

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(RecordValidationError::InvalidRecordPath {
                path: path.display().to_string(),
                reason: "File does not exist".to_string(),
            }
            .into());
        }
        Err(e) => {
            return Err(AppError::Io(format!(
                "Failed to read theme record '{}': {e}",
                path.display()
            )));
        }
    };

    parse_record(path, &content)
}

pub fn parse_record(path: &Path, content: &str) -> AppResult<Value> {
    let parse_error = |e: &dyn std::fmt::Display| {
        AppError::Validation(format!(
            "Failed to parse theme record '{}': {e}",
            path.display()
        ))
    };

    match record_extension(path) {
        Some("toml") => toml::from_str::<Value>(content).map_err(|e| parse_error(&e)),
        Some(_) => serde_json::from_str::<Value>(content).map_err(|e| parse_error(&e)),
        None => Err(AppError::Validation(format!(
            "Unsupported theme record '{}'",
            path.display()
        ))),
    }
}
