use crate::config::AppConfig;
use crate::css::render_stylesheet;
use crate::error::{AppError, AppResult};
use crate::loader::{FileThemeSource, read_record};
use crate::validation::{ThemeIdValidator, Validator};
use engine::apply::FallbackTier;
use engine::theme::validation::ValidationReport;
use engine::theme::{DEFAULT_THEME_ID, ThemeValidator};
use engine::{MemoryStyleSink, Theme, ThemeManager, ThemeRegistry, ThemeSource};
use std::path::Path;

/// One line of `prism list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSummary {
    pub id: String,
    pub name: String,
    pub version: String,
    pub is_default: bool,
}

/// Result of `prism check`.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub theme: Theme,
    pub report: ValidationReport,
}

/// Result of `prism apply` and `prism emergency`.
#[derive(Debug, Clone)]
pub struct ApplyOutcome {
    pub theme_id: String,
    pub tier: FallbackTier,
    pub stylesheet: String,
}

/// Registry with every record in the themes directory and the configured
/// default.
pub async fn load_registry(config: &AppConfig) -> AppResult<ThemeRegistry> {
    let source = FileThemeSource::new(config.themes_dir());
    let mut registry = ThemeRegistry::new();
    source.load_all(&mut registry).await?;
    select_default(&mut registry, config.default_theme());
    Ok(registry)
}

fn select_default(registry: &mut ThemeRegistry, id: &str) {
    if id == DEFAULT_THEME_ID {
        return;
    }
    if let Err(e) = registry.set_default_theme(id) {
        log::warn!("Configured default theme unavailable: {e}");
    }
}

pub async fn list_themes(config: &AppConfig) -> AppResult<Vec<ThemeSummary>> {
    let registry = load_registry(config).await?;
    let default_id = registry.default_id().to_string();

    Ok(registry
        .ids()
        .map(|id| {
            let theme = registry.get_theme(id);
            ThemeSummary {
                id: id.to_string(),
                name: theme.name.clone(),
                version: theme.version.clone(),
                is_default: id == default_id,
            }
        })
        .collect())
}

/// Validate a record file and report every repair the validator made.
pub async fn check_record(path: &Path) -> AppResult<CheckOutcome> {
    let raw = read_record(path).await?;
    let (theme, report) = ThemeValidator::new().validate_with_report(&raw);
    Ok(CheckOutcome { theme, report })
}

/// Resolve `id` (or the configured default) through the themes directory,
/// layer optional overrides on it and render the result.
pub async fn apply_theme(
    config: &AppConfig,
    id: Option<&str>,
    overrides: Option<&Path>,
) -> AppResult<ApplyOutcome> {
    let id = id.unwrap_or(config.default_theme());
    ThemeIdValidator.validate(id)?;

    let source = FileThemeSource::new(config.themes_dir());
    let mut manager = ThemeManager::new(MemoryStyleSink::new());

    let default_id = config.default_theme();
    if default_id != DEFAULT_THEME_ID && default_id != id {
        match source.fetch_theme(default_id).await {
            Ok(raw) => {
                manager.register_theme(default_id, raw);
                select_default(manager.registry_mut(), default_id);
            }
            Err(e) => log::warn!("{e}"),
        }
    }
    let mut report = manager.load_and_apply(&source, id).await;
    if default_id == id {
        select_default(manager.registry_mut(), default_id);
    }

    if let Some(path) = overrides {
        let raw = read_record(path).await?;
        report = manager.apply_with_overrides(id, &raw);
    }

    let tier = if manager.validate_applied_variables() {
        FallbackTier::Resolved
    } else {
        manager.apply_with_recovery(id)
    };

    Ok(ApplyOutcome {
        theme_id: report.theme_id,
        tier,
        stylesheet: render_stylesheet(manager.sink()),
    })
}

/// Render the emergency property set on its own.
pub fn emergency_stylesheet() -> ApplyOutcome {
    let mut manager = ThemeManager::new(MemoryStyleSink::new());
    let report = manager.apply_emergency_fallback();
    ApplyOutcome {
        theme_id: report.theme_id,
        tier: FallbackTier::Emergency,
        stylesheet: render_stylesheet(manager.sink()),
    }
}

/// Write `content` to `path`, or to stdout when there is no path.
pub async fn write_output(path: Option<&Path>, content: &str) -> AppResult<()> {
    match path {
        Some(path) => tokio::fs::write(path, content).await.map_err(|e| {
            AppError::Io(format!("Failed to write '{}': {e}", path.display()))
        }),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}
