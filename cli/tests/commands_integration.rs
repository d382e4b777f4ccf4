use claims::{assert_err, assert_ok};
use engine::apply::FallbackTier;
use engine::theme::DEFAULT_THEME_ID;
use engine::{ThemeError, ThemeSource, default_theme};
use prism::commands;
use prism::config::{AppConfig, ConfigLoadResult, load_config};
use prism::error::AppError;
use prism::loader::FileThemeSource;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// Helper module for file-backed command testing
mod command_helpers {
    use super::*;

    /// A themes directory with a JSON record, a TOML record and noise
    pub fn themes_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("ocean.json"),
            r##"{ "id": "ocean", "name": "Ocean", "colors": { "primary": "#0077BE" } }"##,
        )
        .unwrap();
        fs::write(
            dir.path().join("forest.toml"),
            "name = \"Forest\"\n\n[colors]\nprimary = \"#228B22\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "not a theme").unwrap();
        fs::write(dir.path().join("bad id.json"), "{}").unwrap();
        fs::write(dir.path().join("broken.json"), "{ nope").unwrap();
        dir
    }

    /// Config loaded from a `prism.toml` in `dir` naming `default_theme`
    pub fn config_with_default(dir: &Path, default_theme: &str) -> AppConfig {
        let config_path = dir.join("prism.toml");
        fs::write(
            &config_path,
            format!(
                "themes_dir = {:?}\ndefault_theme = \"{default_theme}\"\n",
                dir.display().to_string()
            ),
        )
        .unwrap();
        load_config(Some(&config_path)).into_result().unwrap()
    }

    pub fn config_for(dir: &Path) -> AppConfig {
        AppConfig::default().with_themes_dir(dir.to_path_buf())
    }
}

use command_helpers::*;

#[tokio::test]
async fn test_list_themes_in_registration_order() {
    let dir = themes_dir();
    let themes = commands::list_themes(&config_for(dir.path())).await.unwrap();

    let ids: Vec<&str> = themes.iter().map(|t| t.id.as_str()).collect();
    // The broken record is discovered but skipped when it fails to parse.
    assert_eq!(ids, vec![DEFAULT_THEME_ID, "forest", "ocean"]);
    assert!(themes[0].is_default);
    assert_eq!(themes[1].name, "Forest");
}

#[tokio::test]
async fn test_missing_themes_dir_lists_only_default() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir.path().join("absent"));

    let themes = commands::list_themes(&config).await.unwrap();
    assert_eq!(themes.len(), 1);
}

#[tokio::test]
async fn test_apply_renders_requested_theme() {
    let dir = themes_dir();
    let outcome = commands::apply_theme(&config_for(dir.path()), Some("forest"), None)
        .await
        .unwrap();

    assert_eq!(outcome.theme_id, "forest");
    assert_eq!(outcome.tier, FallbackTier::Resolved);
    assert!(outcome.stylesheet.contains("--theme-primary: #228B22;"));
    assert!(outcome.stylesheet.contains("--primary-rgb: 34, 139, 34;"));
    assert!(outcome.stylesheet.contains("@keyframes theme-fade-in"));
}

#[tokio::test]
async fn test_apply_unknown_theme_renders_default() {
    let dir = themes_dir();
    let outcome = commands::apply_theme(&config_for(dir.path()), Some("volcano"), None)
        .await
        .unwrap();

    assert_eq!(outcome.theme_id, DEFAULT_THEME_ID);
    assert!(outcome.stylesheet.contains("--theme-primary: #00F0FF;"));
}

#[tokio::test]
async fn test_apply_unknown_theme_renders_configured_default() {
    let dir = themes_dir();
    let config = config_with_default(dir.path(), "ocean");

    let outcome = commands::apply_theme(&config, Some("volcano"), None)
        .await
        .unwrap();

    assert_eq!(outcome.theme_id, "ocean");
    assert_eq!(outcome.tier, FallbackTier::Resolved);
    assert!(outcome.stylesheet.contains("--theme-primary: #0077BE;"));
}

#[tokio::test]
async fn test_apply_with_override_file() {
    let dir = themes_dir();
    let overrides = dir.path().join("override.json");
    fs::write(&overrides, r##"{ "colors": { "accent": "#ABCDEF" } }"##).unwrap();

    let outcome = commands::apply_theme(&config_for(dir.path()), Some("ocean"), Some(&overrides))
        .await
        .unwrap();

    assert_eq!(outcome.theme_id, "ocean");
    assert!(outcome.stylesheet.contains("--theme-accent: #ABCDEF;"));
    assert!(outcome.stylesheet.contains("--theme-primary: #0077BE;"));
}

#[tokio::test]
async fn test_apply_rejects_path_like_ids() {
    let dir = themes_dir();
    let err = assert_err!(commands::apply_theme(&config_for(dir.path()), Some("../etc"), None).await);
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_check_reports_repairs() {
    let dir = TempDir::new().unwrap();
    let complete = dir.path().join("complete.json");
    fs::write(&complete, serde_json::to_string(default_theme()).unwrap()).unwrap();
    let partial = dir.path().join("partial.json");
    fs::write(&partial, r##"{ "colors": { "primary": 42 } }"##).unwrap();

    let outcome = commands::check_record(&complete).await.unwrap();
    assert!(outcome.report.is_clean());

    let outcome = commands::check_record(&partial).await.unwrap();
    assert!(outcome.report.contains("colors.primary"));
    assert_eq!(outcome.theme.colors.primary, "#00F0FF");
}

#[tokio::test]
async fn test_check_rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let record = dir.path().join("theme.yaml");
    fs::write(&record, "id: x").unwrap();

    let err = assert_err!(commands::check_record(&record).await);
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn test_emergency_stylesheet() {
    let outcome = commands::emergency_stylesheet();
    assert_eq!(outcome.tier, FallbackTier::Emergency);
    assert!(outcome.stylesheet.contains("data-theme-fallback=\"emergency\""));
    assert!(outcome.stylesheet.contains("background-color: #000000 !important;"));
    assert!(outcome.stylesheet.contains("--theme-primary: #00FFFF;"));
}

#[tokio::test]
async fn test_write_output_to_file() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("theme.css");
    assert_ok!(commands::write_output(Some(&target), ":root {}\n").await);
    assert_eq!(fs::read_to_string(&target).unwrap(), ":root {}\n");
}

#[tokio::test]
async fn test_file_source_reports_parse_failures() {
    let dir = themes_dir();
    let source = FileThemeSource::new(dir.path());

    let err = assert_err!(source.fetch_theme("broken").await);
    assert!(matches!(err, ThemeError::Source { ref id, .. } if id == "broken"));

    let raw = assert_ok!(source.fetch_theme("forest").await);
    assert_eq!(raw["colors"]["primary"], "#228B22");
}

#[tokio::test]
async fn test_config_file_selects_default_theme() {
    let dir = themes_dir();
    let config_path = dir.path().join("prism.toml");
    fs::write(
        &config_path,
        format!(
            "themes_dir = {:?}\ndefault_theme = \"ocean\"\n\n[logging]\nlevel = \"debug\"\n",
            dir.path().display().to_string()
        ),
    )
    .unwrap();

    let config = match load_config(Some(&config_path)) {
        ConfigLoadResult::Success(config) => *config,
        other => panic!("config did not load: {other:?}"),
    };
    assert_eq!(config.default_theme(), "ocean");
    assert_eq!(config.logging().level(), "debug");

    let themes = commands::list_themes(&config).await.unwrap();
    let ocean = themes.iter().find(|t| t.id == "ocean").unwrap();
    assert!(ocean.is_default);

    let outcome = commands::apply_theme(&config, None, None).await.unwrap();
    assert_eq!(outcome.theme_id, "ocean");
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("prism.toml");
    fs::write(&config_path, "default_theme = \"no spaces allowed\"\n").unwrap();

    let result = load_config(Some(&config_path));
    assert!(matches!(result, ConfigLoadResult::ValidationError(ref errors) if errors.len() == 1));

    let err = assert_err!(result.into_result());
    assert!(err.to_string().contains("Default theme id is not valid"));
}

#[test]
fn test_missing_explicit_config_fails_to_load() {
    let result = load_config(Some(Path::new("/definitely/not/prism.toml")));
    assert!(matches!(result, ConfigLoadResult::LoadError(_)));
}
