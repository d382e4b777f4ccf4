//! The single boundary where an untrusted record becomes a [`Theme`].
//!
//! Validation walks the record alongside a template produced by serializing
//! the fallback theme. Leaves of the wrong kind take the fallback's value; a
//! subtree that is not an object is replaced as a whole, so a partially
//! typed branch never reaches the rest of the engine.

use crate::apply::keyframes::is_safe_keyframe;
use crate::color::is_hex_color;
use crate::error::ThemeError;
use crate::theme::builtin::default_theme;
use crate::theme::types::Theme;
use serde_json::{Map, Value};
use std::fmt;

/// The theme shape is at most five levels deep; anything past this is
/// treated as malformed.
pub const MAX_SCHEMA_DEPTH: usize = 6;

/// Paths whose object is a free-form name to string mapping rather than a
/// fixed set of fields.
const OPEN_MAP_PATHS: &[&str] = &["animation.keyframes"];

const ROOT_PATH: &str = "(root)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairKind {
    /// The value was absent or null.
    Missing,
    /// A leaf held a value of the wrong primitive kind.
    WrongType,
    /// An object slot held something other than an object.
    MalformedSubtree,
    /// A string leaf was empty or whitespace.
    Blank,
    /// The record nested deeper than the schema allows.
    DepthExceeded,
    /// A keyframe name or body that would break out of its rule.
    UnsafeKeyframe,
}

impl fmt::Display for RepairKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RepairKind::Missing => "missing",
            RepairKind::WrongType => "wrong type",
            RepairKind::MalformedSubtree => "malformed subtree",
            RepairKind::Blank => "blank",
            RepairKind::DepthExceeded => "nested too deeply",
            RepairKind::UnsafeKeyframe => "unsafe keyframe rule",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repair {
    pub path: String,
    pub kind: RepairKind,
}

/// Every substitution the validator made while producing a theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    repairs: Vec<Repair>,
}

impl ValidationReport {
    fn record(&mut self, path: &str, kind: RepairKind) {
        let path = if path.is_empty() { ROOT_PATH } else { path };
        self.repairs.push(Repair {
            path: path.to_string(),
            kind,
        });
    }

    pub fn is_clean(&self) -> bool {
        self.repairs.is_empty()
    }

    pub fn repairs(&self) -> &[Repair] {
        &self.repairs
    }

    pub fn len(&self) -> usize {
        self.repairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repairs.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.repairs.iter().any(|r| r.path == path)
    }

    /// The repairs expressed as structural errors, for callers that surface
    /// them to a user.
    pub fn errors(&self) -> Vec<ThemeError> {
        self.repairs
            .iter()
            .map(|r| ThemeError::StructuralValidation {
                path: r.path.clone(),
                reason: r.kind.to_string(),
            })
            .collect()
    }
}

/// Validator for raw theme records.
pub struct ThemeValidator<'a> {
    defaults: &'a Theme,
}

impl ThemeValidator<'static> {
    /// Validates against the built-in default theme.
    pub fn new() -> Self {
        Self {
            defaults: default_theme(),
        }
    }
}

impl Default for ThemeValidator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ThemeValidator<'a> {
    /// Validates against an arbitrary fallback theme.
    pub fn with_defaults(defaults: &'a Theme) -> Self {
        Self { defaults }
    }

    pub fn validate(&self, raw: &Value) -> Theme {
        let (theme, report) = self.validate_with_report(raw);
        if !report.is_clean() {
            log::debug!(
                "Theme '{}' validated with {} repaired field(s)",
                theme.id,
                report.len()
            );
            for repair in report.repairs() {
                log::trace!("Repaired {}: {}", repair.path, repair.kind);
            }
        }
        theme
    }

    pub fn validate_with_report(&self, raw: &Value) -> (Theme, ValidationReport) {
        let mut report = ValidationReport::default();

        let template = match serde_json::to_value(self.defaults) {
            Ok(template) => template,
            Err(e) => {
                log::error!("Failed to build validation template: {e}");
                report.record("", RepairKind::MalformedSubtree);
                return (self.defaults.clone(), report);
            }
        };

        let repaired = repair_node(Some(raw), &template, "", 0, &mut report);
        lint_colors(repaired.get("colors"), "colors");

        match serde_json::from_value::<Theme>(repaired) {
            Ok(theme) => (theme, report),
            Err(e) => {
                log::error!("Repaired theme did not match the schema, using defaults: {e}");
                report.record("", RepairKind::MalformedSubtree);
                (self.defaults.clone(), report)
            }
        }
    }
}

/// Validate a raw record against the built-in default theme.
pub fn validate(raw: &Value) -> Theme {
    ThemeValidator::new().validate(raw)
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn repair_node(
    raw: Option<&Value>,
    template: &Value,
    path: &str,
    depth: usize,
    report: &mut ValidationReport,
) -> Value {
    if depth > MAX_SCHEMA_DEPTH {
        report.record(path, RepairKind::DepthExceeded);
        return template.clone();
    }

    match template {
        Value::Object(fields) => {
            let raw_fields = match raw {
                Some(Value::Object(map)) => map,
                None | Some(Value::Null) => {
                    report.record(path, RepairKind::Missing);
                    return template.clone();
                }
                Some(_) => {
                    report.record(path, RepairKind::MalformedSubtree);
                    return template.clone();
                }
            };

            if OPEN_MAP_PATHS.contains(&path) {
                return repair_open_map(raw_fields, fields, path, report);
            }

            let repaired = fields
                .iter()
                .map(|(key, child)| {
                    let child_path = join(path, key);
                    let raw_child = raw_fields.get(key);
                    let value = repair_node(raw_child, child, &child_path, depth + 1, report);
                    (key.clone(), value)
                })
                .collect::<Map<String, Value>>();
            Value::Object(repaired)
        }
        Value::String(_) => match raw {
            Some(Value::String(s)) if !s.trim().is_empty() => Value::String(s.clone()),
            Some(Value::String(_)) => {
                report.record(path, RepairKind::Blank);
                template.clone()
            }
            None | Some(Value::Null) => {
                report.record(path, RepairKind::Missing);
                template.clone()
            }
            Some(_) => {
                report.record(path, RepairKind::WrongType);
                template.clone()
            }
        },
        // An optional slot the fallback leaves empty.
        Value::Null => match raw {
            Some(Value::String(s)) if !s.trim().is_empty() => Value::String(s.clone()),
            None | Some(Value::Null) => Value::Null,
            Some(Value::String(_)) => {
                report.record(path, RepairKind::Blank);
                Value::Null
            }
            Some(_) => {
                report.record(path, RepairKind::WrongType);
                Value::Null
            }
        },
        _ => template.clone(),
    }
}

fn repair_open_map(
    raw_fields: &Map<String, Value>,
    defaults: &Map<String, Value>,
    path: &str,
    report: &mut ValidationReport,
) -> Value {
    let mut merged = defaults.clone();
    for (name, value) in raw_fields {
        match value {
            Value::String(body) if body.trim().is_empty() => {
                report.record(&join(path, name), RepairKind::Blank)
            }
            Value::String(body) if !is_safe_keyframe(name, body) => {
                report.record(&join(path, name), RepairKind::UnsafeKeyframe)
            }
            Value::String(body) => {
                merged.insert(name.clone(), Value::String(body.clone()));
            }
            _ => report.record(&join(path, name), RepairKind::WrongType),
        }
    }
    Value::Object(merged)
}

/// Colors are kept even when they are not hex (rgba and named colors are
/// legal values), but derived variables will fall back for them.
fn lint_colors(node: Option<&Value>, path: &str) {
    match node {
        Some(Value::String(value)) if !is_hex_color(value) => {
            log::debug!("Color at {path} is not a hex value: '{value}'");
        }
        Some(Value::Object(map)) => {
            for (key, child) in map {
                lint_colors(Some(child), &join(path, key));
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_record_yields_defaults() {
        let (theme, report) = ThemeValidator::new().validate_with_report(&json!({}));
        assert_eq!(&theme, default_theme());
        assert!(report.contains("colors"));
        assert!(report.contains("id"));
    }

    #[test]
    fn test_non_object_record_is_replaced() {
        let (theme, report) = ThemeValidator::new().validate_with_report(&json!("theme"));
        assert_eq!(&theme, default_theme());
        assert_eq!(report.repairs()[0].path, ROOT_PATH);
        assert_eq!(report.repairs()[0].kind, RepairKind::MalformedSubtree);
    }

    #[test]
    fn test_valid_leaves_are_kept() {
        let theme = validate(&json!({
            "id": "ocean",
            "colors": { "primary": "#0077BE", "background": { "main": "#001F3F" } },
            "typography": { "sizes": { "2xl": "2rem" }, "lineHeights": { "tight": "1.1" } }
        }));

        assert_eq!(theme.id, "ocean");
        assert_eq!(theme.colors.primary, "#0077BE");
        assert_eq!(theme.colors.background.main, "#001F3F");
        assert_eq!(theme.colors.background.card, default_theme().colors.background.card);
        assert_eq!(theme.typography.sizes.xxl, "2rem");
        assert_eq!(theme.typography.line_heights.tight, "1.1");
    }

    #[test]
    fn test_malformed_subtree_is_replaced_wholesale() {
        let (theme, report) = ThemeValidator::new().validate_with_report(&json!({
            "colors": "red",
            "effects": { "glow": ["0 0 4px red"] }
        }));

        assert_eq!(theme.colors, default_theme().colors);
        assert_eq!(theme.effects.glow, default_theme().effects.glow);
        assert!(report
            .repairs()
            .iter()
            .any(|r| r.path == "colors" && r.kind == RepairKind::MalformedSubtree));
        assert!(report
            .repairs()
            .iter()
            .any(|r| r.path == "effects.glow" && r.kind == RepairKind::MalformedSubtree));
    }

    #[test]
    fn test_wrong_typed_and_blank_leaves_take_defaults() {
        let (theme, report) = ThemeValidator::new().validate_with_report(&json!({
            "colors": { "primary": 42, "secondary": "   ", "accent": null }
        }));

        let defaults = default_theme();
        assert_eq!(theme.colors.primary, defaults.colors.primary);
        assert_eq!(theme.colors.secondary, defaults.colors.secondary);
        assert_eq!(theme.colors.accent, defaults.colors.accent);

        let kind_of = |path: &str| report.repairs().iter().find(|r| r.path == path).map(|r| r.kind);
        assert_eq!(kind_of("colors.primary"), Some(RepairKind::WrongType));
        assert_eq!(kind_of("colors.secondary"), Some(RepairKind::Blank));
        assert_eq!(kind_of("colors.accent"), Some(RepairKind::Missing));
    }

    #[test]
    fn test_optional_component_slots() {
        let theme = validate(&json!({
            "components": {
                "button": { "background": "#222222", "transition": 5 },
                "panel": { "background": null }
            }
        }));

        assert_eq!(theme.components.button.background.as_deref(), Some("#222222"));
        // Default provides the transition, so the wrong-typed value falls back to it.
        assert_eq!(
            theme.components.button.transition,
            default_theme().components.button.transition
        );
        assert_eq!(
            theme.components.panel.background,
            default_theme().components.panel.background
        );
        assert_eq!(theme.components.panel.transition, None);
    }

    #[test]
    fn test_keyframes_are_an_open_map() {
        let (theme, report) = ThemeValidator::new().validate_with_report(&json!({
            "animation": { "keyframes": {
                "wobble": "0% { rotate: 0deg; } 100% { rotate: 5deg; }",
                "broken": 12
            } }
        }));

        let keyframes = &theme.animation.keyframes;
        assert!(keyframes.contains_key("wobble"));
        assert!(keyframes.contains_key("shimmer"));
        assert!(!keyframes.contains_key("broken"));
        assert!(report.contains("animation.keyframes.broken"));
    }

    #[test]
    fn test_unsafe_keyframe_names_are_dropped() {
        let (theme, report) = ThemeValidator::new().validate_with_report(&json!({
            "animation": { "keyframes": {
                "spin} body {": "to { rotate: 1turn; }",
                "drip": "to { opacity: 0; } }"
            } }
        }));

        assert_eq!(theme.animation.keyframes.len(), default_theme().animation.keyframes.len());
        let unsafe_paths: Vec<&str> = report
            .repairs()
            .iter()
            .filter(|r| r.kind == RepairKind::UnsafeKeyframe)
            .map(|r| r.path.as_str())
            .collect();
        assert_eq!(unsafe_paths.len(), 2);
        assert!(report.contains("animation.keyframes.drip"));
    }

    #[test]
    fn test_custom_defaults() {
        let mut fallback = default_theme().clone();
        fallback.colors.primary = "#123456".to_string();

        let theme = ThemeValidator::with_defaults(&fallback).validate(&json!({ "colors": {} }));
        assert_eq!(theme.colors.primary, "#123456");
    }

    #[test]
    fn test_report_errors_are_structural() {
        let (_, report) = ThemeValidator::new().validate_with_report(&json!({ "name": 1 }));
        let errors = report.errors();
        assert!(errors.contains(&ThemeError::StructuralValidation {
            path: "name".to_string(),
            reason: "wrong type".to_string(),
        }));
    }
}
