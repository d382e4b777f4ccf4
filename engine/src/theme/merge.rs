use crate::theme::types::Theme;
use crate::theme::validation::{MAX_SCHEMA_DEPTH, ThemeValidator};
use serde_json::Value;
use thiserror::Error;

/// Why a merge fell back to the base theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("override is not an object")]
    NotAnObject,
    #[error("override nests too deeply at '{path}'")]
    TooDeep { path: String },
    #[error("failed to serialize base theme: {0}")]
    Serialize(String),
}

/// Merge `overrides` into `target` in place.
///
/// When both sides of a key are objects the merge recurses; any other value
/// (including arrays) replaces the target's value wholesale. Keys missing
/// from `overrides` are left alone.
pub fn merge_values(target: &mut Value, overrides: &Value) -> Result<(), MergeError> {
    merge_at(target, overrides, "", 0)
}

fn merge_at(
    target: &mut Value,
    overrides: &Value,
    path: &str,
    depth: usize,
) -> Result<(), MergeError> {
    if depth > MAX_SCHEMA_DEPTH {
        return Err(MergeError::TooDeep {
            path: path.to_string(),
        });
    }

    match (target, overrides) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, patch_value) in patch {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                let both_objects = patch_value.is_object()
                    && base.get(key).is_some_and(Value::is_object);
                if !both_objects {
                    base.insert(key.clone(), patch_value.clone());
                } else if let Some(base_value) = base.get_mut(key) {
                    merge_at(base_value, patch_value, &child_path, depth + 1)?;
                }
            }
            Ok(())
        }
        (target, patch) => {
            *target = patch.clone();
            Ok(())
        }
    }
}

/// Produce a new theme from `base` with `overrides` applied.
///
/// Neither input is modified. If the merge cannot be carried out the base
/// is returned unchanged; a leaf the override sets to the wrong kind keeps
/// the base's value.
pub fn merge_themes(base: &Theme, overrides: &Value) -> Theme {
    match try_merge_themes(base, overrides) {
        Ok(theme) => theme,
        Err(e) => {
            log::warn!("Theme merge onto '{}' failed, keeping base: {e}", base.id);
            base.clone()
        }
    }
}

fn try_merge_themes(base: &Theme, overrides: &Value) -> Result<Theme, MergeError> {
    let patch = match overrides {
        Value::Object(patch) => patch,
        Value::Null => return Ok(base.clone()),
        _ => return Err(MergeError::NotAnObject),
    };
    if patch.is_empty() {
        return Ok(base.clone());
    }

    let mut tree = serde_json::to_value(base).map_err(|e| MergeError::Serialize(e.to_string()))?;
    merge_values(&mut tree, overrides)?;

    Ok(ThemeValidator::with_defaults(base).validate(&tree))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::builtin::default_theme;
    use claims::assert_err;
    use serde_json::json;

    #[test]
    fn test_empty_override_returns_equal_theme() {
        let base = default_theme();
        assert_eq!(&merge_themes(base, &json!({})), base);
        assert_eq!(&merge_themes(base, &Value::Null), base);
    }

    #[test]
    fn test_nested_override_keeps_siblings() {
        let base = default_theme();
        let merged = merge_themes(
            base,
            &json!({ "colors": { "background": { "main": "#101010" } }, "name": "Dim" }),
        );

        assert_eq!(merged.name, "Dim");
        assert_eq!(merged.colors.background.main, "#101010");
        assert_eq!(merged.colors.background.card, base.colors.background.card);
        assert_eq!(merged.colors.primary, base.colors.primary);
        assert_eq!(merged.typography, base.typography);
    }

    #[test]
    fn test_base_is_not_mutated() {
        let base = default_theme().clone();
        let snapshot = base.clone();
        let _ = merge_themes(&base, &json!({ "colors": { "primary": "#000000" } }));
        assert_eq!(base, snapshot);
    }

    #[test]
    fn test_wrong_typed_override_keeps_base_value() {
        let mut base = default_theme().clone();
        base.colors.primary = "#ABCDEF".to_string();

        let overrides = json!({ "colors": { "primary": 7, "accent": "#111111" } });
        let merged = merge_themes(&base, &overrides);
        assert_eq!(merged.colors.primary, "#ABCDEF");
        assert_eq!(merged.colors.accent, "#111111");
    }

    #[test]
    fn test_object_replaced_by_scalar_falls_back_to_base_subtree() {
        let base = default_theme();
        let merged = merge_themes(base, &json!({ "effects": "none" }));
        assert_eq!(merged.effects, base.effects);
    }

    #[test]
    fn test_non_object_override_returns_base() {
        let base = default_theme();
        assert_eq!(&merge_themes(base, &json!(["colors"])), base);
        assert_eq!(&merge_themes(base, &json!("dark")), base);
    }

    #[test]
    fn test_arrays_replace_wholesale() {
        let mut target = json!({ "stops": [1, 2, 3], "nested": { "a": 1, "b": 2 } });
        merge_values(&mut target, &json!({ "stops": [9], "nested": { "b": 3 } })).unwrap();
        assert_eq!(target, json!({ "stops": [9], "nested": { "a": 1, "b": 3 } }));
    }

    #[test]
    fn test_depth_limit() {
        let mut deep = json!("leaf");
        for _ in 0..(MAX_SCHEMA_DEPTH + 3) {
            deep = json!({ "n": deep });
        }
        let mut target = deep.clone();
        assert_err!(merge_values(&mut target, &deep));
    }
}
