use crate::error::{ThemeError, ThemeResult};
use crate::theme::builtin::{DEFAULT_THEME_ID, default_theme};
use crate::theme::types::{Theme, ThemeInput};
use crate::theme::validation::validate;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Named themes plus the default and active pointers.
///
/// A registry always holds at least one theme: construction seeds the
/// default, and nothing removes themes afterwards. Lookups of unknown ids
/// degrade to the default instead of failing.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: HashMap<String, Arc<Theme>>,
    order: Vec<String>,
    default_id: String,
    active_id: Option<String>,
}

impl ThemeRegistry {
    /// A registry seeded with the built-in default theme.
    pub fn new() -> Self {
        Self::with_default(DEFAULT_THEME_ID, default_theme().clone())
    }

    /// A registry seeded with `input` as its first (and default) theme.
    pub fn with_default(id: &str, input: impl Into<ThemeInput>) -> Self {
        let theme = resolve_input(id, input.into());
        let mut themes = HashMap::new();
        themes.insert(id.to_string(), Arc::new(theme));

        Self {
            themes,
            order: vec![id.to_string()],
            default_id: id.to_string(),
            active_id: None,
        }
    }

    /// Store a theme under `id`, validating raw records first.
    ///
    /// Re-registering an id replaces its theme and keeps its position in
    /// [`get_all_themes`](Self::get_all_themes).
    pub fn register_theme(&mut self, id: &str, input: impl Into<ThemeInput>) -> Arc<Theme> {
        let theme = Arc::new(resolve_input(id, input.into()));

        if self.themes.insert(id.to_string(), Arc::clone(&theme)).is_some() {
            log::info!("Replacing registered theme '{id}'");
        } else {
            log::debug!("Registered theme '{id}'");
            self.order.push(id.to_string());
        }

        theme
    }

    /// The theme registered under `id`, or the default when there is none.
    pub fn get_theme(&self, id: &str) -> Arc<Theme> {
        match self.try_get(id) {
            Ok(theme) => theme,
            Err(e) => {
                log::warn!("{e}, falling back to default theme '{}'", self.default_id);
                self.get_default_theme()
            }
        }
    }

    pub fn try_get(&self, id: &str) -> ThemeResult<Arc<Theme>> {
        self.themes
            .get(id)
            .cloned()
            .ok_or_else(|| ThemeError::registry_miss(id))
    }

    pub fn get_default_theme(&self) -> Arc<Theme> {
        match self.themes.get(&self.default_id) {
            Some(theme) => Arc::clone(theme),
            // Unreachable while the default id always points at a stored theme.
            None => {
                log::error!("Default theme '{}' missing from registry", self.default_id);
                Arc::new(default_theme().clone())
            }
        }
    }

    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    pub fn set_default_theme(&mut self, id: &str) -> ThemeResult<()> {
        if !self.contains(id) {
            log::warn!("Cannot make unknown theme '{id}' the default");
            return Err(ThemeError::registry_miss(id));
        }
        log::info!("Default theme changed to '{id}'");
        self.default_id = id.to_string();
        Ok(())
    }

    pub fn set_active(&mut self, id: &str) -> ThemeResult<()> {
        if !self.contains(id) {
            log::warn!("Cannot activate unknown theme '{id}'");
            return Err(ThemeError::registry_miss(id));
        }
        self.active_id = Some(id.to_string());
        Ok(())
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// The active theme, or the default when none has been activated.
    pub fn active_theme(&self) -> Arc<Theme> {
        match &self.active_id {
            Some(id) => self.get_theme(id),
            None => self.get_default_theme(),
        }
    }

    /// Snapshot of every theme in registration order.
    pub fn get_all_themes(&self) -> Vec<Arc<Theme>> {
        self.order
            .iter()
            .filter_map(|id| self.themes.get(id).cloned())
            .collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.themes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn has_own_id(raw: &Value) -> bool {
    raw.get("id")
        .and_then(Value::as_str)
        .is_some_and(|id| !id.trim().is_empty())
}

fn resolve_input(id: &str, input: ThemeInput) -> Theme {
    match input {
        ThemeInput::Resolved(theme) => theme,
        ThemeInput::Raw(raw) => {
            let mut theme = validate(&raw);
            if !has_own_id(&raw) {
                theme.id = id.to_string();
            }
            theme
        }
    }
}
