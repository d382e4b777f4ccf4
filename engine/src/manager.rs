use crate::apply::fallback::{self, FallbackTier};
use crate::apply::keyframes::apply_keyframes;
use crate::apply::sink::{MemoryStyleSink, StyleSink};
use crate::apply::variables::{self, ApplyReport};
use crate::error::ThemeResult;
use crate::theme::builtin::default_theme;
use crate::theme::merge::merge_themes;
use crate::theme::registry::ThemeRegistry;
use crate::theme::types::{Theme, ThemeInput};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// What to apply: a registered id or an already resolved theme.
#[derive(Debug, Clone, Copy)]
pub enum ThemeSelector<'a> {
    Id(&'a str),
    Theme(&'a Theme),
}

impl<'a> From<&'a str> for ThemeSelector<'a> {
    fn from(id: &'a str) -> Self {
        ThemeSelector::Id(id)
    }
}

impl<'a> From<&'a String> for ThemeSelector<'a> {
    fn from(id: &'a String) -> Self {
        ThemeSelector::Id(id)
    }
}

impl<'a> From<&'a Theme> for ThemeSelector<'a> {
    fn from(theme: &'a Theme) -> Self {
        ThemeSelector::Theme(theme)
    }
}

/// Persistence collaborator that produces raw theme records by id.
#[async_trait]
pub trait ThemeSource: Send + Sync {
    async fn fetch_theme(&self, id: &str) -> ThemeResult<Value>;
}

/// Fetch the record for `id` from `source` without touching any manager.
///
/// Several fetches can be in flight at once; hand each result to
/// [`ThemeManager::apply_fetched`] as it completes and the last one applied
/// wins.
pub async fn fetch_record<T>(source: &T, id: &str) -> ThemeResult<Value>
where
    T: ThemeSource + ?Sized,
{
    source.fetch_theme(id).await
}

/// Ties a [`ThemeRegistry`] to the [`StyleSink`] its themes are applied to.
///
/// Every operation on the manager is synchronous behind `&mut self`, so a
/// resolve-merge-apply sequence cannot interleave with another. Fetching is
/// the only awaited step and happens outside the manager, see
/// [`fetch_record`].
#[derive(Debug)]
pub struct ThemeManager<S: StyleSink = MemoryStyleSink> {
    registry: ThemeRegistry,
    sink: S,
}

impl<S: StyleSink> ThemeManager<S> {
    pub fn new(sink: S) -> Self {
        Self::with_registry(ThemeRegistry::new(), sink)
    }

    pub fn with_registry(registry: ThemeRegistry, sink: S) -> Self {
        Self { registry, sink }
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ThemeRegistry {
        &mut self.registry
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn register_theme(&mut self, id: &str, input: impl Into<ThemeInput>) -> Arc<Theme> {
        self.registry.register_theme(id, input)
    }

    pub fn get_theme(&self, id: &str) -> Arc<Theme> {
        self.registry.get_theme(id)
    }

    pub fn get_default_theme(&self) -> Arc<Theme> {
        self.registry.get_default_theme()
    }

    pub fn get_all_themes(&self) -> Vec<Arc<Theme>> {
        self.registry.get_all_themes()
    }

    /// Resolve `selector` and write it onto the sink, variables first and
    /// then the keyframe block.
    ///
    /// An unknown id applies the registry default and marks it active.
    pub fn apply_theme<'a>(&mut self, selector: impl Into<ThemeSelector<'a>>) -> ApplyReport {
        let theme = self.resolve(selector.into());
        self.write(&theme)
    }

    /// Apply `selector` with a partial record merged over it. The registered
    /// theme is left untouched.
    pub fn apply_with_overrides<'a>(
        &mut self,
        selector: impl Into<ThemeSelector<'a>>,
        overrides: &Value,
    ) -> ApplyReport {
        let base = self.resolve(selector.into());
        let merged = merge_themes(&base, overrides);
        self.write(&merged)
    }

    /// Apply the hardcoded default theme, ignoring whatever the registry
    /// holds as its default.
    pub fn apply_builtin_default(&mut self) -> ApplyReport {
        self.write(default_theme())
    }

    pub fn apply_emergency_fallback(&mut self) -> ApplyReport {
        fallback::apply_emergency_fallback(&mut self.sink)
    }

    pub fn validate_applied_variables(&self) -> bool {
        fallback::validate_applied_variables(&self.sink)
    }

    pub fn assert_theme_applied(&mut self) -> bool {
        fallback::assert_theme_applied(&mut self.sink)
    }

    /// Apply `selector` and escalate through the fallback tiers until the
    /// critical variables read back. Returns the tier that ended up applied.
    pub fn apply_with_recovery<'a>(
        &mut self,
        selector: impl Into<ThemeSelector<'a>>,
    ) -> FallbackTier {
        self.apply_theme(selector);
        if self.validate_applied_variables() {
            return FallbackTier::Resolved;
        }

        log::warn!("Requested theme did not apply cleanly, trying built-in default");
        self.apply_builtin_default();
        if self.validate_applied_variables() {
            return FallbackTier::BuiltinDefault;
        }

        self.apply_emergency_fallback();
        FallbackTier::Emergency
    }

    /// Register a fetched record for `id` and apply it.
    ///
    /// A failed fetch is logged and whatever the registry already resolves
    /// `id` to is applied instead.
    pub fn apply_fetched(&mut self, id: &str, fetched: ThemeResult<Value>) -> ApplyReport {
        match fetched {
            Ok(raw) => {
                self.registry.register_theme(id, raw);
            }
            Err(e) => log::warn!("{e}, applying registered theme instead"),
        }
        self.apply_theme(ThemeSelector::Id(id))
    }

    /// Fetch, register and apply `id` in one step.
    ///
    /// The manager stays borrowed for the whole fetch, so loads through this
    /// method run one after another. Use [`fetch_record`] with
    /// [`ThemeManager::apply_fetched`] to keep several fetches in flight.
    pub async fn load_and_apply<T>(&mut self, source: &T, id: &str) -> ApplyReport
    where
        T: ThemeSource + ?Sized,
    {
        let fetched = fetch_record(source, id).await;
        self.apply_fetched(id, fetched)
    }

    fn resolve(&mut self, selector: ThemeSelector<'_>) -> Arc<Theme> {
        match selector {
            ThemeSelector::Theme(theme) => Arc::new(theme.clone()),
            ThemeSelector::Id(id) => {
                let theme = self.registry.get_theme(id);
                let active = if self.registry.contains(id) {
                    id.to_string()
                } else {
                    self.registry.default_id().to_string()
                };
                if let Err(e) = self.registry.set_active(&active) {
                    log::error!("{e}");
                }
                theme
            }
        }
    }

    fn write(&mut self, theme: &Theme) -> ApplyReport {
        let mut report = variables::apply_theme(&mut self.sink, theme);
        if let Err(e) = apply_keyframes(&mut self.sink, theme) {
            report.failures.push(e);
        }
        report
    }
}

impl Default for ThemeManager<MemoryStyleSink> {
    fn default() -> Self {
        Self::new(MemoryStyleSink::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::names;
    use crate::theme::builtin::DEFAULT_THEME_ID;
    use serde_json::json;

    fn manager_with_ocean() -> ThemeManager {
        let mut manager = ThemeManager::default();
        manager.register_theme(
            "ocean",
            json!({ "id": "ocean", "colors": { "primary": "#0077BE" } }),
        );
        manager
    }

    #[test]
    fn test_apply_registered_theme_marks_it_active() {
        let mut manager = manager_with_ocean();
        let report = manager.apply_theme("ocean");

        assert!(report.is_complete());
        assert_eq!(manager.registry().active_id(), Some("ocean"));
        assert_eq!(manager.sink().variable(names::PRIMARY).as_deref(), Some("#0077BE"));
    }

    #[test]
    fn test_apply_unknown_id_uses_default() {
        let mut manager = manager_with_ocean();
        let report = manager.apply_theme("missing");

        assert_eq!(report.theme_id, DEFAULT_THEME_ID);
        assert_eq!(manager.registry().active_id(), Some(DEFAULT_THEME_ID));
        assert_eq!(manager.sink().variable(names::PRIMARY).as_deref(), Some("#00F0FF"));
    }

    #[test]
    fn test_overrides_do_not_touch_registry() {
        let mut manager = manager_with_ocean();
        manager.apply_with_overrides("ocean", &json!({ "colors": { "accent": "#ABCDEF" } }));

        assert_eq!(manager.sink().variable(names::ACCENT).as_deref(), Some("#ABCDEF"));
        assert_eq!(manager.sink().variable(names::PRIMARY).as_deref(), Some("#0077BE"));
        assert_ne!(manager.get_theme("ocean").colors.accent, "#ABCDEF");
    }

    #[test]
    fn test_recovery_stops_at_first_working_tier() {
        let mut manager = manager_with_ocean();
        assert_eq!(manager.apply_with_recovery("ocean"), FallbackTier::Resolved);
    }

    #[test]
    fn test_recovery_reaches_emergency_when_variables_are_refused() {
        let sink = MemoryStyleSink::new().reject_writes_to(names::FOREGROUND);
        let mut manager = ThemeManager::new(sink);

        // The emergency tier cannot write the refused variable either, but its
        // inline properties still land.
        assert_eq!(manager.apply_with_recovery("default"), FallbackTier::Emergency);
        assert_eq!(manager.sink().inline("color").as_deref(), Some("#FFFFFF"));
    }

    #[test]
    fn test_recovery_falls_back_to_builtin_default() {
        let mut manager = manager_with_ocean();
        let mut theme = (*manager.get_theme("ocean")).clone();
        theme.colors.primary = String::new();

        assert_eq!(manager.apply_with_recovery(&theme), FallbackTier::BuiltinDefault);
        assert_eq!(manager.sink().variable(names::PRIMARY).as_deref(), Some("#00F0FF"));
        assert_eq!(manager.sink().attribute(names::FALLBACK_ATTR), None);
        assert!(manager.sink().inline_properties().is_empty());
    }

    #[test]
    fn test_failed_fetch_keeps_registered_theme() {
        let mut manager = manager_with_ocean();
        let fetched = Err(crate::error::ThemeError::Source {
            id: "ocean".to_string(),
            reason: "timed out".to_string(),
        });

        let report = manager.apply_fetched("ocean", fetched);
        assert_eq!(report.theme_id, "ocean");
        assert_eq!(manager.sink().variable(names::PRIMARY).as_deref(), Some("#0077BE"));
    }

    #[test]
    fn test_builtin_default_ignores_registry_default() {
        let mut manager = manager_with_ocean();
        claims::assert_ok!(manager.registry_mut().set_default_theme("ocean"));

        let report = manager.apply_builtin_default();
        assert_eq!(report.theme_id, DEFAULT_THEME_ID);
        assert_eq!(manager.sink().variable(names::PRIMARY).as_deref(), Some("#00F0FF"));
    }
}
