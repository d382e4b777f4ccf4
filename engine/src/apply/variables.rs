use crate::apply::fallback::clear_emergency_fallback;
use crate::apply::names::{self, branded};
use crate::apply::sink::StyleSink;
use crate::color::{hex_to_hsl_string, hex_to_rgb_string, is_color_dark};
use crate::error::ThemeError;
use crate::theme::types::{
    Theme, ThemeAnimation, ThemeColors, ThemeComponents, ThemeEffects, ThemeTypography,
};

/// Outcome of writing one theme onto a sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub theme_id: String,
    pub written: usize,
    pub failures: Vec<ThemeError>,
}

impl ApplyReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Writes variables one by one, recording failures instead of stopping.
struct VariableWriter<'s, S: StyleSink + ?Sized> {
    sink: &'s mut S,
    report: ApplyReport,
}

impl<'s, S: StyleSink + ?Sized> VariableWriter<'s, S> {
    fn new(sink: &'s mut S, theme_id: &str) -> Self {
        Self {
            sink,
            report: ApplyReport {
                theme_id: theme_id.to_string(),
                ..ApplyReport::default()
            },
        }
    }

    fn set(&mut self, name: &str, value: &str) {
        match self.sink.set_variable(name, value) {
            Ok(()) => self.report.written += 1,
            Err(e) => {
                log::warn!("{e}");
                self.report.failures.push(e);
            }
        }
    }

    fn set_branded(&mut self, suffix: &str, value: &str) {
        self.set(&branded(suffix), value);
    }

    fn finish(self) -> ApplyReport {
        self.report
    }
}

/// Write every field of `theme` as style variables on `sink`.
///
/// Families are written in a fixed order: colors, effects, animation,
/// components, typography, then the semantic, derived and legacy aliases so
/// that aliases always mirror the canonical values just written. A failed
/// write is recorded and the remaining writes still happen.
pub fn apply_theme<S: StyleSink + ?Sized>(sink: &mut S, theme: &Theme) -> ApplyReport {
    clear_emergency_fallback(sink);

    let mut writer = VariableWriter::new(sink, &theme.id);
    write_colors(&mut writer, &theme.colors);
    write_effects(&mut writer, &theme.effects);
    write_animation(&mut writer, &theme.animation);
    write_components(&mut writer, &theme.components, &theme.colors, &theme.animation);
    write_typography(&mut writer, &theme.typography);
    write_aliases(&mut writer, theme);
    let report = writer.finish();

    sink.set_attribute(names::THEME_ID_ATTR, &theme.id);
    if report.is_complete() {
        sink.set_attribute(names::THEME_APPLIED_ATTR, "true");
        log::info!(
            "Applied theme '{}' ({} variables)",
            theme.id,
            report.written
        );
    } else {
        sink.remove_attribute(names::THEME_APPLIED_ATTR);
        log::warn!(
            "Applied theme '{}' partially: {} written, {} failed",
            theme.id,
            report.written,
            report.failures.len()
        );
    }

    report
}

fn write_colors<S: StyleSink + ?Sized>(w: &mut VariableWriter<'_, S>, colors: &ThemeColors) {
    w.set_branded("primary", &colors.primary);
    w.set_branded("secondary", &colors.secondary);
    w.set_branded("accent", &colors.accent);

    let bg = &colors.background;
    for (name, value) in [
        ("main", &bg.main),
        ("overlay", &bg.overlay),
        ("card", &bg.card),
        ("alt", &bg.alt),
    ] {
        w.set_branded(&format!("bg-{name}"), value);
    }

    let text = &colors.text;
    for (name, value) in [
        ("primary", &text.primary),
        ("secondary", &text.secondary),
        ("accent", &text.accent),
        ("muted", &text.muted),
    ] {
        w.set_branded(&format!("text-{name}"), value);
    }

    let borders = &colors.borders;
    for (name, value) in [
        ("normal", &borders.normal),
        ("hover", &borders.hover),
        ("active", &borders.active),
        ("focus", &borders.focus),
    ] {
        w.set_branded(&format!("border-{name}"), value);
    }

    let status = &colors.status;
    for (name, value) in [
        ("success", &status.success),
        ("warning", &status.warning),
        ("error", &status.error),
        ("info", &status.info),
    ] {
        w.set_branded(&format!("status-{name}"), value);
    }
}

fn write_effects<S: StyleSink + ?Sized>(w: &mut VariableWriter<'_, S>, effects: &ThemeEffects) {
    let glow = &effects.glow;
    for (name, value) in [
        ("primary", &glow.primary),
        ("secondary", &glow.secondary),
        ("hover", &glow.hover),
    ] {
        w.set_branded(&format!("glow-{name}"), value);
    }

    let gradients = &effects.gradients;
    for (name, value) in [
        ("primary", &gradients.primary),
        ("secondary", &gradients.secondary),
        ("accent", &gradients.accent),
    ] {
        w.set_branded(&format!("gradient-{name}"), value);
    }

    let shadows = &effects.shadows;
    for (name, value) in [
        ("sm", &shadows.sm),
        ("md", &shadows.md),
        ("lg", &shadows.lg),
        ("xl", &shadows.xl),
    ] {
        w.set_branded(&format!("shadow-{name}"), value);
    }
}

fn write_animation<S: StyleSink + ?Sized>(
    w: &mut VariableWriter<'_, S>,
    animation: &ThemeAnimation,
) {
    let duration = &animation.duration;
    for (name, value) in [
        ("fast", &duration.fast),
        ("normal", &duration.normal),
        ("slow", &duration.slow),
    ] {
        w.set_branded(&format!("duration-{name}"), value);
    }

    let curves = &animation.curves;
    for (name, value) in [
        ("bounce", &curves.bounce),
        ("ease", &curves.ease),
        ("spring", &curves.spring),
        ("linear", &curves.linear),
    ] {
        w.set_branded(&format!("curve-{name}"), value);
    }
}

/// Optional slots are always written so that a value from a previously
/// applied theme never lingers.
fn write_components<S: StyleSink + ?Sized>(
    w: &mut VariableWriter<'_, S>,
    components: &ThemeComponents,
    colors: &ThemeColors,
    animation: &ThemeAnimation,
) {
    let default_transition = format!(
        "all {} {}",
        animation.duration.normal, animation.curves.ease
    );

    for (component, tokens) in components.iter() {
        w.set_branded(&format!("{component}-radius"), &tokens.radius);
        w.set_branded(&format!("{component}-padding"), &tokens.padding);
        w.set_branded(
            &format!("{component}-bg"),
            tokens.background.as_deref().unwrap_or(&colors.background.card),
        );
        w.set_branded(
            &format!("{component}-transition"),
            tokens.transition.as_deref().unwrap_or(&default_transition),
        );
    }
}

fn write_typography<S: StyleSink + ?Sized>(
    w: &mut VariableWriter<'_, S>,
    typography: &ThemeTypography,
) {
    let fonts = &typography.fonts;
    for (name, value) in [
        ("body", &fonts.body),
        ("heading", &fonts.heading),
        ("mono", &fonts.mono),
    ] {
        w.set_branded(&format!("font-{name}"), value);
    }

    for (name, value) in typography.sizes.iter() {
        w.set_branded(&format!("font-size-{name}"), value);
    }

    let weights = &typography.weights;
    for (name, value) in [
        ("light", &weights.light),
        ("normal", &weights.normal),
        ("medium", &weights.medium),
        ("bold", &weights.bold),
    ] {
        w.set_branded(&format!("font-weight-{name}"), value);
    }

    let line_heights = &typography.line_heights;
    for (name, value) in [
        ("tight", &line_heights.tight),
        ("normal", &line_heights.normal),
        ("relaxed", &line_heights.relaxed),
    ] {
        w.set_branded(&format!("line-height-{name}"), value);
    }
}

/// A theme's text color is designed against its background, so a fill as
/// dark (or as light) as the background takes the text color and any other
/// fill takes the background color.
fn foreground_for<'t>(fill: &str, colors: &'t ThemeColors) -> &'t str {
    if is_color_dark(fill) == is_color_dark(&colors.background.main) {
        &colors.text.primary
    } else {
        &colors.background.main
    }
}

fn write_aliases<S: StyleSink + ?Sized>(w: &mut VariableWriter<'_, S>, theme: &Theme) {
    let colors = &theme.colors;

    // Semantic family
    w.set(names::BACKGROUND, &colors.background.main);
    w.set(names::FOREGROUND, &colors.text.primary);
    w.set(names::CARD, &colors.background.card);
    w.set(names::CARD_FOREGROUND, foreground_for(&colors.background.card, colors));
    w.set(names::POPOVER, &colors.background.overlay);
    w.set(names::POPOVER_FOREGROUND, foreground_for(&colors.background.overlay, colors));
    w.set(names::SEMANTIC_PRIMARY, &colors.primary);
    w.set(names::PRIMARY_FOREGROUND, foreground_for(&colors.primary, colors));
    w.set(names::SEMANTIC_SECONDARY, &colors.secondary);
    w.set(names::SECONDARY_FOREGROUND, foreground_for(&colors.secondary, colors));
    w.set(names::MUTED, &colors.background.alt);
    w.set(names::MUTED_FOREGROUND, &colors.text.muted);
    w.set(names::SEMANTIC_ACCENT, &colors.accent);
    w.set(names::ACCENT_FOREGROUND, foreground_for(&colors.accent, colors));
    w.set(names::DESTRUCTIVE, &colors.status.error);
    w.set(names::BORDER, &colors.borders.normal);
    w.set(names::INPUT, &colors.borders.normal);
    w.set(names::RING, &colors.borders.focus);
    w.set(names::RADIUS, &theme.components.panel.radius);

    // Derived companions
    w.set(names::PRIMARY_RGB, &hex_to_rgb_string(&colors.primary));
    w.set(names::PRIMARY_HSL, &hex_to_hsl_string(&colors.primary));
    w.set(names::SECONDARY_RGB, &hex_to_rgb_string(&colors.secondary));
    w.set(names::SECONDARY_HSL, &hex_to_hsl_string(&colors.secondary));
    w.set(names::BACKGROUND_RGB, &hex_to_rgb_string(&colors.background.main));
    w.set(names::BACKGROUND_HSL, &hex_to_hsl_string(&colors.background.main));
    let scheme = if is_color_dark(&colors.background.main) {
        "dark"
    } else {
        "light"
    };
    w.set(names::COLOR_SCHEME, scheme);

    // Legacy aliases
    w.set(names::LEGACY_PRIMARY, &colors.primary);
    w.set(names::LEGACY_SECONDARY, &colors.secondary);
    w.set(names::LEGACY_ACCENT, &colors.accent);
    w.set(names::LEGACY_BACKGROUND, &colors.background.main);
    w.set(names::LEGACY_TEXT, &colors.text.primary);
    w.set(names::LEGACY_PRIMARY_RGB, &hex_to_rgb_string(&colors.primary));
}
