use crate::apply::names::KEYFRAMES_BLOCK_ID;
use crate::apply::sink::StyleSink;
use crate::color::hex_to_rgb_string;
use crate::error::ThemeResult;
use crate::theme::types::Theme;

/// Animation names produced for every theme, prefixed with `theme-` in the
/// generated rules.
pub const BUILTIN_ANIMATIONS: &[&str] = &[
    "fade-in",
    "fade-out",
    "scale-in",
    "scale-out",
    "slide-in-left",
    "slide-in-right",
    "glow-pulse",
];

/// Build the full animation rule text for `theme`.
///
/// Each built-in animation gets an `@keyframes theme-<name>` rule and an
/// `.animate-<name>` utility class timed from the theme's durations and
/// curves. Keyframes defined by the theme itself follow, under their own
/// names.
pub fn generate_keyframes(theme: &Theme) -> String {
    let colors = &theme.colors;
    let duration = &theme.animation.duration;
    let curves = &theme.animation.curves;
    let primary_rgb = hex_to_rgb_string(&colors.primary);
    let secondary_rgb = hex_to_rgb_string(&colors.secondary);

    let rules = [
        (
            "fade-in",
            "from { opacity: 0; } to { opacity: 1; }".to_string(),
            &duration.normal,
            &curves.ease,
        ),
        (
            "fade-out",
            "from { opacity: 1; } to { opacity: 0; }".to_string(),
            &duration.normal,
            &curves.ease,
        ),
        (
            "scale-in",
            "from { opacity: 0; transform: scale(0.95); } to { opacity: 1; transform: scale(1); }"
                .to_string(),
            &duration.fast,
            &curves.spring,
        ),
        (
            "scale-out",
            "from { opacity: 1; transform: scale(1); } to { opacity: 0; transform: scale(0.95); }"
                .to_string(),
            &duration.fast,
            &curves.ease,
        ),
        (
            "slide-in-left",
            "from { opacity: 0; transform: translateX(-100%); } to { opacity: 1; transform: translateX(0); }"
                .to_string(),
            &duration.normal,
            &curves.bounce,
        ),
        (
            "slide-in-right",
            "from { opacity: 0; transform: translateX(100%); } to { opacity: 1; transform: translateX(0); }"
                .to_string(),
            &duration.normal,
            &curves.bounce,
        ),
        (
            "glow-pulse",
            format!(
                "0%, 100% {{ box-shadow: 0 0 8px rgba({primary_rgb}, 0.5), 0 0 16px rgba({secondary_rgb}, 0.2); }} \
                 50% {{ box-shadow: 0 0 20px rgba({primary_rgb}, 0.9), 0 0 32px rgba({secondary_rgb}, 0.5); }}"
            ),
            &duration.slow,
            &curves.ease,
        ),
    ];

    let mut css = format!("/* keyframes for theme '{}' */\n", theme.id);
    for (name, body, time, curve) in &rules {
        let repeat = if *name == "glow-pulse" { " infinite" } else { "" };
        css.push_str(&format!(
            "@keyframes theme-{name} {{ {body} }}\n\
             .animate-{name} {{ animation: theme-{name} {time} {curve}{repeat} both; }}\n"
        ));
    }
    for (name, body) in &theme.animation.keyframes {
        if !is_safe_keyframe(name, body) {
            log::warn!("Skipping keyframes '{name}' of theme '{}'", theme.id);
            continue;
        }
        css.push_str(&format!("@keyframes {name} {{ {body} }}\n"));
    }

    css
}

/// A theme-defined rule can be emitted only when its name is a plain
/// identifier and its body cannot close the surrounding `@keyframes` rule.
pub fn is_safe_keyframe(name: &str, body: &str) -> bool {
    is_keyframe_name(name) && has_balanced_braces(body)
}

fn is_keyframe_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '-' => {}
        _ => return false,
    }
    name != "-" && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn has_balanced_braces(body: &str) -> bool {
    let mut depth = 0usize;
    for c in body.chars() {
        match c {
            '{' => depth += 1,
            '}' => match depth.checked_sub(1) {
                Some(next) => depth = next,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

/// Replace the single keyframe block on `sink` with rules for `theme`.
pub fn apply_keyframes<S: StyleSink + ?Sized>(sink: &mut S, theme: &Theme) -> ThemeResult<()> {
    let css = generate_keyframes(theme);
    sink.replace_style_block(KEYFRAMES_BLOCK_ID, &css)
        .inspect_err(|e| log::warn!("Failed to install keyframes for '{}': {e}", theme.id))
}
