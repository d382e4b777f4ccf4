use crate::theme::types::*;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Registry id of the seeded default theme.
pub const DEFAULT_THEME_ID: &str = "default";

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(build_default_theme);

/// The hardcoded theme every missing or malformed field falls back to.
pub fn default_theme() -> &'static Theme {
    &DEFAULT_THEME
}

fn s(value: &str) -> String {
    value.to_string()
}

fn build_default_theme() -> Theme {
    Theme {
        id: s(DEFAULT_THEME_ID),
        name: s("Neon Night"),
        description: s("Built-in dark theme with cyan and magenta accents"),
        version: s("1.0.0"),
        colors: ThemeColors {
            primary: s("#00F0FF"),
            secondary: s("#FF00E5"),
            accent: s("#FFE500"),
            background: BackgroundColors {
                main: s("#0A0A0F"),
                overlay: s("#12121A"),
                card: s("#16161F"),
                alt: s("#1C1C28"),
            },
            text: TextColors {
                primary: s("#FFFFFF"),
                secondary: s("#B8B8D0"),
                accent: s("#00F0FF"),
                muted: s("#6E6E8A"),
            },
            borders: BorderColors {
                normal: s("#2A2A3A"),
                hover: s("#3D3D55"),
                active: s("#00F0FF"),
                focus: s("#FF00E5"),
            },
            status: StatusColors {
                success: s("#00FF9D"),
                warning: s("#FFB800"),
                error: s("#FF3860"),
                info: s("#3DA5FF"),
            },
        },
        effects: ThemeEffects {
            glow: GlowEffects {
                primary: s("0 0 12px rgba(0, 240, 255, 0.6)"),
                secondary: s("0 0 12px rgba(255, 0, 229, 0.6)"),
                hover: s("0 0 20px rgba(0, 240, 255, 0.8)"),
            },
            gradients: GradientEffects {
                primary: s("linear-gradient(135deg, #00F0FF 0%, #0080FF 100%)"),
                secondary: s("linear-gradient(135deg, #FF00E5 0%, #8000FF 100%)"),
                accent: s("linear-gradient(135deg, #FFE500 0%, #FF8A00 100%)"),
            },
            shadows: ShadowEffects {
                sm: s("0 1px 2px rgba(0, 0, 0, 0.4)"),
                md: s("0 4px 8px rgba(0, 0, 0, 0.45)"),
                lg: s("0 10px 20px rgba(0, 0, 0, 0.5)"),
                xl: s("0 20px 40px rgba(0, 0, 0, 0.6)"),
            },
        },
        animation: ThemeAnimation {
            duration: AnimationDurations {
                fast: s("150ms"),
                normal: s("300ms"),
                slow: s("500ms"),
            },
            curves: AnimationCurves {
                bounce: s("cubic-bezier(0.68, -0.55, 0.265, 1.55)"),
                ease: s("cubic-bezier(0.4, 0, 0.2, 1)"),
                spring: s("cubic-bezier(0.175, 0.885, 0.32, 1.275)"),
                linear: s("linear"),
            },
            keyframes: BTreeMap::from([(
                s("shimmer"),
                s("0% { background-position: -200% 0; } 100% { background-position: 200% 0; }"),
            )]),
        },
        components: ThemeComponents {
            panel: ComponentTokens {
                radius: s("12px"),
                padding: s("1.5rem"),
                background: Some(s("rgba(22, 22, 31, 0.85)")),
                transition: None,
            },
            button: ComponentTokens {
                radius: s("8px"),
                padding: s("0.5rem 1rem"),
                background: None,
                transition: Some(s("all 150ms cubic-bezier(0.4, 0, 0.2, 1)")),
            },
            tooltip: ComponentTokens {
                radius: s("6px"),
                padding: s("0.375rem 0.75rem"),
                background: Some(s("#1C1C28")),
                transition: None,
            },
            input: ComponentTokens {
                radius: s("8px"),
                padding: s("0.5rem 0.75rem"),
                background: Some(s("#12121A")),
                transition: Some(s("border-color 150ms cubic-bezier(0.4, 0, 0.2, 1)")),
            },
        },
        typography: ThemeTypography {
            fonts: FontFamilies {
                body: s("'Inter', system-ui, sans-serif"),
                heading: s("'Orbitron', 'Inter', sans-serif"),
                mono: s("'JetBrains Mono', ui-monospace, monospace"),
            },
            sizes: FontSizes {
                xs: s("0.75rem"),
                sm: s("0.875rem"),
                base: s("1rem"),
                lg: s("1.125rem"),
                xl: s("1.25rem"),
                xxl: s("1.5rem"),
                xxxl: s("1.875rem"),
            },
            weights: FontWeights {
                light: s("300"),
                normal: s("400"),
                medium: s("500"),
                bold: s("700"),
            },
            line_heights: LineHeights {
                tight: s("1.25"),
                normal: s("1.5"),
                relaxed: s("1.75"),
            },
        },
    }
}
