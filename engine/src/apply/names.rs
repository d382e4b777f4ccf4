//! Published names on the presentation target.
//!
//! Components read these names instead of embedding literals; renaming any
//! of them is a breaking change for every consumer.

pub const BRAND_PREFIX: &str = "--theme-";

pub const PRIMARY: &str = "--theme-primary";
pub const SECONDARY: &str = "--theme-secondary";
pub const ACCENT: &str = "--theme-accent";
pub const PRIMARY_RGB: &str = "--theme-primary-rgb";
pub const PRIMARY_HSL: &str = "--theme-primary-hsl";
pub const SECONDARY_RGB: &str = "--theme-secondary-rgb";
pub const SECONDARY_HSL: &str = "--theme-secondary-hsl";
pub const BACKGROUND_RGB: &str = "--theme-bg-main-rgb";
pub const BACKGROUND_HSL: &str = "--theme-bg-main-hsl";
pub const DURATION_NORMAL: &str = "--theme-duration-normal";
pub const COLOR_SCHEME: &str = "--theme-color-scheme";

// Semantic family
pub const BACKGROUND: &str = "--background";
pub const FOREGROUND: &str = "--foreground";
pub const CARD: &str = "--card";
pub const CARD_FOREGROUND: &str = "--card-foreground";
pub const POPOVER: &str = "--popover";
pub const POPOVER_FOREGROUND: &str = "--popover-foreground";
pub const SEMANTIC_PRIMARY: &str = "--primary";
pub const PRIMARY_FOREGROUND: &str = "--primary-foreground";
pub const SEMANTIC_SECONDARY: &str = "--secondary";
pub const SECONDARY_FOREGROUND: &str = "--secondary-foreground";
pub const MUTED: &str = "--muted";
pub const MUTED_FOREGROUND: &str = "--muted-foreground";
pub const SEMANTIC_ACCENT: &str = "--accent";
pub const ACCENT_FOREGROUND: &str = "--accent-foreground";
pub const DESTRUCTIVE: &str = "--destructive";
pub const BORDER: &str = "--border";
pub const INPUT: &str = "--input";
pub const RING: &str = "--ring";
pub const RADIUS: &str = "--radius";

// Legacy aliases
pub const LEGACY_PRIMARY: &str = "--primary-color";
pub const LEGACY_SECONDARY: &str = "--secondary-color";
pub const LEGACY_ACCENT: &str = "--accent-color";
pub const LEGACY_BACKGROUND: &str = "--bg-color";
pub const LEGACY_TEXT: &str = "--text-color";
pub const LEGACY_PRIMARY_RGB: &str = "--primary-rgb";

/// Variables that must read back non-empty for a theme to count as applied.
pub const CRITICAL_VARIABLES: &[&str] = &[
    PRIMARY,
    SECONDARY,
    BACKGROUND,
    FOREGROUND,
    PRIMARY_RGB,
    DURATION_NORMAL,
];

pub const THEME_APPLIED_ATTR: &str = "data-theme-applied";
pub const THEME_ID_ATTR: &str = "data-theme";
pub const FALLBACK_ATTR: &str = "data-theme-fallback";

pub const KEYFRAMES_BLOCK_ID: &str = "theme-keyframes";

/// `branded("bg-main")` is `--theme-bg-main`.
pub fn branded(suffix: &str) -> String {
    format!("{BRAND_PREFIX}{suffix}")
}
