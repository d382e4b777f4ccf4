use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A fully resolved theme. Every leaf is populated; only the two optional
/// per-component slots may be absent.
///
/// Instances are produced by the validator or the merge engine and are never
/// edited in place once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub description: String,
    pub version: String,
    pub colors: ThemeColors,
    pub effects: ThemeEffects,
    pub animation: ThemeAnimation,
    pub components: ThemeComponents,
    pub typography: ThemeTypography,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    // === Brand Colors ===
    pub primary: String,
    pub secondary: String,
    pub accent: String,

    pub background: BackgroundColors,
    pub text: TextColors,
    pub borders: BorderColors,
    pub status: StatusColors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundColors {
    pub main: String,
    pub overlay: String,
    pub card: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub muted: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderColors {
    pub normal: String,
    pub hover: String,
    pub active: String,
    pub focus: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusColors {
    pub success: String,
    pub warning: String,
    pub error: String,
    pub info: String,
}

/// Pre-formatted style values (box shadows, gradients).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeEffects {
    pub glow: GlowEffects,
    pub gradients: GradientEffects,
    pub shadows: ShadowEffects,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlowEffects {
    pub primary: String,
    pub secondary: String,
    pub hover: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientEffects {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowEffects {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeAnimation {
    pub duration: AnimationDurations,
    pub curves: AnimationCurves,
    /// Animation name to keyframe body, e.g. `"0% { opacity: 0; } 100% { opacity: 1; }"`.
    pub keyframes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationDurations {
    pub fast: String,
    pub normal: String,
    pub slow: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationCurves {
    pub bounce: String,
    pub ease: String,
    pub spring: String,
    pub linear: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeComponents {
    pub panel: ComponentTokens,
    pub button: ComponentTokens,
    pub tooltip: ComponentTokens,
    pub input: ComponentTokens,
}

impl ThemeComponents {
    /// Components in the order their variables are written.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ComponentTokens)> {
        [
            ("panel", &self.panel),
            ("button", &self.button),
            ("tooltip", &self.tooltip),
            ("input", &self.input),
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTokens {
    pub radius: String,
    pub padding: String,
    // Serialized as null when absent so the schema walk sees the slot.
    pub background: Option<String>,
    pub transition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTypography {
    pub fonts: FontFamilies,
    pub sizes: FontSizes,
    pub weights: FontWeights,
    pub line_heights: LineHeights,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamilies {
    pub body: String,
    pub heading: String,
    pub mono: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSizes {
    pub xs: String,
    pub sm: String,
    pub base: String,
    pub lg: String,
    pub xl: String,
    #[serde(rename = "2xl")]
    pub xxl: String,
    #[serde(rename = "3xl")]
    pub xxxl: String,
}

impl FontSizes {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("xs", self.xs.as_str()),
            ("sm", self.sm.as_str()),
            ("base", self.base.as_str()),
            ("lg", self.lg.as_str()),
            ("xl", self.xl.as_str()),
            ("2xl", self.xxl.as_str()),
            ("3xl", self.xxxl.as_str()),
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeights {
    pub light: String,
    pub normal: String,
    pub medium: String,
    pub bold: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineHeights {
    pub tight: String,
    pub normal: String,
    pub relaxed: String,
}

/// A registration payload: either an untrusted record that still needs
/// validation, or a theme that has already been through it.
#[derive(Debug, Clone)]
pub enum ThemeInput {
    Raw(serde_json::Value),
    Resolved(Theme),
}

impl From<serde_json::Value> for ThemeInput {
    fn from(value: serde_json::Value) -> Self {
        ThemeInput::Raw(value)
    }
}

impl From<Theme> for ThemeInput {
    fn from(theme: Theme) -> Self {
        ThemeInput::Resolved(theme)
    }
}
