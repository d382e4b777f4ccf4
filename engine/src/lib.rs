//! # Prism Engine
//!
//! Resolves design-token themes and writes them onto a style target.
//!
//! A raw record goes through one validation boundary that produces a fully
//! populated [`Theme`]. Themes live in a [`ThemeRegistry`], can be merged
//! with partial overrides, and are applied to a [`StyleSink`] as style
//! variables plus a generated keyframe block. When an application does not
//! read back, the [`apply::fallback`] tiers take over.
//!
//! ```ignore
//! use engine::{MemoryStyleSink, ThemeManager};
//!
//! let mut manager = ThemeManager::new(MemoryStyleSink::new());
//! manager.register_theme("ocean", serde_json::json!({ "colors": { "primary": "#0077BE" } }));
//! let tier = manager.apply_with_recovery("ocean");
//! ```

pub mod apply;
pub mod color;
pub mod error;
pub mod manager;
pub mod theme;

pub use apply::{ApplyReport, FallbackTier, MemoryStyleSink, StyleSink};
pub use error::{ThemeError, ThemeResult};
pub use manager::{ThemeManager, ThemeSelector, ThemeSource, fetch_record};
pub use theme::{Theme, ThemeInput, ThemeRegistry, ThemeValidator, default_theme};
