//! # Theme Model
//!
//! The typed theme schema and everything that produces instances of it:
//!
//! - [`types`] - the [`Theme`] tree and registration input
//! - [`builtin`] - the hardcoded default theme
//! - [`validation`] - raw record to [`Theme`], repairing as it goes
//! - [`merge`] - partial overrides layered onto a base theme
//! - [`registry`] - named themes with default and active pointers

pub mod builtin;
pub mod merge;
pub mod registry;
pub mod types;
pub mod validation;

pub use builtin::{DEFAULT_THEME_ID, default_theme};
pub use merge::{merge_themes, merge_values};
pub use registry::ThemeRegistry;
pub use types::{Theme, ThemeInput};
pub use validation::{ThemeValidator, ValidationReport, validate};
