//! # Style Application
//!
//! Everything that writes onto the presentation target. The target is
//! abstracted as a [`StyleSink`] so the write algorithm runs the same against
//! a live document or an in-memory map.
//!
//! - [`variables`] - theme fields as style variables, in a fixed order
//! - [`keyframes`] - the single replaceable animation rule block
//! - [`fallback`] - read-back verification and the emergency property set
//! - [`names`] - the published variable, attribute and block names

pub mod fallback;
pub mod keyframes;
pub mod names;
pub mod sink;
pub mod variables;

pub use fallback::{
    FallbackTier, apply_emergency_fallback, assert_theme_applied, validate_applied_variables,
};
pub use keyframes::{apply_keyframes, generate_keyframes, is_safe_keyframe};
pub use sink::{MemoryStyleSink, StyleSink};
pub use variables::{ApplyReport, apply_theme};
