//! Post-hoc verification of an applied theme and the last-resort styling
//! used when verification fails.
//!
//! Degradation happens in three tiers. Each tier can be reached on its own;
//! none of them needs a higher tier to have run first:
//!
//! 1. [`Resolved`](FallbackTier::Resolved) - the requested theme through the
//!    normal applicator.
//! 2. [`BuiltinDefault`](FallbackTier::BuiltinDefault) - the hardcoded
//!    default theme through the normal applicator.
//! 3. [`Emergency`](FallbackTier::Emergency) - a fixed high-contrast set
//!    written directly onto the target.

use crate::apply::names::{self, CRITICAL_VARIABLES, FALLBACK_ATTR};
use crate::apply::sink::StyleSink;
use crate::apply::variables::ApplyReport;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackTier {
    Resolved,
    BuiltinDefault,
    Emergency,
}

impl fmt::Display for FallbackTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FallbackTier::Resolved => "resolved theme",
            FallbackTier::BuiltinDefault => "built-in default theme",
            FallbackTier::Emergency => "emergency fallback",
        };
        f.write_str(text)
    }
}

pub const EMERGENCY_THEME_ID: &str = "emergency";

/// Written straight onto the target, outside the variable namespace.
pub const EMERGENCY_INLINE: &[(&str, &str)] = &[
    ("background-color", "#000000"),
    ("color", "#FFFFFF"),
    ("border-color", "#FFFFFF"),
    ("font-family", "system-ui, sans-serif"),
    ("color-scheme", "dark"),
];

/// Covers every entry of [`CRITICAL_VARIABLES`].
pub const EMERGENCY_VARIABLES: &[(&str, &str)] = &[
    (names::PRIMARY, "#00FFFF"),
    (names::SECONDARY, "#FF00FF"),
    (names::BACKGROUND, "#000000"),
    (names::FOREGROUND, "#FFFFFF"),
    (names::PRIMARY_RGB, "0, 255, 255"),
    (names::DURATION_NORMAL, "300ms"),
];

/// Names of critical variables that are absent or blank on `sink`.
pub fn missing_critical_variables<S: StyleSink + ?Sized>(sink: &S) -> Vec<&'static str> {
    CRITICAL_VARIABLES
        .iter()
        .copied()
        .filter(|name| sink.variable(name).is_none_or(|value| value.trim().is_empty()))
        .collect()
}

/// Read the critical variables back and report whether all of them landed.
pub fn validate_applied_variables<S: StyleSink + ?Sized>(sink: &S) -> bool {
    let missing = missing_critical_variables(sink);
    if missing.is_empty() {
        return true;
    }
    log::warn!("Critical theme variables missing: {}", missing.join(", "));
    false
}

/// Write the tier-3 property set and tag the target with the fallback
/// marker. Every write is attempted even if earlier ones fail.
pub fn apply_emergency_fallback<S: StyleSink + ?Sized>(sink: &mut S) -> ApplyReport {
    log::error!("Applying emergency theme fallback");

    let mut report = ApplyReport {
        theme_id: EMERGENCY_THEME_ID.to_string(),
        ..ApplyReport::default()
    };

    for (property, value) in EMERGENCY_INLINE {
        match sink.set_inline(property, value) {
            Ok(()) => report.written += 1,
            Err(e) => {
                log::error!("Emergency inline write failed: {e}");
                report.failures.push(e);
            }
        }
    }
    for (name, value) in EMERGENCY_VARIABLES {
        match sink.set_variable(name, value) {
            Ok(()) => report.written += 1,
            Err(e) => {
                log::error!("Emergency variable write failed: {e}");
                report.failures.push(e);
            }
        }
    }

    sink.set_attribute(FALLBACK_ATTR, EMERGENCY_THEME_ID);
    report
}

/// Undo the direct writes of [`apply_emergency_fallback`] so that a normally
/// applied theme is not masked by them.
pub fn clear_emergency_fallback<S: StyleSink + ?Sized>(sink: &mut S) {
    if sink.attribute(FALLBACK_ATTR).is_none() {
        return;
    }
    for (property, _) in EMERGENCY_INLINE {
        sink.remove_inline(property);
    }
    sink.remove_attribute(FALLBACK_ATTR);
    log::info!("Cleared emergency theme fallback");
}

/// Verify the critical variables; on failure apply the emergency fallback
/// and return `false` so the caller knows recovery happened.
pub fn assert_theme_applied<S: StyleSink + ?Sized>(sink: &mut S) -> bool {
    if validate_applied_variables(sink) {
        return true;
    }
    apply_emergency_fallback(sink);
    false
}
