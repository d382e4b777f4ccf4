use engine::color::{Rgb, hex_to_hsl_string, hex_to_rgb_string, is_color_dark};
use engine::theme::{default_theme, merge_themes, validate};
use proptest::prelude::*;
use serde_json::json;

#[cfg(test)]
mod color_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_rgb_string_matches_channels(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let hex = format!("#{r:02x}{g:02x}{b:02x}");
            prop_assert_eq!(hex_to_rgb_string(&hex), format!("{r}, {g}, {b}"));

            let upper = hex.to_uppercase();
            prop_assert_eq!(hex_to_rgb_string(&upper), format!("{r}, {g}, {b}"));
        }

        #[test]
        fn test_hsl_components_stay_in_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let hsl = Rgb::new(r, g, b).to_hsl();
            prop_assert!(hsl.hue < 360);
            prop_assert!(hsl.saturation <= 100);
            prop_assert!(hsl.lightness <= 100);

            let text = hex_to_hsl_string(&format!("#{r:02x}{g:02x}{b:02x}"));
            let parts: Vec<&str> = text.split(' ').collect();
            prop_assert_eq!(parts.len(), 3);
            prop_assert!(parts[1].ends_with('%'));
            prop_assert!(parts[2].ends_with('%'));
        }

        #[test]
        fn test_darkness_follows_luma(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let luma = (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
            prop_assert_eq!(is_color_dark(&format!("#{r:02x}{g:02x}{b:02x}")), luma < 128);
        }

        #[test]
        fn test_conversion_is_total(input in ".*") {
            // Must never panic, whatever the input.
            let rgb = hex_to_rgb_string(&input);
            let hsl = hex_to_hsl_string(&input);
            prop_assert!(!rgb.is_empty());
            prop_assert!(!hsl.is_empty());
        }
    }
}

#[cfg(test)]
mod theme_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_validated_colors_are_never_blank(primary in ".*", accent in prop::option::of(".*")) {
            let mut raw = json!({ "colors": { "primary": primary } });
            if let Some(accent) = accent {
                raw["colors"]["accent"] = json!(accent);
            }

            let theme = validate(&raw);
            prop_assert!(!theme.colors.primary.trim().is_empty());
            prop_assert!(!theme.colors.accent.trim().is_empty());
        }

        #[test]
        fn test_merge_keeps_untouched_fields(primary in "#[0-9A-F]{6}") {
            let base = default_theme();
            let merged = merge_themes(base, &json!({ "colors": { "primary": primary.clone() } }));

            prop_assert_eq!(&merged.colors.primary, &primary);
            prop_assert_eq!(&merged.colors.secondary, &base.colors.secondary);
            prop_assert_eq!(&merged.typography, &base.typography);
            prop_assert_eq!(&base.colors.primary, "#00F0FF");
        }
    }
}
