//! Hex color conversion into the channel-list and cylindrical forms used by
//! derived style variables.
//!
//! The public string helpers are total: malformed input yields a neutral
//! fallback instead of an error, so callers on the apply path never branch.

use crate::error::{ThemeError, ThemeResult};
use std::fmt;

/// Returned by [`hex_to_rgb_string`] for input that is not a hex color.
pub const RGB_FALLBACK: &str = "0, 0, 0";

/// Returned by [`hex_to_hsl_string`] for input that is not a hex color.
pub const HSL_FALLBACK: &str = "0 0% 0%";

/// YIQ luma below this value counts as dark.
const DARK_LUMA_THRESHOLD: u32 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb`, `#rrggbb`, `rgb` or `rrggbb`.
    pub fn from_hex(input: &str) -> ThemeResult<Self> {
        let conversion_error = || ThemeError::Conversion {
            input: input.to_string(),
        };

        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(conversion_error());
        }

        let expanded = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => hex.to_string(),
            _ => return Err(conversion_error()),
        };

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16).map_err(|_| conversion_error())
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Perceived brightness on a 0-255 scale.
    pub fn yiq_luma(&self) -> u32 {
        (299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b)) / 1000
    }

    pub fn is_dark(&self) -> bool {
        self.yiq_luma() < DARK_LUMA_THRESHOLD
    }

    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        if max == min {
            return Hsl {
                hue: 0,
                saturation: 0,
                lightness: round_percent(lightness),
            };
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let sextant = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        let hue = (sextant * 60.0).round().rem_euclid(360.0) as u16;

        Hsl {
            hue,
            saturation: round_percent(saturation),
            lightness: round_percent(lightness),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.hue, self.saturation, self.lightness)
    }
}

fn round_percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

/// `"#00F0FF"` becomes `"0, 240, 255"`.
pub fn hex_to_rgb_string(hex: &str) -> String {
    match Rgb::from_hex(hex) {
        Ok(rgb) => rgb.to_string(),
        Err(e) => {
            log::debug!("{e}, using rgb fallback");
            RGB_FALLBACK.to_string()
        }
    }
}

/// `"#FF0000"` becomes `"0 100% 50%"`.
pub fn hex_to_hsl_string(hex: &str) -> String {
    match Rgb::from_hex(hex) {
        Ok(rgb) => rgb.to_hsl().to_string(),
        Err(e) => {
            log::debug!("{e}, using hsl fallback");
            HSL_FALLBACK.to_string()
        }
    }
}

/// Unparseable colors are treated as dark so that callers pick light
/// foregrounds, which stay readable on the dark fallback surfaces.
pub fn is_color_dark(hex: &str) -> bool {
    Rgb::from_hex(hex).map(|rgb| rgb.is_dark()).unwrap_or(true)
}

pub fn is_hex_color(value: &str) -> bool {
    Rgb::from_hex(value).is_ok()
}
