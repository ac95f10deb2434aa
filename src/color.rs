use crate::Error;
use std::fmt;

/// A hex color in canonical form: `#` followed by exactly six lowercase hex digits.
///
/// The canonical form is an invariant of the type: every `HexColor` has been
/// normalized and validated on construction, so conversions out of it cannot
/// fail. Raw user input goes through [`HexColor::new`]; values produced by the
/// library's own color math are built from already-canonical output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HexColor(String);

impl HexColor {
    /// Normalize and validate a raw token into a canonical hex color.
    ///
    /// Accepts 3- or 6-digit hex, optionally prefixed with `#`, in any case.
    /// On failure the error carries the original raw token, not the
    /// normalized form.
    pub fn new(raw: &str) -> Result<HexColor, Error> {
        let normalized = normalize_hex(raw);

        if is_valid_hex(&normalized) {
            Ok(HexColor(normalized))
        } else {
            Err(Error::InvalidHexToken(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form of the color: lowercase hex with or without the `#`.
    pub fn label(&self, include_hashtag: bool) -> String {
        if include_hashtag {
            self.0.clone()
        } else {
            self.0.trim_start_matches('#').to_string()
        }
    }

    /// Parse the three hex pairs into their 8-bit channels.
    pub fn to_rgb255(&self) -> Rgb255 {
        let digits = self.0.as_bytes();

        Rgb255 {
            r: hex_pair(digits[1], digits[2]),
            g: hex_pair(digits[3], digits[4]),
            b: hex_pair(digits[5], digits[6]),
        }
    }

    pub fn to_hsl(&self) -> Hsl {
        self.to_rgb255().to_hsl()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb255 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A color in HSL: hue in degrees [0, 360), saturation and lightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

/// Bring a raw token into canonical shape without validating its digits.
///
/// Trims whitespace, strips one leading `#`, expands a 3-character form by
/// doubling each character, lowercases, and prefixes `#`. Idempotent.
pub fn normalize_hex(input: &str) -> String {
    let trimmed = input.trim();
    let cleaned = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if cleaned.chars().count() == 3 {
        let doubled: String = cleaned.chars().flat_map(|ch| [ch, ch]).collect();
        format!("#{}", doubled.to_lowercase())
    } else {
        format!("#{}", cleaned.to_lowercase())
    }
}

/// Whether a value is `#` followed by exactly six hex digits, case-insensitive.
pub fn is_valid_hex(value: &str) -> bool {
    let bytes = value.as_bytes();

    bytes.len() == 7 && bytes[0] == b'#' && bytes[1..].iter().all(u8::is_ascii_hexdigit)
}

/// Encode possibly fractional, possibly out-of-range channels as a hex color.
///
/// Each component is independently rounded to the nearest integer and clamped
/// into [0, 255] before encoding; tint and shade arithmetic produces
/// fractional values and harmony rotation can overshoot the range slightly.
pub fn rgb255_to_hex(r: f64, g: f64, b: f64) -> HexColor {
    HexColor(format!(
        "#{:02x}{:02x}{:02x}",
        component_to_u8(r),
        component_to_u8(g),
        component_to_u8(b)
    ))
}

fn component_to_u8(c: f64) -> u8 {
    c.round().clamp(0.0, 255.0) as u8
}

// canonical form guarantees ASCII hex digits, so this never sees anything else
fn hex_pair(high: u8, low: u8) -> u8 {
    (hex_digit(high) << 4) | hex_digit(low)
}

fn hex_digit(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        _ => digit - b'a' + 10,
    }
}

impl Rgb255 {
    /// Standard min/max decomposition into HSL.
    ///
    /// The saturation denominator branches on lightness to avoid the
    /// degenerate denominator at the extremes. Achromatic colors get
    /// hue 0 and saturation 0.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        let lightness = (max + min) / 2.0;
        let mut hue = 0.0;
        let mut saturation = 0.0;

        if max != min {
            let delta = max - min;
            saturation = if lightness > 0.5 {
                delta / (2.0 - max - min)
            } else {
                delta / (max + min)
            };

            hue = if max == r {
                ((g - b) / delta + if g < b { 6.0 } else { 0.0 }) * 60.0
            } else if max == g {
                ((b - r) / delta + 2.0) * 60.0
            } else {
                ((r - g) / delta + 4.0) * 60.0
            };
        }

        Hsl {
            hue: (hue + 360.0) % 360.0,
            saturation,
            lightness,
        }
    }

    pub fn to_hex(self) -> HexColor {
        rgb255_to_hex(f64::from(self.r), f64::from(self.g), f64::from(self.b))
    }
}

impl Hsl {
    /// Convert back to 8-bit sRGB, rounding each channel to the nearest integer.
    ///
    /// The hue is wrapped into [0, 360) first; saturation and lightness are
    /// clamped into [0, 1].
    pub fn to_rgb255(self) -> Rgb255 {
        let h = ((self.hue % 360.0) + 360.0) % 360.0 / 360.0;
        let s = self.saturation.clamp(0.0, 1.0);
        let l = self.lightness.clamp(0.0, 1.0);

        if s == 0.0 {
            // achromatic gray
            let value = (l * 255.0).round() as u8;
            return Rgb255 {
                r: value,
                g: value,
                b: value,
            };
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb255 {
            r: (hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
            g: (hue_to_channel(p, q, h) * 255.0).round() as u8,
            b: (hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
        }
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_expands_and_lowercases() {
        assert_eq!(normalize_hex("F0C"), "#ff00cc");
        assert_eq!(normalize_hex("#F0C"), "#ff00cc");
        assert_eq!(normalize_hex("  AABBCC  "), "#aabbcc");
        assert_eq!(normalize_hex("#aabbcc"), "#aabbcc");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["F0C", "#AABBCC", "zzz", "12345", ""] {
            let once = normalize_hex(input);
            assert_eq!(normalize_hex(&once), once);
        }
    }

    #[test]
    fn normalize_does_not_validate() {
        // garbage passes through normalization untouched apart from shape
        assert_eq!(normalize_hex("zzz"), "#zzzzzz");
        assert!(!is_valid_hex(&normalize_hex("zzz")));
    }

    #[test]
    fn validity_requires_exactly_six_digits() {
        assert!(is_valid_hex("#aabbcc"));
        assert!(is_valid_hex("#AABBCC"));
        assert!(!is_valid_hex("aabbcc"));
        assert!(!is_valid_hex("#abc"));
        assert!(!is_valid_hex("#aabbccdd"));
        assert!(!is_valid_hex("#aabbcg"));
    }

    #[test]
    fn hex_color_rejects_invalid_with_raw_token() {
        let err = HexColor::new("zzz").unwrap_err();
        assert_eq!(err, crate::Error::InvalidHexToken("zzz".to_string()));
    }

    #[test]
    fn hex_rgb_round_trip() {
        for hex in ["#000000", "#ffffff", "#808080", "#12ab9f", "#ff0000"] {
            let color = HexColor::new(hex).unwrap();
            assert_eq!(color.to_rgb255().to_hex().as_str(), hex);
        }
    }

    #[test]
    fn component_encoding_rounds_and_clamps() {
        assert_eq!(rgb255_to_hex(115.2, 115.2, 115.2).as_str(), "#737373");
        assert_eq!(rgb255_to_hex(140.7, 140.7, 140.7).as_str(), "#8d8d8d");
        assert_eq!(rgb255_to_hex(-4.0, 260.0, 255.4).as_str(), "#00ffff");
        // single-digit output is zero-padded
        assert_eq!(rgb255_to_hex(1.0, 2.0, 3.0).as_str(), "#010203");
    }

    #[test]
    fn achromatic_rgb_to_hsl() {
        let hsl = Rgb255 { r: 128, g: 128, b: 128 }.to_hsl();
        assert_eq!(hsl.hue, 0.0);
        assert_eq!(hsl.saturation, 0.0);
        assert!((hsl.lightness - 128.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn primary_hues() {
        assert_eq!(Rgb255 { r: 255, g: 0, b: 0 }.to_hsl().hue, 0.0);
        assert_eq!(Rgb255 { r: 0, g: 255, b: 0 }.to_hsl().hue, 120.0);
        assert_eq!(Rgb255 { r: 0, g: 0, b: 255 }.to_hsl().hue, 240.0);
    }

    #[test]
    fn zero_saturation_hsl_to_rgb_is_gray() {
        let rgb = Hsl {
            hue: 123.0,
            saturation: 0.0,
            lightness: 0.5,
        }
        .to_rgb255();
        assert_eq!(rgb, Rgb255 { r: 128, g: 128, b: 128 });
    }

    #[test]
    fn hsl_to_rgb_wraps_hue_and_clamps() {
        let a = Hsl {
            hue: 480.0,
            saturation: 1.2,
            lightness: 0.5,
        }
        .to_rgb255();
        let b = Hsl {
            hue: 120.0,
            saturation: 1.0,
            lightness: 0.5,
        }
        .to_rgb255();
        assert_eq!(a, b);
        assert_eq!(b, Rgb255 { r: 0, g: 255, b: 0 });
    }

    #[test]
    fn rgb_hsl_round_trip_within_one() {
        let samples = [
            (0u8, 0u8, 0u8),
            (255, 255, 255),
            (128, 128, 128),
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (12, 200, 97),
            (250, 1, 128),
            (33, 66, 99),
            (200, 100, 50),
        ];

        for (r, g, b) in samples {
            let rgb = Rgb255 { r, g, b };
            let back = rgb.to_hsl().to_rgb255();

            assert!(i16::from(back.r).abs_diff(i16::from(r)) <= 1, "{rgb:?} -> {back:?}");
            assert!(i16::from(back.g).abs_diff(i16::from(g)) <= 1, "{rgb:?} -> {back:?}");
            assert!(i16::from(back.b).abs_diff(i16::from(b)) <= 1, "{rgb:?} -> {back:?}");
        }
    }

    #[test]
    fn hex_labels() {
        let color = HexColor::new("#AABBCC").unwrap();
        assert_eq!(color.label(true), "#aabbcc");
        assert_eq!(color.label(false), "aabbcc");
    }
}
