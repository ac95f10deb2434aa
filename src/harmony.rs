use crate::color::HexColor;

/// A rule for deriving secondary hues from a base hue via fixed angular
/// offsets on the hue wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PaletteType {
    #[default]
    Complementary,
    SplitComplementary,
    Analogous,
    Triadic,
}

impl PaletteType {
    /// Map a loose name from a host message onto a palette type.
    ///
    /// Anything unrecognized (including an absent value) falls back to
    /// complementary.
    pub fn parse(value: Option<&str>) -> PaletteType {
        match value {
            Some("split-complementary") => PaletteType::SplitComplementary,
            Some("analogous") => PaletteType::Analogous,
            Some("triadic") => PaletteType::Triadic,
            _ => PaletteType::Complementary,
        }
    }

    /// Hue offsets in degrees applied to the base hue.
    fn offsets(self) -> &'static [f64] {
        match self {
            PaletteType::Complementary => &[180.0],
            PaletteType::SplitComplementary => &[150.0, 210.0],
            PaletteType::Analogous => &[-30.0, 30.0],
            PaletteType::Triadic => &[120.0, 240.0],
        }
    }
}

/// Compute the related hues for one base color.
///
/// The base is rotated on the hue wheel by each of the palette type's offsets
/// with saturation and lightness unchanged. Returns one hex for complementary,
/// two for the other types.
pub fn calculate_related_hexes(base: &HexColor, palette_type: PaletteType) -> Vec<HexColor> {
    let hsl = base.to_hsl();

    palette_type
        .offsets()
        .iter()
        .map(|offset| {
            let mut rotated = hsl;
            rotated.hue = (hsl.hue + offset + 360.0) % 360.0;
            rotated.to_rgb255().to_hex()
        })
        .collect()
}

/// Expand a list of base colors with their related hues.
///
/// Each input is emitted followed immediately by its own derived hues, so
/// related colors stay next to the base they came from. Input order is
/// preserved and duplicates are not collapsed.
pub fn expand_related_hexes(hexes: &[HexColor], palette_type: PaletteType) -> Vec<HexColor> {
    let mut expanded = Vec::with_capacity(hexes.len() * (1 + palette_type.offsets().len()));

    for hex in hexes {
        expanded.push(hex.clone());
        expanded.extend(calculate_related_hexes(hex, palette_type));
    }

    expanded
}
