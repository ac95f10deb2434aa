//! A library to generate tint and shade color palettes from base hex colors.
//!
//! Given one or more base colors, the engine produces an ordered sequence of
//! [`Swatch`]es per color: progressively darker shades, the base itself, and
//! progressively lighter tints. A base color can also be expanded into
//! harmonically related hues (complementary, split-complementary, analogous,
//! triadic) before palette generation.
//!
//! Everything is pure computation: no I/O, no shared state, identical inputs
//! always produce identical palettes.
//!
//! ```
//! let palettes = tincture::Palette::from_input("#0af, ff0000")
//!     .step_count(10)
//!     .generate()
//!     .unwrap();
//!
//! assert_eq!(palettes.len(), 2);
//! assert_eq!(palettes[0].base().hex().as_str(), "#00aaff");
//! ```

mod color;
mod harmony;
mod swatch;
mod tint_shade;

/// Step count used when the caller does not supply one.
pub const DEFAULT_STEP_COUNT: u32 = 10;
/// Smallest accepted step count.
pub const MIN_STEP_COUNT: u32 = 1;
/// Largest accepted step count.
pub const MAX_STEP_COUNT: u32 = 50;

pub use crate::{
    color::{is_valid_hex, normalize_hex, rgb255_to_hex, HexColor, Hsl, Rgb255},
    harmony::{calculate_related_hexes, expand_related_hexes, PaletteType},
    swatch::{format_step_label, Role, Swatch},
    tint_shade::generate_palette,
};

/// Ways a generation request can fail.
///
/// Both variants describe bad user input, never a system fault; the caller is
/// expected to surface the message and take no further action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The raw input held no tokens at all.
    #[error("please enter at least one hex color")]
    EmptyInput,
    /// A token failed validation. Carries the raw token as the user typed it.
    #[error("invalid hex color: \"{0}\"; use 3- or 6-digit hex, optionally prefixed with '#'")]
    InvalidHexToken(String),
    /// The step count fell outside the accepted range.
    #[error("step count must be between {min} and {max}, got {0}", min = MIN_STEP_COUNT, max = MAX_STEP_COUNT)]
    InvalidStepCount(u32),
}

/// The generated tint/shade palette for a single base color.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    base: HexColor,
    swatches: Vec<Swatch>,
}

/// Builder for one generation request, possibly spanning multiple base colors.
pub struct PaletteBuilder<'a> {
    input: &'a str,
    step_count: u32,
    palette_type: PaletteType,
    include_palette: bool,
}

impl Palette {
    /// Start a generation request from raw free-text input.
    ///
    /// The input may hold several colors separated by whitespace and/or
    /// commas; each may be 3- or 6-digit hex with an optional `#` prefix.
    pub fn from_input(input: &str) -> PaletteBuilder<'_> {
        PaletteBuilder::from_input(input)
    }

    /// The base color this palette was generated from.
    pub fn base_hex(&self) -> &HexColor {
        &self.base
    }

    /// All swatches in emission order: shades, base, tints.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// The single base swatch (step 0).
    pub fn base(&self) -> &Swatch {
        self.swatches
            .iter()
            .find(|s| s.role() == Role::Base)
            .unwrap_or(&self.swatches[0]) // a palette always holds a base swatch
    }

    /// Shade swatches sorted by ascending step: lightest shade first.
    pub fn shades(&self) -> Vec<&Swatch> {
        self.sorted_role(Role::Shade)
    }

    /// Tint swatches sorted by ascending step: darkest tint first.
    pub fn tints(&self) -> Vec<&Swatch> {
        self.sorted_role(Role::Tint)
    }

    fn sorted_role(&self, role: Role) -> Vec<&Swatch> {
        let mut swatches: Vec<&Swatch> = self.swatches.iter().filter(|s| s.role() == role).collect();
        swatches.sort_by(|a, b| a.step().total_cmp(&b.step()));
        swatches
    }
}

impl<'a> PaletteBuilder<'a> {
    pub fn from_input(input: &'a str) -> Self {
        Self {
            input,
            step_count: DEFAULT_STEP_COUNT,
            palette_type: PaletteType::default(),
            include_palette: false,
        }
    }

    /// Number of steps each way; the step percent is `100 / step_count`.
    pub fn step_count(self, step_count: u32) -> Self {
        Self { step_count, ..self }
    }

    /// Harmony rule used when expansion is enabled.
    pub fn palette_type(self, palette_type: PaletteType) -> Self {
        Self { palette_type, ..self }
    }

    /// Whether to expand each base color into its related hues first.
    pub fn include_palette(self, include_palette: bool) -> Self {
        Self {
            include_palette,
            ..self
        }
    }

    /// Run the request, producing one palette per resolved base color.
    ///
    /// Fails fast: the first invalid token aborts the whole request and no
    /// palettes are produced for earlier valid tokens. Repeated colors are
    /// not deduplicated and yield repeated palettes.
    pub fn generate(self) -> Result<Vec<Palette>, Error> {
        if !(MIN_STEP_COUNT..=MAX_STEP_COUNT).contains(&self.step_count) {
            return Err(Error::InvalidStepCount(self.step_count));
        }

        let hexes = parse_hex_list(self.input)?;
        let hexes = if self.include_palette {
            expand_related_hexes(&hexes, self.palette_type)
        } else {
            hexes
        };

        let step_percent = 100.0 / f64::from(self.step_count);

        Ok(hexes
            .into_iter()
            .map(|base| Palette {
                swatches: generate_palette(&base, step_percent),
                base,
            })
            .collect())
    }
}

/// Split raw free-text input into validated base colors.
///
/// Tokens are separated by any run of whitespace and/or commas; empty tokens
/// are dropped. Each token is normalized and validated, and the first invalid
/// one fails the whole request with the raw token in the error.
pub fn parse_hex_list(input: &str) -> Result<Vec<HexColor>, Error> {
    let mut hexes = Vec::new();

    for token in input.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }

        hexes.push(HexColor::new(token)?);
    }

    if hexes.is_empty() {
        return Err(Error::EmptyInput);
    }

    Ok(hexes)
}
