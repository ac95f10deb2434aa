use crate::{
    color::{rgb255_to_hex, HexColor},
    swatch::{Role, Swatch},
};

/// Hard ceiling numerator for the step count: no step ever reaches 100%
/// (pure black or pure white), so the furthest step is capped at 95%.
const STEP_CEILING: f64 = 95.0;

/// Generate the ordered tint/shade sequence for one base color.
///
/// Emits `max_steps` shades (darkest last), then the base swatch unmodified,
/// then `max_steps` tints (lightest last), where
/// `max_steps = floor(95 / step_percent)`. Shades darken multiplicatively
/// (`channel * (1 - step/100)`); tints blend toward white
/// (`channel + (255 - channel) * step/100`).
///
/// Consumers wanting the visual order re-sort by step within a role; see
/// [`crate::Palette::shades`] and [`crate::Palette::tints`].
///
/// # Panics
///
/// Panics if `step_percent` is not a positive finite number.
/// [`crate::PaletteBuilder`] validates the step count before deriving it.
pub fn generate_palette(base: &HexColor, step_percent: f64) -> Vec<Swatch> {
    assert!(
        step_percent > 0.0 && step_percent.is_finite(),
        "step percent must be positive and finite"
    );

    let rgb = base.to_rgb255();
    let (r, g, b) = (f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b));

    let max_steps = (STEP_CEILING / step_percent).floor() as u32;
    let mut swatches = Vec::with_capacity(2 * max_steps as usize + 1);

    for i in 1..=max_steps {
        let step = step_percent * f64::from(i);
        let shade_factor = 1.0 - step / 100.0;
        let hex = rgb255_to_hex(r * shade_factor, g * shade_factor, b * shade_factor);
        swatches.push(Swatch::new(Role::Shade, step, hex));
    }

    swatches.push(Swatch::new(Role::Base, 0.0, base.clone()));

    for i in 1..=max_steps {
        let step = step_percent * f64::from(i);
        let tint_factor = step / 100.0;
        let hex = rgb255_to_hex(
            r + (255.0 - r) * tint_factor,
            g + (255.0 - g) * tint_factor,
            b + (255.0 - b) * tint_factor,
        );
        swatches.push(Swatch::new(Role::Tint, step, hex));
    }

    swatches
}
