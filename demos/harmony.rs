use tincture::{Palette, PaletteType};

// expand a single base color into a triadic scheme, then generate a
// tint/shade palette for each resulting hue
fn main() {
    let palettes = Palette::from_input("#e63946")
        .palette_type(PaletteType::Triadic)
        .include_palette(true)
        .generate()
        .unwrap();

    for palette in &palettes {
        let hexes: Vec<_> = palette
            .swatches()
            .iter()
            .map(|swatch| swatch.hex().label(false))
            .collect();

        println!("{}: {}", palette.base_hex(), hexes.join(" "));
    }
}
