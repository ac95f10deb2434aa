fn main() {
    let palettes = tincture::Palette::from_input("#0d6efd")
        .step_count(10)
        .generate()
        .unwrap();

    for palette in &palettes {
        println!("palette for {}", palette.base_hex());

        for swatch in palette.shades() {
            println!("  {} {}", swatch.label(), swatch.hex());
        }
        println!("  {} {}", palette.base().label(), palette.base().hex());
        for swatch in palette.tints() {
            println!("  {} {}", swatch.label(), swatch.hex());
        }
    }
}
