fn main() {
    let input = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    let palettes = tincture::PaletteBuilder::from_input(&input)
        .generate()
        .unwrap();

    println!("{:#?}", palettes);
}
