// crates/huekit-cli/src/io/palette_file.rs
//
// Palette text files: one color string per line, blank lines ignored.

use anyhow::{Context, Result};
use huekit_core::ColorPalette;

pub fn parse_palette(text: &str) -> Result<ColorPalette> {
    let colors: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    Ok(ColorPalette::from_list(colors)?)
}

/// Load a palette file and validate every entry.
pub fn load_palette(path: &str) -> Result<ColorPalette> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read palette {path}"))?;
    let palette = parse_palette(&text).with_context(|| format!("decode palette {path}"))?;
    log::debug!("loaded palette {path}: {} colors", palette.size());
    Ok(palette)
}

/// Save a palette in the same line-per-color layout `load_palette` reads.
pub fn save_palette(path: &str, palette: &ColorPalette) -> Result<()> {
    let mut s = String::new();
    for c in palette.colors() {
        s.push_str(c);
        s.push('\n');
    }
    std::fs::write(path, s).with_context(|| format!("write palette {path}"))?;
    Ok(())
}
