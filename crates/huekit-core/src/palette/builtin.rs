// crates/huekit-core/src/palette/builtin.rs
//
// Ready-made palettes. Each one is built on first access and never mutated.
// The literal tables are validated by the same constructor as user palettes;
// tests below force every one of them.

use std::sync::LazyLock;

use crate::palette::palette::ColorPalette;

/// d3 category10 (https://github.com/mbostock/d3/wiki/Ordinal-Scales)
pub const D3_CATEGORY10_STRINGS: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

/// d3 category20
pub const D3_CATEGORY20_STRINGS: [&str; 20] = [
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c",
    "#98df8a", "#d62728", "#ff9896", "#9467bd", "#c5b0d5",
    "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f",
    "#c7c7c7", "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

/// d3 category20b
pub const D3_CATEGORY20B_STRINGS: [&str; 20] = [
    "#393b79", "#5254a3", "#6b6ecf", "#9c9ede", "#637939",
    "#8ca252", "#b5cf6b", "#cedb9c", "#8c6d31", "#bd9e39",
    "#e7ba52", "#e7cb94", "#843c39", "#ad494a", "#d6616b",
    "#e7969c", "#7b4173", "#a55194", "#ce6dbd", "#de9ed6",
];

/// d3 category20c
pub const D3_CATEGORY20C_STRINGS: [&str; 20] = [
    "#3182bd", "#6baed6", "#9ecae1", "#c6dbef", "#e6550d",
    "#fd8d3c", "#fdae6b", "#fdd0a2", "#31a354", "#74c476",
    "#a1d99b", "#c7e9c0", "#756bb1", "#9e9ac8", "#bcbddc",
    "#dadaeb", "#636363", "#969696", "#bdbdbd", "#d9d9d9",
];

fn literal(colors: &[&str]) -> ColorPalette {
    ColorPalette::from_list(colors.iter().copied())
        .unwrap_or_else(|e| panic!("built-in palette table is invalid: {e}"))
}

fn hue_range(start: i32, finish: i32) -> ColorPalette {
    ColorPalette::from_hue_range(start, finish, 100, 50, 1.0)
        .unwrap_or_else(|e| panic!("built-in hue range {start}..{finish} is invalid: {e}"))
}

pub static D3_CATEGORY10: LazyLock<ColorPalette> =
    LazyLock::new(|| literal(&D3_CATEGORY10_STRINGS));
pub static D3_CATEGORY20: LazyLock<ColorPalette> =
    LazyLock::new(|| literal(&D3_CATEGORY20_STRINGS));
pub static D3_CATEGORY20B: LazyLock<ColorPalette> =
    LazyLock::new(|| literal(&D3_CATEGORY20B_STRINGS));
pub static D3_CATEGORY20C: LazyLock<ColorPalette> =
    LazyLock::new(|| literal(&D3_CATEGORY20C_STRINGS));

/// Hues 0..120 at full saturation, half lightness.
pub static RED_TO_GREEN: LazyLock<ColorPalette> = LazyLock::new(|| hue_range(0, 120));
/// Hues 16..120 at full saturation, half lightness.
pub static ORANGERED_TO_GREEN: LazyLock<ColorPalette> = LazyLock::new(|| hue_range(16, 120));

/// Names accepted by [`by_name`].
pub const NAMES: [&str; 6] = [
    "category10",
    "category20",
    "category20b",
    "category20c",
    "red-to-green",
    "orangered-to-green",
];

pub fn by_name(name: &str) -> Option<&'static ColorPalette> {
    let p: &'static LazyLock<ColorPalette> = match name.trim().to_ascii_lowercase().as_str() {
        "category10" => &D3_CATEGORY10,
        "category20" => &D3_CATEGORY20,
        "category20b" => &D3_CATEGORY20B,
        "category20c" => &D3_CATEGORY20C,
        "red-to-green" => &RED_TO_GREEN,
        "orangered-to-green" => &ORANGERED_TO_GREEN,
        _ => return None,
    };
    Some(LazyLock::force(p))
}
