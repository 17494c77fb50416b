// crates/huekit-core/src/color/css.rs

use crate::color::space::Channels;

pub fn create_rgb(rgb: Channels) -> String {
    format!("rgb({},{},{})", rgb[0], rgb[1], rgb[2])
}

pub fn create_rgba(alpha: f32, rgb: Channels) -> String {
    format!("rgba({},{},{},{:?})", rgb[0], rgb[1], rgb[2], alpha)
}

pub fn create_hsl(hsl: Channels) -> String {
    format!("hsl({},{}%,{}%)", hsl[0], hsl[1], hsl[2])
}

pub fn create_hsla(alpha: f32, hsl: Channels) -> String {
    format!("hsla({},{}%,{}%,{:?})", hsl[0], hsl[1], hsl[2], alpha)
}

/// Lowercase hex, one group per channel, with no zero padding: `[15, 0, 255]`
/// renders as `#f0ff`. Use [`create_hex_padded`] for strict `#rrggbb`.
pub fn create_hex(rgb: Channels) -> String {
    format!("#{:x}{:x}{:x}", rgb[0], rgb[1], rgb[2])
}

/// Always `#rrggbb`.
pub fn create_hex_padded(rgb: Channels) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_functional_notation() {
        assert_eq!(create_rgb([1, 2, 3]), "rgb(1,2,3)");
        assert_eq!(create_rgba(0.5, [1, 2, 3]), "rgba(1,2,3,0.5)");
        assert_eq!(create_hsl([10, 20, 30]), "hsl(10,20%,30%)");
        assert_eq!(create_hsla(1.0, [10, 20, 30]), "hsla(10,20%,30%,1.0)");
    }

    #[test]
    fn hex_padding_variants() {
        assert_eq!(create_hex([255, 136, 0]), "#ff880");
        assert_eq!(create_hex_padded([255, 136, 0]), "#ff8800");
        assert_eq!(create_hex([0x1f, 0x77, 0xb4]), "#1f77b4");
    }
}
