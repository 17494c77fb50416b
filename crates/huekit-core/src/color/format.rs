// crates/huekit-core/src/color/format.rs
//
// The five CSS color syntaxes and dispatch over them.
//
// Detection walks ALL in declaration order and takes the first variant whose
// prefix matches (case-insensitive) and whose exclusion prefix does not.
// Rgb must exclude "rgba" and Hsl must exclude "hsla", otherwise the
// alpha-carrying forms would be claimed by their shorter siblings.

use std::fmt;

use crate::color::css;
use crate::color::parse::{hex_channels, paren_channels, paren_field};
use crate::color::space::{hsl_to_rgb, rgb_to_hsl, rgb_to_hsv, Channels};
use crate::error::{HueError, Result};

/// Alpha lives in the fourth parenthesized field.
const ALPHA_FIELD: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// `#RRGGBB`
    Hex,
    /// `rgb(r,g,b)`
    Rgb,
    /// `rgba(r,g,b,a)`
    Rgba,
    /// `hsl(h,s%,l%)`
    Hsl,
    /// `hsla(h,s%,l%,a)`
    Hsla,
}

impl ColorFormat {
    /// Detection order.
    pub const ALL: [ColorFormat; 5] = [
        ColorFormat::Hex,
        ColorFormat::Rgb,
        ColorFormat::Rgba,
        ColorFormat::Hsl,
        ColorFormat::Hsla,
    ];

    #[inline]
    fn starts_with(self) -> &'static str {
        match self {
            ColorFormat::Hex => "#",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Rgba => "rgba",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Hsla => "hsla",
        }
    }

    #[inline]
    fn starts_without(self) -> Option<&'static str> {
        match self {
            ColorFormat::Rgb => Some("rgba"),
            ColorFormat::Hsl => Some("hsla"),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Rgba => "rgba",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Hsla => "hsla",
        }
    }

    pub fn parse_name(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" | "#" => Ok(ColorFormat::Hex),
            "rgb" => Ok(ColorFormat::Rgb),
            "rgba" => Ok(ColorFormat::Rgba),
            "hsl" => Ok(ColorFormat::Hsl),
            "hsla" => Ok(ColorFormat::Hsla),
            _ => Err(HueError::InvalidArgument(format!("unknown color format: {s}"))),
        }
    }

    #[inline]
    pub fn has_alpha(self) -> bool {
        matches!(self, ColorFormat::Rgba | ColorFormat::Hsla)
    }

    /// Prefix check only; a match says nothing about the rest of the syntax.
    pub fn is_type_of(self, color: &str) -> bool {
        let lower = color.to_ascii_lowercase();
        if let Some(without) = self.starts_without() {
            if lower.starts_with(without) {
                return false;
            }
        }
        lower.starts_with(self.starts_with())
    }

    pub fn is_any_of(color: &str, formats: &[ColorFormat]) -> bool {
        formats.iter().any(|f| f.is_type_of(color))
    }

    pub fn detect(color: &str) -> Result<ColorFormat> {
        Self::ALL
            .into_iter()
            .find(|f| f.is_type_of(color))
            .ok_or_else(|| HueError::UnrecognizedFormat(color.to_string()))
    }

    // ---- per-variant extraction (input already known to be `self`) ----

    fn rgb_of(self, color: &str) -> Result<Channels> {
        match self {
            ColorFormat::Hex => hex_channels(color),
            ColorFormat::Rgb | ColorFormat::Rgba => paren_channels(color),
            ColorFormat::Hsl | ColorFormat::Hsla => Ok(hsl_to_rgb(paren_channels(color)?)),
        }
    }

    fn hsl_of(self, color: &str) -> Result<Channels> {
        match self {
            ColorFormat::Hsl | ColorFormat::Hsla => paren_channels(color),
            _ => Ok(rgb_to_hsl(self.rgb_of(color)?)),
        }
    }

    fn alpha_of(self, color: &str) -> Result<f32> {
        if self.has_alpha() {
            paren_field(color, ALPHA_FIELD)
        } else {
            Ok(1.0)
        }
    }

    // ---- any-format entry points ----

    /// RGB channels of a color string of any recognized format.
    pub fn to_rgb(color: &str) -> Result<Channels> {
        Self::detect(color)?.rgb_of(color)
    }

    /// HSL channels of a color string of any recognized format.
    pub fn to_hsl(color: &str) -> Result<Channels> {
        Self::detect(color)?.hsl_of(color)
    }

    /// HSV channels, derived from RGB.
    pub fn to_hsv(color: &str) -> Result<Channels> {
        Ok(rgb_to_hsv(Self::to_rgb(color)?))
    }

    /// Alpha in [0,1]; 1.0 for formats without an alpha channel.
    pub fn to_alpha(color: &str) -> Result<f32> {
        Self::detect(color)?.alpha_of(color)
    }

    /// Re-render `color` (any recognized format) in this format.
    ///
    /// Converting to a format without alpha drops the alpha value.
    /// `Hex` output is not zero padded; see [`css::create_hex`].
    ///
    /// ```
    /// use huekit_core::ColorFormat;
    ///
    /// let s = ColorFormat::Hsla.convert("rgba(255,0,0,0.5)").unwrap();
    /// assert_eq!(s, "hsla(0,100%,50%,0.5)");
    /// ```
    pub fn convert(self, color: &str) -> Result<String> {
        let source = Self::detect(color)?;
        let out = match self {
            ColorFormat::Hex => css::create_hex(source.rgb_of(color)?),
            ColorFormat::Rgb => css::create_rgb(source.rgb_of(color)?),
            ColorFormat::Rgba => css::create_rgba(source.alpha_of(color)?, source.rgb_of(color)?),
            ColorFormat::Hsl => css::create_hsl(source.hsl_of(color)?),
            ColorFormat::Hsla => css::create_hsla(source.alpha_of(color)?, source.hsl_of(color)?),
        };
        Ok(out)
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_format() {
        assert_eq!(ColorFormat::detect("#1f77b4").unwrap(), ColorFormat::Hex);
        assert_eq!(ColorFormat::detect("rgb(1,2,3)").unwrap(), ColorFormat::Rgb);
        assert_eq!(ColorFormat::detect("RGBA(1,2,3,0.5)").unwrap(), ColorFormat::Rgba);
        assert_eq!(ColorFormat::detect("Hsl(1,2%,3%)").unwrap(), ColorFormat::Hsl);
        assert_eq!(ColorFormat::detect("hsla(1,2%,3%,0.5)").unwrap(), ColorFormat::Hsla);
    }

    #[test]
    fn unknown_prefix_is_unrecognized() {
        for bad in ["", "red", "hwb(0,0%,0%)", " #fff"] {
            assert!(
                matches!(ColorFormat::detect(bad), Err(HueError::UnrecognizedFormat(_))),
                "{bad:?}"
            );
        }
        assert!(matches!(
            ColorFormat::to_rgb("blue"),
            Err(HueError::UnrecognizedFormat(_))
        ));
    }

    #[test]
    fn is_any_of_checks_every_candidate() {
        let both = [ColorFormat::Rgb, ColorFormat::Rgba];
        assert!(ColorFormat::is_any_of("rgba(0,0,0,1)", &both));
        assert!(!ColorFormat::is_any_of("hsl(0,0%,0%)", &both));
    }

    #[test]
    fn alpha_defaults_to_one() {
        assert_eq!(ColorFormat::to_alpha("#000000").unwrap(), 1.0);
        assert_eq!(ColorFormat::to_alpha("hsl(0,0%,0%)").unwrap(), 1.0);
        assert_eq!(ColorFormat::to_alpha("rgba(0,0,0,0.3)").unwrap(), 0.3);
    }

    #[test]
    fn hsl_input_goes_through_rgb() {
        assert_eq!(ColorFormat::to_rgb("hsl(120,100%,50%)").unwrap(), [0, 255, 0]);
        assert_eq!(ColorFormat::to_hsl("#ff0000").unwrap(), [0, 100, 50]);
        assert_eq!(ColorFormat::to_hsv("rgb(0,0,255)").unwrap(), [240, 100, 100]);
    }

    #[test]
    fn converting_to_opaque_format_drops_alpha() {
        assert_eq!(ColorFormat::Rgb.convert("rgba(1,2,3,0.2)").unwrap(), "rgb(1,2,3)");
        assert_eq!(ColorFormat::Rgba.convert("rgb(1,2,3)").unwrap(), "rgba(1,2,3,1.0)");
    }

    #[test]
    fn hex_output_is_unpadded() {
        assert_eq!(ColorFormat::Hex.convert("rgb(255,8,0)").unwrap(), "#ff80");
    }

    #[test]
    fn parse_name_round_trips_display() {
        for f in ColorFormat::ALL {
            assert_eq!(ColorFormat::parse_name(&f.to_string()).unwrap(), f);
        }
        assert!(ColorFormat::parse_name("cmyk").is_err());
    }
}
