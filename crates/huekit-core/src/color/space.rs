// crates/huekit-core/src/color/space.rs
//
// RGB <-> HSL <-> HSV on integer channel triples.
//
// Assumed ranges (never clamped here):
//   RGB: each channel 0..=255
//   HSL: h 0..=360, s/l 0..=100
//   HSV: h 0..=360, s/v 0..=100
//
// Arithmetic is single precision and every output channel is rounded
// half-up on its own, so results are stable across platforms.

use crate::error::{HueError, Result};

/// Three channel values; meaning depends on the color space.
pub type Channels = [i32; 3];

/// Take the first three values of `values`; extra values are ignored.
pub fn channels_from_slice(values: &[i32]) -> Result<Channels> {
    match values {
        [a, b, c, ..] => Ok([*a, *b, *c]),
        _ => Err(HueError::InvalidArgument(format!(
            "expected 3 channel values, got {}",
            values.len()
        ))),
    }
}

#[inline]
fn round_half_up(x: f32) -> i32 {
    (x + 0.5).floor() as i32
}

#[inline]
fn normalize_rgb(rgb: Channels) -> (f32, f32, f32) {
    (
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
    )
}

/// Hue in [0,1) from normalized channels, given `max != min`.
#[inline]
fn hue_fraction(r: f32, g: f32, b: f32, max: f32, d: f32) -> f32 {
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h / 6.0
}

pub fn rgb_to_hsl(rgb: Channels) -> Channels {
    let (r, g, b) = normalize_rgb(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        (hue_fraction(r, g, b, max, d), s)
    };

    [
        round_half_up(h * 360.0),
        round_half_up(s * 100.0),
        round_half_up(l * 100.0),
    ]
}

#[inline]
fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// HSL to RGB.
///
/// Zero saturation yields black regardless of lightness; callers relying on
/// the usual `r = g = b = l` gray must special-case it themselves.
pub fn hsl_to_rgb(hsl: Channels) -> Channels {
    let h = hsl[0] as f32 / 360.0;
    let s = hsl[1] as f32 / 100.0;
    let l = hsl[2] as f32 / 100.0;

    let (r, g, b) = if s == 0.0 {
        (0.0, 0.0, 0.0)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    [
        round_half_up(r * 255.0),
        round_half_up(g * 255.0),
        round_half_up(b * 255.0),
    ]
}

pub fn rgb_to_hsv(rgb: Channels) -> Channels {
    let (r, g, b) = normalize_rgb(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = if max == min {
        0.0
    } else {
        hue_fraction(r, g, b, max, d)
    };

    [
        round_half_up(h * 360.0),
        round_half_up(s * 100.0),
        round_half_up(v * 100.0),
    ]
}

pub fn hsv_to_rgb(hsv: Channels) -> Channels {
    let h = hsv[0] as f32 / 360.0;
    let s = hsv[1] as f32 / 100.0;
    let v = hsv[2] as f32 / 100.0;

    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    [
        round_half_up(r * 255.0),
        round_half_up(g * 255.0),
        round_half_up(b * 255.0),
    ]
}

/// Chained through RGB; there is no direct formula.
pub fn hsv_to_hsl(hsv: Channels) -> Channels {
    rgb_to_hsl(hsv_to_rgb(hsv))
}

/// Chained through RGB; there is no direct formula.
pub fn hsl_to_hsv(hsl: Channels) -> Channels {
    rgb_to_hsv(hsl_to_rgb(hsl))
}
