// crates/huekit-core/src/color/parse.rs
//
// Field extraction for the five CSS color syntaxes.
// These only read numbers out of an already-detected string; they do not
// validate the rest of the syntax.

use crate::color::space::Channels;
use crate::error::{HueError, Result};

/// Read field `n` (zero-based) of a parenthesized color such as
/// `hsla(100, 100%, 50%, 0.5)`. A trailing `%` is ignored.
pub fn paren_field(color: &str, n: usize) -> Result<f32> {
    let s = color.trim();
    let left = s
        .find('(')
        .ok_or_else(|| HueError::malformed(color, "missing '('"))?;
    let right = s
        .find(')')
        .ok_or_else(|| HueError::malformed(color, "missing ')'"))?;
    if right < left {
        return Err(HueError::malformed(color, "')' before '('"));
    }

    let field = s[left + 1..right]
        .split(',')
        .nth(n)
        .ok_or_else(|| HueError::malformed(color, format!("missing field {n}")))?
        .trim();
    let field = field.strip_suffix('%').unwrap_or(field);

    field
        .parse::<f32>()
        .map_err(|e| HueError::malformed(color, format!("field {n} ({field:?}): {e}")))
}

/// The first three parenthesized fields, truncated toward zero.
pub fn paren_channels(color: &str) -> Result<Channels> {
    Ok([
        paren_field(color, 0)? as i32,
        paren_field(color, 1)? as i32,
        paren_field(color, 2)? as i32,
    ])
}

/// `#RRGGBB` -> `[r, g, b]`. Characters past position 6 are ignored.
pub fn hex_channels(color: &str) -> Result<Channels> {
    let c = color.trim();
    let mut rgb = [0i32; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        let start = i * 2 + 1;
        let digits = c
            .get(start..start + 2)
            .ok_or_else(|| HueError::malformed(color, "hex color needs 6 digits"))?;
        *channel = i32::from_str_radix(digits, 16)
            .map_err(|e| HueError::malformed(color, format!("hex digits {digits:?}: {e}")))?;
    }
    Ok(rgb)
}
