// crates/huekit-core/src/palette/palette.rs

use std::fmt;

use crate::color::css::create_hsla;
use crate::error::{HueError, Result};
use crate::scale::linear::LinearScale;
use crate::validate::validate_palette;

/// An immutable, ordered, non-empty list of CSS color strings.
///
/// Colors are stored as given, in any of the recognized syntaxes. Index
/// lookups wrap around, so every integer is a valid index.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorPalette {
    colors: Vec<String>,
}

impl ColorPalette {
    /// Build from a literal list of colors.
    ///
    /// # Errors
    /// `InvalidArgument` for an empty list, `UnrecognizedFormat` for an entry
    /// in none of the five syntaxes.
    pub fn from_list<I, S>(colors: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        validate_palette(&colors)?;
        Ok(Self { colors })
    }

    /// One `hsla(..)` entry per integer hue in `[start, finish)`, walking
    /// upward when `start < finish` and downward otherwise. `finish` is
    /// never included.
    ///
    /// ```
    /// use huekit_core::ColorPalette;
    ///
    /// let p = ColorPalette::from_hue_range(5, 3, 100, 50, 1.0).unwrap();
    /// assert_eq!(p.colors(), ["hsla(5,100%,50%,1.0)", "hsla(4,100%,50%,1.0)"]);
    /// ```
    ///
    /// # Errors
    /// `InvalidArgument` when `start == finish` (the palette would be empty).
    pub fn from_hue_range(start: i32, finish: i32, s: i32, l: i32, a: f32) -> Result<Self> {
        let hsla = |h: i32| create_hsla(a, [h, s, l]);
        let colors: Vec<String> = if start < finish {
            (start..finish).map(hsla).collect()
        } else {
            (finish..=start).rev().take_while(|&h| h > finish).map(hsla).collect()
        };
        if colors.is_empty() {
            return Err(HueError::InvalidArgument(format!(
                "hue range [{start}, {finish}) is empty"
            )));
        }
        Self::from_list(colors)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.colors.len()
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.colors.clone()
    }

    /// Color at `n mod size`, corrected into `0..size` for negative `n`.
    pub fn color_at(&self, n: i64) -> &str {
        // size >= 1 is guaranteed by construction.
        let idx = n.rem_euclid(self.colors.len() as i64) as usize;
        &self.colors[idx]
    }

    /// Pass `n` through `scale` (or use it directly when `None`), round half
    /// away from zero, then look up as in [`ColorPalette::color_at`].
    ///
    /// # Errors
    /// Propagates a zero-width scale domain; `InvalidArgument` if the
    /// resulting index is not finite.
    pub fn color_at_scaled(&self, n: f64, scale: Option<&LinearScale>) -> Result<&str> {
        let pos = match scale {
            Some(s) => s.apply(n)?,
            None => n,
        };
        if !pos.is_finite() {
            return Err(HueError::InvalidArgument(format!(
                "palette position is not finite: {pos}"
            )));
        }
        Ok(self.color_at(pos.round() as i64))
    }

    /// A scale mapping `[domain_min, domain_max]` onto this palette's indices.
    pub fn scale_for(&self, domain_min: f64, domain_max: f64) -> LinearScale {
        let mut s = LinearScale::new();
        s.set_domain(domain_min, domain_max)
            .set_range(0.0, (self.size() - 1) as f64);
        s
    }

    /// A new palette in reverse order; `self` is untouched.
    pub fn reverse(&self) -> ColorPalette {
        let mut colors = self.colors.clone();
        colors.reverse();
        Self { colors }
    }
}

impl fmt::Display for ColorPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorPalette[{}]", self.colors.join(", "))
    }
}
