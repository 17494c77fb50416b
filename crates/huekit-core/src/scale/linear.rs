// crates/huekit-core/src/scale/linear.rs
//
// Affine mapping between two scalar intervals, d3.scale.linear() style.
// Bounds do not have to be ordered: min > max simply reverses the direction.

use std::fmt;

use crate::error::{HueError, Result};

/// Maps a domain `[domain_min, domain_max]` onto a range `[range_min, range_max]`.
///
/// Defaults to domain `[0, 1]` and range `[0, 1]`.
///
/// ```
/// use huekit_core::LinearScale;
///
/// let mut s = LinearScale::new();
/// s.set_domain(10.0, 20.0).set_range(0.0, 5.0);
/// assert_eq!(s.apply(15.0).unwrap(), 2.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl Default for LinearScale {
    fn default() -> Self {
        Self {
            domain_min: 0.0,
            domain_max: 1.0,
            range_min: 0.0,
            range_max: 1.0,
        }
    }
}

impl LinearScale {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[inline]
    pub fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }

    pub fn set_domain(&mut self, min: f64, max: f64) -> &mut Self {
        self.domain_min = min;
        self.domain_max = max;
        self
    }

    pub fn set_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.range_min = min;
        self.range_max = max;
        self
    }

    /// Independent copy; mutating it never touches `self`.
    #[inline]
    pub fn copy(&self) -> LinearScale {
        *self
    }

    /// Swap domain and range in place.
    pub fn invert(&mut self) -> &mut Self {
        std::mem::swap(&mut self.domain_min, &mut self.range_min);
        std::mem::swap(&mut self.domain_max, &mut self.range_max);
        self
    }

    /// Map `x` from the domain into the range.
    ///
    /// # Errors
    /// `InvalidArgument` when the domain has zero width.
    pub fn apply(&self, x: f64) -> Result<f64> {
        let width = self.domain_max - self.domain_min;
        if width == 0.0 {
            return Err(HueError::InvalidArgument(format!(
                "linear scale domain has zero width ([{}, {}])",
                self.domain_min, self.domain_max
            )));
        }
        Ok((self.range_max - self.range_min) * (x - self.domain_min) / width + self.range_min)
    }

    /// Map `x` from the range back into the domain. `self` is left unchanged.
    ///
    /// # Errors
    /// `InvalidArgument` when the range has zero width.
    pub fn apply_inverse(&self, x: f64) -> Result<f64> {
        self.copy().invert().apply(x)
    }

    /// The current mapping as a closure over a private copy.
    pub fn mapping(&self) -> impl Fn(f64) -> Result<f64> {
        let s = self.copy();
        move |x| s.apply(x)
    }

    /// The inverted mapping as a closure over a private copy.
    pub fn inverted_mapping(&self) -> impl Fn(f64) -> Result<f64> {
        let s = self.copy();
        move |x| s.apply_inverse(x)
    }
}

impl fmt::Display for LinearScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LinearScale[domain: [{}, {}], range: [{}, {}]]",
            self.domain_min, self.domain_max, self.range_min, self.range_max
        )
    }
}
