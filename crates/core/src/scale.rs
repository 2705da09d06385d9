//! Rescaling from source units per em to the output resolution.

use font_outline::round_half_up;
use kurbo::Affine;

use crate::{Error, Result, config::RESOLUTION};

/// Scale factor from a font's design grid to [`RESOLUTION`] units per em.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    units_per_em: u16,
    factor: f64,
}

impl Scale {
    /// Build the scale for a font with `units_per_em` design units.
    ///
    /// A zero value cannot be scaled and is rejected.
    pub fn new(units_per_em: u16) -> Result<Self> {
        if units_per_em == 0 {
            return Err(Error::InvalidUnitsPerEm(units_per_em));
        }
        let factor = f64::from(RESOLUTION) / f64::from(units_per_em);
        Ok(Self { units_per_em, factor })
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Scale without rounding.
    pub fn apply(&self, value: impl Into<f64>) -> f64 {
        value.into() * self.factor
    }

    /// Scale, then round the way typeface runtimes do.
    pub fn round(&self, value: impl Into<f64>) -> i64 {
        round_half_up(self.apply(value))
    }

    /// The scale as a transform for outline geometry.
    pub fn affine(&self) -> Affine {
        Affine::scale(self.factor)
    }
}
