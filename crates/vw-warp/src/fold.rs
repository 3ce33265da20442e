use core::f64::consts::PI;

use vw_core::{Coordinate, Error, Shape};

use crate::warp::WarpFn;

/// N-fold radial fold: the polar angle is multiplied by `factor` and reduced
/// with a truncating remainder by a full turn. Radius is unchanged.
///
/// `a = atan2(d.row, d.col)`; the source is
/// `(center.row + r cos a', center.col + r sin a')`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialFold {
    pub center: Coordinate,
    pub factor: u32,
}

impl RadialFold {
    pub fn new(center: Coordinate, factor: u32) -> Self {
        Self { center, factor }
    }

    pub fn centered(shape: Shape, factor: u32) -> Self {
        Self::new(shape.center(), factor)
    }
}

impl WarpFn for RadialFold {
    fn warp(&self, dst: Coordinate) -> Coordinate {
        let d = dst - self.center;
        let a = d.row.atan2(d.col);
        let r = (d.row * d.row + d.col * d.col).sqrt();
        // `%` on f64 keeps the sign of the dividend.
        let a = (f64::from(self.factor) * a) % (PI * 2.0);
        Coordinate::new(self.center.row + a.cos() * r, self.center.col + a.sin() * r)
    }
}

/// Radial ripple with a rational angle multiplier.
///
/// `r' = r * (1 + amplitude * sin(frequency * r))` and
/// `a' = a * numerator / denominator`, with `a = atan2(d.row, d.col)`. The
/// angle is not reduced, so non-integer multipliers leave a seam along the
/// negative column axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleFold {
    center: Coordinate,
    amplitude: f64,
    frequency: f64,
    numerator: u32,
    denominator: u32,
}

impl RippleFold {
    pub fn new(
        center: Coordinate,
        amplitude: f64,
        frequency: f64,
        numerator: u32,
        denominator: u32,
    ) -> Result<Self, Error> {
        if denominator == 0 {
            return Err(Error::InvalidParameter(
                "ripple angle multiplier denominator must be positive",
            ));
        }
        Ok(Self {
            center,
            amplitude,
            frequency,
            numerator,
            denominator,
        })
    }

    pub fn centered(
        shape: Shape,
        amplitude: f64,
        frequency: f64,
        numerator: u32,
        denominator: u32,
    ) -> Result<Self, Error> {
        Self::new(shape.center(), amplitude, frequency, numerator, denominator)
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Angle multiplier as `(numerator, denominator)`.
    pub fn multiplier(&self) -> (u32, u32) {
        (self.numerator, self.denominator)
    }
}

impl WarpFn for RippleFold {
    fn warp(&self, dst: Coordinate) -> Coordinate {
        let d = dst - self.center;
        let a = d.row.atan2(d.col);
        let r = d.row.hypot(d.col);
        let r = r * (1.0 + self.amplitude * (self.frequency * r).sin());
        let a = a * f64::from(self.numerator) / f64::from(self.denominator);
        Coordinate::new(self.center.row + a.cos() * r, self.center.col + a.sin() * r)
    }
}
