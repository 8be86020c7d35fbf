//! Numeric backends for the clipping engine.
//!
//! All areas handled by a backend are *doubled* signed areas (raw cross products), so
//! that the fixed-point backend never has to divide.

use std::{fmt, ops::AddAssign};

use num_traits::{Signed, Zero};

use crate::Coords;

/// The arithmetic mode a backend runs in, as reported in a [Report](crate::Report)
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ArithmeticMode {
    Fixed,
    Floating,
}

impl fmt::Display for ArithmeticMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArithmeticMode::Fixed => "fixed",
            ArithmeticMode::Floating => "floating",
        })
    }
}

/// A coordinate representation together with the signed-area operations the
/// clipping engine needs.
pub trait Arithmetic: Copy + fmt::Debug {
    /// The internal coordinate type
    type Coordinate: Copy + PartialOrd + fmt::Debug;
    /// The type of doubled signed areas
    type Area: Signed + PartialOrd + Copy + AddAssign + fmt::Debug;

    fn mode(&self) -> ArithmeticMode;

    /// Converts an input coordinate, or returns `None` if it can't be represented
    fn coordinate(&self, value: f64) -> Option<Self::Coordinate>;

    /// Converts an internal coordinate back to the caller's units
    fn to_real(&self, coordinate: Self::Coordinate) -> f64;

    /// Converts a doubled internal area to an area in the caller's units
    fn area_to_real(&self, area: Self::Area) -> f64;

    /// The unsnapped cross product of `(b - a)` and `(c - a)`
    fn cross(&self, a: Coords<Self::Coordinate>, b: Coords<Self::Coordinate>, c: Coords<Self::Coordinate>) -> Self::Area;

    /// `(p0.y + p1.y) * (p1.x - p0.x)`, one edge's term of the polygon integral
    fn trapezoid(&self, p0: Coords<Self::Coordinate>, p1: Coords<Self::Coordinate>) -> Self::Area;

    /// Areas which should be treated as exactly zero are mapped to zero
    fn snap(&self, area: Self::Area) -> Self::Area {
        area
    }

    /// The largest difference allowed between the integral and triangulated areas
    fn tolerance(&self) -> Self::Area {
        Self::Area::zero()
    }

    fn coords(&self, x: f64, y: f64) -> Option<Coords<Self::Coordinate>> {
        Some(Coords::new(self.coordinate(x)?, self.coordinate(y)?))
    }
}

/// Exact 64 bit fixed-point arithmetic.
///
/// Input coordinates are multiplied by `scale` and rounded to the nearest integer.
/// Areas are computed in `i128`, so no operation can lose precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPoint {
    scale: i64,
}

impl FixedPoint {
    /// Units per input unit. 10⁷ resolves 0.1 µm on millimetre board coordinates.
    pub const DEFAULT_SCALE: i64 = 10_000_000;

    /// Scaled magnitudes are limited to the range `f64` represents exactly. This
    /// keeps every cross product and area sum well inside `i128`.
    pub const MAX_MAGNITUDE: i64 = 1 << 53;

    /// # Panics
    /// Panics if `scale` is not positive.
    pub fn new(scale: i64) -> Self {
        assert!(scale > 0, "fixed-point scale must be positive");
        Self { scale }
    }

    pub fn scale(&self) -> i64 {
        self.scale
    }
}

impl Default for FixedPoint {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SCALE)
    }
}

impl Arithmetic for FixedPoint {
    type Coordinate = i64;
    type Area = i128;

    fn mode(&self) -> ArithmeticMode {
        ArithmeticMode::Fixed
    }

    fn coordinate(&self, value: f64) -> Option<Self::Coordinate> {
        let scaled = (value * self.scale as f64).round();
        let scaled: i64 = num_traits::cast(scaled)?;
        if scaled.abs() <= Self::MAX_MAGNITUDE {
            Some(scaled)
        } else {
            None
        }
    }

    fn to_real(&self, coordinate: Self::Coordinate) -> f64 {
        coordinate as f64 / self.scale as f64
    }

    fn area_to_real(&self, area: Self::Area) -> f64 {
        let scale = self.scale as f64;
        area as f64 / scale / scale / 2.0
    }

    fn cross(&self, a: Coords<i64>, b: Coords<i64>, c: Coords<i64>) -> i128 {
        let (ax, ay) = (a.x() as i128, a.y() as i128);
        (b.x() as i128 - ax) * (c.y() as i128 - ay) - (b.y() as i128 - ay) * (c.x() as i128 - ax)
    }

    fn trapezoid(&self, p0: Coords<i64>, p1: Coords<i64>) -> i128 {
        (p0.y() as i128 + p1.y() as i128) * (p1.x() as i128 - p0.x() as i128)
    }
}

/// `f64` arithmetic where areas no larger than `epsilon` count as zero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingPoint {
    epsilon: f64,
}

impl FloatingPoint {
    pub const DEFAULT_EPSILON: f64 = 1e-8;

    /// # Panics
    /// Panics if `epsilon` is negative or not finite.
    pub fn new(epsilon: f64) -> Self {
        assert!(epsilon.is_finite() && epsilon >= 0.0, "epsilon must be finite and non-negative");
        Self { epsilon }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Default for FloatingPoint {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EPSILON)
    }
}

impl Arithmetic for FloatingPoint {
    type Coordinate = f64;
    type Area = f64;

    fn mode(&self) -> ArithmeticMode {
        ArithmeticMode::Floating
    }

    fn coordinate(&self, value: f64) -> Option<Self::Coordinate> {
        if value.is_finite() {
            Some(value)
        } else {
            None
        }
    }

    fn to_real(&self, coordinate: Self::Coordinate) -> f64 {
        coordinate
    }

    fn area_to_real(&self, area: Self::Area) -> f64 {
        area / 2.0
    }

    fn cross(&self, a: Coords<f64>, b: Coords<f64>, c: Coords<f64>) -> f64 {
        (b.x() - a.x()) * (c.y() - a.y()) - (b.y() - a.y()) * (c.x() - a.x())
    }

    fn trapezoid(&self, p0: Coords<f64>, p1: Coords<f64>) -> f64 {
        (p0.y() + p1.y()) * (p1.x() - p0.x())
    }

    fn snap(&self, area: f64) -> f64 {
        if area.abs() <= self.epsilon {
            0.0
        } else {
            area
        }
    }

    fn tolerance(&self) -> f64 {
        self.epsilon
    }
}
