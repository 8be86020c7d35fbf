use core::fmt;
use std::fmt::Debug;

use num_traits::real::Real;

/// A two-dimensional point.
///
/// The coordinate type must implement [num_traits::real::Real], reexported as [crate::Real].
pub trait Vertex {
    /// The type of the individual `x` and `y` coordinates
    type Coordinate: Real;

    /// The x [Vertex::Coordinate] value
    fn x(&self) -> Self::Coordinate;
    /// The y [Vertex::Coordinate] value
    fn y(&self) -> Self::Coordinate;
}

/// A point in the representation of an [Arithmetic](crate::Arithmetic) backend
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Coords<C: Copy>(pub [C; 2]);

impl<C: Copy> Coords<C> {
    pub fn new(x: C, y: C) -> Self { Self([x, y]) }

    pub fn x(&self) -> C { self.0[0] }
    pub fn y(&self) -> C { self.0[1] }
}

impl<C: Copy + fmt::Debug> fmt::Debug for Coords<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Coords")
            .field(&self.x())
            .field(&self.y())
            .finish()
    }
}

impl<C: Copy + fmt::Display> fmt::Display for Coords<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

impl<C: Debug + Real> Vertex for [C; 2] {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self[1]
    }
}

impl<C: Debug + Real> Vertex for (C, C) {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.1
    }
}
