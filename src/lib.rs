//! Ear-clipping triangulation of simple polygons.
//!
//! Polygons may touch themselves, which allows holes: a hole is joined to the outer
//! boundary by a pair of coincident edges running in opposite directions. Geometric
//! predicates run on an [Arithmetic] backend, either exact [FixedPoint] integers or
//! [FloatingPoint] numbers with an epsilon. Every triangulation is checked against the
//! polygon's integral area before it is reported as successful.

mod idx;
mod ring;
mod math;
mod arithmetic;
mod clipper;
mod report;
mod inputs;
mod outputs;
mod errors;

#[cfg(feature = "debugging")]
mod debug;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use errors::{TriangulationError, PolygonError, InternalError};
pub use arithmetic::{Arithmetic, ArithmeticMode, FixedPoint, FloatingPoint};
pub use math::{signed_area, point_strictly_inside_triangle, point_on_open_segment, integrate_polygon};
pub use clipper::EarClipper;
pub use report::{Report, Triangulation};

pub use inputs::*;
pub use outputs::*;

pub use num_traits::real::Real;
