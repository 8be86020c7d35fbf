use std::fmt;

use crate::{ArithmeticMode, TriangleWinding};

/// Diagnostics produced when clipping terminates.
///
/// Areas are real (not doubled, not scaled) signed areas, so they can be compared
/// across arithmetic modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub mode: ArithmeticMode,
    /// Winding of the input polygon, `None` if it encloses no area
    pub winding: Option<TriangleWinding>,
    pub area_from_integral: f64,
    pub area_from_triangulation: f64,
    /// Number of triangles passed to the builder
    pub triangles: usize,
    /// Number of vertices removed without emitting a triangle
    pub degenerate: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Using {} point arithmetic", self.mode)?;
        writeln!(f, "area_from_integral      = {:.20}", self.area_from_integral.abs())?;
        write!(f, "area_from_triangulation = {:.20}", self.area_from_triangulation.abs())
    }
}

/// The output of a successful triangulation
#[derive(Debug)]
pub struct Triangulation<O> {
    /// What the [ListBuilder](crate::ListBuilder) built
    pub output: O,
    pub report: Report,
}
