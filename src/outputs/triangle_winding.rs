use num_traits::{Signed, Zero};

/// The rotational direction of a polygon boundary or triangle
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TriangleWinding {
    Counterclockwise,
    Clockwise,
}

impl TriangleWinding {
    /// The winding of a signed area, or `None` for a degenerate (zero) area
    pub fn of<A: Signed>(area: A) -> Option<Self> {
        // Floats report a sign for -0.0 and 0.0
        if area.is_zero() {
            None
        } else if area.is_positive() {
            Some(TriangleWinding::Counterclockwise)
        } else if area.is_negative() {
            Some(TriangleWinding::Clockwise)
        } else {
            None
        }
    }
}
