use std::fmt;

/// A clipped ear, listed as (previous vertex, ear tip, next vertex)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Positions of the three vertices in the input polygon
    pub indices: [usize; 3],
    /// Vertex coordinates in the caller's units (never in fixed-point scaled units)
    pub vertices: [[f64; 2]; 3],
}

impl Triangle {
    /// The signed area, positive for counter-clockwise triangles
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        ((b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])) / 2.0
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.vertices;
        write!(f, "({}, {}) ({}, {}) ({}, {})", a[0], a[1], b[0], b[1], c[0], c[1])
    }
}
