use crate::{Arithmetic, EarClipper, ListBuilder, ListFormat, Triangulation, TriangulationError};

use super::vertex::Vertex;

/// An indexable, ordered ring of vertices.
///
/// Vertices are listed in either clockwise or counter-clockwise order. Repeating the
/// first vertex at the end is allowed; the duplicate is ignored. Holes are expressed by
/// walking from the outer boundary to the hole, around the hole in the opposite
/// direction, and back along the same edge.
pub trait Polygon<'a>: Copy {
    /// The type of vertices of the polygon.
    type Vertex: 'a + Vertex;

    /// Provides the number of vertices.
    fn vertex_count(self) -> usize;

    /// Get the `Vertex` at position `index`
    fn get_vertex(self, index: usize) -> &'a Self::Vertex;
}

/// `Triangulate` provides the `triangulate()` function to implementers of `Polygon`.
///
/// This trait is sealed and is not intended to be manually implemented.
pub trait Triangulate<'a, P: Polygon<'a>>: private::Sealed {
    /// Triangulates this `Polygon` by ear clipping with the given arithmetic backend.
    ///
    /// Triangles are fed to the builder created by `format` in clip order.
    fn triangulate<A: Arithmetic, F: ListFormat>(self, arithmetic: A, format: F) -> Result<Triangulation<<F::Builder as ListBuilder>::Output>, TriangulationError<<F::Builder as ListBuilder>::Error>>;
}

impl<'a, P: Polygon<'a>> Triangulate<'a, P> for P {
    #[inline]
    fn triangulate<A: Arithmetic, F: ListFormat>(self, arithmetic: A, format: F) -> Result<Triangulation<<F::Builder as ListBuilder>::Output>, TriangulationError<<F::Builder as ListBuilder>::Error>> {
        EarClipper::new(arithmetic, self)
            .map_err(TriangulationError::PolygonError)?
            .clip(format)
    }
}

impl<'a, V: Vertex> Polygon<'a> for &'a Vec<V> {
    type Vertex = V;

    fn vertex_count(self) -> usize {
        self.len()
    }

    fn get_vertex(self, index: usize) -> &'a Self::Vertex {
        &self[index]
    }
}

impl<'a, V: Vertex> Polygon<'a> for &'a [V] {
    type Vertex = V;

    fn vertex_count(self) -> usize {
        self.len()
    }

    fn get_vertex(self, index: usize) -> &'a Self::Vertex {
        &self[index]
    }
}

mod private {
    pub trait Sealed { }

    impl<'a, P: super::Polygon<'a>> Sealed for P { }
}
