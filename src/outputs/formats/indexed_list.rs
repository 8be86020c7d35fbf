use crate::{ListFormat, TriangulationError, List, ListBuilder, Triangle};

use super::GenericList;

/// A [ListFormat] which outputs the triangle list by the vertices' positions in the input polygon
#[derive(Debug)]
pub struct IndexedListFormat<L: List<usize>> {
    list: L,
}

impl<L: List<usize>> IndexedListFormat<L> {
    /// Create an indexed format which stores its output in the given [List]
    pub fn new(list: L) -> Self {
        Self { list }
    }
}

impl<L: List<usize>> ListFormat for IndexedListFormat<L> {
    type Builder = IndexedListBuilder<L>;

    fn initialize(self) -> Result<Self::Builder, <Self::Builder as ListBuilder>::Error> {
        Ok(IndexedListBuilder { list: GenericList::new(self.list) })
    }
}

pub struct IndexedListBuilder<L: List<usize>> {
    list: GenericList<L, usize>,
}

impl<L: List<usize>> ListBuilder for IndexedListBuilder<L> {
    type Output = L;
    type Error = std::convert::Infallible;

    fn add_triangle(&mut self, triangle: &Triangle) -> Result<(), Self::Error> {
        let [vi0, vi1, vi2] = triangle.indices;
        self.list.new_triangle(vi0, vi1, vi2);
        Ok(())
    }

    fn build(self) -> Result<Self::Output, Self::Error> {
        Ok(self.list.build())
    }

    fn fail(self, _error: &TriangulationError<Self::Error>) {
        self.list.fail();
    }
}
