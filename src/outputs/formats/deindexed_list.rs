use crate::{ListFormat, TriangulationError, List, ListBuilder, Triangle};

use super::GenericList;

/// A [ListFormat] which outputs the triangle list by vertex coordinates, not their indices
#[derive(Debug)]
pub struct DeindexedListFormat<L: List<[f64; 2]>> {
    list: L,
}

impl<L: List<[f64; 2]>> DeindexedListFormat<L> {
    /// Create a deindexed format which stores its output in the given [List]
    pub fn new(list: L) -> Self {
        Self { list }
    }
}

impl<L: List<[f64; 2]>> ListFormat for DeindexedListFormat<L> {
    type Builder = DeindexedListBuilder<L>;

    fn initialize(self) -> Result<Self::Builder, <Self::Builder as ListBuilder>::Error> {
        Ok(DeindexedListBuilder { list: GenericList::new(self.list) })
    }
}

pub struct DeindexedListBuilder<L: List<[f64; 2]>> {
    list: GenericList<L, [f64; 2]>,
}

impl<L: List<[f64; 2]>> ListBuilder for DeindexedListBuilder<L> {
    type Output = L;
    type Error = std::convert::Infallible;

    fn add_triangle(&mut self, triangle: &Triangle) -> Result<(), Self::Error> {
        let [v0, v1, v2] = triangle.vertices;
        self.list.new_triangle(v0, v1, v2);
        Ok(())
    }

    fn build(self) -> Result<Self::Output, Self::Error> {
        Ok(self.list.build())
    }

    fn fail(self, _error: &TriangulationError<Self::Error>) {
        self.list.fail();
    }
}
