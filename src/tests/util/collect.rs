use std::convert::Infallible;

use crate::{ListBuilder, ListFormat, Triangle, TriangulationError};

/// Keeps every emitted [Triangle], indices and coordinates both
#[derive(Debug, Default)]
pub struct CollectFormat;

impl ListFormat for CollectFormat {
    type Builder = CollectBuilder;

    fn initialize(self) -> Result<Self::Builder, <Self::Builder as ListBuilder>::Error> {
        Ok(CollectBuilder(Vec::new()))
    }
}

pub struct CollectBuilder(Vec<Triangle>);

impl ListBuilder for CollectBuilder {
    type Output = Vec<Triangle>;
    type Error = Infallible;

    fn add_triangle(&mut self, triangle: &Triangle) -> Result<(), Self::Error> {
        self.0.push(*triangle);
        Ok(())
    }

    fn build(self) -> Result<Self::Output, Self::Error> {
        Ok(self.0)
    }

    fn fail(self, _error: &TriangulationError<Self::Error>) { }
}
