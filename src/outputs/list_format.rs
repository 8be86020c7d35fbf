use std::error;

use crate::{Triangle, TriangulationError};

/// Describes the construction and layout of a triangle list
pub trait ListFormat {
    /// The type responsible for constructing the triangle list.
    ///
    /// This type can be `Self`, if you choose to implement both [ListFormat] and [ListBuilder] on the same type.
    type Builder: ListBuilder + Sized;

    /// Constructs a [ListFormat::Builder]. Called once the polygon has been accepted,
    /// before the first triangle is clipped.
    fn initialize(self) -> Result<Self::Builder, <Self::Builder as ListBuilder>::Error>;
}

/// Receives triangles in clip order
pub trait ListBuilder {
    /// The triangle list output type
    type Output;
    /// The error type when the builder fails
    type Error: error::Error;

    /// Adds a clipped ear. Degenerate (zero-area) ears are never passed here.
    fn add_triangle(&mut self, triangle: &Triangle) -> Result<(), Self::Error>;

    /// Called when triangulation has completed to get the resulting output
    fn build(self) -> Result<Self::Output, Self::Error>;

    /// Called when triangulation encounters an error.
    ///
    /// Any required cleanup (e.g. removing the partial triangulation added to an existing [Vec]) should be done here
    fn fail(self, error: &TriangulationError<Self::Error>);
}
