use std::{error, fmt};

use backtrace::Backtrace;

/// Describes a problem with the input [Polygon](crate::Polygon), detected before clipping starts
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum PolygonError {
    /// Fewer than 3 vertices remained after dropping the closing duplicate
    NotEnoughVertices(usize),
    /// The vertex at this input position has a coordinate the [Arithmetic](crate::Arithmetic) backend cannot represent
    InvalidCoordinate(usize),
}

impl error::Error for PolygonError { }

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughVertices(vertices) => write!(f, "Polygon only contains {} vertices", vertices),
            Self::InvalidCoordinate(index) => write!(f, "Vertex {} has a coordinate outside the representable range", index),
        }
    }
}

#[derive(Debug)]
pub struct InternalError {
    pub msg: String,
    pub backtrace: Backtrace,
}

impl InternalError {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:?}", self.msg, self.backtrace)
    }
}

impl error::Error for InternalError { }

/// Describes an error which occurred during triangulation
#[derive(Debug)]
#[non_exhaustive]
pub enum TriangulationError<LBError: error::Error> {
    /// The input polygon was rejected before clipping
    PolygonError(PolygonError),
    /// An invariant of the clipping engine was violated, e.g. the triangulated area
    /// does not match the polygon's integral area. This always indicates a bug or a
    /// precision problem, never a recoverable condition.
    InternalError(InternalError),
    /// The [ListBuilder](crate::ListBuilder) returned an error.
    ListBuilder(LBError),
}

impl<LBError: error::Error> TriangulationError<LBError> {
    #[inline(always)]
    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        TriangulationError::InternalError(InternalError::new(msg))
    }
}

impl<LBError: error::Error> From<LBError> for TriangulationError<LBError> {
    fn from(e: LBError) -> Self {
        Self::ListBuilder(e)
    }
}

impl<LBError: error::Error> fmt::Display for TriangulationError<LBError> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PolygonError(error) => fmt::Display::fmt(error, f),
            Self::InternalError(error) => fmt::Display::fmt(error, f),
            Self::ListBuilder(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl<LBError: error::Error> std::error::Error for TriangulationError<LBError> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PolygonError(error) => Some(error),
            Self::InternalError(error) => Some(error),
            Self::ListBuilder(error) => error.source(), // This should be Some(error), but that forces restricting LBError to 'static.
        }
    }
}
