mod polygon;
pub use polygon::{Polygon, Triangulate};
mod vertex;
pub use vertex::{Vertex, Coords};
