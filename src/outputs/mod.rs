pub mod formats;

mod list;
pub use list::List;
mod list_format;
pub use list_format::{ListFormat, ListBuilder};
mod triangle;
pub use triangle::Triangle;
mod triangle_winding;
pub use triangle_winding::TriangleWinding;
