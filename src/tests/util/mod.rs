pub mod polygon;
mod load_polygon;
mod vtest;
mod collect;
use std::{env, path};

pub use vtest::VTest;
pub use load_polygon::load_polygon;
pub use collect::CollectFormat;

pub fn polygons_path() -> path::PathBuf {
    path::Path::new(&env::var("CARGO_MANIFEST_DIR").unwrap()).join("resources").join("polygons")
}

/// Every polygon file under `resources/polygons`, with its file name
pub fn resource_polygons() -> Vec<(String, Vec<[f64; 2]>)> {
    let mut polygons = Vec::new();
    for file in std::fs::read_dir(polygons_path()).unwrap() {
        let file = file.unwrap();
        let polygon = load_polygon(file.path().to_str().unwrap()).unwrap();
        polygons.push((file.file_name().to_string_lossy().into_owned(), polygon));
    }
    polygons.sort_by(|a, b| a.0.cmp(&b.0));
    polygons
}
