//! Raster data structures and operations

mod geotransform;
mod grid;
mod stack;

pub use geotransform::GeoTransform;
pub use grid::Raster;
pub use stack::RasterStack;
