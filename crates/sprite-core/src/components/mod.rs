pub mod raster;
pub mod sprite;
