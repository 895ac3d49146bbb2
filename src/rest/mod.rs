pub mod error;
pub mod polygons;
