pub mod filesystem;
pub mod polygon;
