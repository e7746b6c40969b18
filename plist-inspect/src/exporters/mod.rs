pub mod exporter;
pub mod json;
pub mod summary;
pub mod txt;
