pub mod color;
pub mod dir_scan;
pub mod png;
