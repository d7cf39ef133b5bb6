pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod splash;
pub mod utils;

pub use error::AssetError;
