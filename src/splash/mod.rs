//! Launch screen model: the fixed output specs, source icon lookup and
//! canvas rendering.

mod render;

use std::path::PathBuf;

use crate::error::AssetError;

pub use render::{Placement, icon_placement, render_splash, resize_icon};

/// One launch image to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashSpec {
    pub width: u32,
    pub height: u32,
    /// Output filename within the splash directory
    pub filename: &'static str,
}

impl SplashSpec {
    pub const fn new(width: u32, height: u32, filename: &'static str) -> Self {
        SplashSpec {
            width,
            height,
            filename,
        }
    }
}

/// Pick the first candidate icon that exists on disk.
pub fn resolve_icon(candidates: &[PathBuf]) -> Result<PathBuf, AssetError> {
    candidates
        .iter()
        .find(|path| path.exists())
        .cloned()
        .ok_or_else(|| AssetError::MissingInput {
            tried: candidates.to_vec(),
        })
}
