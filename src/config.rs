//! Fixed asset locations resolved against a project root.

use std::path::{Path, PathBuf};

use crate::constants::{
    CANONICAL_ICON, CANONICAL_ICON_SIZE, ICON_CANDIDATES, ICON_DIR, OPTIMIZE_DIRS,
    SPLASH_BACKGROUND, SPLASH_DIR, SPLASH_SPECS,
};
use crate::splash::SplashSpec;

/// Inputs and outputs of the splash generator.
#[derive(Debug, Clone)]
pub struct SplashConfig {
    /// Project root; reported paths are shown relative to it
    pub root: PathBuf,
    /// Candidate source icons, first existing wins
    pub icon_candidates: Vec<PathBuf>,
    /// Large icon generated when missing, never overwritten
    pub canonical_icon: PathBuf,
    pub canonical_icon_size: u32,
    pub output_dir: PathBuf,
    pub specs: Vec<SplashSpec>,
    /// Background as a 6-digit hex string, `#` optional
    pub background: String,
}

impl SplashConfig {
    pub fn new(root: &Path) -> Self {
        let icon_dir = root.join(ICON_DIR);

        SplashConfig {
            root: root.to_path_buf(),
            icon_candidates: ICON_CANDIDATES.iter().map(|name| icon_dir.join(name)).collect(),
            canonical_icon: icon_dir.join(CANONICAL_ICON),
            canonical_icon_size: CANONICAL_ICON_SIZE,
            output_dir: root.join(SPLASH_DIR),
            specs: SPLASH_SPECS.to_vec(),
            background: SPLASH_BACKGROUND.to_string(),
        }
    }
}

/// Directories scanned by the PNG optimizer.
#[derive(Debug, Clone)]
pub struct OptimizeConfig {
    pub root: PathBuf,
    pub dirs: Vec<PathBuf>,
}

impl OptimizeConfig {
    pub fn new(root: &Path) -> Self {
        OptimizeConfig {
            root: root.to_path_buf(),
            dirs: OPTIMIZE_DIRS.iter().map(|dir| root.join(dir)).collect(),
        }
    }
}
