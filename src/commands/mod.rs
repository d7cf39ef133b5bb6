pub mod png_optimize;
pub mod splash_generate;

use std::path::Path;

/// Display `path` relative to `root` when it lives under it.
pub fn relative_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
