use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AssetError;

const PNG_EXTENSION: &str = "png";

/// Recursively list every `.png` file under the given roots.
/// Roots that don't exist are skipped. Entries within a directory are
/// visited in name order so repeated runs see the same sequence.
pub fn find_pngs(roots: &[PathBuf]) -> Result<Vec<PathBuf>, AssetError> {
    let mut pngs = Vec::new();

    for root in roots {
        if !root.is_dir() {
            log::debug!("Skipping missing directory {}", root.display());
            continue;
        }
        collect_pngs(root, &mut pngs)?;
    }

    Ok(pngs)
}

fn collect_pngs(dir: &Path, pngs: &mut Vec<PathBuf>) -> Result<(), AssetError> {
    let read_err = |source| AssetError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        entries.push(entry.map_err(read_err)?);
    }
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|source| AssetError::Read {
            path: path.clone(),
            source,
        })?;

        if file_type.is_dir() {
            collect_pngs(&path, pngs)?;
        } else if is_png(&path) && path.is_file() {
            pngs.push(path);
        }
    }

    Ok(())
}

fn is_png(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(PNG_EXTENSION)
}
