//! Generate the canonical large icon and the iOS launch images.

use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::config::SplashConfig;
use crate::constants::ICON_SCALE;
use crate::error::AssetError;
use crate::splash::{self, render_splash, resize_icon};
use crate::utils::color::hex_to_rgb;
use crate::utils::png::{load_image, write_png};

/// Generate launch images from the first available source icon.
///
/// The canonical icon is only written when it doesn't exist yet; launch
/// images are always overwritten. Missing icons and bad colors are reported
/// before anything is written.
///
/// `on_written` is called with each path right after it is saved. Returns
/// every written path in order.
pub fn run<F>(config: &SplashConfig, mut on_written: Option<F>) -> Result<Vec<PathBuf>, AssetError>
where
    F: FnMut(&Path),
{
    let icon_path = splash::resolve_icon(&config.icon_candidates)?;
    let background = hex_to_rgb(&config.background)?;

    log::info!("Using source icon {}", icon_path.display());
    let icon = load_image(&icon_path)?.to_rgba8();

    let mut written = Vec::new();
    let mut report = |path: PathBuf| {
        if let Some(ref mut callback) = on_written {
            callback(path.as_path());
        }
        written.push(path);
    };

    if config.canonical_icon.exists() {
        log::debug!("Keeping existing {}", config.canonical_icon.display());
    } else {
        let size = config.canonical_icon_size;
        let upscaled = DynamicImage::ImageRgba8(resize_icon(&icon, size)).to_rgb8();
        write_png(&config.canonical_icon, &DynamicImage::ImageRgb8(upscaled))?;
        report(config.canonical_icon.clone());
    }

    fs::create_dir_all(&config.output_dir).map_err(|source| AssetError::CreateDir {
        path: config.output_dir.clone(),
        source,
    })?;

    for spec in &config.specs {
        log::debug!("Rendering {}x{} launch image", spec.width, spec.height);
        let splash = render_splash(&icon, spec, background, ICON_SCALE);

        let out_path = config.output_dir.join(spec.filename);
        write_png(&out_path, &DynamicImage::ImageRgb8(splash))?;
        report(out_path);
    }

    Ok(written)
}
