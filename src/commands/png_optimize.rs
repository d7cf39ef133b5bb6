//! Re-compress PNG assets in place.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::OptimizeConfig;
use crate::error::AssetError;
use crate::utils::dir_scan::find_pngs;
use crate::utils::png::recompress_png;

/// Size of one file before and after re-encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSavings {
    pub path: PathBuf,
    pub before: u64,
    pub after: u64,
}

/// Totals across every optimized file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizeSummary {
    pub files: usize,
    pub bytes_before: u64,
    pub bytes_after: u64,
}

impl OptimizeSummary {
    pub fn record(&mut self, savings: &FileSavings) {
        self.files += 1;
        self.bytes_before += savings.before;
        self.bytes_after += savings.after;
    }

    /// Bytes saved; negative if the files grew.
    pub fn saved_bytes(&self) -> i64 {
        self.bytes_before as i64 - self.bytes_after as i64
    }

    /// Reduction as a percentage of the original size, 0 when nothing was processed.
    pub fn percent_saved(&self) -> f64 {
        if self.bytes_before == 0 {
            return 0.0;
        }
        self.saved_bytes() as f64 / self.bytes_before as f64 * 100.0
    }
}

impl fmt::Display for OptimizeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let saved = self.saved_bytes();
        let sign = if saved < 0 { '+' } else { '-' };
        write!(
            f,
            "Optimized {} PNGs: {} -> {} bytes ({}{} bytes, {:.2}%)",
            self.files,
            self.bytes_before,
            self.bytes_after,
            sign,
            saved.unsigned_abs(),
            self.percent_saved()
        )
    }
}

/// Re-encode a PNG losslessly with maximum compression and overwrite it.
///
/// Color type, bit depth and palette are kept. If the re-encoded file would
/// not be smaller, the original bytes are left in place. No backup is kept.
pub fn optimize_png(path: &Path) -> Result<FileSavings, AssetError> {
    let original = fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let before = original.len() as u64;

    let recompressed = recompress_png(path, &original)?;
    if recompressed.len() >= original.len() {
        log::debug!("Keeping {}, re-encoding saves nothing", path.display());
        return Ok(FileSavings {
            path: path.to_path_buf(),
            before,
            after: before,
        });
    }

    fs::write(path, &recompressed).map_err(|source| AssetError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(FileSavings {
        path: path.to_path_buf(),
        before,
        after: recompressed.len() as u64,
    })
}

/// Optimize every PNG under the configured directories, stopping at the
/// first file that can't be processed.
pub fn run<F>(
    config: &OptimizeConfig,
    mut on_progress: Option<F>,
) -> Result<OptimizeSummary, AssetError>
where
    F: FnMut(&FileSavings),
{
    let pngs = find_pngs(&config.dirs)?;
    log::debug!("Found {} PNG files", pngs.len());

    let mut summary = OptimizeSummary::default();
    for png in &pngs {
        let savings = optimize_png(png)?;
        if let Some(ref mut callback) = on_progress {
            callback(&savings);
        }
        summary.record(&savings);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::png::load_image;
    use image::codecs::png::{CompressionType, FilterType, PngEncoder};
    use image::{ImageEncoder, Rgb, RgbImage};
    use tempfile::tempdir;

    fn gradient() -> RgbImage {
        RgbImage::from_fn(64, 64, |x, y| Rgb([(x * 4) as u8, (y * 4) as u8, 128]))
    }

    /// Write a deliberately poorly compressed PNG.
    fn write_fast_png(path: &Path) {
        let image = gradient();
        let mut data = Vec::new();
        PngEncoder::new_with_quality(&mut data, CompressionType::Fast, FilterType::NoFilter)
            .write_image(image.as_raw(), 64, 64, image::ExtendedColorType::Rgb8)
            .unwrap();
        fs::write(path, data).unwrap();
    }

    #[test]
    fn empty_summary_formats_zero_percent() {
        let summary = OptimizeSummary::default();

        assert_eq!(summary.percent_saved(), 0.0);
        assert_eq!(
            summary.to_string(),
            "Optimized 0 PNGs: 0 -> 0 bytes (-0 bytes, 0.00%)"
        );
    }

    #[test]
    fn summary_reports_reduction() {
        let summary = OptimizeSummary {
            files: 2,
            bytes_before: 2000,
            bytes_after: 1500,
        };

        assert_eq!(summary.saved_bytes(), 500);
        assert_eq!(
            summary.to_string(),
            "Optimized 2 PNGs: 2000 -> 1500 bytes (-500 bytes, 25.00%)"
        );
    }

    #[test]
    fn summary_reports_growth() {
        let summary = OptimizeSummary {
            files: 1,
            bytes_before: 100,
            bytes_after: 110,
        };

        assert_eq!(summary.saved_bytes(), -10);
        assert_eq!(
            summary.to_string(),
            "Optimized 1 PNGs: 100 -> 110 bytes (+10 bytes, -10.00%)"
        );
    }

    #[test]
    fn record_accumulates() {
        let mut summary = OptimizeSummary::default();
        summary.record(&FileSavings {
            path: PathBuf::from("a.png"),
            before: 10,
            after: 7,
        });
        summary.record(&FileSavings {
            path: PathBuf::from("b.png"),
            before: 5,
            after: 5,
        });

        assert_eq!(summary.files, 2);
        assert_eq!(summary.bytes_before, 15);
        assert_eq!(summary.bytes_after, 12);
    }

    #[test]
    fn optimize_keeps_pixels_and_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gradient.png");
        write_fast_png(&path);
        let original_size = fs::metadata(&path).unwrap().len();

        let savings = optimize_png(&path).unwrap();

        assert_eq!(savings.path, path);
        assert_eq!(savings.before, original_size);
        assert_eq!(savings.after, fs::metadata(&path).unwrap().len());
        assert_eq!(load_image(&path).unwrap().to_rgb8(), gradient());
    }

    #[test]
    fn optimize_shrinks_uncompressed_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gradient.png");
        write_fast_png(&path);

        let savings = optimize_png(&path).unwrap();

        assert!(savings.after < savings.before);
    }

    #[test]
    fn corrupt_png_fails_run() {
        let root = tempdir().unwrap();
        let config = OptimizeConfig::new(root.path());
        fs::create_dir_all(&config.dirs[0]).unwrap();
        let bad = config.dirs[0].join("bad.png");
        fs::write(&bad, b"not a png").unwrap();

        let result = run(&config, None::<fn(&FileSavings)>);

        match result {
            Err(AssetError::Decode { path, .. }) => assert_eq!(path, bad),
            other => panic!("Expected Decode error, got {:?}", other),
        }
        assert_eq!(fs::read(&bad).unwrap(), b"not a png");
    }

    #[test]
    fn run_reports_each_file() {
        let root = tempdir().unwrap();
        let config = OptimizeConfig::new(root.path());
        for dir in &config.dirs {
            fs::create_dir_all(dir).unwrap();
            write_fast_png(&dir.join("one.png"));
        }

        let mut seen = Vec::new();
        let summary = run(&config, Some(|s: &FileSavings| seen.push(s.path.clone()))).unwrap();

        assert_eq!(summary.files, 2);
        assert_eq!(
            seen,
            vec![config.dirs[0].join("one.png"), config.dirs[1].join("one.png")]
        );
    }

    #[test]
    fn missing_directories_report_nothing() {
        let root = tempdir().unwrap();
        let config = OptimizeConfig::new(root.path());

        let summary = run(&config, None::<fn(&FileSavings)>).unwrap();

        assert_eq!(summary, OptimizeSummary::default());
        assert_eq!(summary.percent_saved(), 0.0);
    }

    /// Encode raw pixel data with the `png` crate at the fastest setting.
    fn write_raw_png(
        path: &Path,
        size: (u32, u32),
        color: png::ColorType,
        depth: png::BitDepth,
        palette: Option<Vec<u8>>,
        pixels: &[u8],
    ) {
        let mut data = Vec::new();
        let mut encoder = png::Encoder::new(&mut data, size.0, size.1);
        encoder.set_color(color);
        encoder.set_depth(depth);
        encoder.set_compression(png::Compression::Fast);
        if let Some(palette) = palette {
            encoder.set_palette(palette);
        }
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(pixels).unwrap();
        writer.finish().unwrap();
        fs::write(path, data).unwrap();
    }

    /// Decode without any expansion: color type, bit depth, palette, pixels.
    fn read_raw_png(path: &Path) -> (png::ColorType, png::BitDepth, Option<Vec<u8>>, Vec<u8>) {
        let data = fs::read(path).unwrap();
        let mut decoder = png::Decoder::new(data.as_slice());
        decoder.set_transformations(png::Transformations::IDENTITY);
        let mut reader = decoder.read_info().unwrap();
        let mut pixels = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut pixels).unwrap();
        pixels.truncate(frame.buffer_size());
        let palette = reader.info().palette.as_ref().map(|p| p.to_vec());
        (frame.color_type, frame.bit_depth, palette, pixels)
    }

    #[test]
    fn palette_png_stays_indexed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("indexed.png");
        let palette = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        let indices: Vec<u8> = (0..256 * 256u32)
            .map(|i| ((i / 256 + i % 256) / 32 % 4) as u8)
            .collect();
        write_raw_png(
            &path,
            (256, 256),
            png::ColorType::Indexed,
            png::BitDepth::Eight,
            Some(palette.clone()),
            &indices,
        );

        let savings = optimize_png(&path).unwrap();

        assert!(savings.after <= savings.before);
        let (color, depth, kept_palette, pixels) = read_raw_png(&path);
        assert_eq!(color, png::ColorType::Indexed);
        assert_eq!(depth, png::BitDepth::Eight);
        assert_eq!(kept_palette, Some(palette));
        assert_eq!(pixels, indices);
    }

    #[test]
    fn low_bit_depth_grayscale_keeps_depth() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gray2.png");
        // 32 pixels per row at 2 bits each is 8 bytes per row
        let rows: Vec<u8> = (0..32 * 8u32).map(|i| (i % 8 * 31) as u8).collect();
        write_raw_png(
            &path,
            (32, 32),
            png::ColorType::Grayscale,
            png::BitDepth::Two,
            None,
            &rows,
        );

        let savings = optimize_png(&path).unwrap();

        assert!(savings.after <= savings.before);
        let (color, depth, _, pixels) = read_raw_png(&path);
        assert_eq!(color, png::ColorType::Grayscale);
        assert_eq!(depth, png::BitDepth::Two);
        assert_eq!(pixels, rows);
    }

    #[test]
    fn file_is_untouched_when_nothing_is_saved() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gradient.png");
        write_fast_png(&path);
        optimize_png(&path).unwrap();
        let optimized = fs::read(&path).unwrap();

        let savings = optimize_png(&path).unwrap();

        assert_eq!(savings.before, savings.after);
        assert_eq!(fs::read(&path).unwrap(), optimized);
    }
}
