//! PNG load and save helpers.
//!
//! Images produced by the splash generator go through the `image` crate.
//! Existing files are recompressed with the lower-level `png` crate so
//! palette and low bit-depth images keep their exact color type. Saves
//! always use maximum compression with adaptive filtering, and the encoded
//! bytes are built in memory before the destination is touched.

use std::fs;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ImageResult};

use crate::error::AssetError;

/// Read and decode an image file.
pub fn load_image(path: &Path) -> Result<DynamicImage, AssetError> {
    let data = fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    image::load_from_memory(&data).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source: source.into(),
    })
}

/// Encode an image as PNG with maximum compression, keeping its color type.
pub fn encode_png(image: &DynamicImage) -> ImageResult<Vec<u8>> {
    let mut data = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut data, CompressionType::Best, FilterType::Adaptive);
    image.write_with_encoder(encoder)?;
    Ok(data)
}

/// Encode `image` and write it to `path`, replacing any existing file.
pub fn write_png(path: &Path, image: &DynamicImage) -> Result<(), AssetError> {
    let data = encode_png(image).map_err(|source| AssetError::Encode {
        path: path.to_path_buf(),
        source: source.into(),
    })?;

    fs::write(path, &data).map_err(|source| AssetError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Re-encode PNG bytes losslessly with maximum compression.
///
/// Pixel data is passed through untouched: color type, bit depth, palette
/// and transparency chunk are carried over as decoded. Only the first frame
/// of an animated PNG is kept. `path` is used for error reporting.
pub fn recompress_png(path: &Path, data: &[u8]) -> Result<Vec<u8>, AssetError> {
    let decode_err = |source: png::DecodingError| AssetError::Decode {
        path: path.to_path_buf(),
        source: source.into(),
    };
    let encode_err = |source: png::EncodingError| AssetError::Encode {
        path: path.to_path_buf(),
        source: source.into(),
    };

    let mut decoder = png::Decoder::new(data);
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder.read_info().map_err(decode_err)?;
    let mut pixels = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut pixels).map_err(decode_err)?;
    let info = reader.info();

    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, frame.width, frame.height);
    encoder.set_color(frame.color_type);
    encoder.set_depth(frame.bit_depth);
    encoder.set_compression(png::Compression::Best);
    encoder.set_adaptive_filter(png::AdaptiveFilterType::Adaptive);
    if let Some(palette) = &info.palette {
        encoder.set_palette(palette.to_vec());
    }
    if let Some(trns) = &info.trns {
        encoder.set_trns(trns.to_vec());
    }

    let mut writer = encoder.write_header().map_err(encode_err)?;
    writer
        .write_image_data(&pixels[..frame.buffer_size()])
        .map_err(encode_err)?;
    writer.finish().map_err(encode_err)?;

    Ok(out)
}
