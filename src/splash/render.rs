use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage, Rgba, Rgba32FImage, RgbaImage};

use super::SplashSpec;

/// Where the icon lands on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Edge length of the square icon
    pub size: u32,
    pub x: u32,
    pub y: u32,
}

/// Size the icon to `scale` of the shorter canvas edge (rounded down, never
/// larger than the canvas) and center it, rounding offsets down.
pub fn icon_placement(width: u32, height: u32, scale: f64) -> Placement {
    let shorter = width.min(height);
    let size = ((f64::from(shorter) * scale) as u32).min(shorter);

    Placement {
        size,
        x: (width - size) / 2,
        y: (height - size) / 2,
    }
}

/// Resample the icon to a square of `size` pixels with a Lanczos filter.
///
/// Channels are premultiplied by alpha while filtering so the color of
/// fully transparent pixels can't bleed into the edges.
pub fn resize_icon(icon: &RgbaImage, size: u32) -> RgbaImage {
    let premultiplied = Rgba32FImage::from_fn(icon.width(), icon.height(), |x, y| {
        let [r, g, b, a] = icon.get_pixel(x, y).0.map(|c| f32::from(c) / 255.0);
        Rgba([r * a, g * a, b * a, a])
    });

    let resized = imageops::resize(&premultiplied, size, size, FilterType::Lanczos3);

    RgbaImage::from_fn(size, size, |x, y| {
        let [r, g, b, a] = resized.get_pixel(x, y).0;
        let a = a.clamp(0.0, 1.0);
        if a == 0.0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([to_u8(r / a), to_u8(g / a), to_u8(b / a), to_u8(a)])
    })
}

fn to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Blend `top` over an opaque canvas at (x, y). Pixels falling outside the
/// canvas are ignored.
fn composite_opaque(canvas: &mut RgbImage, top: &RgbaImage, x: u32, y: u32) {
    for (tx, ty, pixel) in top.enumerate_pixels() {
        let (cx, cy) = (x + tx, y + ty);
        if cx >= canvas.width() || cy >= canvas.height() {
            continue;
        }

        let [r, g, b, a] = pixel.0;
        let alpha = f32::from(a) / 255.0;
        let under = canvas.get_pixel_mut(cx, cy);
        for (dst, src) in under.0.iter_mut().zip([r, g, b]) {
            let blended = f32::from(src) * alpha + f32::from(*dst) * (1.0 - alpha);
            *dst = blended.round().clamp(0.0, 255.0) as u8;
        }
    }
}

/// Render one launch image: solid background with the icon composited in
/// the middle. The canvas is opaque, so the result carries no alpha.
pub fn render_splash(
    icon: &RgbaImage,
    spec: &SplashSpec,
    background: (u8, u8, u8),
    scale: f64,
) -> RgbImage {
    let (r, g, b) = background;
    let mut canvas = RgbImage::from_pixel(spec.width, spec.height, Rgb([r, g, b]));

    let placement = icon_placement(spec.width, spec.height, scale);
    if placement.size > 0 {
        let scaled = resize_icon(icon, placement.size);
        composite_opaque(&mut canvas, &scaled, placement.x, placement.y);
    }

    canvas
}
