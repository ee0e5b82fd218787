//! Canvas loading, pixel compositing and PNG output

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::error::RenderError;

/// Load the background image as an RGBA canvas
pub fn load_base_image(path: &Path) -> Result<RgbaImage, RenderError> {
    let image = image::open(path).map_err(|source| RenderError::BaseImage {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgba8())
}

/// Flatten the canvas to RGB and encode it as PNG
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let rgb = DynamicImage::ImageRgba8(canvas.clone()).to_rgb8();
    let mut bytes = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Flatten the canvas to RGB and write it as a PNG file
pub fn save_png(canvas: &RgbaImage, path: &Path) -> Result<(), RenderError> {
    std::fs::write(path, encode_png(canvas)?)?;
    Ok(())
}

/// Composite `color` over one pixel, scaled by glyph coverage
pub fn blend_pixel_with_coverage(
    canvas: &mut RgbaImage,
    x: i32,
    y: i32,
    color: Rgba<u8>,
    coverage: f32,
) {
    let mut src = color;
    src.0[3] = ((src.0[3] as f32) * coverage.clamp(0.0, 1.0)).round() as u8;
    blend_pixel(canvas, x, y, src);
}

/// Source-over compositing; pixels outside the canvas are ignored
pub fn blend_pixel(canvas: &mut RgbaImage, x: i32, y: i32, src: Rgba<u8>) {
    if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
        return;
    }

    let src_alpha = src.0[3] as f32 / 255.0;
    if src_alpha <= 0.0 {
        return;
    }

    let dst = canvas.get_pixel_mut(x as u32, y as u32);
    let dst_alpha = dst.0[3] as f32 / 255.0;
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);

    for channel in 0..3 {
        let src_channel = src.0[channel] as f32 / 255.0;
        let dst_channel = dst.0[channel] as f32 / 255.0;
        let out_channel =
            (src_channel * src_alpha + dst_channel * dst_alpha * (1.0 - src_alpha)) / out_alpha;
        dst.0[channel] = (out_channel * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    dst.0[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_blend_replaces_pixel() {
        let mut canvas = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 255]));
        blend_pixel(&mut canvas, 1, 1, Rgba([255, 255, 255, 255]));
        assert_eq!(*canvas.get_pixel(1, 1), Rgba([255, 255, 255, 255]));
        assert_eq!(*canvas.get_pixel(0, 0), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_translucent_blend_darkens() {
        let mut canvas = RgbaImage::from_pixel(1, 1, Rgba([200, 200, 200, 255]));
        blend_pixel(&mut canvas, 0, 0, Rgba([0, 0, 0, 180]));
        let px = canvas.get_pixel(0, 0);
        assert!(px.0[0] < 100);
        assert_eq!(px.0[3], 255);
    }

    #[test]
    fn test_zero_coverage_is_noop() {
        let mut canvas = RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 255]));
        blend_pixel_with_coverage(&mut canvas, 0, 0, Rgba([255, 0, 0, 255]), 0.0);
        assert_eq!(*canvas.get_pixel(0, 0), Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut canvas = RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 255]));
        blend_pixel(&mut canvas, -1, 0, Rgba([255, 0, 0, 255]));
        blend_pixel(&mut canvas, 0, 5, Rgba([255, 0, 0, 255]));
        assert_eq!(*canvas.get_pixel(0, 0), Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn test_png_is_deterministic() {
        let canvas = RgbaImage::from_pixel(4, 3, Rgba([9, 8, 7, 128]));
        let a = encode_png(&canvas).unwrap();
        let b = encode_png(&canvas).unwrap();
        assert_eq!(a, b);
        assert!(a.starts_with(&[0x89, b'P', b'N', b'G']));
    }
}
