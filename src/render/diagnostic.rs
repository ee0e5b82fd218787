//! Diagnostic image produced when a render fails

use std::error::Error as _;

use image::{Rgba, RgbaImage};

use super::fonts::GlyphFace;
use crate::config::defaults::*;
use crate::error::RenderError;

/// Plain-text report for a failed run: kind, message and source chain
pub fn error_text(error: &RenderError) -> String {
    let mut text = format!("ERROR:\n\n{}: {}\n", error.kind(), error);
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str(&format!("caused by: {}\n", cause));
        source = cause.source();
    }
    text
}

/// Paint the error report on a fresh dark canvas, one line per text line
pub fn render_error_image(error: &RenderError, face: &dyn GlyphFace) -> RgbaImage {
    let [r, g, b] = DIAGNOSTIC_BACKGROUND;
    let mut canvas = RgbaImage::from_pixel(DIAGNOSTIC_WIDTH, DIAGNOSTIC_HEIGHT, Rgba([r, g, b, 255]));
    let [r, g, b] = DIAGNOSTIC_TEXT_COLOR;
    let color = Rgba([r, g, b, 255]);

    let (x, mut y) = DIAGNOSTIC_ORIGIN;
    for line in error_text(error).lines() {
        face.draw_text(&mut canvas, (x, y), line, DIAGNOSTIC_FONT_SIZE, color);
        y += DIAGNOSTIC_LINE_HEIGHT_PX;
    }
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fonts::BlockFace;
    use std::path::PathBuf;

    #[test]
    fn test_error_text_layout() {
        let err = RenderError::CredentialsMissing {
            path: PathBuf::from("service-account.json"),
        };
        let text = error_text(&err);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ERROR:");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("CredentialsMissing: "));
        assert!(lines[2].contains("service-account.json"));
    }

    #[test]
    fn test_error_text_includes_sources() {
        let err = RenderError::BaseImage {
            path: PathBuf::from("classement.png"),
            source: image::ImageError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "gone",
            )),
        };
        let text = error_text(&err);
        assert!(text.contains("BaseImage: Failed to load base image classement.png\n"));
        assert!(text.contains("caused by: gone"));
        assert_eq!(text.matches("gone").count(), 1, "{text}");
    }

    #[test]
    fn test_error_image() {
        let err = RenderError::NoWorksheets;
        let image = render_error_image(&err, &BlockFace);
        assert_eq!(image.dimensions(), (DIAGNOSTIC_WIDTH, DIAGNOSTIC_HEIGHT));
        assert_eq!(*image.get_pixel(999, 599), Rgba([30, 30, 30, 255]));

        let text_px = image
            .pixels()
            .filter(|px| **px == Rgba([255, 120, 120, 255]))
            .count();
        assert!(text_px > 0);
        // nothing above the first line
        assert!((0..DIAGNOSTIC_WIDTH).all(|x| *image.get_pixel(x, 19) == Rgba([30, 30, 30, 255])));
    }
}
