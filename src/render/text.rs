//! Box renderer: places fitted text inside a render box

use image::{Rgba, RgbaImage};

use super::fonts::GlyphFace;
use super::layout::RenderBox;
use super::text_metrics::{fit_text, FittedText};
use crate::config::defaults::SHADOW_COLOR;

/// One-pixel offsets used to fake an outline behind the text
const SHADOW_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Paints strings into boxes on a canvas with a fixed face, color and shadow mode
pub struct TextPainter<'a> {
    face: &'a dyn GlyphFace,
    color: Rgba<u8>,
    shadow: bool,
}

impl<'a> TextPainter<'a> {
    pub fn new(face: &'a dyn GlyphFace, color: Rgba<u8>, shadow: bool) -> Self {
        Self {
            face,
            color,
            shadow,
        }
    }

    /// Center `text` in `target`, then shift it `nudge` px to the right
    ///
    /// Returns the fitted size and the draw origin.
    pub fn draw_centered(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        target: &RenderBox,
        nudge: i32,
    ) -> (FittedText, (i32, i32)) {
        let fit = fit_text(self.face, text, target);
        let (cx, cy) = target.center();
        let w = fit.bounds.width() as f32;
        let h = fit.bounds.height() as f32;

        let x = (cx - w / 2.0).round() as i32 + nudge - fit.bounds.left;
        let y = (cy - h / 2.0).round() as i32 - fit.bounds.top;

        self.draw_shadowed(canvas, (x, y), text, fit.size);
        (fit, (x, y))
    }

    /// Draw `text` from the padded left edge of `target`, centered vertically
    ///
    /// The size is fitted against the box narrowed by `padding`.
    pub fn draw_left(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        target: &RenderBox,
        padding: i32,
    ) -> (FittedText, (i32, i32)) {
        let padded = target.pad_left(padding);
        let fit = fit_text(self.face, text, &padded);
        let h = fit.bounds.height() as f32;

        let x = padded.x0 - fit.bounds.left;
        let y = (target.y0 as f32 + (target.height() as f32 - h) / 2.0).round() as i32
            - fit.bounds.top;

        self.draw_shadowed(canvas, (x, y), text, fit.size);
        (fit, (x, y))
    }

    /// Paint the shadow copies (when enabled), then the text itself
    pub fn draw_shadowed(&self, canvas: &mut RgbaImage, origin: (i32, i32), text: &str, size: u32) {
        if self.shadow {
            let shadow = Rgba(SHADOW_COLOR);
            for (dx, dy) in SHADOW_OFFSETS {
                self.face
                    .draw_text(canvas, (origin.0 + dx, origin.1 + dy), text, size, shadow);
            }
        }
        self.face.draw_text(canvas, origin, text, size, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fonts::BlockFace;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BG: Rgba<u8> = Rgba([40, 60, 90, 255]);

    /// Bounding box of all pixels equal to `color`
    fn painted_extent(canvas: &RgbaImage, color: Rgba<u8>) -> Option<(i32, i32, i32, i32)> {
        canvas
            .enumerate_pixels()
            .filter(|(_, _, px)| **px == color)
            .fold(None, |acc, (x, y, _)| {
                let (x, y) = (x as i32, y as i32);
                Some(match acc {
                    None => (x, y, x + 1, y + 1),
                    Some((l, t, r, b)) => (l.min(x), t.min(y), r.max(x + 1), b.max(y + 1)),
                })
            })
    }

    #[test]
    fn test_centered_midpoint_matches_box() {
        let face = BlockFace;
        let painter = TextPainter::new(&face, WHITE, false);
        for (text, nudge) in [("4", 0), ("12", -8), ("103", 6), ("7", 2)] {
            let mut canvas = RgbaImage::from_pixel(547, 300, BG);
            let target = RenderBox::new(280, 136, 352, 156);
            painter.draw_centered(&mut canvas, text, &target, nudge);

            let (l, t, r, b) = painted_extent(&canvas, WHITE).unwrap();
            let (cx, cy) = target.center();
            let mid_x = (l + r) as f32 / 2.0;
            let mid_y = (t + b) as f32 / 2.0;
            assert!((mid_x - (cx + nudge as f32)).abs() <= 1.0, "{text}: {mid_x} vs {cx}+{nudge}");
            assert!((mid_y - cy).abs() <= 1.0, "{text}: {mid_y} vs {cy}");
        }
    }

    #[test]
    fn test_left_starts_at_padding() {
        let face = BlockFace;
        let painter = TextPainter::new(&face, WHITE, false);
        let mut canvas = RgbaImage::from_pixel(547, 300, BG);
        let target = RenderBox::new(0, 136, 280, 156);
        painter.draw_left(&mut canvas, "Lyon", &target, 111);

        let (l, t, _, b) = painted_extent(&canvas, WHITE).unwrap();
        assert_eq!(l, 111);
        let mid_y = (t + b) as f32 / 2.0;
        assert!((mid_y - target.center().1).abs() <= 1.0);
    }

    #[test]
    fn test_shadow_surrounds_text() {
        let face = BlockFace;
        let mut canvas = RgbaImage::from_pixel(100, 60, BG);
        let painter = TextPainter::new(&face, WHITE, true);
        painter.draw_shadowed(&mut canvas, (10, 10), "1", 22);

        let (l, t, r, b) = painted_extent(&canvas, WHITE).unwrap();
        // outline pixels just outside each edge are darkened, not background
        assert_ne!(*canvas.get_pixel((l - 1) as u32, t as u32), BG);
        assert_ne!(*canvas.get_pixel(r as u32, t as u32), BG);
        assert_ne!(*canvas.get_pixel(l as u32, (t - 1) as u32), BG);
        assert_ne!(*canvas.get_pixel(l as u32, b as u32), BG);
        // corners are not covered by a cardinal-only outline
        assert_eq!(*canvas.get_pixel((l - 1) as u32, (t - 1) as u32), BG);
    }

    #[test]
    fn test_no_shadow_leaves_surroundings() {
        let face = BlockFace;
        let mut canvas = RgbaImage::from_pixel(100, 60, BG);
        TextPainter::new(&face, WHITE, false).draw_shadowed(&mut canvas, (10, 10), "1", 22);
        let changed = canvas.pixels().filter(|px| **px != BG && **px != WHITE).count();
        assert_eq!(changed, 0);
    }

    #[test]
    fn test_empty_text_paints_nothing() {
        let face = BlockFace;
        let mut canvas = RgbaImage::from_pixel(100, 60, BG);
        let painter = TextPainter::new(&face, WHITE, true);
        painter.draw_centered(&mut canvas, "", &RenderBox::new(0, 0, 100, 60), 3);
        assert!(canvas.pixels().all(|px| *px == BG));
    }
}
