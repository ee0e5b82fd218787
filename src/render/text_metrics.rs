//! Fitting text into fixed pixel boxes

use super::fonts::{GlyphFace, TextBounds};
use super::layout::RenderBox;
use crate::config::defaults::{FIT_MARGIN_PX, FONT_SIZE_MAX, FONT_SIZE_MIN};

/// A font size chosen for one string, with the string's bounds at that size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FittedText {
    pub size: u32,
    pub bounds: TextBounds,
}

/// Largest size in [FONT_SIZE_MIN, FONT_SIZE_MAX] whose text fits `target`
///
/// The box is shrunk by a small margin first. When nothing fits, the minimum
/// size is returned anyway and the text is allowed to overflow.
pub fn fit_text(face: &dyn GlyphFace, text: &str, target: &RenderBox) -> FittedText {
    let max_w = (target.width() - FIT_MARGIN_PX).max(10);
    let max_h = (target.height() - FIT_MARGIN_PX).max(6);

    (FONT_SIZE_MIN..=FONT_SIZE_MAX)
        .rev()
        .map(|size| FittedText {
            size,
            bounds: face.text_bounds(text, size),
        })
        .find(|fit| fit.bounds.width() <= max_w && fit.bounds.height() <= max_h)
        .unwrap_or_else(|| FittedText {
            size: FONT_SIZE_MIN,
            bounds: face.text_bounds(text, FONT_SIZE_MIN),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fonts::BlockFace;

    #[test]
    fn test_roomy_box_gets_max_size() {
        let target = RenderBox::new(0, 0, 400, 200);
        let fit = fit_text(&BlockFace, "7", &target);
        assert_eq!(fit.size, FONT_SIZE_MAX);
    }

    #[test]
    fn test_tiny_box_gets_min_size() {
        let target = RenderBox::new(0, 0, 3, 3);
        let fit = fit_text(&BlockFace, "Olympique Lyonnais", &target);
        assert_eq!(fit.size, FONT_SIZE_MIN);
        assert!(fit.bounds.width() > target.width());
    }

    #[test]
    fn test_standings_cell_fit() {
        // 72x20 cell: block height 7/10 of the size must stay within 16 px
        let target = RenderBox::new(280, 136, 352, 156);
        let fit = fit_text(&BlockFace, "12", &target);
        assert_eq!(fit.size, 24);
        assert!(fit.bounds.height() <= 16);
    }

    #[test]
    fn test_width_limits_long_text() {
        let target = RenderBox::new(0, 0, 100, 400);
        let fit = fit_text(&BlockFace, "ABCDEF", &target);
        assert!(fit.bounds.width() <= 96);
        assert!(fit.size < FONT_SIZE_MAX);
        let bigger = BlockFace.text_bounds("ABCDEF", fit.size + 1);
        assert!(bigger.width() > 96);
    }

    #[test]
    fn test_size_always_in_range() {
        for (w, h) in [(1, 1), (20, 10), (72, 20), (169, 20), (500, 500)] {
            for text in ["", "1", "Racing Club de Strasbourg Alsace"] {
                let fit = fit_text(&BlockFace, text, &RenderBox::new(0, 0, w, h));
                assert!((FONT_SIZE_MIN..=FONT_SIZE_MAX).contains(&fit.size));
            }
        }
    }
}
