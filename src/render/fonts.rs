//! Font faces used to measure and paint text on the canvas
//!
//! All faces share the same coordinate convention: text is placed by the
//! top-left corner of its line box (the top of the ascender line), and
//! [`TextBounds`] are given relative to that origin.

use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontArc, GlyphId, OutlinedGlyph, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

use super::canvas::{blend_pixel, blend_pixel_with_coverage};
use crate::error::RenderError;
use crate::model::{Degradation, Degraded};

/// Fonts tried, in order, when the configured font cannot be loaded
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Pixel extent of painted text relative to the draw origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    fn union(self, other: TextBounds) -> TextBounds {
        TextBounds {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// A font that can measure and paint a single line of text
pub trait GlyphFace {
    /// Human readable name, for logs
    fn name(&self) -> &str;

    /// Bounds of `text` at `size` px per em, drawn at origin (0, 0)
    fn text_bounds(&self, text: &str, size: u32) -> TextBounds;

    /// Paint `text` with its line box's top-left corner at `origin`
    fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        origin: (i32, i32),
        text: &str,
        size: u32,
        color: Rgba<u8>,
    );
}

/// TrueType/OpenType face rendered through `ab_glyph`
pub struct OutlineFace {
    font: FontArc,
    name: String,
}

impl OutlineFace {
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let data = fs::read(path)
            .map_err(|e| RenderError::FontLoad(format!("{}: {}", path.display(), e)))?;
        let font = FontArc::try_from_vec(data)
            .map_err(|e| RenderError::FontLoad(format!("{}: {}", path.display(), e)))?;
        Ok(Self {
            font,
            name: path.display().to_string(),
        })
    }

    /// Scale for `size` px per em
    ///
    /// ab_glyph scales to ascent - descent, so the em size is widened by
    /// that height over units-per-em.
    fn scale(&self, size: u32) -> PxScale {
        let px = size as f32;
        match self.font.units_per_em() {
            Some(units_per_em) => PxScale::from(px * self.font.height_unscaled() / units_per_em),
            None => PxScale::from(px),
        }
    }

    /// Outline each visible glyph with the line box's top-left at `origin`
    fn outline(&self, text: &str, size: u32, origin: (i32, i32)) -> Vec<OutlinedGlyph> {
        let scale = self.scale(size);
        let scaled = self.font.as_scaled(scale);
        let baseline = origin.1 as f32 + scaled.ascent();

        let mut caret = origin.0 as f32;
        let mut prev: Option<GlyphId> = None;
        let mut glyphs = Vec::new();

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                glyphs.push(outlined);
            }
            caret += scaled.h_advance(id);
            prev = Some(id);
        }

        glyphs
    }
}

impl GlyphFace for OutlineFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn text_bounds(&self, text: &str, size: u32) -> TextBounds {
        self.outline(text, size, (0, 0))
            .iter()
            .map(|g| {
                let b = g.px_bounds();
                TextBounds {
                    left: b.min.x.floor() as i32,
                    top: b.min.y.floor() as i32,
                    right: b.max.x.ceil() as i32,
                    bottom: b.max.y.ceil() as i32,
                }
            })
            .reduce(TextBounds::union)
            .unwrap_or_default()
    }

    fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        origin: (i32, i32),
        text: &str,
        size: u32,
        color: Rgba<u8>,
    ) {
        for glyph in self.outline(text, size, origin) {
            let bounds = glyph.px_bounds();
            let (x0, y0) = (bounds.min.x.floor() as i32, bounds.min.y.floor() as i32);
            glyph.draw(|gx, gy, coverage| {
                blend_pixel_with_coverage(canvas, x0 + gx as i32, y0 + gy as i32, color, coverage);
            });
        }
    }
}

/// Fallback face that draws every non-blank character as a solid block
///
/// Needs no font file, so text is always renderable, and its metrics are
/// exact integers, which keeps layouts reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockFace;

impl BlockFace {
    fn glyph_width(size: u32) -> i32 {
        (size / 2).max(1) as i32
    }

    fn gap(size: u32) -> i32 {
        (size / 10).max(1) as i32
    }

    /// Blank space between the line box top and the block tops
    fn top(size: u32) -> i32 {
        (size / 5) as i32
    }

    fn block_height(size: u32) -> i32 {
        (size * 7 / 10).max(1) as i32
    }

    fn blocks(text: &str, size: u32) -> impl Iterator<Item = TextBounds> + '_ {
        let advance = Self::glyph_width(size) + Self::gap(size);
        text.chars()
            .enumerate()
            .filter(|(_, ch)| !ch.is_whitespace())
            .map(move |(i, _)| {
                let left = i as i32 * advance;
                TextBounds {
                    left,
                    top: Self::top(size),
                    right: left + Self::glyph_width(size),
                    bottom: Self::top(size) + Self::block_height(size),
                }
            })
    }
}

impl GlyphFace for BlockFace {
    fn name(&self) -> &str {
        "built-in block face"
    }

    fn text_bounds(&self, text: &str, size: u32) -> TextBounds {
        Self::blocks(text, size)
            .reduce(TextBounds::union)
            .unwrap_or_default()
    }

    fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        origin: (i32, i32),
        text: &str,
        size: u32,
        color: Rgba<u8>,
    ) {
        for block in Self::blocks(text, size) {
            for y in block.top..block.bottom {
                for x in block.left..block.right {
                    blend_pixel(canvas, origin.0 + x, origin.1 + y, color);
                }
            }
        }
    }
}

/// Load the configured font, falling back to a system font, then to [`BlockFace`]
pub fn load_face(path: &Path) -> Degraded<Box<dyn GlyphFace>> {
    let configured = match OutlineFace::from_file(path) {
        Ok(face) => return Degraded::clean(Box::new(face)),
        Err(e) => e,
    };
    log::debug!("{}", configured);

    let fallback: Box<dyn GlyphFace> = SYSTEM_FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .filter(|p| p.exists())
        .find_map(|p| OutlineFace::from_file(&p).ok())
        .map(|face| Box::new(face) as Box<dyn GlyphFace>)
        .unwrap_or_else(|| Box::new(BlockFace));

    let used = fallback.name().to_string();
    let mut face = Degraded::clean(fallback);
    face.degrade(Degradation::FontFallback {
        path: path.to_path_buf(),
        used,
    });
    face
}
