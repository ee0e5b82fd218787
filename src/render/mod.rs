//! Raster rendering of the standings image

pub mod canvas;
pub mod colors;
pub mod diagnostic;
pub mod fonts;
pub mod layout;
pub mod standings;
pub mod text;
pub mod text_metrics;

pub use canvas::{encode_png, load_base_image, save_png};
pub use colors::parse_color;
pub use diagnostic::{error_text, render_error_image};
pub use fonts::{load_face, BlockFace, GlyphFace, OutlineFace, TextBounds};
pub use layout::{ColumnSpec, RenderBox, RowBand, StandingsLayout};
pub use standings::StandingsRenderer;
pub use text::TextPainter;
pub use text_metrics::{fit_text, FittedText};
