pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod source;

pub use config::Settings;
pub use error::RenderError;
pub use model::{Degradation, Degraded, StandingRow};
pub use source::{fetch_rows, GoogleSheets, SheetSource};

use std::path::{Path, PathBuf};

use image::RgbaImage;

use config::defaults::{REFERENCE_HEIGHT, REFERENCE_WIDTH};
use render::{
    load_base_image, load_face, parse_color, render_error_image, save_png, GlyphFace,
    StandingsRenderer, TextPainter,
};

/// Outcome of a successful render
#[derive(Debug, Clone)]
pub struct RenderReport {
    pub output_path: PathBuf,
    pub rows_drawn: usize,
    /// Fallbacks taken along the way, in the order they happened
    pub degradations: Vec<Degradation>,
}

/// Render the standings from the configured Google Sheet.
///
/// Authenticates first, so a missing service account key stops the run
/// before the background is loaded or anything is drawn.
pub fn run(settings: &Settings) -> Result<RenderReport, RenderError> {
    let sheet = GoogleSheets::connect(settings)?;
    run_with_source(settings, &sheet)
}

/// Render the standings read from `source` and save them to the output path
pub fn run_with_source(
    settings: &Settings,
    source: &dyn SheetSource,
) -> Result<RenderReport, RenderError> {
    let mut canvas = load_base_image(&settings.base_path)?;
    let (face, mut degradations) = load_face(&settings.font_path).into_parts();

    let (rows, fetch_degradations) =
        fetch_rows(source, &settings.worksheet_name, settings.row_count)?.into_parts();
    degradations.extend(fetch_degradations);
    log::info!("Drawing {} rows", rows.len());

    degradations.extend(draw_standings(&mut canvas, &rows, face.as_ref(), settings));
    save_png(&canvas, &settings.output_path)?;

    Ok(RenderReport {
        output_path: settings.output_path.clone(),
        rows_drawn: rows.len(),
        degradations,
    })
}

/// Draw `rows` onto a loaded background, with no I/O
///
/// Returns the fallbacks taken for the canvas size and text color.
pub fn draw_standings(
    canvas: &mut RgbaImage,
    rows: &[StandingRow],
    face: &dyn GlyphFace,
    settings: &Settings,
) -> Vec<Degradation> {
    let mut degradations = Vec::new();

    let actual = canvas.dimensions();
    let expected = (REFERENCE_WIDTH, REFERENCE_HEIGHT);
    if actual != expected {
        let mismatch = Degradation::CanvasSizeMismatch { expected, actual };
        log::warn!("{}", mismatch);
        degradations.push(mismatch);
    }

    let (color, color_degradations) = parse_color(&settings.text_color).into_parts();
    degradations.extend(color_degradations);

    StandingsRenderer::new(TextPainter::new(face, color, settings.shadow), settings.nudges)
        .debug_boxes(settings.debug_boxes)
        .render(canvas, rows);

    degradations
}

/// Write the diagnostic image for a failed run to `path`
pub fn write_diagnostic(
    error: &RenderError,
    settings: &Settings,
    path: &Path,
) -> Result<(), RenderError> {
    let face = load_face(&settings.font_path).value;
    let image = render_error_image(error, face.as_ref());
    save_png(&image, path)
}
