//! Layout driver: draws every standings row onto the background

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use super::layout::{
    RenderBox, StandingsLayout, GAMES_COLUMN, LOOSE_COLUMN, TEAM_COLUMN, WIN_COLUMN,
};
use super::text::TextPainter;
use crate::config::defaults::TEAM_LEFT_PADDING_PX;
use crate::config::Nudges;
use crate::model::StandingRow;

/// Outline color for debug boxes
const DEBUG_BOX_COLOR: Rgba<u8> = Rgba([255, 0, 255, 255]);

/// Renderer for the standings table
pub struct StandingsRenderer<'a> {
    painter: TextPainter<'a>,
    nudges: Nudges,
    debug_boxes: bool,
}

impl<'a> StandingsRenderer<'a> {
    pub fn new(painter: TextPainter<'a>, nudges: Nudges) -> Self {
        Self {
            painter,
            nudges,
            debug_boxes: false,
        }
    }

    /// Outline every render box (layout tuning aid)
    pub fn debug_boxes(mut self, enabled: bool) -> Self {
        self.debug_boxes = enabled;
        self
    }

    /// Draw `rows` top to bottom, one band per row
    pub fn render(&self, canvas: &mut RgbaImage, rows: &[StandingRow]) {
        let layout = StandingsLayout::new(canvas.width());

        for (i, row) in rows.iter().enumerate() {
            let team = layout.cell(TEAM_COLUMN, i);
            let games = layout.cell(GAMES_COLUMN, i);
            let win = layout.cell(WIN_COLUMN, i);
            let loose = layout.cell(LOOSE_COLUMN, i);

            if self.debug_boxes {
                for cell in [&team, &games, &win, &loose] {
                    outline(canvas, cell);
                }
            }

            let (fit, _) = self
                .painter
                .draw_left(canvas, &row.team, &team, TEAM_LEFT_PADDING_PX);
            log::debug!("row {} team '{}' at {}px", i, row.team, fit.size);

            for (text, cell, nudge) in [
                (&row.games, &games, self.nudges.games),
                (&row.win, &win, self.nudges.win),
                (&row.loose, &loose, self.nudges.loose),
            ] {
                let (fit, _) = self.painter.draw_centered(canvas, text, cell, nudge);
                log::debug!("row {} '{}' at {}px", i, text, fit.size);
            }
        }
    }
}

fn outline(canvas: &mut RgbaImage, cell: &RenderBox) {
    if cell.width() <= 0 || cell.height() <= 0 {
        return;
    }
    let rect = Rect::at(cell.x0, cell.y0).of_size(cell.width() as u32, cell.height() as u32);
    draw_hollow_rect_mut(canvas, rect, DEBUG_BOX_COLOR);
}
