use crate::config::defaults::*;

/// Axis-aligned pixel rectangle; `x1`/`y1` are exclusive edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl RenderBox {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.x0 + self.x1) as f32 / 2.0,
            (self.y0 + self.y1) as f32 / 2.0,
        )
    }

    /// The same box with its left edge moved right by `padding`
    pub fn pad_left(&self, padding: i32) -> Self {
        Self {
            x0: self.x0 + padding,
            ..*self
        }
    }
}

/// Horizontal extent of one field, as fractions of the canvas width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpec {
    pub left: f64,
    pub right: f64,
}

impl ColumnSpec {
    /// Absolute (left, right) edges on a canvas `width` px wide
    pub fn to_px(&self, width: u32) -> (i32, i32) {
        (pct_to_px(self.left, width), pct_to_px(self.right, width))
    }
}

pub fn pct_to_px(fraction: f64, total: u32) -> i32 {
    (fraction * total as f64).round() as i32
}

const REF_W: f64 = REFERENCE_WIDTH as f64;

pub const TEAM_COLUMN: ColumnSpec = ColumnSpec {
    left: TEAM_COLUMN_PX.0 as f64 / REF_W,
    right: TEAM_COLUMN_PX.1 as f64 / REF_W,
};
pub const GAMES_COLUMN: ColumnSpec = ColumnSpec {
    left: GAMES_COLUMN_PX.0 as f64 / REF_W,
    right: GAMES_COLUMN_PX.1 as f64 / REF_W,
};
pub const WIN_COLUMN: ColumnSpec = ColumnSpec {
    left: WIN_COLUMN_PX.0 as f64 / REF_W,
    right: WIN_COLUMN_PX.1 as f64 / REF_W,
};
pub const LOOSE_COLUMN: ColumnSpec = ColumnSpec {
    left: LOOSE_COLUMN_PX.0 as f64 / REF_W,
    right: LOOSE_COLUMN_PX.1 as f64 / REF_W,
};

/// Vertical pixel range of one standings row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBand {
    pub top: i32,
    pub bottom: i32,
}

impl RowBand {
    /// Band of the `index`-th row (0-based), below the header and grid lines
    pub fn for_row(index: usize) -> Self {
        let top = PRE_MARGIN_TOP_PX
            + LINE_THICKNESS_PX
            + index as i32 * (BAND_HEIGHT_PX + LINE_THICKNESS_PX);
        Self {
            top,
            bottom: top + BAND_HEIGHT_PX,
        }
    }

    /// Text area inside the band
    pub fn text_span(&self) -> (i32, i32) {
        (self.top + MARGIN_TOP_PX, self.bottom - MARGIN_BOTTOM_PX)
    }
}

/// Converts column specs and row indices into render boxes for one canvas
#[derive(Debug, Clone, Copy)]
pub struct StandingsLayout {
    canvas_width: u32,
}

impl StandingsLayout {
    pub fn new(canvas_width: u32) -> Self {
        Self { canvas_width }
    }

    /// Render box for one field of one row
    pub fn cell(&self, column: ColumnSpec, row: usize) -> RenderBox {
        let (x0, x1) = column.to_px(self.canvas_width);
        let (y0, y1) = RowBand::for_row(row).text_span();
        RenderBox::new(x0, y0, x1, y1)
    }
}
