/// Width in px the column fractions were measured against
pub const REFERENCE_WIDTH: u32 = 547;

/// Height in px of the stock standings background
pub const REFERENCE_HEIGHT: u32 = 607;

// Column boundaries in px on the reference width
pub const TEAM_COLUMN_PX: (u32, u32) = (0, 280);
pub const GAMES_COLUMN_PX: (u32, u32) = (280, 352);
pub const WIN_COLUMN_PX: (u32, u32) = (352, 424);
pub const LOOSE_COLUMN_PX: (u32, u32) = (424, 496);

/// Header area above the first row, in px
pub const PRE_MARGIN_TOP_PX: i32 = 103;

/// Thickness of the grid lines separating rows, in px
pub const LINE_THICKNESS_PX: i32 = 3;

/// Height of one row band, in px
pub const BAND_HEIGHT_PX: i32 = 80;

/// Inset of the text box from the top of its band
pub const MARGIN_TOP_PX: i32 = 30;

/// Inset of the text box from the bottom of its band
pub const MARGIN_BOTTOM_PX: i32 = 30;

pub const FONT_SIZE_MAX: u32 = 42;
pub const FONT_SIZE_MIN: u32 = 22;

/// Slack kept between fitted text and the box edges
pub const FIT_MARGIN_PX: i32 = 4;

/// Team names start this far into their column (rank badge sits left of it)
pub const TEAM_LEFT_PADDING_PX: i32 = 111;

pub const DEFAULT_GAMES_NUDGE_PX: i32 = -8;
pub const DEFAULT_WIN_NUDGE_PX: i32 = 2;
pub const DEFAULT_LOOSE_NUDGE_PX: i32 = 6;

pub const DEFAULT_WORKSHEET_NAME: &str = "Feuille 1";
pub const DEFAULT_BASE_IMAGE_PATH: &str = "classement.png";
pub const DEFAULT_OUTPUT_PATH: &str = "render.png";
pub const DEFAULT_FONT_PATH: &str = "Oswald-Medium.ttf";
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";
pub const DEFAULT_ROW_COUNT: usize = 6;
pub const DEFAULT_SHEET_URL: &str =
    "https://docs.google.com/spreadsheets/d/1ESiWCUnd0ndupA6WocooLcbB6qqf_gx4jShZ0K6Ef7Y";
pub const DEFAULT_CREDENTIALS_FILE: &str = "service-account.json";

/// Timeout for each Google API request
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Where the diagnostic image goes, whatever the configured output path
pub const DIAGNOSTIC_PATH: &str = "render.png";

pub const DIAGNOSTIC_WIDTH: u32 = 1000;
pub const DIAGNOSTIC_HEIGHT: u32 = 600;
pub const DIAGNOSTIC_BACKGROUND: [u8; 3] = [30, 30, 30];
pub const DIAGNOSTIC_TEXT_COLOR: [u8; 3] = [255, 120, 120];
pub const DIAGNOSTIC_FONT_SIZE: u32 = 20;
pub const DIAGNOSTIC_ORIGIN: (i32, i32) = (20, 20);
pub const DIAGNOSTIC_LINE_HEIGHT_PX: i32 = 24;

/// RGBA used for the one-pixel outline behind each string
pub const SHADOW_COLOR: [u8; 4] = [0, 0, 0, 180];
