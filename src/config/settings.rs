use std::path::PathBuf;

use crate::cli::Args;

use super::defaults::*;

/// Per-column horizontal offsets applied after centering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nudges {
    pub games: i32,
    pub win: i32,
    pub loose: i32,
}

impl Default for Nudges {
    fn default() -> Self {
        Self {
            games: DEFAULT_GAMES_NUDGE_PX,
            win: DEFAULT_WIN_NUDGE_PX,
            loose: DEFAULT_LOOSE_NUDGE_PX,
        }
    }
}

/// Runtime settings for one render
///
/// Built once at startup and shared read-only with every component.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Worksheet to read; the first worksheet is used when it is missing
    pub worksheet_name: String,
    pub base_path: PathBuf,
    pub output_path: PathBuf,
    pub font_path: PathBuf,
    /// Unparsed text color, resolved by `render::colors::parse_color`
    pub text_color: String,
    pub shadow: bool,
    pub row_count: usize,
    pub nudges: Nudges,
    pub sheet_url: String,
    pub credential_path: PathBuf,
    /// Outline render boxes on the output
    pub debug_boxes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            worksheet_name: DEFAULT_WORKSHEET_NAME.to_string(),
            base_path: PathBuf::from(DEFAULT_BASE_IMAGE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            shadow: true,
            row_count: DEFAULT_ROW_COUNT,
            nudges: Nudges::default(),
            sheet_url: DEFAULT_SHEET_URL.to_string(),
            credential_path: PathBuf::from(DEFAULT_CREDENTIALS_FILE),
            debug_boxes: false,
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments (which already folded in the environment)
    pub fn from_args(args: &Args) -> Self {
        Self {
            worksheet_name: args.worksheet_name.clone(),
            base_path: args.base_image.clone(),
            output_path: args.output.clone(),
            font_path: args.font.clone(),
            text_color: args.text_color.clone(),
            shadow: args.shadow,
            row_count: args.row_count,
            nudges: Nudges {
                games: args.games_nudge,
                win: args.win_nudge,
                loose: args.loose_nudge,
            },
            sheet_url: args.sheet_url.clone(),
            credential_path: args.credentials_path(),
            debug_boxes: args.debug,
        }
    }
}
