use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults::*;

#[derive(Parser, Debug)]
#[command(name = "standings-render")]
#[command(
    author,
    version,
    about = "Render league standings from a Google Sheet onto a standings background"
)]
pub struct Args {
    /// Worksheet (tab) holding the standings; the first tab is used if absent
    #[arg(long = "worksheet", env = "WORKSHEET_NAME", default_value = DEFAULT_WORKSHEET_NAME)]
    pub worksheet_name: String,

    /// Background image with the pre-drawn standings grid
    #[arg(long = "base-image", env = "BASE_IMAGE_PATH", default_value = DEFAULT_BASE_IMAGE_PATH)]
    pub base_image: PathBuf,

    /// Output PNG path
    #[arg(short, long, env = "OUTPUT_PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// TrueType/OpenType font used for all text
    #[arg(long = "font", env = "FONT_PATH", default_value = DEFAULT_FONT_PATH)]
    pub font: PathBuf,

    /// Text color, any CSS color (#rrggbb, rgb(...), hsl(...), names)
    #[arg(long, env = "TEXT_COLOR", default_value = DEFAULT_TEXT_COLOR)]
    pub text_color: String,

    /// Draw a dark outline behind text ("1" to enable)
    #[arg(long, env = "SHADOW", default_value = "1", value_parser = parse_flag, action = clap::ArgAction::Set)]
    pub shadow: bool,

    /// Spreadsheet URL
    #[arg(long, env = "SHEET_URL", default_value = DEFAULT_SHEET_URL)]
    pub sheet_url: String,

    /// Maximum number of standings rows to draw
    #[arg(short = 'n', long = "rows", env = "ROW_COUNT", default_value_t = DEFAULT_ROW_COUNT)]
    pub row_count: usize,

    /// Horizontal offset in px applied to the Games column
    #[arg(long, env = "GAMES_NUDGE_PX", default_value_t = DEFAULT_GAMES_NUDGE_PX, allow_hyphen_values = true)]
    pub games_nudge: i32,

    /// Horizontal offset in px applied to the Win column
    #[arg(long, env = "WIN_NUDGE_PX", default_value_t = DEFAULT_WIN_NUDGE_PX, allow_hyphen_values = true)]
    pub win_nudge: i32,

    /// Horizontal offset in px applied to the Loose column
    #[arg(long, env = "LOOSE_NUDGE_PX", default_value_t = DEFAULT_LOOSE_NUDGE_PX, allow_hyphen_values = true)]
    pub loose_nudge: i32,

    /// Service account key (defaults to service-account.json next to the executable)
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS")]
    pub credentials: Option<PathBuf>,

    /// Outline every render box and log at debug level ("1" to enable)
    #[arg(long, env = "DEBUG", default_value = "0", value_parser = parse_flag, action = clap::ArgAction::Set)]
    pub debug: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Get the credential path, defaulting to a key file beside the executable
    pub fn credentials_path(&self) -> PathBuf {
        self.credentials.clone().unwrap_or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_CREDENTIALS_FILE)))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CREDENTIALS_FILE))
        })
    }

    /// Log level implied by `-v` and the debug flag
    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            return log::LevelFilter::Debug;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

/// Parse an on/off switch: exactly "1" turns it on
pub fn parse_flag(value: &str) -> Result<bool, String> {
    Ok(value.trim() == "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["standings-render"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(!parse_flag("true").unwrap());
        assert!(!parse_flag("").unwrap());
    }

    #[test]
    fn test_negative_nudge() {
        let args = parse(&["--games-nudge", "-3", "--win-nudge", "0"]);
        assert_eq!(args.games_nudge, -3);
        assert_eq!(args.win_nudge, 0);
    }

    #[test]
    fn test_explicit_credentials() {
        let args = parse(&["--credentials", "/tmp/key.json"]);
        assert_eq!(args.credentials_path(), PathBuf::from("/tmp/key.json"));
    }

    #[test]
    fn test_log_level() {
        let args = parse(&["-vv"]);
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
        let args = parse(&["--debug", "1"]);
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
    }
}
