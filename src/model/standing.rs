use std::collections::BTreeMap;

pub const RANK_FIELD: &str = "Classement";
pub const TEAM_FIELD: &str = "Team";
pub const GAMES_FIELD: &str = "Games";
pub const WIN_FIELD: &str = "Win";
pub const LOOSE_FIELD: &str = "Loose";

/// One worksheet row keyed by its header cell
pub type Record = BTreeMap<String, String>;

/// Read a field, treating a missing column as an empty cell
pub fn field<'a>(record: &'a Record, name: &str) -> &'a str {
    record.get(name).map(String::as_str).unwrap_or("")
}

/// A standings line ready to be drawn
///
/// All fields are trimmed copies of the sheet cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StandingRow {
    pub rank: String,
    pub team: String,
    pub games: String,
    pub win: String,
    pub loose: String,
}

impl StandingRow {
    pub fn from_record(record: &Record) -> Self {
        Self {
            rank: field(record, RANK_FIELD).trim().to_string(),
            team: field(record, TEAM_FIELD).trim().to_string(),
            games: field(record, GAMES_FIELD).trim().to_string(),
            win: field(record, WIN_FIELD).trim().to_string(),
            loose: field(record, LOOSE_FIELD).trim().to_string(),
        }
    }
}
