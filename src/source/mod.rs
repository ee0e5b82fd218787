//! Row source adapter
//!
//! Reads the standings worksheet and turns it into an ordered, truncated list
//! of [`StandingRow`]s.

pub mod credentials;
pub mod google;

pub use credentials::ServiceAccountKey;
pub use google::GoogleSheets;

use crate::error::RenderError;
use crate::model::{field, Degradation, Degraded, Record, StandingRow};
use crate::model::standing::RANK_FIELD;

/// A spreadsheet the standings can be read from
pub trait SheetSource {
    /// Titles of every worksheet, in tab order
    fn worksheet_titles(&self) -> Result<Vec<String>, RenderError>;

    /// All records of one worksheet, keyed by the header row
    fn records(&self, title: &str) -> Result<Vec<Record>, RenderError>;
}

/// Pick the requested worksheet, or the first one if it does not exist
pub fn select_worksheet(
    source: &dyn SheetSource,
    requested: &str,
) -> Result<Degraded<String>, RenderError> {
    let titles = source.worksheet_titles()?;
    if titles.iter().any(|t| t == requested) {
        return Ok(Degraded::clean(requested.to_string()));
    }

    let first = titles.into_iter().next().ok_or(RenderError::NoWorksheets)?;
    let mut selected = Degraded::clean(first.clone());
    selected.degrade(Degradation::WorksheetFallback {
        requested: requested.to_string(),
        used: first,
    });
    Ok(selected)
}

/// Fetch up to `max_count` ranked rows, sorted by rank when every rank is numeric
pub fn fetch_rows(
    source: &dyn SheetSource,
    worksheet: &str,
    max_count: usize,
) -> Result<Degraded<Vec<StandingRow>>, RenderError> {
    let (title, mut degradations) = select_worksheet(source, worksheet)?.into_parts();
    let records = source.records(&title)?;
    log::info!("Read {} records from worksheet '{}'", records.len(), title);

    let (mut rows, sort_degradations) = rank_records(records).into_parts();
    degradations.extend(sort_degradations);
    rows.truncate(max_count);

    Ok(Degraded {
        value: rows,
        degradations,
    })
}

/// Drop unranked records and order the rest by rank
///
/// If any rank fails to parse as an integer, no sorting happens at all and
/// the sheet order is kept.
pub fn rank_records(records: Vec<Record>) -> Degraded<Vec<StandingRow>> {
    let ranked: Vec<Record> = records
        .into_iter()
        .filter(|r| !field(r, RANK_FIELD).trim().is_empty())
        .collect();

    let mut keyed = Vec::with_capacity(ranked.len());
    let mut unparsable = None;
    for record in &ranked {
        let rank = field(record, RANK_FIELD).trim();
        match rank.parse::<i64>() {
            Ok(n) => keyed.push((n, StandingRow::from_record(record))),
            Err(_) => {
                unparsable = Some(rank.to_string());
                break;
            }
        }
    }

    match unparsable {
        None => {
            keyed.sort_by_key(|(n, _)| *n);
            Degraded::clean(keyed.into_iter().map(|(_, row)| row).collect())
        }
        Some(rank) => {
            let mut rows = Degraded::clean(ranked.iter().map(StandingRow::from_record).collect());
            rows.degrade(Degradation::SortSkipped { rank });
            rows
        }
    }
}
