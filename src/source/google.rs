//! Google Sheets backed row source

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use reqwest::blocking::{Client, Response};
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

use super::credentials::{ServiceAccountKey, SHEETS_READONLY_SCOPE};
use super::SheetSource;
use crate::config::defaults::HTTP_TIMEOUT_SECS;
use crate::config::Settings;
use crate::error::RenderError;
use crate::model::Record;

const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets/";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetMeta>,
}

#[derive(Debug, Deserialize)]
struct SheetMeta {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// Blocking client shared by the token exchange and the Sheets calls
fn http_client() -> Result<Client, RenderError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?)
}

/// An authenticated handle on one spreadsheet
pub struct GoogleSheets {
    client: Client,
    token: String,
    spreadsheet_id: String,
}

impl GoogleSheets {
    /// Authenticate with the configured service account and open the sheet
    pub fn connect(settings: &Settings) -> Result<Self, RenderError> {
        let key = ServiceAccountKey::load(&settings.credential_path)?;
        let spreadsheet_id = spreadsheet_id(&settings.sheet_url)?;
        let client = http_client()?;

        log::info!("Authenticating as {}", key.client_email);
        let assertion = key.assertion(SHEETS_READONLY_SCOPE)?;
        let response = client
            .post(&key.token_uri)
            .form(&[
                ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                ("assertion", assertion.as_str()),
            ])
            .send()?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(RenderError::Auth(format!("{}: {}", status, body)));
        }
        let token: TokenResponse = response.json()?;

        Ok(Self {
            client,
            token: token.access_token,
            spreadsheet_id,
        })
    }

    fn get(&self, url: Url) -> Result<Response, RenderError> {
        let response = self.client.get(url).bearer_auth(&self.token).send()?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(RenderError::SheetApi(format!("{}: {}", status, body)));
        }
        Ok(response)
    }

    fn spreadsheet_url(&self) -> Result<Url, RenderError> {
        Url::parse(SHEETS_API)
            .and_then(|base| base.join(&self.spreadsheet_id))
            .map_err(|e| RenderError::InvalidSheetUrl(e.to_string()))
    }
}

impl SheetSource for GoogleSheets {
    fn worksheet_titles(&self) -> Result<Vec<String>, RenderError> {
        let mut url = self.spreadsheet_url()?;
        url.query_pairs_mut()
            .append_pair("fields", "sheets.properties.title");
        let meta: SpreadsheetMeta = self.get(url)?.json()?;
        Ok(meta
            .sheets
            .into_iter()
            .map(|sheet| sheet.properties.title)
            .collect())
    }

    fn records(&self, title: &str) -> Result<Vec<Record>, RenderError> {
        let mut url = self.spreadsheet_url()?;
        url.path_segments_mut()
            .map_err(|_| RenderError::InvalidSheetUrl(self.spreadsheet_id.clone()))?
            .push("values")
            .push(&quote_sheet_title(title));
        let range: ValueRange = self.get(url)?.json()?;

        let rows = range
            .values
            .into_iter()
            .map(|row| row.iter().map(cell_text).collect())
            .collect::<Vec<Vec<String>>>();
        Ok(records_from_values(&rows))
    }
}

/// Pull the spreadsheet key out of a docs.google.com URL
pub fn spreadsheet_id(url: &str) -> Result<String, RenderError> {
    static PATTERNS: OnceLock<[Regex; 2]> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        [
            Regex::new(r"/spreadsheets/d/([a-zA-Z0-9_-]+)").expect("valid regex"),
            Regex::new(r"key=([^&#]+)").expect("valid regex"),
        ]
    });

    patterns
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| RenderError::InvalidSheetUrl(url.to_string()))
}

/// A1 range covering a whole worksheet
fn quote_sheet_title(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Turn a grid of cells into header-keyed records
///
/// The first row holds the headers. Rows shorter than the header are padded
/// with empty cells; cells beyond the last header are dropped.
pub fn records_from_values(rows: &[Vec<String>]) -> Vec<Record> {
    let Some((headers, body)) = rows.split_first() else {
        return Vec::new();
    };

    body.iter()
        .map(|row| {
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| (header.clone(), row.get(i).cloned().unwrap_or_default()))
                .collect()
        })
        .collect()
}
