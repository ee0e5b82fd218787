use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Service account key not found: {}", path.display())]
    CredentialsMissing { path: PathBuf },

    #[error("Invalid service account key: {0}")]
    InvalidCredentials(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Spreadsheet request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Spreadsheet API error: {0}")]
    SheetApi(String),

    #[error("Not a spreadsheet URL: {0}")]
    InvalidSheetUrl(String),

    #[error("Spreadsheet has no worksheets")]
    NoWorksheets,

    #[error("Failed to load base image {}", path.display())]
    BaseImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to load font: {0}")]
    FontLoad(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// Short variant name, shown in the diagnostic image
    pub fn kind(&self) -> &'static str {
        match self {
            RenderError::CredentialsMissing { .. } => "CredentialsMissing",
            RenderError::InvalidCredentials(_) => "InvalidCredentials",
            RenderError::Auth(_) => "Auth",
            RenderError::Http(_) => "Http",
            RenderError::SheetApi(_) => "SheetApi",
            RenderError::InvalidSheetUrl(_) => "InvalidSheetUrl",
            RenderError::NoWorksheets => "NoWorksheets",
            RenderError::BaseImage { .. } => "BaseImage",
            RenderError::Image(_) => "Image",
            RenderError::FontLoad(_) => "FontLoad",
            RenderError::Io(_) => "Io",
        }
    }
}
