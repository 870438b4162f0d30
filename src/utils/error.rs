use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Archive download failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Zip extraction failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Spreadsheet error: {0}")]
    SpreadsheetError(#[from] calamine::XlsxError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("No file matching *{pattern} under {dir}")]
    MissingStationFile { pattern: String, dir: String },

    #[error("Column '{0}' not found in station sheet header")]
    MissingColumn(String),

    #[error("Unparseable date in column '{column}': {value:?}")]
    DateParseError { column: String, value: String },

    #[error("No usable station year ranges, cannot derive data period")]
    EmptyPeriod,

    #[error("Rendering failed: {0}")]
    RenderError(String),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl EtlError {
    /// Collapse plotters' backend-generic draw errors into a single variant.
    pub fn render(err: impl std::fmt::Display) -> Self {
        EtlError::RenderError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
