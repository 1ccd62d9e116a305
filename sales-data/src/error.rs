/// Error types for dataset loading
use thiserror::Error;

/// Errors raised while loading or parsing the sales dataset.
///
/// Any of these is fatal to the session: the dashboard renders an
/// error state instead of a partial view.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Dataset file missing or unreadable
    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV content
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required header column is absent
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// The file parsed but contained no data rows
    #[error("Dataset contains no records")]
    Empty,
}

/// Type alias for Results using DataLoadError
pub type Result<T> = std::result::Result<T, DataLoadError>;
