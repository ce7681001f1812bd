//! Error types for sheetml-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetml-core
#[derive(Debug, Error)]
pub enum Error {
    /// A row, column or cell names a style that is not registered
    #[error("Unknown style '{style}' referenced by {location}")]
    UnknownStyleReference { style: String, location: String },

    /// A style with this ID is already registered
    #[error("Style ID already registered: {0}")]
    DuplicateStyleId(String),

    /// A size or width that cannot be written
    #[error("Invalid {what} '{value}' in {location}")]
    InvalidValue {
        what: &'static str,
        value: String,
        location: String,
    },

    /// The workbook has no worksheets
    #[error("Workbook has no worksheets")]
    EmptyWorkbook,

    /// Active sheet index does not name an existing sheet
    #[error("Active sheet index {index} out of range (count: {count})")]
    ActiveSheetOutOfRange { index: usize, count: usize },

    /// Sheet index out of bounds
    #[error("Sheet index {0} out of bounds (count: {1})")]
    SheetOutOfBounds(usize, usize),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
