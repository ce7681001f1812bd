//! SpreadsheetML writer error types

use thiserror::Error;

/// Result type for SpreadsheetML operations
pub type XmlResult<T> = std::result::Result<T, XmlError>;

/// Errors that can occur while writing SpreadsheetML
#[derive(Debug, Error)]
pub enum XmlError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The workbook failed validation
    #[error("Core error: {0}")]
    Core(#[from] sheetml_core::Error),
}
