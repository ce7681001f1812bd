//! # sheetml
//!
//! Build spreadsheet workbooks in memory and write them as SpreadsheetML,
//! the single-file XML format spreadsheet applications open via
//! `progid="Excel.Sheet"`.
//!
//! ## Features
//!
//! - Ordered style registry with the built-in `Default`, `Title` and `Hyperlink` styles
//! - Columns with widths, rows of typed cells, hyperlinks
//! - Validation of style references before anything is written
//! - Deterministic output: the same workbook always produces the same bytes
//!
//! ## Example
//!
//! ```rust
//! use sheetml::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.append_column(Column::new().with_width(120.0));
//! sheet.add_title_row(["Name", "Homepage"]);
//!
//! let mut row = Row::from_values(["Ada"]);
//! row.push_cell(Cell::hyperlink("profile", "https://example.com/ada"));
//! sheet.append_row(row);
//!
//! let xml = workbook.to_xml().unwrap();
//! assert!(xml.starts_with("<?xml version=\"1.0\"?>"));
//!
//! // Save to file
//! // workbook.save("people.xml").unwrap();
//! ```

pub mod prelude;

// Re-export core types
pub use sheetml_core::{
    // Cell types
    Cell,
    Column,
    Data,
    DataType,
    // Error types
    Error,
    Result,
    Row,
    // Style types
    Style,
    StyleId,
    StyleOptions,
    Underline,
    // Main types
    Workbook,
    Worksheet,
    // Constants
    MAX_SHEET_NAME_LEN,
};

// Re-export writer types
pub use sheetml_xml::{
    escape_xml, SpreadsheetMlWriter, XmlError, XmlResult, XmlWriteOptions, CONTENT_TYPE,
    FILE_EXTENSION,
};

use std::path::Path;

/// Extension trait for Workbook to add serialization and file output
pub trait WorkbookExt {
    /// Serialize the workbook to SpreadsheetML text
    fn to_xml(&self) -> Result<String>;

    /// Save the workbook to a `.xml` file
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl WorkbookExt for Workbook {
    fn to_xml(&self) -> Result<String> {
        SpreadsheetMlWriter::to_string(self).map_err(into_core_error)
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some(FILE_EXTENSION) => {
                SpreadsheetMlWriter::write_file(self, path).map_err(into_core_error)
            }
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }
}

fn into_core_error(e: XmlError) -> Error {
    match e {
        XmlError::Core(e) => e,
        other => Error::other(other.to_string()),
    }
}
