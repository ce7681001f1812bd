//! # sheetml-xml
//!
//! SpreadsheetML 2003 (single-file flat XML) writer for sheetml.
//!
//! ```rust
//! use sheetml_core::{Row, Workbook};
//! use sheetml_xml::SpreadsheetMlWriter;
//!
//! let mut workbook = Workbook::new();
//! workbook
//!     .worksheet_mut(0)
//!     .unwrap()
//!     .append_row(Row::from_values(["x", "y", "z"]));
//!
//! let xml = SpreadsheetMlWriter::to_string(&workbook).unwrap();
//! assert!(xml.contains(r#"<Data ss:Type="String">y</Data>"#));
//! ```

pub mod error;
pub mod escape;
pub mod options;
pub mod writer;

pub use error::{XmlError, XmlResult};
pub use escape::escape_xml;
pub use options::XmlWriteOptions;
pub use writer::SpreadsheetMlWriter;

/// MIME type to serve SpreadsheetML documents with
pub const CONTENT_TYPE: &str = "application/vnd.ms-excel";

/// File extension spreadsheet applications associate with SpreadsheetML
pub const FILE_EXTENSION: &str = "xml";
