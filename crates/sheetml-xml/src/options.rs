//! Writer options

/// Options for writing SpreadsheetML
#[derive(Debug, Clone)]
pub struct XmlWriteOptions {
    /// Run [`Workbook::validate`](sheetml_core::Workbook::validate) before writing
    pub validate: bool,
    /// Write workbooks that have no worksheets (logged as a warning)
    pub allow_empty_workbook: bool,
}

impl Default for XmlWriteOptions {
    fn default() -> Self {
        Self {
            validate: true,
            allow_empty_workbook: true,
        }
    }
}

impl XmlWriteOptions {
    /// Reject empty workbooks as well as invalid ones
    pub fn strict() -> Self {
        Self {
            validate: true,
            allow_empty_workbook: false,
        }
    }
}
