//! Prelude module - common imports for sheetml users
//!
//! ```rust
//! use sheetml::prelude::*;
//! ```

pub use crate::{
    // Cell types
    Cell,
    Column,
    Data,
    DataType,
    // Error types
    Error,
    Result,
    Row,
    // Writer types
    SpreadsheetMlWriter,
    // Style types
    Style,
    StyleId,
    StyleOptions,
    Underline,
    // Main types
    Workbook,
    // Extension traits
    WorkbookExt,
    Worksheet,
    XmlWriteOptions,
};
