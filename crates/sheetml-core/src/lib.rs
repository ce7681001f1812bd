//! # sheetml-core
//!
//! Core data structures for the sheetml library.
//!
//! This crate provides the in-memory workbook model that the writer walks:
//! - [`Style`] - Named, ID-referenced font/fill/format bundles
//! - [`Column`], [`Row`], [`Cell`], [`Data`] - Grid primitives
//! - [`Worksheet`] - One tab of the workbook
//! - [`Workbook`] - Style registry, sheets and the active sheet index
//!
//! ## Example
//!
//! ```rust
//! use sheetml_core::{Row, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.add_title_row(["Name", "Score"]);
//! sheet.append_row(Row::from_values(["Ada", "42"]));
//!
//! assert_eq!(sheet.row_count(), 2);
//! assert!(workbook.validate().is_ok());
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod row;
pub mod style;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{Cell, Data, DataType};
pub use column::Column;
pub use error::{Error, Result};
pub use row::Row;
pub use style::{Style, StyleId, StyleOptions, Underline};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
