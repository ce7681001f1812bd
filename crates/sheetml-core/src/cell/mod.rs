//! Cell types

mod data;

pub use data::{Data, DataType};

use crate::style::StyleId;

/// A single cell: one [`Data`] value, an optional hyperlink and a style reference
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    data: Data,
    href: Option<String>,
    style: Option<StyleId>,
}

impl Cell {
    /// Create a string cell with the default style and no link
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self::from_data(Data::new(value))
    }

    /// Create a cell wrapping existing data
    pub fn from_data(data: Data) -> Self {
        Self {
            data,
            href: None,
            style: None,
        }
    }

    /// Create a link cell using the built-in `Hyperlink` style
    pub fn hyperlink<S: Into<String>, H: Into<String>>(text: S, href: H) -> Self {
        Self::new(text)
            .with_href(href)
            .with_style(StyleId::HYPERLINK)
    }

    /// Cell data
    pub fn data(&self) -> &Data {
        &self.data
    }

    /// Replace the cell data
    pub fn set_data<D: Into<Data>>(&mut self, data: D) {
        self.data = data.into();
    }

    /// Hyperlink target
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Set or clear the hyperlink target
    pub fn set_href(&mut self, href: Option<String>) {
        self.href = href.filter(|h| !h.is_empty());
    }

    /// Set hyperlink target
    pub fn with_href<H: Into<String>>(mut self, href: H) -> Self {
        self.set_href(Some(href.into()));
        self
    }

    /// Style reference (`None` = Default)
    pub fn style(&self) -> Option<&StyleId> {
        self.style.as_ref()
    }

    /// Set the style reference; `"Default"` clears it
    pub fn set_style<I: Into<StyleId>>(&mut self, style: I) {
        self.style = style.into().into_reference();
    }

    /// Set style
    pub fn with_style<I: Into<StyleId>>(mut self, style: I) -> Self {
        self.set_style(style);
        self
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::new(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::new(value)
    }
}

impl From<Data> for Cell {
    fn from(data: Data) -> Self {
        Cell::from_data(data)
    }
}
