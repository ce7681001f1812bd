//! Column types

use crate::style::StyleId;

/// Column layout: a display width and a style, no content
///
/// A column's position in its sheet's column list is its 1-based
/// spreadsheet column index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Column {
    width: Option<f64>,
    style: Option<StyleId>,
}

impl Column {
    /// Create a column with no width and the default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Width in points (None = application default)
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Set or clear the width
    pub fn set_width(&mut self, width: Option<f64>) {
        self.width = width;
    }

    /// Set width
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
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
