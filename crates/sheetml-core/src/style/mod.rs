//! Style registry types
//!
//! This module contains the types used to describe workbook styles:
//! - [`Style`] - A named, ID-referenced presentation
//! - [`StyleId`] - The identifier rows, columns and cells refer to
//! - [`StyleOptions`] - Font, fill and number format settings
//! - [`Underline`] - Underline kinds

mod font;
mod options;

use std::fmt;

pub use font::Underline;
pub use options::StyleOptions;

/// Identifier of a registered [`Style`]
///
/// The literal `"Default"` is reserved: it names the built-in default style
/// and, when used as a reference, means "apply no explicit style".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(String);

impl StyleId {
    /// ID of the built-in default style
    pub const DEFAULT: &'static str = "Default";
    /// ID of the built-in title style
    pub const TITLE: &'static str = "Title";
    /// ID of the built-in hyperlink style
    pub const HYPERLINK: &'static str = "Hyperlink";

    /// Create a style ID
    pub fn new<S: Into<String>>(id: S) -> Self {
        StyleId(id.into())
    }

    /// The ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the `Default` sentinel
    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }

    /// Turn a style reference into the stored form: `None` for `Default`.
    pub(crate) fn into_reference(self) -> Option<StyleId> {
        if self.is_default() {
            None
        } else {
            Some(self)
        }
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StyleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StyleId {
    fn from(id: &str) -> Self {
        StyleId::new(id)
    }
}

impl From<String> for StyleId {
    fn from(id: String) -> Self {
        StyleId(id)
    }
}

impl From<&StyleId> for StyleId {
    fn from(id: &StyleId) -> Self {
        id.clone()
    }
}

/// A workbook style
///
/// Styles are registered on the [`Workbook`](crate::Workbook) and referenced
/// by ID from columns, rows and cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    id: StyleId,
    name: String,
    options: StyleOptions,
}

impl Style {
    /// Create a style with default options
    pub fn new<I: Into<StyleId>, S: Into<String>>(id: I, name: S) -> Self {
        Self::with_options(id, name, StyleOptions::default())
    }

    /// Create a style with the given options
    pub fn with_options<I: Into<StyleId>, S: Into<String>>(
        id: I,
        name: S,
        options: StyleOptions,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            options,
        }
    }

    /// The built-in `Default` style ("Normal")
    pub fn default_style() -> Self {
        Self::new(StyleId::DEFAULT, "Normal")
    }

    /// The built-in `Title` style: white bold text on green
    pub fn title() -> Self {
        Self::new(StyleId::TITLE, "Title")
            .font_color("#ffffff")
            .bold(true)
            .background_color("#00ff00")
    }

    /// The built-in `Hyperlink` style: blue, single underline
    pub fn hyperlink() -> Self {
        Self::new(StyleId::HYPERLINK, "Hyperlink")
            .font_color("#0000D4")
            .underline(Underline::Single)
    }

    /// The three built-in styles in registration order
    pub fn builtins() -> [Style; 3] {
        [Self::default_style(), Self::title(), Self::hyperlink()]
    }

    /// Style ID
    pub fn id(&self) -> &StyleId {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Formatting options
    pub fn options(&self) -> &StyleOptions {
        &self.options
    }

    /// Get a mutable reference to the formatting options
    pub fn options_mut(&mut self) -> &mut StyleOptions {
        &mut self.options
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.options.bold = bold;
        self
    }

    /// Set font name
    pub fn font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.options.font_name = name.into();
        self
    }

    /// Set font family
    pub fn font_family<S: Into<String>>(mut self, family: S) -> Self {
        self.options.font_family = family.into();
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.options.font_size = size;
        self
    }

    /// Set font color
    pub fn font_color<S: Into<String>>(mut self, color: S) -> Self {
        self.options.font_color = color.into();
        self
    }

    /// Set a solid background color
    pub fn background_color<S: Into<String>>(mut self, color: S) -> Self {
        self.options.background_color = Some(color.into());
        self
    }

    /// Set underline
    pub fn underline(mut self, underline: Underline) -> Self {
        self.options.underline = Some(underline);
        self
    }

    /// Set number format pattern
    pub fn number_format<S: Into<String>>(mut self, format: S) -> Self {
        self.options.number_format = Some(format.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_style_has_defaults() {
        let style = Style::new("s1", "Plain");
        assert_eq!(style.id().as_str(), "s1");
        assert_eq!(style.name(), "Plain");
        assert_eq!(style.options(), &StyleOptions::default());
    }

    #[test]
    fn test_builtins() {
        let [default, title, link] = Style::builtins();

        assert!(default.id().is_default());
        assert_eq!(default.name(), "Normal");

        assert_eq!(title.id().as_str(), "Title");
        assert!(title.options().bold);
        assert_eq!(title.options().font_color, "#ffffff");
        assert_eq!(title.options().background_color.as_deref(), Some("#00ff00"));

        assert_eq!(link.id().as_str(), "Hyperlink");
        assert_eq!(link.options().font_color, "#0000D4");
        assert_eq!(link.options().underline, Some(Underline::Single));
        assert!(!link.options().bold);
    }

    #[test]
    fn test_default_reference_normalizes_to_none() {
        assert_eq!(StyleId::from("Default").into_reference(), None);
        assert_eq!(
            StyleId::from("Title").into_reference(),
            Some(StyleId::from("Title"))
        );
    }
}
