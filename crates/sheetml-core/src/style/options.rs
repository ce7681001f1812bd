//! Style options

use super::Underline;

/// Formatting options carried by a [`Style`](super::Style)
///
/// Every field has an explicit default; absent optional fields mean the
/// corresponding XML attribute is omitted entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleOptions {
    /// Font name (default: "Calibri")
    pub font_name: String,
    /// Font family (default: "Swiss")
    pub font_family: String,
    /// Font size in points (default: 11)
    pub font_size: f64,
    /// Font color (default: "#000000")
    pub font_color: String,
    /// Bold (default: false)
    pub bold: bool,
    /// Solid background color
    pub background_color: Option<String>,
    /// Underline kind
    pub underline: Option<Underline>,
    /// Number format pattern (e.g. "0.00%")
    pub number_format: Option<String>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            font_name: "Calibri".to_string(),
            font_family: "Swiss".to_string(),
            font_size: 11.0,
            font_color: "#000000".to_string(),
            bold: false,
            background_color: None,
            underline: None,
            number_format: None,
        }
    }
}

impl StyleOptions {
    /// Create options with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from a string-keyed option map.
    ///
    /// Recognized keys are `FontName`, `FontFamily`, `FontSize`, `FontColor`,
    /// `FontBold`, `BackgroundColor`, `Underline` and `NumberFormat`. Unknown
    /// keys are ignored; values that fail to parse leave the default in place.
    ///
    /// ```rust
    /// use sheetml_core::StyleOptions;
    ///
    /// let options = StyleOptions::from_pairs([
    ///     ("FontColor", "#ff0000"),
    ///     ("FontBold", "true"),
    ///     ("Sparkle", "yes"),
    /// ]);
    /// assert_eq!(options.font_color, "#ff0000");
    /// assert!(options.bold);
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Self::default();
        for (key, value) in pairs {
            options.set(key.as_ref(), value.as_ref());
        }
        options
    }

    /// Apply a single keyed option. Returns `false` if the key is not recognized.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        match key {
            "FontName" => self.font_name = value.to_string(),
            "FontFamily" => self.font_family = value.to_string(),
            "FontSize" => match value.trim().parse::<f64>() {
                Ok(size) if size.is_finite() && size > 0.0 => self.font_size = size,
                _ => log::warn!("Ignoring invalid FontSize value '{value}'"),
            },
            "FontColor" => self.font_color = value.to_string(),
            "FontBold" => {
                self.bold = matches!(
                    value.trim().to_ascii_lowercase().as_str(),
                    "1" | "true" | "yes"
                )
            }
            "BackgroundColor" => self.background_color = non_empty(value),
            "Underline" => match value.parse::<Underline>() {
                Ok(underline) => self.underline = Some(underline),
                Err(e) => log::warn!("Ignoring Underline option: {e}"),
            },
            "NumberFormat" => self.number_format = non_empty(value),
            _ => {
                log::trace!("Ignoring unknown style option '{key}'");
                return false;
            }
        }
        true
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = StyleOptions::default();
        assert_eq!(options.font_name, "Calibri");
        assert_eq!(options.font_family, "Swiss");
        assert_eq!(options.font_size, 11.0);
        assert_eq!(options.font_color, "#000000");
        assert!(!options.bold);
        assert_eq!(options.background_color, None);
        assert_eq!(options.underline, None);
        assert_eq!(options.number_format, None);
    }

    #[test]
    fn test_from_pairs_ignores_unknown_keys() {
        let options = StyleOptions::from_pairs([
            ("FontName", "Arial"),
            ("FontSize", "14"),
            ("Underline", "Double"),
            ("NumberFormat", "0.00"),
            ("Italic", "true"),
        ]);

        assert_eq!(options.font_name, "Arial");
        assert_eq!(options.font_size, 14.0);
        assert_eq!(options.underline, Some(Underline::Double));
        assert_eq!(options.number_format.as_deref(), Some("0.00"));
        // untouched
        assert_eq!(options.font_family, "Swiss");
    }

    #[test]
    fn test_font_size_is_parsed_not_kept_as_text() {
        let options = StyleOptions::from_pairs([("FontSize", "11.0")]);
        assert_eq!(options.font_size, 11.0);
        assert_eq!(options.font_size.to_string(), "11");
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let mut options = StyleOptions::new();
        assert!(options.set("FontSize", "large"));
        assert!(options.set("Underline", "Wavy"));
        assert!(!options.set("Sparkle", "1"));

        assert_eq!(options, StyleOptions::default());
    }

    #[test]
    fn test_empty_optional_values_stay_absent() {
        let options = StyleOptions::from_pairs([("BackgroundColor", ""), ("NumberFormat", "")]);
        assert_eq!(options.background_color, None);
        assert_eq!(options.number_format, None);
    }
}
