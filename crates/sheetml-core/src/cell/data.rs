//! Typed cell payloads

use std::fmt;

use chrono::NaiveDateTime;

/// SpreadsheetML data type tag (`ss:Type`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    /// Text
    #[default]
    String,
    /// Number, written in its shortest decimal form
    Number,
    /// Boolean, written as `1` or `0`
    Boolean,
    /// ISO 8601 timestamp (`2014-03-01T00:00:00.000`)
    DateTime,
    /// Error literal such as `#N/A`
    Error,
}

impl DataType {
    /// The `ss:Type` attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "String",
            DataType::Number => "Number",
            DataType::Boolean => "Boolean",
            DataType::DateTime => "DateTime",
            DataType::Error => "Error",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed scalar: content text plus its type tag
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Data {
    data_type: DataType,
    content: String,
}

impl Data {
    /// Create string data; the value is stored verbatim
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self::typed(DataType::String, value)
    }

    /// Create data with an explicit type tag
    pub fn typed<S: Into<String>>(data_type: DataType, content: S) -> Self {
        Self {
            data_type,
            content: content.into(),
        }
    }

    /// Create numeric data. Non-finite values become a `#NUM!` error.
    pub fn number(value: f64) -> Self {
        if value.is_finite() {
            Self::typed(DataType::Number, value.to_string())
        } else {
            Self::typed(DataType::Error, "#NUM!")
        }
    }

    /// Create boolean data
    pub fn boolean(value: bool) -> Self {
        Self::typed(DataType::Boolean, if value { "1" } else { "0" })
    }

    /// Create a timestamp
    pub fn date_time(value: NaiveDateTime) -> Self {
        Self::typed(
            DataType::DateTime,
            value.format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
        )
    }

    /// Type tag
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Unescaped content text
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl From<&str> for Data {
    fn from(value: &str) -> Self {
        Data::new(value)
    }
}

impl From<String> for Data {
    fn from(value: String) -> Self {
        Data::new(value)
    }
}

impl From<f64> for Data {
    fn from(value: f64) -> Self {
        Data::number(value)
    }
}

impl From<bool> for Data {
    fn from(value: bool) -> Self {
        Data::boolean(value)
    }
}
