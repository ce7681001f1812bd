//! Font underline kinds

use std::fmt;
use std::str::FromStr;

/// Underline style
///
/// The variants map one-to-one onto the `ss:Underline` values understood by
/// SpreadsheetML readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Underline {
    /// Single underline
    Single,
    /// Double underline
    Double,
    /// Single accounting underline (extends to cell width)
    SingleAccounting,
    /// Double accounting underline
    DoubleAccounting,
}

impl Underline {
    /// The `ss:Underline` attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            Underline::Single => "Single",
            Underline::Double => "Double",
            Underline::SingleAccounting => "SingleAccounting",
            Underline::DoubleAccounting => "DoubleAccounting",
        }
    }
}

impl fmt::Display for Underline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Underline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Single" => Ok(Underline::Single),
            "Double" => Ok(Underline::Double),
            "SingleAccounting" => Ok(Underline::SingleAccounting),
            "DoubleAccounting" => Ok(Underline::DoubleAccounting),
            other => Err(format!("unknown underline kind: {other}")),
        }
    }
}
