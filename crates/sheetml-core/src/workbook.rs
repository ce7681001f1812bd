//! Workbook type - the main document structure

use ahash::AHashSet;

use crate::error::{Error, Result};
use crate::style::{Style, StyleId};
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// A workbook (spreadsheet document)
///
/// A workbook owns an ordered style registry, one or more worksheets and the
/// index of the sheet shown when the file is opened. Writers take `&Workbook`,
/// so a workbook cannot change while it is being serialized.
#[derive(Debug, Clone)]
pub struct Workbook {
    /// Registered styles, in registration order
    styles: Vec<Style>,
    /// Worksheets in the workbook
    worksheets: Vec<Worksheet>,
    /// Active sheet index
    active_sheet: usize,
}

impl Workbook {
    /// Create a new workbook with the built-in styles and one worksheet named `Sheet1`
    pub fn new() -> Self {
        let mut wb = Self::empty();
        wb.worksheets.push(Worksheet::new("Sheet1"));
        wb
    }

    /// Create a workbook with the built-in styles and no worksheets
    pub fn empty() -> Self {
        Self {
            styles: Style::builtins().into(),
            worksheets: Vec::new(),
            active_sheet: 0,
        }
    }

    // ==================== Styles ====================

    /// Registered styles in registration order
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Get a style by ID
    pub fn style(&self, id: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.id().as_str() == id)
    }

    /// Resolve a style reference; `None` resolves to the `Default` style
    pub fn resolve_style(&self, reference: Option<&StyleId>) -> Option<&Style> {
        self.style(reference.map_or(StyleId::DEFAULT, StyleId::as_str))
    }

    /// Check if a style ID is registered
    pub fn has_style(&self, id: &str) -> bool {
        self.style(id).is_some()
    }

    /// Register a style after the existing ones
    ///
    /// Fails with [`Error::DuplicateStyleId`] if the ID is already taken.
    pub fn add_style(&mut self, style: Style) -> Result<()> {
        if self.has_style(style.id().as_str()) {
            return Err(Error::DuplicateStyleId(style.id().to_string()));
        }
        self.styles.push(style);
        Ok(())
    }

    // ==================== Worksheets ====================

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Check if the workbook has no worksheets
    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// Get a worksheet by index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a mutable worksheet by index
    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(index)
    }

    /// Get a worksheet by name
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|ws| ws.name() == name)
    }

    /// Get a mutable worksheet by name
    pub fn worksheet_by_name_mut(&mut self, name: &str) -> Option<&mut Worksheet> {
        self.worksheets.iter_mut().find(|ws| ws.name() == name)
    }

    /// Get the index of a worksheet by name
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.worksheets.iter().position(|ws| ws.name() == name)
    }

    /// Iterate over all worksheets
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Iterate over all worksheets mutably
    pub fn worksheets_mut(&mut self) -> impl Iterator<Item = &mut Worksheet> {
        self.worksheets.iter_mut()
    }

    /// Add a new worksheet with default name
    pub fn add_worksheet(&mut self) -> Result<usize> {
        let name = self.generate_sheet_name();
        self.add_worksheet_with_name(&name)
    }

    /// Add a new worksheet with specified name
    pub fn add_worksheet_with_name(&mut self, name: &str) -> Result<usize> {
        self.add_existing_worksheet(Worksheet::new(name))
    }

    /// Add an existing worksheet to the workbook
    pub fn add_existing_worksheet(&mut self, worksheet: Worksheet) -> Result<usize> {
        self.validate_sheet_name(worksheet.name(), None)?;
        let index = self.worksheets.len();
        self.worksheets.push(worksheet);
        Ok(index)
    }

    /// Rename a worksheet
    pub fn rename_worksheet(&mut self, index: usize, new_name: &str) -> Result<()> {
        if index >= self.worksheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.worksheets.len()));
        }
        self.validate_sheet_name(new_name, Some(index))?;
        self.worksheets[index].set_name(new_name);
        Ok(())
    }

    // ==================== Active sheet ====================

    /// Get the active sheet index
    pub fn active_sheet(&self) -> usize {
        self.active_sheet
    }

    /// Set the active sheet index
    pub fn set_active_sheet(&mut self, index: usize) -> Result<()> {
        if index >= self.worksheets.len() {
            return Err(Error::ActiveSheetOutOfRange {
                index,
                count: self.worksheets.len(),
            });
        }
        self.active_sheet = index;
        Ok(())
    }

    /// Get the active worksheet
    pub fn active_worksheet(&self) -> Option<&Worksheet> {
        self.worksheets.get(self.active_sheet)
    }

    // ==================== Validation ====================

    /// Check the preconditions for writing this workbook.
    ///
    /// Every style referenced by a column, row or cell must be registered,
    /// font sizes and column widths must be finite and positive, and the
    /// active sheet index must name a sheet. Style ID uniqueness is enforced
    /// by [`add_style`](Self::add_style). An empty workbook passes; writers
    /// decide how to treat it.
    pub fn validate(&self) -> Result<()> {
        let mut ids: AHashSet<&str> = AHashSet::with_capacity(self.styles.len());
        for style in &self.styles {
            check_positive(style.options().font_size, "font size", || {
                format!("style '{}'", style.id())
            })?;
            ids.insert(style.id().as_str());
        }

        if !self.worksheets.is_empty() && self.active_sheet >= self.worksheets.len() {
            return Err(Error::ActiveSheetOutOfRange {
                index: self.active_sheet,
                count: self.worksheets.len(),
            });
        }

        for sheet in &self.worksheets {
            for (i, column) in sheet.columns().iter().enumerate() {
                if let Some(width) = column.width() {
                    check_positive(width, "column width", || {
                        format!("'{}' column {}", sheet.name(), i + 1)
                    })?;
                }
            }
            for (style, location) in sheet.style_references() {
                if !ids.contains(style.as_str()) {
                    return Err(Error::UnknownStyleReference {
                        style: style.to_string(),
                        location,
                    });
                }
            }
        }

        Ok(())
    }

    /// Validate a sheet name, optionally excluding a sheet from duplicate check
    fn validate_sheet_name(&self, name: &str, exclude_index: Option<usize>) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{}'",
                c
            )));
        }

        // Check for duplicate names (case-insensitive)
        let name_lower = name.to_lowercase();
        for (i, ws) in self.worksheets.iter().enumerate() {
            if Some(i) != exclude_index && ws.name().to_lowercase() == name_lower {
                return Err(Error::DuplicateSheetName(name.into()));
            }
        }

        Ok(())
    }

    /// Generate a unique sheet name
    fn generate_sheet_name(&self) -> String {
        let mut n = self.worksheets.len() + 1;
        loop {
            let name = format!("Sheet{}", n);
            if self.validate_sheet_name(&name, None).is_ok() {
                return name;
            }
            n += 1;
        }
    }
}

/// Sizes and widths must be finite and greater than zero
fn check_positive<F: FnOnce() -> String>(
    value: f64,
    what: &'static str,
    location: F,
) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidValue {
            what,
            value: value.to_string(),
            location: location(),
        })
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}
