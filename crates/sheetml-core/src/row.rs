//! Row types

use crate::cell::Cell;
use crate::style::StyleId;

/// A row of cells, ordered left to right
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    cells: Vec<Cell>,
    style: Option<StyleId>,
}

impl Row {
    /// Create an empty row with the default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row of string cells from values
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row = Self::new();
        row.populate(values);
        row
    }

    /// Replace the cells with one default string cell per value, in order
    pub fn populate<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cells = values.into_iter().map(Cell::new).collect();
    }

    /// Append a cell
    pub fn push_cell<C: Into<Cell>>(&mut self, cell: C) {
        self.cells.push(cell.into());
    }

    /// Cells in column order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get a cell by 0-based position
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Get a mutable cell by 0-based position
    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// Number of cells in row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if row has any cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
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
