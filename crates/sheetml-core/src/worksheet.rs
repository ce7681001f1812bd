//! Worksheet type

use crate::column::Column;
use crate::row::Row;
use crate::style::StyleId;

/// A worksheet (single tab in a workbook)
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    /// Sheet name, used as the tab label
    name: String,
    /// Column layout, in column order
    columns: Vec<Column>,
    /// Rows, top to bottom
    rows: Vec<Row>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    // ==================== Columns ====================

    /// Append a column after the existing ones
    pub fn append_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Columns in order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by 1-based spreadsheet index
    pub fn column(&self, index: usize) -> Option<&Column> {
        index.checked_sub(1).and_then(|i| self.columns.get(i))
    }

    /// Get a mutable column by 1-based spreadsheet index
    pub fn column_mut(&mut self, index: usize) -> Option<&mut Column> {
        index.checked_sub(1).and_then(move |i| self.columns.get_mut(i))
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    // ==================== Rows ====================

    /// Append a row after the existing ones
    pub fn append_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Replace **all** rows with a single `Title`-styled row built from `values`.
    ///
    /// This is destructive: rows appended earlier are discarded. Call it
    /// before appending data rows.
    ///
    /// ```rust
    /// use sheetml_core::{Row, Worksheet};
    ///
    /// let mut sheet = Worksheet::new("Report");
    /// sheet.append_row(Row::from_values(["lost"]));
    /// sheet.add_title_row(["Name", "Total"]);
    /// assert_eq!(sheet.row_count(), 1);
    /// ```
    pub fn add_title_row<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row = Row::from_values(values).with_style(StyleId::TITLE);
        self.rows = vec![row];
    }

    /// Remove every row
    pub fn delete_all_rows(&mut self) {
        self.rows.clear();
    }

    /// Rows in order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get a row by 0-based position
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Get a mutable row by 0-based position
    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate over every style reference in the sheet with a readable location
    pub(crate) fn style_references(&self) -> impl Iterator<Item = (&StyleId, String)> + '_ {
        let columns = self.columns.iter().enumerate().filter_map(move |(i, col)| {
            col.style()
                .map(|s| (s, format!("'{}' column {}", self.name, i + 1)))
        });

        let rows = self.rows.iter().enumerate().flat_map(move |(r, row)| {
            let row_style = row
                .style()
                .map(|s| (s, format!("'{}' row {}", self.name, r + 1)));
            let cells = row.cells().iter().enumerate().filter_map(move |(c, cell)| {
                cell.style()
                    .map(|s| (s, format!("'{}' R{}C{}", self.name, r + 1, c + 1)))
            });
            row_style.into_iter().chain(cells)
        });

        columns.chain(rows)
    }
}
