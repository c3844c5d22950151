//! Grid type and column extraction

use crate::row::Row;
use crate::section::Section;
use crate::value::CellValue;

/// The full decoded row/column table from one spreadsheet fetch
///
/// A `Grid` is immutable once built: every successful fetch produces a new
/// grid wholesale, and nothing merges into an existing one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    /// Create a grid from rows, preserving provider order
    pub fn new(rows: Vec<Row>) -> Self {
        Grid { rows }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the grid has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in provider order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// The rows of a section, truncated to the rows actually present
    ///
    /// A grid shorter than the section's upper bound yields whatever rows
    /// exist from `start`; a grid shorter than `start` yields no rows.
    /// Never panics.
    pub fn section(&self, section: Section) -> &[Row] {
        let start = section.start.min(self.rows.len());
        let end = section.end.min(self.rows.len());
        &self.rows[start..end]
    }

    /// The cell at `(row, column)`, empty if the row is absent or short
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        self.rows
            .get(row)
            .map(|r| r.cell(column))
            .unwrap_or(&EMPTY)
    }

    /// Widest row in the grid, 0 for an empty grid
    pub fn max_width(&self) -> usize {
        self.rows.iter().map(Row::width).max().unwrap_or(0)
    }
}

impl From<Vec<Row>> for Grid {
    fn from(rows: Vec<Row>) -> Self {
        Grid::new(rows)
    }
}

/// Extract one column from a slice of rows, defaulting missing cells
///
/// Yields exactly one value per input row in input order; rows too short to
/// have the column contribute [`CellValue::Empty`]. This is what seeds the
/// editable form fields from a section's value column.
pub fn extract_column(rows: &[Row], column: usize) -> Vec<CellValue> {
    rows.iter().map(|row| row.cell(column).clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{BASE_ATTRIBUTES, CHARACTER_INFO, DERIVED_STATS};
    use pretty_assertions::assert_eq;

    fn grid_of(n: usize) -> Grid {
        let rows = (0..n)
            .map(|i| Row::new(vec![CellValue::Number(i as f64)]))
            .collect();
        Grid::new(rows)
    }

    #[test]
    fn test_section_full_grid() {
        let grid = grid_of(40);
        assert_eq!(grid.section(CHARACTER_INFO).len(), 10);
        assert_eq!(grid.section(BASE_ATTRIBUTES).len(), 7);
        assert_eq!(grid.section(DERIVED_STATS).len(), 13);
    }

    #[test]
    fn test_section_truncates_short_grid() {
        let grid = grid_of(18);
        assert_eq!(grid.section(CHARACTER_INFO).len(), 10);
        // Only rows 15..18 exist out of [15, 22)
        assert_eq!(grid.section(BASE_ATTRIBUTES).len(), 3);
        assert_eq!(grid.section(DERIVED_STATS).len(), 0);
    }

    #[test]
    fn test_section_on_empty_grid() {
        let grid = Grid::default();
        assert!(grid.section(CHARACTER_INFO).is_empty());
        assert!(grid.section(DERIVED_STATS).is_empty());
    }

    #[test]
    fn test_sections_cover_their_rows_only() {
        let grid = grid_of(40);
        for section in [CHARACTER_INFO, BASE_ATTRIBUTES, DERIVED_STATS] {
            let rows = grid.section(section);
            for (offset, row) in rows.iter().enumerate() {
                let expected = grid.row(section.start + offset).unwrap();
                assert_eq!(row, expected);
            }
        }
    }

    #[test]
    fn test_extract_column_defaults_short_rows() {
        let rows = vec![
            Row::new(vec![CellValue::text("a"), CellValue::Number(1.0)]),
            Row::new(vec![CellValue::text("b")]),
            Row::new(vec![]),
        ];
        let col = extract_column(&rows, 1);
        assert_eq!(
            col,
            vec![CellValue::Number(1.0), CellValue::Empty, CellValue::Empty]
        );
        // One output per input row, always
        assert_eq!(col.len(), rows.len());
    }

    #[test]
    fn test_cell_defaults() {
        let grid = grid_of(2);
        assert_eq!(grid.cell(0, 0), &CellValue::Number(0.0));
        assert_eq!(grid.cell(0, 5), &CellValue::Empty);
        assert_eq!(grid.cell(9, 0), &CellValue::Empty);
    }
}
