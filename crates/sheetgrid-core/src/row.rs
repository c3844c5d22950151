//! Row type

use crate::value::CellValue;

static EMPTY: CellValue = CellValue::Empty;

/// One spreadsheet row: cell values in provider column order
///
/// Rows are not guaranteed to share a width; the provider trims trailing
/// empty cells. All indexed access defaults past-the-end columns to
/// [`CellValue::Empty`] instead of failing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row(Vec<CellValue>);

impl Row {
    /// Create a row from cell values
    pub fn new(cells: Vec<CellValue>) -> Self {
        Row(cells)
    }

    /// Get the cell at a column index, defaulting to empty for short rows
    pub fn cell(&self, column: usize) -> &CellValue {
        self.0.get(column).unwrap_or(&EMPTY)
    }

    /// Number of cells actually present in this row
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the cells present in this row
    pub fn cells(&self) -> impl Iterator<Item = &CellValue> {
        self.0.iter()
    }
}

impl From<Vec<CellValue>> for Row {
    fn from(cells: Vec<CellValue>) -> Self {
        Row::new(cells)
    }
}

impl FromIterator<CellValue> for Row {
    fn from_iter<I: IntoIterator<Item = CellValue>>(iter: I) -> Self {
        Row(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_defaults_past_end() {
        let row = Row::new(vec![CellValue::text("a"), CellValue::Number(2.0)]);
        assert_eq!(row.cell(0), &CellValue::text("a"));
        assert_eq!(row.cell(1), &CellValue::Number(2.0));
        assert_eq!(row.cell(2), &CellValue::Empty);
        assert_eq!(row.cell(100), &CellValue::Empty);
    }

    #[test]
    fn test_width() {
        assert_eq!(Row::default().width(), 0);
        assert_eq!(Row::new(vec![CellValue::Empty]).width(), 1);
    }
}
