//! Character-sheet view over a grid

use sheetgrid_core::{
    Grid, Row, SheetForm, BASE_ATTRIBUTES, CHARACTER_INFO, DERIVED_STATS, VALUE_COLUMN,
};

/// A loaded grid viewed through the character-sheet template
///
/// Pure projection: every accessor slices the underlying [`Grid`] by the
/// template's fixed section offsets. Sheets shorter than the template
/// simply yield shorter (possibly empty) sections.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterSheet {
    grid: Grid,
}

impl CharacterSheet {
    /// Wrap a decoded grid
    pub fn new(grid: Grid) -> Self {
        CharacterSheet { grid }
    }

    /// The underlying grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The character's name (Character Info, first row, value column)
    pub fn name(&self) -> String {
        self.grid.cell(CHARACTER_INFO.start, VALUE_COLUMN).to_string()
    }

    /// Rows of the Character Info section
    pub fn character_info(&self) -> &[Row] {
        self.grid.section(CHARACTER_INFO)
    }

    /// Rows of the Base Attributes section
    pub fn base_attributes(&self) -> &[Row] {
        self.grid.section(BASE_ATTRIBUTES)
    }

    /// Rows of the Derived Stats section
    pub fn derived_stats(&self) -> &[Row] {
        self.grid.section(DERIVED_STATS)
    }

    /// Seed a fresh editable form from this sheet
    pub fn form(&self) -> SheetForm {
        SheetForm::seed(&self.grid)
    }
}

impl From<Grid> for CharacterSheet {
    fn from(grid: Grid) -> Self {
        CharacterSheet::new(grid)
    }
}
