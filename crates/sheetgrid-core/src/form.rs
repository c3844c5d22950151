//! Editable form state seeded from a grid
//!
//! The form is presentation-local: it copies its values out of a grid when
//! the grid is (re)loaded and then evolves independently. Edits never feed
//! back into the grid or any remote store.

use crate::grid::{extract_column, Grid};
use crate::section::{BASE_ATTRIBUTES, CHARACTER_INFO};
use crate::VALUE_COLUMN;

/// User-editable projection of a loaded grid
///
/// Holds the character name (Character Info row 0, value column) and one
/// entry per Base Attributes row. Values are kept as entered text, the way
/// a form input would hold them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SheetForm {
    name: String,
    base_stats: Vec<String>,
}

impl SheetForm {
    /// Seed a fresh form from a grid
    ///
    /// Always yields one base-stat entry per Base Attributes row present in
    /// the grid; missing cells seed as empty strings.
    pub fn seed(grid: &Grid) -> Self {
        let name = grid.cell(CHARACTER_INFO.start, VALUE_COLUMN).to_string();
        let base_stats = extract_column(grid.section(BASE_ATTRIBUTES), VALUE_COLUMN)
            .iter()
            .map(ToString::to_string)
            .collect();
        SheetForm { name, base_stats }
    }

    /// The character name field
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Overwrite the character name field
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// The base attribute fields, in section row order
    pub fn base_stats(&self) -> &[String] {
        &self.base_stats
    }

    /// Overwrite one base attribute field
    ///
    /// Returns false (and changes nothing) if the index has no field.
    pub fn set_base_stat<S: Into<String>>(&mut self, index: usize, value: S) -> bool {
        match self.base_stats.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }
}
