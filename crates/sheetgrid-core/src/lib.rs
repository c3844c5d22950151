//! # sheetgrid-core
//!
//! Core data structures for the sheetgrid library.
//!
//! This crate provides the fundamental types used throughout sheetgrid:
//! - [`CellValue`] - A decoded cell value (text, number, boolean, or empty)
//! - [`Row`] and [`Grid`] - The rectangular table one fetch produces
//! - [`Section`] - Named fixed row ranges of the character-sheet template
//!
//! ## Example
//!
//! ```rust
//! use sheetgrid_core::{extract_column, CellValue, Grid, Row, BASE_ATTRIBUTES};
//!
//! let rows = (0..22)
//!     .map(|i| Row::new(vec![CellValue::text("label"), CellValue::Number(i as f64)]))
//!     .collect();
//! let grid = Grid::new(rows);
//!
//! let attrs = grid.section(BASE_ATTRIBUTES);
//! let values = extract_column(attrs, 1);
//! assert_eq!(values.len(), 7);
//! ```

pub mod form;
pub mod grid;
pub mod row;
pub mod section;
pub mod value;

// Re-exports for convenience
pub use form::SheetForm;
pub use grid::{extract_column, Grid};
pub use row::Row;
pub use section::{
    Section, ALL_SECTIONS, BASE_ATTRIBUTES, CHARACTER_INFO, DERIVED_STATS, UNUSED_GAP,
};
pub use value::CellValue;

/// Column holding the editable values within a section's rows
///
/// The template puts labels in column 0 and values in column 1.
pub const VALUE_COLUMN: usize = 1;
