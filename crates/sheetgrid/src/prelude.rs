//! Convenience re-exports for common usage
//!
//! ```rust
//! use sheetgrid::prelude::*;
//! ```

pub use crate::CharacterSheet;

pub use sheetgrid_core::{
    extract_column, CellValue, Grid, Row, Section, SheetForm, BASE_ATTRIBUTES, CHARACTER_INFO,
    DERIVED_STATS, VALUE_COLUMN,
};

pub use sheetgrid_gviz::{parse_response, ParseError};

pub use sheetgrid_client::{
    spreadsheet_id_from_url, LoadError, SheetLoader, SheetLocator, SheetsClient,
};
