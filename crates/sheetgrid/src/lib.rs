//! # sheetgrid
//!
//! A typed grid view over a remote character-sheet spreadsheet.
//!
//! Sheetgrid fetches one tab of a provider-hosted spreadsheet through its
//! gviz query endpoint, decodes the wrapped-JSON payload into an immutable
//! [`Grid`], and projects the template's fixed row ranges into named
//! sections (Character Info, Base Attributes, Derived Stats) plus an
//! editable, presentation-local form.
//!
//! ## Example
//!
//! ```rust
//! use sheetgrid::prelude::*;
//!
//! let raw = ")]}'\n{\"table\":{\"rows\":[{\"c\":[{\"v\":\"Name\"},{\"v\":\"Geralt\"}]}]}}";
//! let sheet = CharacterSheet::new(parse_response(raw).unwrap());
//!
//! assert_eq!(sheet.name(), "Geralt");
//! assert_eq!(sheet.character_info().len(), 1);
//! ```
//!
//! Fetching over the network goes through [`SheetLoader`], which keeps at
//! most one load flow live and replaces the grid wholesale on each commit:
//!
//! ```rust,no_run
//! use sheetgrid::prelude::*;
//!
//! # async fn example() -> Result<(), LoadError> {
//! let loader = SheetLoader::new(SheetsClient::new());
//! let locator = SheetLocator::from_url("https://docs.google.com/spreadsheets/d/ABC123/edit")?;
//! loader.load(&locator).await?;
//! # Ok(())
//! # }
//! ```

pub mod prelude;
pub mod sheet;

pub use sheet::CharacterSheet;

// Re-export core types
pub use sheetgrid_core::{
    extract_column, CellValue, Grid, Row, Section, SheetForm, ALL_SECTIONS, BASE_ATTRIBUTES,
    CHARACTER_INFO, DERIVED_STATS, UNUSED_GAP, VALUE_COLUMN,
};

// Re-export parser types
pub use sheetgrid_gviz::{parse_response, ParseError, ParseResult};

// Re-export client types
pub use sheetgrid_client::{
    spreadsheet_id_from_url, GridSource, LoadError, LoadState, ProvisionClient, ProvisionedSheet,
    Result, SheetLoader, SheetLocator, SheetsClient, StaticUrl, UrlProvider, DEFAULT_BASE_URL,
    DEFAULT_SHEET_NAME,
};
