//! # sheetgrid-client
//!
//! Remote spreadsheet access for sheetgrid: query-URL construction,
//! spreadsheet-id extraction, the gviz fetch itself, the external
//! sheet-creation endpoint, and the load loop that owns the shared
//! grid/form state.
//!
//! # Architecture
//!
//! ```text
//! UrlProvider (static url | user url | provisioning call)
//!     └── SheetLocator (spreadsheet id + tab name)
//!           └── SheetLoader (one live flow, supersede semantics)
//!                 └── GridSource (SheetsClient over HTTP)
//!                       └── sheetgrid-gviz (payload -> Grid)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use sheetgrid_client::{SheetLoader, SheetLocator, SheetsClient};
//!
//! # async fn example() -> sheetgrid_client::Result<()> {
//! let loader = SheetLoader::new(SheetsClient::new());
//! let locator = SheetLocator::from_url("https://docs.google.com/spreadsheets/d/ABC123/edit")?;
//! loader.load(&locator).await?;
//!
//! if let Some(grid) = loader.grid() {
//!     println!("{} rows", grid.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod loader;
pub mod locator;
pub mod provision;

pub use client::{SheetsClient, DEFAULT_BASE_URL};
pub use error::{LoadError, Result};
pub use loader::{GridSource, LoadState, SheetLoader};
pub use locator::{spreadsheet_id_from_url, SheetLocator, DEFAULT_SHEET_NAME};
pub use provision::{ProvisionClient, ProvisionedSheet, StaticUrl, UrlProvider};
