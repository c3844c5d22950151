//! # sheetgrid-gviz
//!
//! Decoder for the Google Visualization (`gviz/tq`) query response format.
//!
//! The `tq` endpoint returns the sheet contents as JSON wrapped in a
//! JavaScript callback. [`parse_response`] strips that wrapper and decodes
//! the table into a [`sheetgrid_core::Grid`], substituting empty values for
//! the sparse cells the provider omits.
//!
//! ## Example
//!
//! ```rust
//! use sheetgrid_gviz::parse_response;
//!
//! let raw = ")]}'\n{\"table\":{\"rows\":[{\"c\":[{\"v\":\"Geralt\"},{\"v\":5}]}]}}";
//! let grid = parse_response(raw).unwrap();
//! assert_eq!(grid.len(), 1);
//! ```

pub mod error;
pub mod parser;

mod wire;

pub use error::{ParseError, ParseResult};
pub use parser::parse_response;
