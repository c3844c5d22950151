//! Serde shape of the gviz query response
//!
//! Only the fields the grid needs are modeled; everything else in the
//! response (column metadata, formatted values, response status) is ignored
//! by serde.

use serde::Deserialize;
use sheetgrid_core::CellValue;

/// Top-level gviz response body
#[derive(Debug, Deserialize)]
pub(crate) struct QueryResponse {
    pub table: Table,
}

/// The `table` object
#[derive(Debug, Deserialize)]
pub(crate) struct Table {
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

/// One row: `{"c": [cell|null, ...]}`
///
/// Sparse rows omit `c` entirely; sparse cells appear as `null` entries.
#[derive(Debug, Deserialize)]
pub(crate) struct TableRow {
    #[serde(default)]
    pub c: Vec<Option<Cell>>,
}

/// One cell: `{"v": <value>}`, where `v` may be absent or null
#[derive(Debug, Deserialize)]
pub(crate) struct Cell {
    #[serde(default)]
    pub v: Option<RawValue>,
}

/// A cell's decoded value as the provider sends it
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Null-coalesce a possibly absent value into a cell value
pub(crate) fn cell_value(v: Option<RawValue>) -> CellValue {
    match v {
        None => CellValue::Empty,
        Some(RawValue::Bool(b)) => CellValue::Bool(b),
        Some(RawValue::Number(n)) => CellValue::Number(n),
        Some(RawValue::Text(s)) => CellValue::Text(s),
    }
}
