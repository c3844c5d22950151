//! Gviz payload parser

use sheetgrid_core::{Grid, Row};

use crate::error::{fragment, ParseError, ParseResult};
use crate::wire::{cell_value, QueryResponse};

/// Decode a gviz `tq` response payload into a [`Grid`]
///
/// The endpoint does not return bare JSON: the body is wrapped in a
/// JavaScript callback (historically a fixed 47-character preamble and a
/// 2-character `);` suffix). The JSON body is located by its delimiters -
/// the first `{` through the last `}` - which tolerates preamble drift while
/// behaving identically for well-formed responses.
///
/// Missing cells are substituted with [`CellValue::Empty`] so that every row
/// supports fixed-index column access downstream. A payload that cannot be
/// unwrapped or decoded yields a [`ParseError`], never a partial grid.
pub fn parse_response(raw: &str) -> ParseResult<Grid> {
    let body = json_body(raw)?;

    // Two-step decode keeps "not JSON at all" distinct from "JSON without
    // the table shape": the former points at a mangled payload, the latter
    // at a renamed tab or changed template.
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|source| ParseError::InvalidJson {
            fragment: fragment(raw),
            source,
        })?;
    let response: QueryResponse =
        serde_json::from_value(value).map_err(|source| ParseError::UnexpectedShape {
            fragment: fragment(raw),
            source,
        })?;

    Ok(grid_from(response))
}

/// Slice out the JSON body between the wrapper delimiters
fn json_body(raw: &str) -> ParseResult<&str> {
    let start = raw.find('{').ok_or_else(|| ParseError::MissingWrapper {
        fragment: fragment(raw),
    })?;
    // The preamble may itself contain `}` (e.g. ")]}'"), so only the suffix
    // after the body start counts.
    let end = raw[start..]
        .rfind('}')
        .map(|offset| start + offset)
        .ok_or_else(|| ParseError::MissingWrapper {
            fragment: fragment(raw),
        })?;
    Ok(&raw[start..=end])
}

/// Build the grid, preserving row and column order exactly as received
fn grid_from(response: QueryResponse) -> Grid {
    let rows = response
        .table
        .rows
        .into_iter()
        .map(|row| {
            row.c
                .into_iter()
                .map(|cell| cell_value(cell.and_then(|c| c.v)))
                .collect::<Row>()
        })
        .collect();
    Grid::new(rows)
}
