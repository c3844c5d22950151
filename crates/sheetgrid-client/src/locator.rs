//! Sheet identification: URLs, spreadsheet ids, tab names

use crate::error::{LoadError, Result};

/// Path marker preceding the spreadsheet id in a sheet URL
const ID_MARKER: &str = "/d/";

/// Tab name the character-sheet template keeps its data on
pub const DEFAULT_SHEET_NAME: &str = "General";

/// Identifies one tab of one remote spreadsheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLocator {
    /// The spreadsheet id (the `/d/{id}/` path segment)
    pub spreadsheet_id: String,
    /// The tab to query
    pub sheet_name: String,
}

impl SheetLocator {
    /// Create a locator from an id and tab name
    pub fn new<I: Into<String>, S: Into<String>>(spreadsheet_id: I, sheet_name: S) -> Self {
        SheetLocator {
            spreadsheet_id: spreadsheet_id.into(),
            sheet_name: sheet_name.into(),
        }
    }

    /// Locator for a spreadsheet URL, targeting the default tab
    pub fn from_url(url: &str) -> Result<Self> {
        Self::from_url_with_sheet(url, DEFAULT_SHEET_NAME)
    }

    /// Locator for a spreadsheet URL, targeting a named tab
    pub fn from_url_with_sheet(url: &str, sheet_name: &str) -> Result<Self> {
        let id = spreadsheet_id_from_url(url)?;
        Ok(Self::new(id, sheet_name))
    }
}

/// Extract the spreadsheet id from a user- or server-supplied URL
///
/// The id is the path segment between `/d/` and the next `/` (or the end of
/// the path). A URL without the marker is a usage error, raised before any
/// network call.
pub fn spreadsheet_id_from_url(url: &str) -> Result<&str> {
    let (_, rest) = url
        .split_once(ID_MARKER)
        .ok_or_else(|| LoadError::usage(format!("spreadsheet URL has no '/d/' segment: {url}")))?;

    let id = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();

    if id.is_empty() {
        return Err(LoadError::usage(format!(
            "spreadsheet URL has an empty id segment: {url}"
        )));
    }
    Ok(id)
}
