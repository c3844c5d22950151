//! Gviz query client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use sheetgrid_core::Grid;

use crate::error::{LoadError, Result};
use crate::loader::GridSource;
use crate::locator::SheetLocator;

/// Public host serving gviz queries
pub const DEFAULT_BASE_URL: &str = "https://docs.google.com/spreadsheets";

/// Client for the provider's tabular-query (`gviz/tq`) endpoint
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: Client,
    base_url: String,
}

impl SheetsClient {
    /// Client against the public provider host
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a custom host (test servers, proxies)
    pub fn with_base_url(base_url: &str) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        SheetsClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The query endpoint for a spreadsheet, without query parameters
    ///
    /// The `tqx=out:json` and `sheet` parameters are attached at request
    /// time so the tab name gets percent-encoded.
    pub fn query_url(&self, locator: &SheetLocator) -> String {
        format!(
            "{}/d/{}/gviz/tq",
            self.base_url, locator.spreadsheet_id
        )
    }

    /// Fetch one tab and decode it into a grid
    ///
    /// Connectivity failures and non-success statuses are transport errors;
    /// an unusable body is a parse error. The two are logged distinctly.
    pub async fn fetch_grid(&self, locator: &SheetLocator) -> Result<Grid> {
        let url = self.query_url(locator);
        tracing::debug!(%url, sheet = %locator.sheet_name, "querying sheet tab");

        let response = self
            .http
            .get(&url)
            .query(&[("tqx", "out:json"), ("sheet", locator.sheet_name.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, %url, "sheet query failed");
            return Err(LoadError::Transport(format!(
                "server returned {status} for {url}"
            )));
        }

        let body = response.text().await?;
        let grid = sheetgrid_gviz::parse_response(&body).map_err(|e| {
            tracing::warn!(error = %e, %url, "sheet payload did not decode; layout or tab mismatch");
            e
        })?;

        tracing::debug!(rows = grid.len(), "decoded sheet grid");
        Ok(grid)
    }
}

impl Default for SheetsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GridSource for SheetsClient {
    async fn fetch_grid(&self, locator: &SheetLocator) -> Result<Grid> {
        SheetsClient::fetch_grid(self, locator).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url() {
        let client = SheetsClient::new();
        let locator = SheetLocator::new("ABC123", "General");
        assert_eq!(
            client.query_url(&locator),
            "https://docs.google.com/spreadsheets/d/ABC123/gviz/tq"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = SheetsClient::with_base_url("http://localhost:8080/");
        let locator = SheetLocator::new("X", "General");
        assert_eq!(client.query_url(&locator), "http://localhost:8080/d/X/gviz/tq");
    }
}
