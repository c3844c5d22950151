//! URL sources: how a spreadsheet URL becomes available
//!
//! Three flows feed the loader: a hard-coded template URL, a URL pasted by
//! the user, and a freshly provisioned sheet from an external creation
//! endpoint. The loader only ever sees a [`UrlProvider`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{LoadError, Result};

/// A source that can produce the spreadsheet URL a load should target
#[async_trait]
pub trait UrlProvider: Send + Sync {
    /// Produce the target URL
    async fn resolve(&self) -> Result<String>;
}

/// A URL known up front: the hard-coded template or one pasted by the user
#[derive(Debug, Clone)]
pub struct StaticUrl(pub String);

#[async_trait]
impl UrlProvider for StaticUrl {
    async fn resolve(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Reply of the creation endpoint; only `url` is required
#[derive(Debug, Deserialize)]
struct ProvisionReply {
    url: String,
}

/// Client for the external sheet-creation endpoint
///
/// The endpoint provisions a spreadsheet from the template and answers with
/// a JSON object carrying its `url`. Nothing else in the reply is relied on.
#[derive(Debug, Clone)]
pub struct ProvisionClient {
    http: Client,
    endpoint: String,
}

impl ProvisionClient {
    /// Client for a creation endpoint
    pub fn new(endpoint: &str) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        ProvisionClient {
            http,
            endpoint: endpoint.to_string(),
        }
    }

    /// Provision a sheet with the given name and return its URL
    ///
    /// An empty name is a usage error, raised before the call goes out.
    pub async fn create_sheet(&self, name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LoadError::usage("sheet name must not be empty"));
        }

        tracing::info!(%name, endpoint = %self.endpoint, "provisioning sheet");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, endpoint = %self.endpoint, "provisioning failed");
            return Err(LoadError::Transport(format!(
                "creation endpoint returned {status}"
            )));
        }

        let reply: ProvisionReply = response
            .json()
            .await
            .map_err(|e| LoadError::Transport(format!("creation reply had no usable url: {e}")))?;
        Ok(reply.url)
    }
}

/// A provisioning call used as a URL source
#[derive(Debug, Clone)]
pub struct ProvisionedSheet {
    /// The creation endpoint client
    pub client: ProvisionClient,
    /// Desired sheet name
    pub name: String,
}

#[async_trait]
impl UrlProvider for ProvisionedSheet {
    async fn resolve(&self) -> Result<String> {
        self.client.create_sheet(&self.name).await
    }
}
