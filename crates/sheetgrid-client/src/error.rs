//! Error types for the sheetgrid client

use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors a load flow can end in
///
/// The three classes are deliberately distinct: a usage error never reaches
/// the network, a transport error points at connectivity, and a parse error
/// points at a layout or tab mismatch on an otherwise reachable sheet.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Required input missing or malformed before any network call
    #[error("usage error: {0}")]
    Usage(String),

    /// The network call failed or the server answered with a non-success status
    #[error("transport error: {0}")]
    Transport(String),

    /// Payload retrieved but not decodable into the expected table shape
    #[error("parse error: {0}")]
    Parse(#[from] sheetgrid_gviz::ParseError),
}

impl LoadError {
    /// Create a usage error with a message
    pub fn usage<S: Into<String>>(msg: S) -> Self {
        LoadError::Usage(msg.into())
    }

    /// True for errors raised before any network call
    pub fn is_usage(&self) -> bool {
        matches!(self, LoadError::Usage(_))
    }

    /// True for connectivity and status failures
    pub fn is_transport(&self) -> bool {
        matches!(self, LoadError::Transport(_))
    }

    /// True for payload decode failures
    pub fn is_parse(&self) -> bool {
        matches!(self, LoadError::Parse(_))
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        LoadError::Transport(e.to_string())
    }
}
