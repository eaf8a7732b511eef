use reqwest::StatusCode;
use thiserror::Error;

use crate::transport::BoxError;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by the StockX client.
///
/// Every variant keeps its underlying cause reachable through
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP transport could not be built.
    #[error("failed to construct http client")]
    Construction(#[source] BoxError),

    /// The warm-up request could not be sent.
    #[error("failed to initialize client")]
    Initialization(#[source] BoxError),

    /// The warm-up request was answered with something other than `200 OK`.
    #[error("received wrong status code during client initialization: {0}")]
    WarmupStatus(StatusCode),

    /// A search or product request failed on the network.
    #[error("{operation} request to {url} failed")]
    Transport {
        operation: &'static str,
        url: String,
        #[source]
        source: BoxError,
    },

    /// The response body did not match the expected JSON shape.
    #[error("failed to convert {endpoint} response json")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The transport rejected a proxy url.
    #[error("failed to set proxy {url}")]
    Proxy {
        url: String,
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Whether the error came from the one-time warm-up.
    ///
    /// A client that failed with such an error is still uninitialized and
    /// retries the warm-up on its next call.
    pub fn is_initialization(&self) -> bool {
        matches!(self, Error::Initialization(_) | Error::WarmupStatus(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_initialization_kinds() {
        assert!(Error::WarmupStatus(StatusCode::SERVICE_UNAVAILABLE).is_initialization());
        assert!(Error::Initialization("connection reset".into()).is_initialization());
        let transport = Error::Transport {
            operation: "search",
            url: "https://stockx.com/api/browse".into(),
            source: "timed out".into(),
        };
        assert!(!transport.is_initialization());
    }

    #[test]
    fn test_source_is_preserved() {
        let err = Error::Transport {
            operation: "product",
            url: "https://stockx.com/api/products/x".into(),
            source: "connection refused".into(),
        };
        assert_eq!(
            err.to_string(),
            "product request to https://stockx.com/api/products/x failed"
        );
        assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_warmup_status_message() {
        let err = Error::WarmupStatus(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            err.to_string(),
            "received wrong status code during client initialization: 503 Service Unavailable"
        );
    }
}
