//! HTTP fetch client.

use garage_commerce::catalog::SourceError;
use tracing::debug;

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            FetchError::Connection(err.to_string())
        } else if err.is_decode() {
            FetchError::Deserialization(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Http {
                status: status.as_u16(),
                url: err.url().map(ToString::to_string).unwrap_or_default(),
            }
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

impl From<FetchError> for SourceError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Http { status, url } => SourceError::Http { status, url },
            FetchError::Connection(msg) | FetchError::Request(msg) => SourceError::Connection(msg),
            FetchError::Deserialization(msg) => SourceError::Decode(msg),
        }
    }
}

/// Reject anything outside the 2xx range.
pub fn check_status(status: u16, url: &str) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Http {
            status,
            url: url.to_string(),
        })
    }
}

/// Outbound HTTP client.
///
/// One GET per call; no timeout and no retry.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
}

impl FetchClient {
    /// Create a new fetch client.
    pub fn new() -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("garage-online/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(Self { http })
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// GET a URL and return the body bytes of a 2xx response.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!(url, "GET");
        let resp = self.http.get(url).send().await?;

        let status = resp.status().as_u16();
        check_status(status, url)?;

        let bytes = resp.bytes().await?;
        debug!(url, status, len = bytes.len(), "response received");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status() {
        assert!(check_status(200, "u").is_ok());
        assert!(check_status(204, "u").is_ok());
        for status in [301, 404, 500, 503] {
            assert!(matches!(
                check_status(status, "https://x"),
                Err(FetchError::Http { status: s, .. }) if s == status
            ));
        }
    }

    #[test]
    fn test_fetch_error_into_source_error() {
        let http: SourceError = FetchError::Http {
            status: 404,
            url: "https://x".into(),
        }
        .into();
        assert_eq!(
            http,
            SourceError::Http {
                status: 404,
                url: "https://x".into()
            }
        );

        let decode: SourceError = FetchError::Deserialization("bad".into()).into();
        assert_eq!(decode, SourceError::Decode("bad".into()));

        let conn: SourceError = FetchError::Request("refused".into()).into();
        assert!(matches!(conn, SourceError::Connection(_)));
    }
}
