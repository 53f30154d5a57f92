//! Network sessions used by the translator

use async_trait::async_trait;
use parking_lot::RwLock;
use std::fmt;
use tracing::debug;

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::response::RawResponse;

/// A session able to issue GET requests.
///
/// Implementations must allow concurrent calls to `get`.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Send a GET to `url` with the given query parameters
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<RawResponse>;

    /// Release the session. Calling it more than once has no further effect.
    fn close(&self);

    /// Whether `close` has been called
    fn is_closed(&self) -> bool;
}

/// `reqwest`-backed session
pub struct HttpSession {
    client: RwLock<Option<reqwest::Client>>,
}

impl HttpSession {
    /// Build a session with the configured User-Agent and proxy
    pub fn from_config(config: &TranslatorConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());

        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy.as_str()).map_err(|e| {
                TranslationError::ConfigError {
                    message: format!("invalid proxy: {}", e),
                }
            })?;
            builder = builder.proxy(proxy);
        } else {
            // Only the configured proxy is used, never HTTP_PROXY and friends
            builder = builder.no_proxy();
        }

        let client = builder.build().map_err(|e| TranslationError::ConfigError {
            message: format!("failed to build HTTP client: {}", e),
        })?;

        Ok(Self::from_client(client))
    }

    /// Wrap an existing client
    pub fn from_client(client: reqwest::Client) -> Self {
        Self {
            client: RwLock::new(Some(client)),
        }
    }
}

impl fmt::Debug for HttpSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpSession")
            .field("closed", &self.is_closed())
            .finish()
    }
}

#[async_trait]
impl Transport for HttpSession {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<RawResponse> {
        // Clone out of the lock; reqwest::Client is a handle to a shared pool
        let client = self
            .client
            .read()
            .clone()
            .ok_or(TranslationError::SessionClosed)?;

        let response = client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        Ok(RawResponse { status, body })
    }

    fn close(&self) {
        if self.client.write().take().is_some() {
            debug!("HTTP session closed");
        }
    }

    fn is_closed(&self) -> bool {
        self.client.read().is_none()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_session_close_is_idempotent() {
        let session = HttpSession::from_config(&TranslatorConfig::default()).unwrap();
        assert!(!session.is_closed());
        session.close();
        session.close();
        assert!(session.is_closed());
    }

    #[tokio::test]
    async fn test_closed_http_session_rejects_requests() {
        let session = HttpSession::from_client(reqwest::Client::new());
        session.close();

        let result = session.get("http://127.0.0.1:9/m", &[("q", "x")]).await;
        assert!(matches!(result, Err(TranslationError::SessionClosed)));
    }

    #[test]
    fn test_bad_proxy_is_config_error() {
        let config = TranslatorConfig::default().with_proxy("ftp://proxy.example:21");
        assert!(matches!(
            HttpSession::from_config(&config),
            Err(TranslationError::ConfigError { .. })
        ));
    }
}
