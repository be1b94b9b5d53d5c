//! The HTTP transport seam.
//!
//! Panels never talk to `reqwest` or `web_sys` directly; they go through
//! [`Fetch`], which the browser app and the CLI implement differently.
//! Futures are not `Send` because the browser implementation wraps JS
//! promises.

use crate::error::TransportError;
use async_trait::async_trait;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP client used by every panel.
#[async_trait(?Send)]
pub trait Fetch {
    /// Issue a `GET` and return whatever response arrives.
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError>;

    /// Issue a `POST` with `Content-Type: application/json` and the given body.
    async fn post_json(&self, url: &str, body: &str) -> Result<RawResponse, TransportError>;
}

#[cfg(feature = "api")]
mod http {
    use super::*;
    use reqwest::header::CONTENT_TYPE;
    use reqwest::Client;

    /// Native [`Fetch`] backed by `reqwest`.
    ///
    /// No timeout is configured: a hung request stays pending, exactly as in
    /// the browser.
    #[derive(Debug, Clone, Default)]
    pub struct HttpFetch {
        client: Client,
    }

    impl HttpFetch {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_client(client: Client) -> Self {
            Self { client }
        }

        async fn finish(response: reqwest::Response) -> Result<RawResponse, TransportError> {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError::new(e.to_string()))?;
            Ok(RawResponse { status, body })
        }
    }

    #[async_trait(?Send)]
    impl Fetch for HttpFetch {
        async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| TransportError::new(e.to_string()))?;
            Self::finish(response).await
        }

        async fn post_json(&self, url: &str, body: &str) -> Result<RawResponse, TransportError> {
            let response = self
                .client
                .post(url)
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_owned())
                .send()
                .await
                .map_err(|e| TransportError::new(e.to_string()))?;
            Self::finish(response).await
        }
    }
}

#[cfg(feature = "api")]
pub use http::HttpFetch;
