//! HTTP transport abstraction.
//!
//! The client only ever issues GET requests with a query string, so the
//! transport seam is a single method. [`ReqwestTransport`] is the default
//! implementation; other backends plug in through [`HttpTransport`].

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::{WikidataError, WikidataResult};

/// Status code the API uses for every successful answer.
pub const STATUS_OK: u16 = 200;

/// A response body, either raw or already decoded by the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Text(String),
    Json(Value),
}

impl ResponseBody {
    /// Returns the body as text, for error reporting.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Json(value) => value.to_string(),
        }
    }

    /// Decodes the body into JSON, parsing text if needed.
    pub fn into_json(self) -> WikidataResult<Value> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Text(text) if text.trim().is_empty() => Err(WikidataError::EmptyResponse),
            Self::Text(text) => Ok(serde_json::from_str(&text)?),
        }
    }
}

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl HttpResponse {
    /// Decodes a successful response, or turns any other status into
    /// [`WikidataError::Upstream`] carrying the raw body.
    pub fn into_json(self) -> WikidataResult<Value> {
        if self.status != STATUS_OK {
            return Err(WikidataError::Upstream {
                status: self.status,
                body: self.body.to_text(),
            });
        }
        self.body.into_json()
    }
}

/// Outbound HTTP GET used by the client.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a GET to `url` with the given query parameters.
    ///
    /// Implementations report connection-level failures as
    /// [`WikidataError::Transport`] and must not interpret the status code.
    async fn get(&self, url: &str, query: &[(&str, String)]) -> WikidataResult<HttpResponse>;
}

/// [`HttpTransport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> WikidataResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("wikidata-search/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WikidataError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> WikidataResult<HttpResponse> {
        debug!("GET {} ({} params)", url, query.len());

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| WikidataError::Transport(format!("request failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| WikidataError::Transport(format!("failed to read response body: {e}")))?;

        Ok(HttpResponse {
            status,
            body: ResponseBody::Text(body),
        })
    }
}
