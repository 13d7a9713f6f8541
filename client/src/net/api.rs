//! HTTP client for the remote summarization API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a typed [`ApiError`] so the panel decides what
//! the user sees; nothing here panics or logs.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, SummaryResponse};

pub const DEFAULT_SUMMARIZER_URL: &str = "http://localhost:8000";

/// Base URL baked in at build time via `ENCY_SUMMARIZER_URL`.
pub fn summarizer_base_url() -> &'static str {
    option_env!("ENCY_SUMMARIZER_URL").unwrap_or(DEFAULT_SUMMARIZER_URL)
}

/// The two calls the summarization panel can make.
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait::async_trait(?Send)]
pub trait Summarizer {
    /// Summarize raw text.
    async fn summarize_text(&self, text: &str) -> Result<SummaryResponse, ApiError>;

    /// Summarize the content behind a URL.
    async fn summarize_url(&self, url: &str) -> Result<SummaryResponse, ApiError>;
}

/// [`Summarizer`] backed by the real HTTP API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpSummarizer {
    base_url: String,
}

impl HttpSummarizer {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn text_endpoint(&self) -> String {
        format!("{}/summarize/text", self.base_url)
    }

    #[must_use]
    pub fn url_endpoint(&self) -> String {
        format!("{}/summarize/url", self.base_url)
    }
}

impl Default for HttpSummarizer {
    fn default() -> Self {
        Self::new(summarizer_base_url())
    }
}

#[async_trait::async_trait(?Send)]
impl Summarizer for HttpSummarizer {
    async fn summarize_text(&self, text: &str) -> Result<SummaryResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = super::types::TextSummaryRequest { text: text.to_owned() };
            post_summary(&self.text_endpoint(), &body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
            Err(ApiError::Unavailable)
        }
    }

    async fn summarize_url(&self, url: &str) -> Result<SummaryResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = super::types::UrlSummaryRequest { url: url.to_owned() };
            post_summary(&self.url_endpoint(), &body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn post_summary<B: serde::Serialize>(endpoint: &str, body: &B) -> Result<SummaryResponse, ApiError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status { status: resp.status() });
    }
    resp.json::<SummaryResponse>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}
