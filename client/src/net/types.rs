//! Wire DTOs for the summarization API.
//!
//! DESIGN
//! ======
//! The remote API only promises a single `output` field on success, so the
//! response type stays that narrow and everything else is a rejection.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body for `POST {base}/summarize/text`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSummaryRequest {
    pub text: String,
}

/// Body for `POST {base}/summarize/url`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlSummaryRequest {
    pub url: String,
}

/// Successful summarization response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The summary text, rendered verbatim.
    pub output: String,
}

/// Errors produced by summarization requests.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response (network, CORS, DNS).
    #[error("summarize request failed: {0}")]
    Request(String),

    /// The API answered with a non-success status.
    #[error("summarize request failed: status {status}")]
    Status { status: u16 },

    /// The response body was not a `{ "output": ... }` object.
    #[error("summarize response parse failed: {0}")]
    Parse(String),

    /// HTTP is only wired up in the hydrated browser build.
    #[error("summarize API not available on server")]
    Unavailable,
}
