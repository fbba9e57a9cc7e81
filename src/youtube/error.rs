//! Error taxonomy for YouTube search requests.

use thiserror::Error;

/// Errors produced while building or executing a search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// No API key was configured; no request was made.
    #[error("YOUTUBE_API_KEY environment variable not set")]
    MissingCredential,
    /// The query failed local validation.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    /// The API rejected the credential.
    #[error("authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },
    /// The project quota or rate limit is exhausted.
    #[error("quota exceeded ({status}): {message}")]
    Quota { status: u16, message: String },
    /// Connection, timeout, or client construction failure.
    #[error("network error: {0}")]
    Network(String),
    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// Any other non-success response.
    #[error("YouTube API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl SearchError {
    /// Build a `Network` error carrying the full source chain.
    ///
    /// The request URL is stripped first: it carries the API key as the `key`
    /// query parameter.
    pub fn network(err: reqwest::Error) -> Self {
        Self::Network(error_chain(&err.without_url()))
    }
}

/// Join an error and its sources into one line.
///
/// reqwest's top-level message omits the cause ("error sending request for url"),
/// so the underlying text ("connection refused", "operation timed out") has to
/// come from the source chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
