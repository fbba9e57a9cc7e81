//! YouTube Data API v3 client implementation.
//!
//! Issues a single `search.list` request and classifies failures.

use crate::config::Config;
use crate::youtube::error::SearchError;
use crate::youtube::models::{
    ApiErrorResponse, ApiResponse, ApiSearchItem, Credential, ResultItem, SearchQuery,
};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Error reasons that mean the project ran out of quota.
const QUOTA_REASONS: &[&str] = &[
    "quotaExceeded",
    "dailyLimitExceeded",
    "rateLimitExceeded",
    "userRateLimitExceeded",
];

/// Error reasons that mean the key itself was rejected.
const AUTH_REASONS: &[&str] = &[
    "keyInvalid",
    "keyExpired",
    "forbidden",
    "accessNotConfigured",
    "ipRefererBlocked",
];

/// YouTube Data API v3 client.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    credential: Credential,
    /// Base URL for YouTube Data API
    base_url: String,
}

impl YouTubeClient {
    /// Create a new YouTube client.
    ///
    /// # Arguments
    /// * `credential` - API key
    /// * `config` - Application configuration (base URL, timeout)
    ///
    /// # Returns
    /// * `Result<YouTubeClient, SearchError>` - New client or `Network` error
    pub fn new(credential: Credential, config: &Config) -> Result<Self, SearchError> {
        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        // Tests talk to a loopback server that a system proxy cannot reach.
        #[cfg(test)]
        let builder = builder.no_proxy();
        let client = builder.build().map_err(SearchError::network)?;

        Ok(Self {
            client,
            credential,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search YouTube.
    ///
    /// # Arguments
    /// * `query` - Search request
    ///
    /// # Returns
    /// * `Result<Vec<ResultItem>, SearchError>` - First page of results, at most
    ///   `query.max_results` items
    ///
    /// # Details
    /// Uses the search.list endpoint. Makes exactly one request; `nextPageToken`
    /// is not followed.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<ResultItem>, SearchError> {
        query.validate()?;

        let url = format!("{}/search", self.base_url);
        let max_results = query.max_results.to_string();
        let mut params = vec![
            ("part", query.part.as_str()),
            ("type", query.result_type.as_str()),
            ("q", query.query.as_str()),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(duration) = query.video_duration {
            params.push(("videoDuration", duration.as_str()));
        }
        params.push(("key", self.credential.expose()));

        debug!(
            url = %url,
            q = %query.query,
            result_type = query.result_type.as_str(),
            max_results = query.max_results,
            "Sending search request"
        );

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(SearchError::network)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(SearchError::network)?;

        if !status.is_success() {
            let err = classify_failure(status, &body);
            warn!(status = status.as_u16(), error = %err, "Search request failed");
            return Err(err);
        }

        let api_response: ApiResponse<ApiSearchItem> = serde_json::from_str(&body)
            .map_err(|e| SearchError::MalformedResponse(e.to_string()))?;

        if let Some(token) = &api_response.next_page_token {
            debug!(next_page_token = %token, "More results available, not followed");
        }

        let mut items: Vec<ResultItem> = api_response
            .items
            .into_iter()
            .map(ResultItem::from)
            .collect();
        items.truncate(query.max_results as usize);

        debug!(count = items.len(), "Search request succeeded");
        Ok(items)
    }
}

/// Map a non-success response to an error variant.
///
/// # Details
/// Google APIs report the cause in `error.errors[].reason`; the status code
/// alone does not separate quota exhaustion from a rejected key (both can be 403).
fn classify_failure(status: StatusCode, body: &str) -> SearchError {
    let parsed = serde_json::from_str::<ApiErrorResponse>(body).ok();
    let message = parsed
        .as_ref()
        .map(|r| r.error.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().to_string());
    let has_reason = |reasons: &[&str]| {
        parsed.as_ref().is_some_and(|r| {
            r.error
                .errors
                .iter()
                .any(|detail| reasons.contains(&detail.reason.as_str()))
        })
    };
    let code = status.as_u16();

    if has_reason(QUOTA_REASONS) || status == StatusCode::TOO_MANY_REQUESTS {
        SearchError::Quota {
            status: code,
            message,
        }
    } else if status == StatusCode::UNAUTHORIZED || has_reason(AUTH_REASONS) {
        SearchError::Auth {
            status: code,
            message,
        }
    } else {
        SearchError::Api {
            status: code,
            message,
        }
    }
}
