//! YouTube Data API v3 search models and data structures.
//!
//! Contains the credential, query and result types plus the raw API response shapes.

use crate::youtube::error::SearchError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest page size accepted by `search.list`.
pub const MAX_RESULTS_LIMIT: u32 = 50;

/// API key used to authenticate against the YouTube Data API.
///
/// Never empty. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap an API key.
    ///
    /// # Returns
    /// * `Option<Credential>` - `None` if the key is empty or whitespace only
    pub fn new(key: &str) -> Option<Self> {
        let key = key.trim();
        if key.is_empty() {
            None
        } else {
            Some(Self(key.to_string()))
        }
    }

    /// Raw key, for use as the `key` request parameter.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Result-type filter for `search.list`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    #[default]
    Video,
    Channel,
    Playlist,
}

impl ResultType {
    /// Value of the `type` request parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::Video => "video",
            ResultType::Channel => "channel",
            ResultType::Playlist => "playlist",
        }
    }
}

/// Duration filter for video searches (`videoDuration`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoDuration {
    Any,
    /// Under four minutes
    Short,
    /// Four to twenty minutes
    Medium,
    /// Over twenty minutes
    Long,
}

impl VideoDuration {
    /// Value of the `videoDuration` request parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoDuration::Any => "any",
            VideoDuration::Short => "short",
            VideoDuration::Medium => "medium",
            VideoDuration::Long => "long",
        }
    }
}

/// A single search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    /// Result-part selector (e.g. `snippet`)
    pub part: String,
    /// Maximum number of items to return, 1 to 50
    pub max_results: u32,
    /// Free-text query
    pub query: String,
    /// Result-type filter
    pub result_type: ResultType,
    /// Duration filter; only valid with `ResultType::Video`
    pub video_duration: Option<VideoDuration>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            part: "snippet".to_string(),
            max_results: 5,
            query: "python programming".to_string(),
            result_type: ResultType::Video,
            video_duration: None,
        }
    }
}

impl SearchQuery {
    /// Check the query before it is sent.
    ///
    /// # Returns
    /// * `Result<(), SearchError>` - `InvalidQuery` if `max_results` is out of range,
    ///   `part` is blank, or a duration filter is set on a non-video search
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results == 0 || self.max_results > MAX_RESULTS_LIMIT {
            return Err(SearchError::InvalidQuery(format!(
                "max_results must be between 1 and {}, got {}",
                MAX_RESULTS_LIMIT, self.max_results
            )));
        }
        if self.part.trim().is_empty() {
            return Err(SearchError::InvalidQuery("part must not be empty".to_string()));
        }
        if self.video_duration.is_some() && self.result_type != ResultType::Video {
            return Err(SearchError::InvalidQuery(format!(
                "video_duration requires result_type video, got {}",
                self.result_type.as_str()
            )));
        }
        Ok(())
    }
}

/// One search hit, as printed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    /// Video, channel or playlist ID (absent for unexpected kinds)
    pub id: Option<String>,
    /// Kind of resource this item describes
    pub kind: Option<ResultType>,
    /// Title
    pub title: String,
    /// Channel name
    pub channel: String,
    /// Full description as returned by the API
    pub description: String,
    /// Publication date
    pub published_at: Option<DateTime<Utc>>,
}

impl ResultItem {
    /// Public YouTube URL for this item.
    ///
    /// # Returns
    /// * `Option<String>` - URL if both the ID and kind are known
    pub fn url(&self) -> Option<String> {
        let id = self.id.as_deref()?;
        let url = match self.kind? {
            ResultType::Video => format!("https://www.youtube.com/watch?v={}", id),
            ResultType::Channel => format!("https://www.youtube.com/channel/{}", id),
            ResultType::Playlist => format!("https://www.youtube.com/playlist?list={}", id),
        };
        Some(url)
    }

    /// Format published date as `YYYY-MM-DD`.
    pub fn format_date(&self) -> Option<String> {
        self.published_at
            .map(|date| date.format("%Y-%m-%d").to_string())
    }
}

/// YouTube API list response wrapper.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Response items
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Next page token (never followed)
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// Item from search.list.
#[derive(Debug, Deserialize)]
pub struct ApiSearchItem {
    /// Resource identifier
    pub id: ApiSearchItemId,
    /// Snippet; absent when `part` does not include it
    #[serde(default)]
    pub snippet: ApiSnippet,
}

/// Search item identifier. Exactly one ID field is set, matching `kind`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSearchItemId {
    /// Resource kind (`youtube#video`, `youtube#channel`, `youtube#playlist`)
    #[serde(default)]
    pub kind: String,
    pub video_id: Option<String>,
    pub channel_id: Option<String>,
    pub playlist_id: Option<String>,
}

/// Search result snippet.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiSnippet {
    pub title: String,
    pub channel_title: String,
    pub description: String,
    pub published_at: Option<String>,
}

/// Error body returned by Google APIs on non-success responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub reason: String,
}

impl From<ApiSearchItem> for ResultItem {
    /// Convert a raw search item, tolerating missing snippet fields.
    fn from(item: ApiSearchItem) -> Self {
        let (kind, id) = match item.id.kind.as_str() {
            "youtube#video" => (Some(ResultType::Video), item.id.video_id),
            "youtube#channel" => (Some(ResultType::Channel), item.id.channel_id),
            "youtube#playlist" => (Some(ResultType::Playlist), item.id.playlist_id),
            _ => (None, None),
        };

        let published_at = item
            .snippet
            .published_at
            .as_deref()
            .and_then(|date| DateTime::parse_from_rfc3339(date).ok())
            .map(|date| date.with_timezone(&Utc));

        Self {
            id,
            kind,
            title: item.snippet.title,
            channel: item.snippet.channel_title,
            description: item.snippet.description,
            published_at,
        }
    }
}
