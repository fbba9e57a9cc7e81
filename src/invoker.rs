//! Runs the configured search once.

use crate::config::Config;
use crate::youtube::{ResultItem, SearchError, YouTubeClient};
use tracing::info;

/// Execute the configured search.
///
/// # Arguments
/// * `config` - Application configuration (credential, endpoint, query)
///
/// # Returns
/// * `Result<Vec<ResultItem>, SearchError>` - First page of results or tagged error
///
/// # Details
/// Returns `MissingCredential` without building an HTTP client when no API key
/// is configured. Otherwise performs exactly one request; nothing is cached
/// between calls.
pub async fn execute(config: &Config) -> Result<Vec<ResultItem>, SearchError> {
    let credential = config.credential().ok_or(SearchError::MissingCredential)?;

    let client = YouTubeClient::new(credential, config)?;

    info!(q = %config.search.query, "Searching YouTube");
    let items = client.search(&config.search).await?;
    info!(count = items.len(), "Search complete");

    Ok(items)
}
