//! YouTube Data API v3 search integration.

pub mod client;
pub mod error;
pub mod models;
#[cfg(test)]
pub(crate) mod test_server;

pub use client::YouTubeClient;
pub use error::SearchError;
pub use models::{Credential, ResultItem, SearchQuery};
