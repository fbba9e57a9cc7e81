//! Plain-text rendering of search results.

use crate::youtube::{ResultItem, SearchError};
use std::io::{self, Write};

/// Number of description characters shown per item.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// First 100 characters of `description` followed by `...`.
///
/// # Details
/// Counts characters, not bytes. Shorter descriptions are kept whole, and the
/// marker is appended either way.
pub fn truncate_description(description: &str) -> String {
    let mut preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

/// Write the result listing.
pub fn render_results<W: Write>(items: &[ResultItem], out: &mut W) -> io::Result<()> {
    writeln!(out, "API Response:")?;
    writeln!(out, "=============")?;
    for item in items {
        writeln!(out, "\nTitle: {}", item.title)?;
        writeln!(out, "Channel: {}", item.channel)?;
        if let Some(date) = item.format_date() {
            writeln!(out, "Published: {}", date)?;
        }
        if let Some(url) = item.url() {
            writeln!(out, "URL: {}", url)?;
        }
        writeln!(out, "Description: {}", truncate_description(&item.description))?;
        writeln!(out, "{}", "-".repeat(80))?;
    }
    writeln!(out, "\nAPI call successful!")?;
    Ok(())
}

/// Write a one-line diagnostic for a failed search.
pub fn render_error<W: Write>(err: &SearchError, out: &mut W) -> io::Result<()> {
    match err {
        SearchError::MissingCredential => writeln!(out, "Error: {}", err),
        _ => writeln!(out, "Error occurred: {}", err),
    }
}

/// Write either the listing or the diagnostic.
pub fn render_outcome<W: Write>(
    outcome: &Result<Vec<ResultItem>, SearchError>,
    out: &mut W,
) -> io::Result<()> {
    match outcome {
        Ok(items) => render_results(items, out),
        Err(err) => render_error(err, out),
    }
}
