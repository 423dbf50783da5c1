//! Turns a resolved [`Configuration`] into name → identifier mappings.
//!
//! Nothing here prints; the binary renders each [`WebsiteMapping`] with its
//! `Display` impl, one per line.

use crate::error::{Result, WebsiteIdsError};
use crate::ident::website_id;
use crate::model::Configuration;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsiteMapping {
    /// Trimmed website name.
    pub name: String,
    pub id: String,
}

impl WebsiteMapping {
    pub fn for_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            id: website_id(name),
        }
    }
}

impl fmt::Display for WebsiteMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  ->  {}", self.name, self.id)
    }
}

/// Map every non-blank website to its identifier, in configuration order.
///
/// Fails with [`WebsiteIdsError::NoWebsites`] when the list is absent or empty.
/// A list whose entries are all blank is not an error and yields no mappings.
/// Duplicates are kept.
pub fn run(config: &Configuration) -> Result<Vec<WebsiteMapping>> {
    let websites = match config.websites.as_deref() {
        Some(websites) if !websites.is_empty() => websites,
        _ => return Err(WebsiteIdsError::NoWebsites),
    };

    let mappings = websites
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| match entry.trimmed_name() {
            Some(name) => Some(WebsiteMapping::for_name(name)),
            None => {
                debug!(position, "skipping website entry with blank name");
                None
            }
        })
        .collect();
    Ok(mappings)
}
