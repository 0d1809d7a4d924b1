// search/mod.rs - song search: query parsing and pluggable search providers
pub mod catalog;
pub mod query;

use async_trait::async_trait;
use thiserror::Error;

pub use catalog::CatalogSearch;
pub use query::ParsedQuery;

/// A single song row shown in the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongEntry {
    pub title: String,
    pub artist: String,
}

impl SongEntry {
    pub fn new(title: &str, artist: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
        }
    }
}

#[derive(Error, Debug)]
#[allow(dead_code)]
pub enum SearchError {
    #[error("search backend error: {0}")]
    Backend(String),
}

/// Maps a parsed artist token to the songs offered for selection.
///
/// Implementations replace the result set wholesale; the widget never merges
/// two answers.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, artist: &str) -> Result<Vec<SongEntry>, SearchError>;
}
