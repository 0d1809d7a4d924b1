pub mod lyricsovh;

use async_trait::async_trait;

use crate::lyrics::types::LyricsResult;

pub use lyricsovh::LyricsOvh;

/// A remote service that can look up plain-text lyrics for one song.
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    async fn fetch(&self, artist: &str, title: &str) -> LyricsResult;
}
