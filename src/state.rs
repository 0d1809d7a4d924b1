// state.rs: The lyrics widget state container and its transitions

use crate::lyrics::types::LyricsResult;
use crate::search::{ParsedQuery, SearchError, SongEntry};

pub const LYRICS_NOT_AVAILABLE: &str = "Sorry, lyrics not available.";
pub const LYRICS_FETCH_FAILED: &str = "An error occurred while fetching the lyrics.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Which panels are visible. Derived from state on every draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Nothing searched and nothing fetched: bare search input.
    Idle,
    /// An operation is in flight; results and lyrics are hidden.
    Loading,
    /// At least one of the two panels has content.
    Panels { results: bool, lyrics: bool },
}

/// A lyrics lookup handed out by [`LyricsWidget::begin_lyrics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsRequest {
    pub seq: u64,
    pub song: SongEntry,
}

/// Holds everything the lyrics finder shows: theme, query, results, lyrics
/// and the loading flag.
#[derive(Debug, Default)]
pub struct LyricsWidget {
    theme: Theme,
    query: String,
    results: Vec<SongEntry>,
    lyrics: String,
    /// A search has started and not yet finished.
    search_pending: bool,
    /// The request numbered `lyrics_seq` has not been applied yet.
    lyrics_pending: bool,
    /// Sequence number of the most recent lyrics request.
    lyrics_seq: u64,
}

impl LyricsWidget {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
    pub fn query(&self) -> &str {
        &self.query
    }
    pub fn results(&self) -> &[SongEntry] {
        &self.results
    }
    pub fn lyrics(&self) -> &str {
        &self.lyrics
    }
    /// True while either a search or the latest lyrics request is in flight.
    pub fn is_loading(&self) -> bool {
        self.search_pending || self.lyrics_pending
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }
    pub fn pop_char(&mut self) {
        self.query.pop();
    }
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Start a search for the current query.
    ///
    /// Returns `None` and leaves every field untouched when the query is
    /// blank or has no artist token.
    pub fn begin_search(&mut self) -> Option<ParsedQuery> {
        let parsed = ParsedQuery::parse(&self.query)?;
        self.search_pending = true;
        Some(parsed)
    }

    /// Apply a search outcome. A failure keeps the previous results.
    pub fn finish_search(&mut self, result: Result<Vec<SongEntry>, SearchError>) {
        match result {
            Ok(songs) => self.results = songs,
            Err(e) => tracing::warn!(error = %e, "error fetching songs"),
        }
        self.search_pending = false;
    }

    /// Start a lyrics lookup for `song`. Any earlier request still in flight
    /// becomes stale.
    pub fn begin_lyrics(&mut self, song: SongEntry) -> LyricsRequest {
        self.lyrics_seq += 1;
        self.lyrics_pending = true;
        LyricsRequest {
            seq: self.lyrics_seq,
            song,
        }
    }

    /// Apply the outcome of lyrics request `seq`.
    ///
    /// Returns false when a newer request has been issued since; the stale
    /// outcome is dropped without touching lyrics or the loading flag.
    pub fn finish_lyrics(&mut self, seq: u64, result: LyricsResult) -> bool {
        if seq != self.lyrics_seq {
            tracing::debug!(seq, latest = self.lyrics_seq, "discarding stale lyrics response");
            return false;
        }
        self.lyrics = match result {
            Ok(Some(text)) if !text.is_empty() => text,
            Ok(_) => LYRICS_NOT_AVAILABLE.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "error fetching lyrics");
                LYRICS_FETCH_FAILED.to_string()
            }
        };
        self.lyrics_pending = false;
        true
    }

    pub fn view(&self) -> View {
        if self.is_loading() {
            return View::Loading;
        }
        let results = !self.results.is_empty();
        let lyrics = !self.lyrics.is_empty();
        if results || lyrics {
            View::Panels { results, lyrics }
        } else {
            View::Idle
        }
    }
}
