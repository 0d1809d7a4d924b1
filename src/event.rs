// event.rs: Search and lyrics operations, and the events they post back to the UI

use crate::lyrics::LyricsProvider;
use crate::lyrics::types::LyricsResult;
use crate::search::{SearchError, SearchProvider, SongEntry};
use crate::state::{LyricsRequest, LyricsWidget};
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum AppEvent {
    Input(crossterm::event::Event),
    SearchDone(Result<Vec<SongEntry>, SearchError>),
    LyricsDone { seq: u64, result: LyricsResult },
}

/// Run a full search for the widget's current query. Blank queries are a no-op.
pub async fn submit_search(widget: &mut LyricsWidget, provider: &dyn SearchProvider) {
    let Some(parsed) = widget.begin_search() else {
        return;
    };
    tracing::debug!(artist = %parsed.artist, title = ?parsed.title, "searching");
    let result = provider.search(&parsed.artist).await;
    widget.finish_search(result);
}

/// Fetch lyrics for `song` and store them (or a sentinel) in the widget.
pub async fn select_song(widget: &mut LyricsWidget, provider: &dyn LyricsProvider, song: SongEntry) {
    let LyricsRequest { seq, song } = widget.begin_lyrics(song);
    let result = provider.fetch(&song.artist, &song.title).await;
    widget.finish_lyrics(seq, result);
}

/// Start a search in the background; completion arrives as `AppEvent::SearchDone`.
pub fn spawn_search(
    widget: &mut LyricsWidget,
    provider: Arc<dyn SearchProvider>,
    tx: mpsc::Sender<AppEvent>,
) {
    let Some(parsed) = widget.begin_search() else {
        return;
    };
    tracing::debug!(artist = %parsed.artist, title = ?parsed.title, "searching");
    tokio::spawn(async move {
        let result = provider.search(&parsed.artist).await;
        // Receiver gone means the UI is shutting down.
        let _ = tx.send(AppEvent::SearchDone(result)).await;
    });
}

/// Start a lyrics lookup in the background; completion arrives as `AppEvent::LyricsDone`.
pub fn spawn_lyrics(
    widget: &mut LyricsWidget,
    provider: Arc<dyn LyricsProvider>,
    song: SongEntry,
    tx: mpsc::Sender<AppEvent>,
) {
    let LyricsRequest { seq, song } = widget.begin_lyrics(song);
    tokio::spawn(async move {
        let result = provider.fetch(&song.artist, &song.title).await;
        let _ = tx.send(AppEvent::LyricsDone { seq, result }).await;
    });
}
