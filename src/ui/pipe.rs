use crate::event::{select_song, submit_search};
use crate::lyrics::LyricsProvider;
use crate::search::{SearchProvider, SongEntry};
use crate::state::LyricsWidget;
use std::io::Write;

/// Pick a song from the results by 1-based index or case-insensitive title.
pub fn pick_song<'a>(results: &'a [SongEntry], pick: &str) -> Option<&'a SongEntry> {
    let pick = pick.trim();
    if let Ok(n) = pick.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| results.get(i));
    }
    results.iter().find(|s| s.title.eq_ignore_ascii_case(pick))
}

/// Non-interactive mode: search once, print the numbered results and,
/// when `song` is given, the lyrics of that result.
pub async fn display_lyrics_pipe<W: Write>(
    out: &mut W,
    query: &str,
    song: Option<&str>,
    search: &dyn SearchProvider,
    lyrics: &dyn LyricsProvider,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut widget = LyricsWidget::default();
    widget.set_query(query);
    submit_search(&mut widget, search).await;

    if widget.results().is_empty() {
        return Err(format!("no results for query {:?}", query).into());
    }

    let Some(pick) = song else {
        for (i, entry) in widget.results().iter().enumerate() {
            writeln!(out, "{:>2}. {} - {}", i + 1, entry.artist, entry.title)?;
        }
        return Ok(());
    };

    let Some(entry) = pick_song(widget.results(), pick).cloned() else {
        return Err(format!("no result matches {:?}", pick).into());
    };
    select_song(&mut widget, lyrics, entry.clone()).await;
    writeln!(out, "{} - {}\n", entry.artist, entry.title)?;
    writeln!(out, "{}", widget.lyrics())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::types::LyricsResult;
    use crate::search::CatalogSearch;
    use crate::search::catalog::catalog;
    use crate::state::LYRICS_NOT_AVAILABLE;
    use async_trait::async_trait;

    struct EchoLyrics;

    #[async_trait]
    impl LyricsProvider for EchoLyrics {
        async fn fetch(&self, artist: &str, title: &str) -> LyricsResult {
            if title == "Red" {
                return Ok(None);
            }
            Ok(Some(format!("{title} by {artist}\nla la la")))
        }
    }

    #[test]
    fn pick_by_number_or_title() {
        let songs = catalog();
        assert_eq!(pick_song(songs, "8").map(|s| s.title.as_str()), Some("Cardigan"));
        assert_eq!(pick_song(songs, "cardigan").map(|s| s.title.as_str()), Some("Cardigan"));
        assert_eq!(pick_song(songs, "0"), None);
        assert_eq!(pick_song(songs, "16"), None);
        assert_eq!(pick_song(songs, "Nope"), None);
    }

    #[tokio::test]
    async fn lists_results_without_song() {
        let mut out = Vec::new();
        display_lyrics_pipe(&mut out, "Taylor Swift", None, &CatalogSearch, &EchoLyrics)
            .await
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 15);
        assert!(text.starts_with(" 1. Taylor Swift - Love Story\n"));
        assert!(text.contains(" 8. Taylor Swift - Cardigan\n"));
    }

    #[tokio::test]
    async fn prints_lyrics_for_picked_song() {
        let mut out = Vec::new();
        display_lyrics_pipe(
            &mut out,
            "Taylor Swift - Cardigan",
            Some("Cardigan"),
            &CatalogSearch,
            &EchoLyrics,
        )
        .await
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Taylor Swift - Cardigan\n\nCardigan by Taylor Swift\nla la la\n"
        );
    }

    #[tokio::test]
    async fn prints_sentinel_when_missing() {
        let mut out = Vec::new();
        display_lyrics_pipe(&mut out, "Taylor Swift", Some("12"), &CatalogSearch, &EchoLyrics)
            .await
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with(&format!("{}\n", LYRICS_NOT_AVAILABLE)));
    }

    #[tokio::test]
    async fn blank_query_is_an_error() {
        let mut out = Vec::new();
        let err = display_lyrics_pipe(&mut out, "  ", None, &CatalogSearch, &EchoLyrics).await;
        assert!(err.is_err());
        assert!(out.is_empty());
    }
}
