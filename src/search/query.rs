/// Separator between the artist and song parts of a query.
pub const QUERY_SEPARATOR: &str = " - ";

/// A search box entry of the form `Artist - Song`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub artist: String,
    /// Parsed for completeness; the catalog search does not filter on it.
    pub title: Option<String>,
}

impl ParsedQuery {
    /// Parse raw input. Returns `None` when the input is blank or the artist
    /// token is empty after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let mut parts = trimmed.split(QUERY_SEPARATOR);
        let artist = parts.next().unwrap_or_default().trim();
        if artist.is_empty() {
            return None;
        }
        let title = parts
            .next()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        Some(Self {
            artist: artist.to_string(),
            title,
        })
    }
}
