use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

pub const USER_AGENT: &str = concat!("Rhymo/", env!("CARGO_PKG_VERSION"));

/// Deadline applied to every outbound lyrics request unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of one lookup: `Ok(None)` when the service has no lyrics for the song.
pub type LyricsResult = Result<Option<String>, LyricsError>;

#[derive(Error, Debug)]
pub enum LyricsError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("API error: {0}")]
    Api(String),
    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Build an HTTP client with the given request deadline.
pub(crate) fn http_client(timeout: Duration) -> Result<Client, LyricsError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;
    Ok(client)
}
