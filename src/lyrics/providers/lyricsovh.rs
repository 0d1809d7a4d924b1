use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::lyrics::providers::LyricsProvider;
use crate::lyrics::types::{LyricsError, LyricsResult, http_client};

pub const DEFAULT_ENDPOINT: &str = "https://api.lyrics.ovh";

#[derive(Deserialize)]
struct LyricsOvhResponse {
    lyrics: Option<String>,
}

/// Client for the public lyrics.ovh API (`GET /v1/{artist}/{title}`).
#[derive(Debug, Clone)]
pub struct LyricsOvh {
    client: Client,
    endpoint: String,
}

impl LyricsOvh {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, LyricsError> {
        Ok(Self {
            client: http_client(timeout)?,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Build the lookup URL. Both path segments are percent-encoded so titles
/// with spaces, slashes or parentheses stay inside their segment.
fn build_lyricsovh_url(endpoint: &str, artist: &str, title: &str) -> String {
    format!(
        "{}/v1/{}/{}",
        endpoint,
        urlencoding::encode(artist),
        urlencoding::encode(title)
    )
}

#[async_trait]
impl LyricsProvider for LyricsOvh {
    async fn fetch(&self, artist: &str, title: &str) -> LyricsResult {
        let url = build_lyricsovh_url(&self.endpoint, artist, title);
        tracing::debug!(%url, "requesting lyrics");

        let resp = self.client.get(&url).send().await?;

        // The service answers 404 for songs it does not know - not an error
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !resp.status().is_success() {
            return Err(LyricsError::Api(format!("lyrics.ovh: HTTP {}", resp.status())));
        }

        let body = resp.text().await?;
        let response: LyricsOvhResponse = serde_json::from_str(&body)?;

        match response.lyrics {
            Some(lyrics) if !lyrics.is_empty() => Ok(Some(lyrics)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned HTTP response and hand back the request line.
    async fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            let request = String::from_utf8_lossy(&buf).to_string();
            request.lines().next().unwrap_or_default().to_string()
        });
        (format!("http://{}", addr), handle)
    }

    fn provider(endpoint: &str) -> LyricsOvh {
        LyricsOvh::new(endpoint, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn url_segments_are_percent_encoded() {
        let url = build_lyricsovh_url(
            "https://api.lyrics.ovh",
            "Taylor Swift",
            "All Too Well (10 Minute Version)",
        );
        assert_eq!(
            url,
            "https://api.lyrics.ovh/v1/Taylor%20Swift/All%20Too%20Well%20%2810%20Minute%20Version%29"
        );
        let url = build_lyricsovh_url("http://x", "AC/DC", "T.N.T.");
        assert_eq!(url, "http://x/v1/AC%2FDC/T.N.T.");
    }

    #[test]
    fn trailing_slash_is_dropped_from_endpoint() {
        assert_eq!(provider("http://localhost:1/").endpoint(), "http://localhost:1");
    }

    #[tokio::test]
    async fn returns_lyrics_verbatim() {
        let (base, server) = serve_once("200 OK", r#"{"lyrics":"line1\nline2"}"#).await;
        let got = provider(&base).fetch("Taylor Swift", "Cardigan").await.unwrap();
        assert_eq!(got.as_deref(), Some("line1\nline2"));
        assert_eq!(
            server.await.unwrap(),
            "GET /v1/Taylor%20Swift/Cardigan HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn empty_or_missing_lyrics_is_none() {
        let (base, _server) = serve_once("200 OK", r#"{"lyrics":""}"#).await;
        assert_eq!(provider(&base).fetch("a", "b").await.unwrap(), None);

        let (base, _server) = serve_once("200 OK", "{}").await;
        assert_eq!(provider(&base).fetch("a", "b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn not_found_is_none() {
        let (base, _server) = serve_once("404 Not Found", r#"{"error":"No lyrics found"}"#).await;
        assert_eq!(provider(&base).fetch("a", "b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn server_error_is_api_error() {
        let (base, _server) = serve_once("503 Service Unavailable", "{}").await;
        let err = provider(&base).fetch("a", "b").await.unwrap_err();
        assert!(matches!(err, LyricsError::Api(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn non_json_body_is_serde_error() {
        let (base, _server) = serve_once("200 OK", "<html>oops</html>").await;
        let err = provider(&base).fetch("a", "b").await.unwrap_err();
        assert!(matches!(err, LyricsError::Serde(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn connection_refused_is_network_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = provider(&format!("http://{}", addr))
            .fetch("a", "b")
            .await
            .unwrap_err();
        assert!(matches!(err, LyricsError::Network(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn unresponsive_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _hold = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });
        let slow = LyricsOvh::new(&format!("http://{}", addr), Duration::from_millis(200)).unwrap();
        let err = slow.fetch("a", "b").await.unwrap_err();
        match err {
            LyricsError::Network(e) => assert!(e.is_timeout(), "got {e:?}"),
            other => panic!("expected timeout, got {other:?}"),
        }
    }
}
