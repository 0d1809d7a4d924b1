mod event;
mod lyrics;
mod search;
mod state;
mod ui;

use crate::lyrics::providers::lyricsovh::DEFAULT_ENDPOINT;
use crate::lyrics::types::DEFAULT_TIMEOUT;
use crate::lyrics::{LyricsOvh, LyricsProvider};
use crate::search::{CatalogSearch, SearchProvider};
use crate::state::Theme;
use clap::Parser;
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Application configuration from CLI
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Config {
    /// Initial color theme
    #[arg(long, value_enum, default_value_t = Theme::Light)]
    theme: Theme,
    /// Base URL of the lyrics service.
    /// If unset, the RHYMO_LYRICS_ENDPOINT env var is used, then the public host.
    #[arg(long)]
    endpoint: Option<String>,
    /// Lyrics request deadline in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,
    /// Print results (and lyrics with --song) to stdout instead of starting the UI
    #[arg(long, requires = "query")]
    pipe: bool,
    /// Search query, e.g. "Taylor Swift - Cardigan". Prefills the search box in the UI.
    #[arg(long)]
    query: Option<String>,
    /// Result to fetch lyrics for in pipe mode: 1-based number or title
    #[arg(long, requires = "pipe")]
    song: Option<String>,
    /// Enable debug logging
    #[arg(long)]
    pub debug_log: bool,
    /// Write logs to this file. Without it the UI runs with logging disabled.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            endpoint: None,
            timeout: DEFAULT_TIMEOUT.as_secs(),
            pipe: false,
            query: None,
            song: None,
            debug_log: false,
            log_file: None,
        }
    }
}

fn endpoint_from_env_if_empty(cfg: &mut Config) {
    if cfg.endpoint.is_none()
        && let Ok(s) = std::env::var("RHYMO_LYRICS_ENDPOINT")
        && !s.trim().is_empty()
    {
        cfg.endpoint = Some(s.trim().to_string());
    }
}

fn init_logging(cfg: &Config) -> Result<(), Box<dyn Error + Send + Sync>> {
    let default_level = if cfg.debug_log { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match &cfg.log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()?;
        }
        // stderr would draw over the TUI, so only pipe mode logs there.
        None if cfg.pipe => builder.with_writer(std::io::stderr).try_init()?,
        None => {}
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut cfg = Config::parse();
    endpoint_from_env_if_empty(&mut cfg);
    init_logging(&cfg)?;

    let endpoint = cfg.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
    let ovh = LyricsOvh::new(endpoint, Duration::from_secs(cfg.timeout))?;
    tracing::debug!(endpoint = ovh.endpoint(), timeout = cfg.timeout, "starting");
    let lyrics: Arc<dyn LyricsProvider> = Arc::new(ovh);
    let search: Arc<dyn SearchProvider> = Arc::new(CatalogSearch);

    let result = if cfg.pipe {
        let query = cfg.query.as_deref().unwrap_or_default();
        let mut out = std::io::stdout();
        crate::ui::pipe::display_lyrics_pipe(
            &mut out,
            query,
            cfg.song.as_deref(),
            search.as_ref(),
            lyrics.as_ref(),
        )
        .await
    } else {
        crate::ui::modern::display_lyrics_modern(cfg.theme, cfg.query.clone(), search, lyrics).await
    };

    // Print error if any, for better diagnostics
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        return Err(e);
    }
    Ok(())
}
