// lyrics/mod.rs - lyrics lookup: error type, HTTP client and providers
pub mod providers;
pub mod types;

pub use providers::{LyricsOvh, LyricsProvider};
pub use types::LyricsError;
