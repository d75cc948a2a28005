pub mod config;
pub mod logging;

pub mod error;
pub mod fetch;
pub mod muxer;
pub mod pipeline;
pub mod playlist;
pub mod title;

/// Name printed by `--version` and used in user-facing messages.
pub const APP_NAME: &str = "m3u8-downloader";
