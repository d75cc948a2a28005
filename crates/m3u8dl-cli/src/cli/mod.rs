//! CLI for m3u8-downloader.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use m3u8dl_core::config::{self, M3u8dlConfig};
use m3u8dl_core::error::MuxError;
use m3u8dl_core::fetch::HttpOptions;
use m3u8dl_core::logging;
use m3u8dl_core::muxer::Muxer;
use m3u8dl_core::pipeline::{self, PipelineOptions, PipelineOutcome};
use m3u8dl_core::title;
use std::path::PathBuf;

const EXAMPLES: &str = "\
EXAMPLES
  To extract the manifest file from a URL:
    m3u8-downloader https://example.com/video.m3u8

  To download a video from a m3u8 manifest file:
    m3u8-downloader --download https://example.com/video.m3u8

  To download a video from a m3u8 manifest file with a custom filename:
    m3u8-downloader --download --filename my_video https://example.com/video.m3u8

  To download a video from a m3u8 manifest file with a custom ffmpeg path:
    m3u8-downloader --download --ffmpeg /usr/local/bin/ffmpeg https://example.com/video.m3u8
";

/// Download videos from m3u8 manifest files.
///
/// Picks the highest-resolution variant of a master playlist, rewrites its
/// segment URLs to absolute form into a temporary playlist, and optionally
/// muxes it into <filename>.mp4 with ffmpeg.
#[derive(Debug, Parser)]
#[command(name = "m3u8-downloader", version)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Filename of the downloaded video (defaults to the manifest name).
    #[arg(long, value_name = "NAME")]
    pub filename: Option<String>,

    /// Download the video by muxing the rewritten playlist with ffmpeg.
    #[arg(long)]
    pub download: bool,

    /// Path to the ffmpeg executable (overrides config; default "ffmpeg").
    #[arg(long, value_name = "PATH")]
    pub ffmpeg: Option<String>,

    /// Alternate config file instead of ~/.config/m3u8dl/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// URL of the master m3u8 manifest.
    #[arg(value_name = "M3U8_MANIFEST_URL")]
    pub manifest_url: Option<String>,
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();

    match &cli.log_file {
        Some(path) => {
            if let Err(e) = logging::init_logging_file(path) {
                logging::init_logging_stderr();
                tracing::warn!("file logging unavailable ({:#}); using stderr", e);
            }
        }
        None => logging::init_logging_stderr(),
    }

    let cfg = match &cli.config {
        Some(path) => config::load_or_init_at(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);

    cli.run(&cfg)
}

impl Cli {
    pub fn run(self, cfg: &M3u8dlConfig) -> Result<()> {
        let muxer = if self.download {
            let program = cfg.resolve_ffmpeg_path(self.ffmpeg.as_deref());
            match Muxer::locate(&program, &cfg.protocol_whitelist) {
                Ok(m) => Some(m),
                Err(e @ MuxError::NotInstalled { .. }) => {
                    tracing::error!("Error: {}.", e);
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            }
        } else {
            None
        };

        let Some(manifest_url) = self.manifest_url.filter(|u| !u.trim().is_empty()) else {
            Cli::command().print_help()?;
            return Ok(());
        };

        let opts = PipelineOptions {
            title: title::derive_title(&manifest_url, self.filename.as_deref()),
            manifest_url,
            http: HttpOptions::from(&cfg.http),
            muxer,
            playlist_dir: None,
            output_dir: None,
        };

        match pipeline::run(&opts)? {
            PipelineOutcome::NoVariant => {}
            PipelineOutcome::Prepared {
                variant,
                playlist,
                output,
            } => {
                println!("Variant: {} {}", variant.resolution, variant.uri);
                println!("Playlist: {}", playlist.display());
                if let Some(out) = output {
                    println!("Output: {}", out.path.display());
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
