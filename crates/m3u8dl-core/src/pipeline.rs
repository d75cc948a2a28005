//! End-to-end run: master manifest → best variant → rewritten playlist → optional mux.

use crate::fetch::{fetch_text, HttpOptions};
use crate::muxer::{self, Muxer};
use crate::playlist::{derive_base_path, rewrite_segments, select_best_variant, Variant};
use crate::APP_NAME;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Inputs for one run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub manifest_url: String,
    /// Sanitized output title (see `title::derive_title`).
    pub title: String,
    pub http: HttpOptions,
    /// When set, the rewritten playlist is muxed with this transcoder.
    pub muxer: Option<Muxer>,
    /// Directory for the temporary playlist; the system temp dir when `None`.
    pub playlist_dir: Option<PathBuf>,
    /// Directory for `<title>.mp4`; the working directory when `None`.
    pub output_dir: Option<PathBuf>,
}

/// What a run produced.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// The manifest had no stream tag with a usable resolution; nothing was written.
    NoVariant,
    /// The playlist was rewritten; `output` is set if it was also muxed.
    Prepared {
        variant: Variant,
        playlist: PathBuf,
        output: Option<MuxedOutput>,
    },
}

#[derive(Debug)]
pub struct MuxedOutput {
    pub path: PathBuf,
    pub elapsed: Duration,
}

/// Resolves a variant URI against the manifest URL.
///
/// Absolute URIs are returned unchanged; relative and scheme-relative ones are
/// joined onto `manifest_url`. If joining fails the URI is returned as is.
pub fn resolve_variant_url(manifest_url: &str, uri: &str) -> String {
    if crate::playlist::has_scheme(uri) {
        return uri.to_string();
    }
    match url::Url::parse(manifest_url).and_then(|base| base.join(uri)) {
        Ok(joined) => joined.to_string(),
        Err(e) => {
            tracing::debug!("cannot resolve {} against {}: {}", uri, manifest_url, e);
            uri.to_string()
        }
    }
}

pub fn run(opts: &PipelineOptions) -> Result<PipelineOutcome> {
    tracing::info!("Reading manifest file...");
    let manifest = fetch_text(&opts.manifest_url, &opts.http).context("fetch master manifest")?;

    let Some(variant) = select_best_variant(&manifest) else {
        tracing::info!("No valid resolution found in the manifest.");
        return Ok(PipelineOutcome::NoVariant);
    };
    let variant_url = resolve_variant_url(&opts.manifest_url, &variant.uri);
    let base_path = derive_base_path(&variant_url);
    tracing::info!(
        resolution = %variant.resolution,
        url = %variant_url,
        "selected variant"
    );

    tracing::info!("Downloading video manifest...");
    let media = fetch_text(&variant_url, &opts.http).context("fetch variant playlist")?;

    tracing::info!("Writing modified playlist...");
    let rewritten = rewrite_segments(&media, &base_path);
    tracing::debug!(
        base = %base_path,
        rewritten = rewritten.rewritten,
        absolute = rewritten.absolute,
        "segments rewritten"
    );
    let playlist = write_playlist(&opts.title, &rewritten.text, opts.playlist_dir.as_deref())?;

    let output = match &opts.muxer {
        Some(muxer) => {
            tracing::info!("Starting video download...");
            let path = match &opts.output_dir {
                Some(dir) => dir.join(muxer::output_path(&opts.title)),
                None => muxer::output_path(&opts.title),
            };
            let elapsed = muxer.run(&playlist, &path)?;
            Some(MuxedOutput { path, elapsed })
        }
        None => {
            tracing::info!(
                "Video download skipped. To download see usage: {} --help",
                APP_NAME
            );
            None
        }
    };

    Ok(PipelineOutcome::Prepared {
        variant,
        playlist,
        output,
    })
}

/// Writes `text` to `<dir>/<title>.playlist.<random>.m3u8` and keeps the file.
fn write_playlist(title: &str, text: &str, dir: Option<&Path>) -> Result<PathBuf> {
    let prefix = format!("{}.playlist.", title);
    let mut builder = tempfile::Builder::new();
    builder.prefix(&prefix).suffix(".m3u8");
    let mut file = match dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    }
    .context("create temporary playlist")?;
    tracing::info!("Created temporary playlist {}", file.path().display());

    file.write_all(text.as_bytes())
        .context("write temporary playlist")?;
    file.flush().context("write temporary playlist")?;

    let (_, path) = file.keep().context("keep temporary playlist")?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_absolute_variant_unchanged() {
        assert_eq!(
            resolve_variant_url(
                "https://example.com/master.m3u8",
                "https://cdn.example.com/hd/index.m3u8"
            ),
            "https://cdn.example.com/hd/index.m3u8"
        );
    }

    #[test]
    fn resolve_relative_variant() {
        assert_eq!(
            resolve_variant_url("https://example.com/show/master.m3u8", "hd/index.m3u8"),
            "https://example.com/show/hd/index.m3u8"
        );
        assert_eq!(
            resolve_variant_url("https://example.com/show/master.m3u8", "/abs/index.m3u8"),
            "https://example.com/abs/index.m3u8"
        );
    }

    #[test]
    fn resolve_scheme_relative_variant() {
        assert_eq!(
            resolve_variant_url(
                "https://example.com/master.m3u8",
                "//cdn.example.com/a/index.m3u8"
            ),
            "https://cdn.example.com/a/index.m3u8"
        );
    }

    #[test]
    fn write_playlist_persists_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_playlist("clip", "#EXTM3U\n", Some(dir.path())).unwrap();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(name.starts_with("clip.playlist."));
        assert!(name.ends_with(".m3u8"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "#EXTM3U\n");
    }
}
