//! CLI parse tests.

use super::Cli;
use clap::error::ErrorKind;
use clap::Parser;
use m3u8dl_core::config::M3u8dlConfig;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_url_only() {
    let cli = parse(&["m3u8-downloader", "https://example.com/video.m3u8"]);
    assert_eq!(
        cli.manifest_url.as_deref(),
        Some("https://example.com/video.m3u8")
    );
    assert!(!cli.download);
    assert!(cli.filename.is_none());
    assert!(cli.ffmpeg.is_none());
    assert!(cli.config.is_none());
    assert!(cli.log_file.is_none());
}

#[test]
fn cli_parse_download_with_filename_and_ffmpeg() {
    let cli = parse(&[
        "m3u8-downloader",
        "--download",
        "--filename",
        "my_video",
        "--ffmpeg",
        "/usr/local/bin/ffmpeg",
        "https://example.com/video.m3u8",
    ]);
    assert!(cli.download);
    assert_eq!(cli.filename.as_deref(), Some("my_video"));
    assert_eq!(cli.ffmpeg.as_deref(), Some("/usr/local/bin/ffmpeg"));
    assert_eq!(
        cli.manifest_url.as_deref(),
        Some("https://example.com/video.m3u8")
    );
}

#[test]
fn cli_parse_config_and_log_file() {
    let cli = parse(&[
        "m3u8-downloader",
        "--config",
        "/tmp/m3u8dl.toml",
        "--log-file",
        "/tmp/m3u8dl.log",
        "https://example.com/video.m3u8",
    ]);
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/m3u8dl.toml"))
    );
    assert_eq!(
        cli.log_file.as_deref(),
        Some(std::path::Path::new("/tmp/m3u8dl.log"))
    );
}

#[test]
fn cli_parse_without_url() {
    let cli = parse(&["m3u8-downloader", "--download"]);
    assert!(cli.manifest_url.is_none());
}

#[test]
fn cli_version_and_help() {
    let err = Cli::try_parse_from(["m3u8-downloader", "--version"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    assert_eq!(err.to_string().trim(), "m3u8-downloader 1.0.0");

    let err = Cli::try_parse_from(["m3u8-downloader", "--help"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    assert!(err.to_string().contains("EXAMPLES"));
}

#[test]
fn cli_rejects_extra_positional() {
    assert!(Cli::try_parse_from(["m3u8-downloader", "a", "b"]).is_err());
}

#[test]
fn missing_transcoder_returns_without_error() {
    let cli = parse(&[
        "m3u8-downloader",
        "--download",
        "--ffmpeg",
        "definitely-not-a-real-transcoder-3f9a",
        "http://127.0.0.1:1/never-fetched.m3u8",
    ]);
    assert!(cli.run(&M3u8dlConfig::default()).is_ok());
}
