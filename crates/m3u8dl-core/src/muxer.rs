//! External transcoder (ffmpeg) invocation.
//!
//! The rewritten playlist is handed to ffmpeg as input and stream-copied into
//! an MP4; no media bytes pass through this process.

use crate::error::MuxError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

/// A located transcoder executable plus the protocols it may open.
#[derive(Debug, Clone)]
pub struct Muxer {
    program: PathBuf,
    protocol_whitelist: String,
}

impl Muxer {
    /// Resolves `program` via `PATH` (or checks it directly if it contains a separator).
    pub fn locate(program: &str, protocol_whitelist: &str) -> Result<Self, MuxError> {
        let resolved = which::which(program).map_err(|source| MuxError::NotInstalled {
            program: program.to_string(),
            source,
        })?;
        tracing::debug!(program, resolved = %resolved.display(), "located transcoder");
        Ok(Self::new(resolved, protocol_whitelist))
    }

    /// Uses `program` as given, without a lookup.
    pub fn new(program: impl Into<PathBuf>, protocol_whitelist: &str) -> Self {
        Self {
            program: program.into(),
            protocol_whitelist: protocol_whitelist.to_string(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// `-protocol_whitelist <list> -i <playlist> -c copy <output>`
    pub fn args(&self, playlist: &Path, output: &Path) -> Vec<OsString> {
        vec![
            "-protocol_whitelist".into(),
            self.protocol_whitelist.as_str().into(),
            "-i".into(),
            playlist.into(),
            "-c".into(),
            "copy".into(),
            output.into(),
        ]
    }

    /// Runs the transcoder with inherited stdout/stderr and blocks until it exits.
    /// Returns how long the conversion took.
    pub fn run(&self, playlist: &Path, output: &Path) -> Result<Duration, MuxError> {
        tracing::info!("Converting video...");
        let start = Instant::now();
        let status = Command::new(&self.program)
            .args(self.args(playlist, output))
            .status()
            .map_err(|source| MuxError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        let elapsed = start.elapsed();

        if !status.success() {
            return Err(MuxError::Failed {
                program: self.program.clone(),
                status,
            });
        }
        tracing::info!("Video conversion completed in {:.2?}.", elapsed);
        Ok(elapsed)
    }
}

/// Final MP4 path for `title`, relative to the working directory.
pub fn output_path(title: &str) -> PathBuf {
    PathBuf::from(format!("{}.mp4", title))
}
