//! Error types for fetching playlists and running the transcoder.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failure of a single playlist GET.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (invalid URL, timeout, connection, etc.).
    #[error("GET {url}: {source}")]
    Curl {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// HTTP response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
}

/// Failure locating or running the external transcoder.
#[derive(Debug, Error)]
pub enum MuxError {
    /// The executable could not be found (PATH lookup or explicit path).
    #[error("{program} is not installed")]
    NotInstalled {
        program: String,
        #[source]
        source: which::Error,
    },
    /// The process could not be started.
    #[error("failed to start {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The process ran but exited unsuccessfully.
    #[error("{} exited with {status}", program.display())]
    Failed { program: PathBuf, status: ExitStatus },
}
