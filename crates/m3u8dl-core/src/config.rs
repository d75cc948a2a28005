use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Transcoder looked up on `PATH` when neither the CLI nor the config names one.
pub const DEFAULT_FFMPEG_PATH: &str = "ffmpeg";

/// Protocols ffmpeg may open while reading the rewritten playlist.
pub const DEFAULT_PROTOCOL_WHITELIST: &str = "https,file,tls,tcp";

/// HTTP client parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout per request in seconds (manifest or variant playlist).
    pub timeout_secs: u64,
    /// Optional User-Agent header; libcurl sends none when unset.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 300,
            user_agent: None,
        }
    }
}

/// Global configuration loaded from `~/.config/m3u8dl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct M3u8dlConfig {
    /// Transcoder executable; a bare name is resolved through `PATH`.
    pub ffmpeg_path: String,
    /// Value passed to ffmpeg's `-protocol_whitelist`.
    pub protocol_whitelist: String,
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for M3u8dlConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: DEFAULT_FFMPEG_PATH.to_string(),
            protocol_whitelist: DEFAULT_PROTOCOL_WHITELIST.to_string(),
            http: HttpConfig::default(),
        }
    }
}

impl M3u8dlConfig {
    /// Transcoder to use: the CLI override if non-empty, else the configured one,
    /// else the default name.
    pub fn resolve_ffmpeg_path(&self, cli_override: Option<&str>) -> String {
        cli_override
            .filter(|p| !p.trim().is_empty())
            .or_else(|| Some(self.ffmpeg_path.as_str()).filter(|p| !p.trim().is_empty()))
            .unwrap_or(DEFAULT_FFMPEG_PATH)
            .to_string()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("m3u8dl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the default location, creating a default file if none exists.
pub fn load_or_init() -> Result<M3u8dlConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Load configuration from `path`, writing defaults there first if it does not exist.
pub fn load_or_init_at(path: &Path) -> Result<M3u8dlConfig> {
    if !path.exists() {
        let default_cfg = M3u8dlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: M3u8dlConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
