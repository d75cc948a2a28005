//! Blocking HTTP GET of playlist text.
//!
//! Uses the curl crate (libcurl). Each playlist is fetched once, with no retry;
//! the whole body is buffered since manifests are small.

use crate::config::HttpConfig;
use crate::error::FetchError;
use std::time::Duration;

const MAX_REDIRECTIONS: u32 = 10;

/// Request options derived from `[http]` in config.toml.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self::from(&HttpConfig::default())
    }
}

impl From<&HttpConfig> for HttpOptions {
    fn from(cfg: &HttpConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// GETs `url` and returns the body as text (invalid UTF-8 is replaced).
///
/// Follows redirects. Non-2xx responses are errors.
pub fn fetch_text(url: &str, opts: &HttpOptions) -> Result<String, FetchError> {
    let curl_err = |source: curl::Error| FetchError::Curl {
        url: url.to_string(),
        source,
    };

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(curl_err)?;
    easy.follow_location(true).map_err(curl_err)?;
    easy.max_redirections(MAX_REDIRECTIONS).map_err(curl_err)?;
    easy.connect_timeout(opts.connect_timeout).map_err(curl_err)?;
    easy.timeout(opts.timeout).map_err(curl_err)?;
    if let Some(ua) = &opts.user_agent {
        easy.useragent(ua).map_err(curl_err)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(curl_err)?;
        transfer.perform().map_err(curl_err)?;
    }

    let code = easy.response_code().map_err(curl_err)?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http {
            url: url.to_string(),
            code,
        });
    }

    tracing::debug!(url, bytes = body.len(), "fetched playlist");
    Ok(String::from_utf8_lossy(&body).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_from_config() {
        let cfg = HttpConfig {
            connect_timeout_secs: 3,
            timeout_secs: 9,
            user_agent: Some("ua".to_string()),
        };
        let opts = HttpOptions::from(&cfg);
        assert_eq!(opts.connect_timeout, Duration::from_secs(3));
        assert_eq!(opts.timeout, Duration::from_secs(9));
        assert_eq!(opts.user_agent.as_deref(), Some("ua"));
    }

    #[test]
    fn unreachable_host_is_curl_error() {
        let opts = HttpOptions {
            connect_timeout: Duration::from_secs(2),
            timeout: Duration::from_secs(2),
            user_agent: None,
        };
        // Port 1 on loopback is not expected to accept connections.
        match fetch_text("http://127.0.0.1:1/master.m3u8", &opts) {
            Err(FetchError::Curl { url, .. }) => assert!(url.ends_with("master.m3u8")),
            other => panic!("expected curl error, got {:?}", other.map(|s| s.len())),
        }
    }
}
