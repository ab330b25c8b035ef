//! Credential and endpoint resolution.
//!
//! The API token is looked up in order: explicit value (`--token`),
//! `ADS_API_TOKEN`, `SCIX_API_TOKEN`, `ADS_DEV_KEY`, then `~/.ads/dev_key`.

use crate::error::{PadsError, Result};
use std::path::{Path, PathBuf};
use url::Url;

/// Production ADS API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.adsabs.harvard.edu/v1";

/// Environment variables that may hold the API token, in priority order.
pub const TOKEN_ENV_VARS: [&str; 3] = ["ADS_API_TOKEN", "SCIX_API_TOKEN", "ADS_DEV_KEY"];

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV_VAR: &str = "ADS_API_URL";

/// Location of the token file shared with other ADS tools.
pub fn dev_key_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ads").join("dev_key"))
}

/// Read a token file; blank or unreadable files yield `None`.
pub fn read_key_file(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let token = content.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Token lookup over injectable sources.
pub fn token_from(
    explicit: Option<String>,
    env: impl Fn(&str) -> Option<String>,
    key_file: Option<&Path>,
) -> Option<String> {
    let non_empty = |t: String| {
        let t = t.trim().to_string();
        (!t.is_empty()).then_some(t)
    };

    explicit
        .and_then(non_empty)
        .or_else(|| {
            TOKEN_ENV_VARS
                .iter()
                .find_map(|name| env(*name).and_then(non_empty))
        })
        .or_else(|| key_file.and_then(read_key_file))
}

/// Resolve the API token from the process environment and the home directory.
pub fn resolve_token(explicit: Option<String>) -> Result<String> {
    let key_file = dev_key_path();
    let token = token_from(explicit, |name| std::env::var(name).ok(), key_file.as_deref());
    match token {
        Some(token) => {
            tracing::debug!("API token resolved");
            Ok(token)
        }
        None => Err(PadsError::AuthRequired),
    }
}

/// Validate a base URL override, falling back to [`DEFAULT_BASE_URL`].
pub fn base_url_from(value: Option<String>) -> Result<String> {
    let Some(raw) = value.filter(|v| !v.trim().is_empty()) else {
        return Ok(DEFAULT_BASE_URL.to_string());
    };
    let parsed = Url::parse(raw.trim())
        .map_err(|e| PadsError::Config(format!("invalid {} '{}': {}", BASE_URL_ENV_VAR, raw, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(PadsError::Config(format!(
            "{} must be an http(s) URL, got '{}'",
            BASE_URL_ENV_VAR, raw
        )));
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

/// Base URL from the environment.
pub fn resolve_base_url() -> Result<String> {
    base_url_from(std::env::var(BASE_URL_ENV_VAR).ok())
}
