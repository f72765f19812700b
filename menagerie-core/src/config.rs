//! Configuration: API key resolution, request settings, optional settings file.
//!
//! # Storage layout
//!
//! ```text
//! ~/.menagerie/
//!   config.yaml   (optional: endpoint, timeout_secs, template, output)
//! ```
//!
//! As with every home-relative helper here, `fn_at(home: &Path, …)` takes an
//! explicit home (tests use a `TempDir`) and `fn(…)` derives it from
//! `dirs::home_dir()`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Animals lookup endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.api-ninjas.com/v1/animals";
/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
/// Primary environment variable holding the API key.
pub const API_KEY_VAR: &str = "API_NINJAS_KEY";
/// Fallback environment variable holding the API key.
pub const API_KEY_FALLBACK_VAR: &str = "API_KEY";

// ---------------------------------------------------------------------------
// ApiKey
// ---------------------------------------------------------------------------

/// An API credential. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_owned())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `abcd…` style hint for display, never the full key.
    pub fn redacted(&self) -> String {
        match self.0.char_indices().nth(4) {
            Some((idx, _)) => format!("{}…", &self.0[..idx]),
            None => "…".to_owned(),
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"<redacted>").finish()
    }
}

/// Resolve the API key through `lookup`, primary variable first.
///
/// Blank values are skipped so an empty primary falls through to the fallback.
pub fn resolve_api_key_with<F>(lookup: F) -> Result<ApiKey, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    [API_KEY_VAR, API_KEY_FALLBACK_VAR]
        .iter()
        .filter_map(|var| lookup(var))
        .map(ApiKey::new)
        .find(|key| !key.is_empty())
        .ok_or(ConfigError::MissingApiKey {
            primary: API_KEY_VAR,
            fallback: API_KEY_FALLBACK_VAR,
        })
}

/// Resolve the API key from the process environment.
pub fn resolve_api_key() -> Result<ApiKey, ConfigError> {
    resolve_api_key_with(|var| std::env::var(var).ok())
}

// ---------------------------------------------------------------------------
// ApiConfig
// ---------------------------------------------------------------------------

/// Everything the fetcher needs for one request.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub endpoint: String,
    pub api_key: ApiKey,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Default endpoint and timeout with the given key.
    pub fn new(api_key: ApiKey) -> Self {
        ApiConfig {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            api_key,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ---------------------------------------------------------------------------
// Settings file
// ---------------------------------------------------------------------------

/// Optional user settings. Every field falls back to a built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl Settings {
    /// Endpoint to use, after defaults.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Timeout to use, after defaults.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Build an [`ApiConfig`] from these settings and a resolved key.
    pub fn api_config(&self, api_key: ApiKey) -> ApiConfig {
        ApiConfig::new(api_key)
            .with_endpoint(self.endpoint())
            .with_timeout(self.timeout())
    }
}

/// `<home>/.menagerie/config.yaml`: pure, no I/O.
pub fn settings_path_at(home: &Path) -> PathBuf {
    home.join(".menagerie").join("config.yaml")
}

/// Load settings from `<home>/.menagerie/config.yaml`.
///
/// A missing file yields [`Settings::default`].
pub fn load_settings_at(home: &Path) -> Result<Settings, ConfigError> {
    let path = settings_path_at(home);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }
    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    if contents.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
}

/// `settings_path_at` convenience wrapper.
pub fn settings_path() -> Result<PathBuf, ConfigError> {
    Ok(settings_path_at(&home()?))
}

/// `load_settings_at` convenience wrapper.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_at(&home()?)
}

fn home() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::HomeNotFound)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
