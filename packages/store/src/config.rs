//! # Client configuration: the API origin
//!
//! The only thing the client needs to know about its environment is where the
//! remote API lives. [`ClientConfig`] holds that origin and derives every URL
//! the HTTP layer uses from it.
//!
//! ## Resolution order
//!
//! 1. `NOTEFLOW_API_URL`. On WASM this is baked in at build time (`option_env!`),
//!    since a browser tab has no process environment. On native it is read at
//!    run time after loading a `.env` file with `dotenvy`.
//! 2. `noteflow.toml` in the working directory (native only):
//!
//! ```toml
//! [api]
//! url = "https://notes.example.com"
//! ```
//!
//! 3. The default origin, `http://localhost:3000`.

use serde::{Deserialize, Serialize};

/// Environment variable selecting the API origin.
pub const API_URL_ENV: &str = "NOTEFLOW_API_URL";

/// Origin used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Remote API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the API server, without the `/api` prefix.
    #[serde(default = "default_api_url")]
    pub url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
        }
    }
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig { url: url.into() },
        }
    }

    /// The well-known filename for the native config file.
    pub fn filename() -> &'static str {
        "noteflow.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load the configuration for the current platform.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::resolve(option_env!("NOTEFLOW_API_URL").map(str::to_string), None)
    }

    /// Load the configuration for the current platform.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        let from_env = std::env::var(API_URL_ENV).ok();
        let from_file = std::fs::read_to_string(Self::filename()).ok();
        Self::resolve(from_env, from_file.as_deref())
    }

    /// Pick the first usable source: environment value, then TOML file, then default.
    pub fn resolve(env_url: Option<String>, file: Option<&str>) -> Self {
        if let Some(url) = env_url.filter(|u| !u.trim().is_empty()) {
            return Self::new(url.trim());
        }
        if let Some(contents) = file {
            match Self::from_toml(contents) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("Ignoring invalid {}: {}", Self::filename(), e),
            }
        }
        Self::default()
    }

    /// API origin with any trailing slash removed.
    pub fn api_url(&self) -> &str {
        let url = self.api.url.trim().trim_end_matches('/');
        if url.is_empty() {
            DEFAULT_API_URL
        } else {
            url
        }
    }

    /// Base URL every JSON endpoint hangs off (`<origin>/api`).
    pub fn api_base(&self) -> String {
        format!("{}/api", self.api_url())
    }

    /// Full-page navigation target for third-party sign-in.
    pub fn google_login_url(&self) -> String {
        format!("{}/auth/google", self.api_base())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origin() {
        let config = ClientConfig::resolve(None, None);
        assert_eq!(config.api_url(), "http://localhost:3000");
        assert_eq!(config.api_base(), "http://localhost:3000/api");
        assert_eq!(
            config.google_login_url(),
            "http://localhost:3000/api/auth/google"
        );
    }

    #[test]
    fn test_env_wins_over_file() {
        let file = "[api]\nurl = \"https://from-file.example\"\n";
        let config =
            ClientConfig::resolve(Some("https://from-env.example/".to_string()), Some(file));
        assert_eq!(config.api_base(), "https://from-env.example/api");
    }

    #[test]
    fn test_blank_env_falls_through_to_file() {
        let file = "[api]\nurl = \"https://from-file.example\"\n";
        let config = ClientConfig::resolve(Some("  ".to_string()), Some(file));
        assert_eq!(config.api_url(), "https://from-file.example");
    }

    #[test]
    fn test_invalid_file_uses_default() {
        let config = ClientConfig::resolve(None, Some("[api\nurl ="));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config.api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::new("https://notes.example.com");
        let text = config.to_toml().unwrap();
        assert!(text.contains("[api]"));
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
