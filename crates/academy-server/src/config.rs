//! Server Configuration
//!
//! Read from the process environment after `.env` has been loaded.

use std::path::PathBuf;
use std::time::Duration;

/// Runtime settings for the site server
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind_addr: String,

    /// Directory holding the compiled WASM frontend
    pub static_dir: PathBuf,

    /// Form processor that receives consultation requests. The relay is
    /// disabled when unset.
    pub form_endpoint: Option<String>,

    /// Upper bound on one request to the form processor
    pub form_timeout: Duration,
}

impl ServerConfig {
    pub const DEFAULT_BIND_ADDR: &'static str = "0.0.0.0:3000";
    pub const DEFAULT_STATIC_DIR: &'static str = "static";
    pub const DEFAULT_FORM_TIMEOUT_SECS: u64 = 10;

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| Self::DEFAULT_BIND_ADDR.into()),
            static_dir: get("STATIC_DIR")
                .unwrap_or_else(|| Self::DEFAULT_STATIC_DIR.into())
                .into(),
            form_endpoint: get("FORM_ENDPOINT"),
            form_timeout: Duration::from_secs(
                get("FORM_TIMEOUT_SECS")
                    .and_then(|v| v.parse().ok())
                    .filter(|&secs| secs > 0)
                    .unwrap_or(Self::DEFAULT_FORM_TIMEOUT_SECS),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.form_endpoint, None);
        assert_eq!(config.form_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("STATIC_DIR", "dist"),
            ("FORM_ENDPOINT", " https://formspree.io/f/abc "),
            ("FORM_TIMEOUT_SECS", "3"),
        ]);
        let config = ServerConfig::from_lookup(|key| env.get(key).map(ToString::to_string));
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert_eq!(config.form_endpoint.as_deref(), Some("https://formspree.io/f/abc"));
        assert_eq!(config.form_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_bad_timeout_falls_back() {
        for raw in ["soon", "0", "-5"] {
            let config = ServerConfig::from_lookup(|key| (key == "FORM_TIMEOUT_SECS").then(|| raw.into()));
            assert_eq!(config.form_timeout, Duration::from_secs(10), "{raw}");
        }
    }

    #[test]
    fn test_blank_endpoint_is_unset() {
        let config = ServerConfig::from_lookup(|key| (key == "FORM_ENDPOINT").then(|| "  ".into()));
        assert_eq!(config.form_endpoint, None);
    }
}
