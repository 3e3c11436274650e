use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::AppError;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    /// Root of the static assets (images, videos, certificates, stylesheet).
    pub public_dir: PathBuf,
    /// URL of the wasm-bindgen JS module. `None` serves the page without the client.
    pub client_module: Option<String>,
}

impl Config {
    /// Optional:
    /// - `PORTFOLIO_LISTEN_ADDR` (default: "127.0.0.1:3000")
    /// - `PORTFOLIO_PUBLIC_DIR` (default: this crate's `public/`)
    /// - `PORTFOLIO_CLIENT_MODULE` (e.g. "/pkg/portfolio_client.js")
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let raw_addr =
            lookup("PORTFOLIO_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw_addr.parse::<SocketAddr>().map_err(|e| {
            AppError::Config(format!("PORTFOLIO_LISTEN_ADDR {raw_addr:?} is invalid: {e}"))
        })?;

        let public_dir = lookup("PORTFOLIO_PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_public_dir);
        if !public_dir.is_dir() {
            return Err(AppError::Config(format!(
                "public directory not found: {}",
                public_dir.display()
            )));
        }

        let client_module = lookup("PORTFOLIO_CLIENT_MODULE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            listen_addr,
            public_dir,
            client_module,
        })
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.public_dir.join("site.css")
    }
}

pub fn default_public_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("public")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.public_dir, default_public_dir());
        assert!(config.client_module.is_none());
        assert!(config.stylesheet_path().ends_with("site.css"));
    }

    #[test]
    fn overrides_are_read() {
        let config = Config::from_lookup(lookup(&[
            ("PORTFOLIO_LISTEN_ADDR", "0.0.0.0:8080"),
            ("PORTFOLIO_CLIENT_MODULE", " /pkg/portfolio_client.js "),
        ]))
        .unwrap();
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.client_module.as_deref(), Some("/pkg/portfolio_client.js"));
    }

    #[test]
    fn blank_client_module_is_unset() {
        let config = Config::from_lookup(lookup(&[("PORTFOLIO_CLIENT_MODULE", "  ")])).unwrap();
        assert!(config.client_module.is_none());
    }

    #[test]
    fn bad_address_is_a_config_error() {
        let err = Config::from_lookup(lookup(&[("PORTFOLIO_LISTEN_ADDR", "nope")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn missing_public_dir_is_a_config_error() {
        let err = Config::from_lookup(lookup(&[("PORTFOLIO_PUBLIC_DIR", "/definitely/not/here")]))
            .unwrap_err();
        assert!(err.to_string().contains("public directory not found"));
    }
}
