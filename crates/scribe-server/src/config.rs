use std::path::PathBuf;

use scribe_core::DocsError;

/// Runtime configuration for the bookmark service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub api_key: String,
    /// Public path prefix the service is mounted under (e.g. "api"), without slashes.
    pub base_path: Option<String>,
    /// Directory scanned for Markdown documentation sources.
    pub docs_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from environment variables.
    ///
    /// - `SCRIBE_API_KEY`: required, protects the versioned endpoints
    /// - `SCRIBE_PORT`: optional, defaults to 3000
    /// - `SCRIBE_BASE_PATH`: optional, no prefix when unset
    /// - `SCRIBE_DOCS_DIR`: optional, no source scan when unset
    pub fn from_env() -> Result<Self, DocsError> {
        let api_key = std::env::var("SCRIBE_API_KEY").map_err(|_| {
            DocsError::config("SCRIBE_API_KEY not set. Required to protect versioned endpoints.")
        })?;

        let port = match std::env::var("SCRIBE_PORT") {
            Err(_) => 3000,
            Ok(raw) => raw.parse().map_err(|_| {
                DocsError::config(format!("Invalid SCRIBE_PORT '{raw}': must be a port number"))
            })?,
        };

        let base_path = std::env::var("SCRIBE_BASE_PATH")
            .ok()
            .filter(|path| !path.trim_matches('/').is_empty());
        let docs_dir = std::env::var("SCRIBE_DOCS_DIR").ok().map(PathBuf::from);

        Ok(Self {
            port,
            api_key,
            base_path,
            docs_dir,
        })
    }
}
