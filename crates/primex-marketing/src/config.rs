//! Server configuration

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Settings outside `[package.metadata.leptos]`
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory served under `/assets`
    pub assets_dir: PathBuf,
    /// `tracing_subscriber` filter directive
    pub log_filter: String,
}

impl ServerConfig {
    pub const DEFAULT_LOG_FILTER: &'static str = "primex_marketing=info,primex_core=info,tower_http=info";

    pub fn from_env() -> ServerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ServerResult<Self> {
        let assets_dir = PathBuf::from(
            lookup("PRIMEX_ASSETS_DIR").unwrap_or_else(|| "assets".to_string()),
        );
        if assets_dir.as_os_str().is_empty() {
            return Err(ServerError::Config("PRIMEX_ASSETS_DIR must not be empty".into()));
        }

        let log_filter = lookup("RUST_LOG")
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            assets_dir,
            log_filter,
        })
    }
}
