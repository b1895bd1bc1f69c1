//! Host startup errors.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `[package.metadata.leptos]` missing or malformed.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("bind failed: {0}")]
    Bind(std::io::Error),

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
