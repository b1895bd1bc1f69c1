//! Client build configuration.
//!
//! The login API base URL is fixed at compile time from `DEPOT_API_BASE`; the
//! WASM bundle has no runtime environment to read.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base used when `DEPOT_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:5122";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
}

impl ClientConfig {
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }

    /// Configuration baked in at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_override(option_env!("DEPOT_API_BASE"))
    }

    fn from_override(value: Option<&str>) -> Self {
        let base = value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE);
        Self::new(base)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
