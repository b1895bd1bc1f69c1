//! Networking modules for the remote login API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the login POST, `error` defines how failures are surfaced,
//! and `types` defines the request/response schema.

pub mod api;
pub mod error;
pub mod types;
