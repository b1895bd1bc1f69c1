//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the plain state value, `role` maps roles to login routes, and
//! `session` owns the reactive signal plus its backing storage.

pub mod auth;
pub mod role;
pub mod session;
