//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `login` owns the sign-in form, `gate` owns the catch-all route and picks
//! between the role layouts.

pub mod admin;
pub mod gate;
pub mod login;
pub mod warehouse;
