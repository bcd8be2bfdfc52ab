//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `auth` owns the login/signup form at `/`; `dashboard` is the post-auth
//! screen behind `/dashboard/*`.

pub mod auth;
pub mod dashboard;
