//! Networking modules for the auth REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema the
//! server responds with.

pub mod api;
pub mod types;
