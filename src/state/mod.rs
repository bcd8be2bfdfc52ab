//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The whole app hangs off one focused model (`auth`) so the form page,
//! the dashboard guard, and the logout flow all read the same fields.

pub mod auth;
