//! Browser-environment helpers.

pub mod first_visit;
