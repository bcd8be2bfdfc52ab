//! Wire DTOs for the auth API boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the server's camelCase JSON so serde round-trips
//! stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of a successful login/signup response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAuthResponse {
    /// Server-assigned account identifier.
    pub user_id: String,
    /// Canonical email for the account.
    pub user_email: String,
    /// Authorization role (e.g. `"member"`, `"admin"`).
    pub user_role: String,
    /// Short-lived bearer token for API calls.
    pub access_token: String,
    /// Long-lived token; sent back verbatim on logout.
    pub refresh_token: String,
}
