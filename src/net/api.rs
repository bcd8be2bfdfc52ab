//! REST helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as HTTP status codes, not errors or panics: any
//! non-200 response yields `Err(status)`, and a network failure or an
//! unreadable success body yields `Err(500)`. The form layer maps the code
//! to a display string. There is no retry, timeout, or backoff; the form
//! makes exactly one call per submit.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ApiAuthResponse;
use crate::state::auth::AuthType;

/// Base address of the auth API, fixed at compile time.
/// Empty by default, which keeps requests same-origin.
#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("AUTH_API_BASE").unwrap_or("")
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_endpoint(auth_type: AuthType) -> String {
    format!("{}/api/auth/{}", api_base(), auth_type.as_str())
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint() -> String {
    format!("{}/auth/logout", api_base())
}

/// Turn a response status + body into the caller's result.
///
/// Only a 200 with a parseable body succeeds; a 200 whose body does not
/// parse counts as a server fault (500).
#[cfg(any(test, feature = "hydrate"))]
fn interpret_response(status: u16, body: &str) -> Result<ApiAuthResponse, u16> {
    if status == 200 {
        serde_json::from_str(body).map_err(|_| 500)
    } else {
        Err(status)
    }
}

/// Submit credentials to `POST {api_base}/api/auth/{login|signup}`.
///
/// # Errors
///
/// Returns the HTTP status code on any non-2xx response, or 500 when no
/// status is available (network failure, unreadable body, SSR).
pub async fn auth_request(
    auth_type: AuthType,
    email: &str,
    password: &str,
) -> Result<ApiAuthResponse, u16> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let request = gloo_net::http::Request::post(&auth_endpoint(auth_type))
            .json(&payload)
            .map_err(|_| 500u16)?;
        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                leptos::logging::warn!("auth request failed to send: {e}");
                return Err(500);
            }
        };
        let body = resp.text().await.unwrap_or_default();
        interpret_response(resp.status(), &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth_type, email, password);
        Err(500)
    }
}

/// Fire-and-forget `POST {api_base}/auth/logout` with the raw refresh
/// token as the body. The session is cleared locally whether or not the
/// server hears about it.
pub async fn logout(refresh_token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&logout_endpoint())
            .header("Content-Type", "text/plain")
            .body(refresh_token.to_owned());
        if let Ok(request) = request {
            let _ = request.send().await;
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = refresh_token;
    }
}
