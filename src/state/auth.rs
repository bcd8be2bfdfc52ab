//! Auth-form state for the login/signup screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds everything the form needs between keystrokes: the current mode,
//! the typed credentials, the last failure (if any), and the session
//! identity once the server accepts the submission. The dashboard guard
//! and the logout flow read the same state via context.
//!
//! ERROR HANDLING
//! ==============
//! Failures are a closed status-keyed set (`AuthFailure`); everything the
//! UI can display maps back to one of the six variants or to no failure.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::OnceLock;

use regex::Regex;

use crate::net::types::ApiAuthResponse;

/// Whether the form currently submits to the login or signup endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthType {
    Login,
    Signup,
}

impl AuthType {
    /// Endpoint path segment for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
        }
    }

    /// The other mode; used by the form's login/signup toggle link.
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }
}

/// Why an auth attempt failed, keyed by the server's HTTP status code.
///
/// The set is closed: 204 and 422 are also produced locally by
/// [`check_submission`] before any network call is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthFailure {
    /// 204 — email or password was empty.
    MissingContent,
    /// 422 — email failed the syntax check.
    EmailNotValid,
    /// 401 — wrong password.
    AuthFailed,
    /// 404 — no account for that email.
    UserNotFound,
    /// 409 — signup with an email that already has an account.
    UserAlreadyExists,
    /// 500 — anything the server could not handle.
    RequestNotSupported,
}

impl AuthFailure {
    /// Pure table lookup from an HTTP status code.
    ///
    /// Returns `None` for any code outside the fixed set; callers treat
    /// that as a generic server error (`RequestNotSupported`).
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            204 => Some(Self::MissingContent),
            422 => Some(Self::EmailNotValid),
            401 => Some(Self::AuthFailed),
            404 => Some(Self::UserNotFound),
            409 => Some(Self::UserAlreadyExists),
            500 => Some(Self::RequestNotSupported),
            _ => None,
        }
    }

    /// The fixed failure phrase for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingContent => "missing content",
            Self::EmailNotValid => "email not valid",
            Self::AuthFailed => "auth failed",
            Self::UserNotFound => "user not found",
            Self::UserAlreadyExists => "user already exists",
            Self::RequestNotSupported => "request not supported",
        }
    }

    /// The sentence shown to the user under the form.
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingContent => "Please enter both an email and a password",
            Self::EmailNotValid => "Please enter a valid email",
            Self::AuthFailed => "The password you have entered is invalid",
            Self::UserNotFound => "No user exists with that email",
            Self::UserAlreadyExists => "An account already exists with that email",
            Self::RequestNotSupported => "Sorry we're experiencing issues",
        }
    }
}

/// Syntax-only email check; no DNS or deliverability logic.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("email pattern compiles")
    });
    re.is_match(email)
}

/// Validate a submission before it goes on the wire.
///
/// `Ok(())` means the credentials are worth sending.
///
/// # Errors
///
/// Missing or empty fields map to `MissingContent`; a present but
/// malformed email maps to `EmailNotValid`.
pub fn check_submission(
    email: Option<&str>,
    password: Option<&str>,
) -> Result<(), AuthFailure> {
    match (email, password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            if is_valid_email(email) {
                Ok(())
            } else {
                Err(AuthFailure::EmailNotValid)
            }
        }
        _ => Err(AuthFailure::MissingContent),
    }
}

/// Everything the auth form tracks between mount and navigation.
///
/// Created once when the page mounts, mutated on input and submit, and
/// discarded when the user navigates away.
#[derive(Clone, Debug)]
pub struct AuthFormState {
    pub has_ever_logged_in: bool,
    pub auth_type: AuthType,
    pub email: Option<String>,
    pub password: Option<String>,
    pub auth_failure: Option<AuthFailure>,
    pub authenticated: bool,
    pub user_id: Option<String>,
    pub user_role: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl AuthFormState {
    /// Build the initial state. Returning visitors get the login form,
    /// first-time visitors get signup.
    pub fn new(has_ever_logged_in: bool) -> Self {
        Self {
            has_ever_logged_in,
            auth_type: if has_ever_logged_in {
                AuthType::Login
            } else {
                AuthType::Signup
            },
            email: None,
            password: None,
            auth_failure: None,
            authenticated: false,
            user_id: None,
            user_role: None,
            access_token: None,
            refresh_token: None,
        }
    }

    /// Flip login/signup and drop any failure from the previous mode.
    pub fn toggle_auth_type(&mut self) {
        self.auth_type = self.auth_type.toggled();
        self.auth_failure = None;
    }

    /// Record a failed attempt.
    pub fn fail(&mut self, failure: AuthFailure) {
        self.auth_failure = Some(failure);
        self.authenticated = false;
    }

    /// Copy the accepted identity and tokens into state.
    pub fn apply_success(&mut self, response: &ApiAuthResponse) {
        self.auth_failure = None;
        self.authenticated = true;
        self.user_id = Some(response.user_id.clone());
        self.email = Some(response.user_email.clone());
        self.user_role = Some(response.user_role.clone());
        self.access_token = Some(response.access_token.clone());
        self.refresh_token = Some(response.refresh_token.clone());
    }

    /// Drop the session identity, returning to the logged-out state.
    pub fn clear_session(&mut self) {
        self.authenticated = false;
        self.user_id = None;
        self.user_role = None;
        self.access_token = None;
        self.refresh_token = None;
        self.password = None;
        self.auth_failure = None;
    }

    // ------- pure UI-text derivations, one per piece of form copy -------

    pub fn greeting(&self) -> &'static str {
        match self.auth_type {
            AuthType::Login => "Welcome Back!",
            AuthType::Signup => "Welcome!",
        }
    }

    pub fn instructions(&self) -> &'static str {
        match self.auth_type {
            AuthType::Login => "Please sign in below to continue!",
            AuthType::Signup => "Please sign up below to get started!",
        }
    }

    /// Lead-in text for the mode-toggle link.
    pub fn toggle_prompt(&self) -> &'static str {
        match self.auth_type {
            AuthType::Login => "Don't have an account yet? ",
            AuthType::Signup => "Already have an account? ",
        }
    }

    /// Clickable label for the mode-toggle link.
    pub fn toggle_action(&self) -> &'static str {
        match self.auth_type {
            AuthType::Login => "Sign Up",
            AuthType::Signup => "Sign In",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.auth_type {
            AuthType::Login => "Log in",
            AuthType::Signup => "Sign up",
        }
    }

    /// Failure sentence for the banner, or empty when there is none.
    pub fn failure_text(&self) -> &'static str {
        self.auth_failure.map_or("", AuthFailure::message)
    }
}

impl Default for AuthFormState {
    fn default() -> Self {
        Self::new(false)
    }
}
