use super::*;

fn sample_response() -> ApiAuthResponse {
    ApiAuthResponse {
        user_id: "u-1".to_owned(),
        user_email: "a@b.com".to_owned(),
        user_role: "member".to_owned(),
        access_token: "access".to_owned(),
        refresh_token: "refresh".to_owned(),
    }
}

// =============================================================
// AuthType
// =============================================================

#[test]
fn auth_type_as_str_matches_endpoint_segments() {
    assert_eq!(AuthType::Login.as_str(), "login");
    assert_eq!(AuthType::Signup.as_str(), "signup");
}

#[test]
fn auth_type_toggled_flips_both_ways() {
    assert_eq!(AuthType::Login.toggled(), AuthType::Signup);
    assert_eq!(AuthType::Signup.toggled(), AuthType::Login);
}

// =============================================================
// AuthFailure status lookup
// =============================================================

#[test]
fn from_status_maps_every_known_code() {
    assert_eq!(AuthFailure::from_status(204), Some(AuthFailure::MissingContent));
    assert_eq!(AuthFailure::from_status(422), Some(AuthFailure::EmailNotValid));
    assert_eq!(AuthFailure::from_status(401), Some(AuthFailure::AuthFailed));
    assert_eq!(AuthFailure::from_status(404), Some(AuthFailure::UserNotFound));
    assert_eq!(AuthFailure::from_status(409), Some(AuthFailure::UserAlreadyExists));
    assert_eq!(AuthFailure::from_status(500), Some(AuthFailure::RequestNotSupported));
}

#[test]
fn from_status_unknown_codes_are_none() {
    for status in [0u16, 200, 201, 400, 403, 418, 502, 503] {
        assert_eq!(AuthFailure::from_status(status), None, "status {status}");
    }
}

#[test]
fn as_str_returns_the_fixed_phrases() {
    assert_eq!(AuthFailure::MissingContent.as_str(), "missing content");
    assert_eq!(AuthFailure::EmailNotValid.as_str(), "email not valid");
    assert_eq!(AuthFailure::AuthFailed.as_str(), "auth failed");
    assert_eq!(AuthFailure::UserNotFound.as_str(), "user not found");
    assert_eq!(AuthFailure::UserAlreadyExists.as_str(), "user already exists");
    assert_eq!(AuthFailure::RequestNotSupported.as_str(), "request not supported");
}

#[test]
fn message_covers_every_variant() {
    assert_eq!(
        AuthFailure::MissingContent.message(),
        "Please enter both an email and a password"
    );
    assert_eq!(AuthFailure::EmailNotValid.message(), "Please enter a valid email");
    assert_eq!(
        AuthFailure::AuthFailed.message(),
        "The password you have entered is invalid"
    );
    assert_eq!(AuthFailure::UserNotFound.message(), "No user exists with that email");
    assert_eq!(
        AuthFailure::UserAlreadyExists.message(),
        "An account already exists with that email"
    );
    assert_eq!(
        AuthFailure::RequestNotSupported.message(),
        "Sorry we're experiencing issues"
    );
}

// =============================================================
// Submission validation
// =============================================================

#[test]
fn check_submission_accepts_valid_credentials() {
    assert_eq!(check_submission(Some("a@b.com"), Some("x")), Ok(()));
}

#[test]
fn check_submission_rejects_malformed_email() {
    assert_eq!(
        check_submission(Some("bad"), Some("x")),
        Err(AuthFailure::EmailNotValid)
    );
}

#[test]
fn check_submission_missing_email_is_missing_content() {
    assert_eq!(check_submission(None, Some("x")), Err(AuthFailure::MissingContent));
}

#[test]
fn check_submission_missing_password_is_missing_content() {
    assert_eq!(
        check_submission(Some("a@b.com"), None),
        Err(AuthFailure::MissingContent)
    );
}

#[test]
fn check_submission_empty_strings_are_missing_content() {
    assert_eq!(check_submission(Some(""), Some("x")), Err(AuthFailure::MissingContent));
    assert_eq!(
        check_submission(Some("a@b.com"), Some("")),
        Err(AuthFailure::MissingContent)
    );
}

#[test]
fn is_valid_email_syntax_cases() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("first.last+tag@sub.domain.org"));
    assert!(!is_valid_email("no-at-sign"));
    assert!(!is_valid_email("user@nodot"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@.com"));
}

// =============================================================
// AuthFormState lifecycle
// =============================================================

#[test]
fn new_state_first_visit_starts_in_signup() {
    let state = AuthFormState::new(false);
    assert_eq!(state.auth_type, AuthType::Signup);
    assert!(!state.authenticated);
    assert!(state.auth_failure.is_none());
}

#[test]
fn new_state_returning_visitor_starts_in_login() {
    let state = AuthFormState::new(true);
    assert_eq!(state.auth_type, AuthType::Login);
}

#[test]
fn toggle_auth_type_clears_failure() {
    let mut state = AuthFormState::new(true);
    state.fail(AuthFailure::AuthFailed);
    state.toggle_auth_type();
    assert_eq!(state.auth_type, AuthType::Signup);
    assert!(state.auth_failure.is_none());
}

#[test]
fn fail_records_failure_and_stays_unauthenticated() {
    let mut state = AuthFormState::new(true);
    state.fail(AuthFailure::UserNotFound);
    assert_eq!(state.auth_failure, Some(AuthFailure::UserNotFound));
    assert!(!state.authenticated);
}

#[test]
fn apply_success_copies_identity_and_tokens() {
    let mut state = AuthFormState::new(true);
    state.fail(AuthFailure::AuthFailed);
    state.apply_success(&sample_response());
    assert!(state.authenticated);
    assert!(state.auth_failure.is_none());
    assert_eq!(state.user_id.as_deref(), Some("u-1"));
    assert_eq!(state.email.as_deref(), Some("a@b.com"));
    assert_eq!(state.user_role.as_deref(), Some("member"));
    assert_eq!(state.access_token.as_deref(), Some("access"));
    assert_eq!(state.refresh_token.as_deref(), Some("refresh"));
}

#[test]
fn clear_session_drops_identity_and_password() {
    let mut state = AuthFormState::new(true);
    state.password = Some("hunter2".to_owned());
    state.apply_success(&sample_response());
    state.clear_session();
    assert!(!state.authenticated);
    assert!(state.user_id.is_none());
    assert!(state.user_role.is_none());
    assert!(state.access_token.is_none());
    assert!(state.refresh_token.is_none());
    assert!(state.password.is_none());
}

// =============================================================
// UI text derivations
// =============================================================

#[test]
fn login_mode_copy() {
    let state = AuthFormState::new(true);
    assert_eq!(state.greeting(), "Welcome Back!");
    assert_eq!(state.instructions(), "Please sign in below to continue!");
    assert_eq!(state.toggle_prompt(), "Don't have an account yet? ");
    assert_eq!(state.toggle_action(), "Sign Up");
    assert_eq!(state.submit_label(), "Log in");
}

#[test]
fn signup_mode_copy() {
    let state = AuthFormState::new(false);
    assert_eq!(state.greeting(), "Welcome!");
    assert_eq!(state.instructions(), "Please sign up below to get started!");
    assert_eq!(state.toggle_prompt(), "Already have an account? ");
    assert_eq!(state.toggle_action(), "Sign In");
    assert_eq!(state.submit_label(), "Sign up");
}

#[test]
fn failure_text_empty_without_failure() {
    let state = AuthFormState::new(true);
    assert_eq!(state.failure_text(), "");
}

#[test]
fn failure_text_uses_the_display_sentence() {
    let mut state = AuthFormState::new(true);
    state.fail(AuthFailure::RequestNotSupported);
    assert_eq!(state.failure_text(), "Sorry we're experiencing issues");
}
