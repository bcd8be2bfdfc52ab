//! Auth page: one form that toggles between login and signup.
//!
//! Submit flow: validate locally, POST the credentials, then either store
//! the returned session and navigate to `/dashboard` or map the status
//! code to a failure banner. One request per submit; the button is
//! disabled while a request is in flight.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::ApiAuthResponse;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::auth::{AuthFailure, check_submission};
use crate::state::auth::AuthFormState;

/// Trim the email and drop empty fields, mirroring what the validator
/// treats as "missing content".
#[cfg(any(test, feature = "hydrate"))]
fn submission_fields(email: &str, password: &str) -> (Option<String>, Option<String>) {
    let email = email.trim();
    (
        (!email.is_empty()).then(|| email.to_owned()),
        (!password.is_empty()).then(|| password.to_owned()),
    )
}

/// Map a response status to a failure, falling back to the generic
/// server-error variant for codes outside the fixed table.
#[cfg(any(test, feature = "hydrate"))]
fn resolve_failure(status: u16) -> AuthFailure {
    AuthFailure::from_status(status).unwrap_or(AuthFailure::RequestNotSupported)
}

/// Fold the request outcome into form state. Returns `true` when the
/// session was established and the page should navigate away.
#[cfg(any(test, feature = "hydrate"))]
fn apply_auth_result(
    state: &mut AuthFormState,
    result: Result<ApiAuthResponse, u16>,
) -> bool {
    match result {
        Ok(response) => {
            state.apply_success(&response);
            true
        }
        Err(status) => {
            state.fail(resolve_failure(status));
            false
        }
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthFormState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_toggle = move |_| auth.update(AuthFormState::toggle_auth_type);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let (email_value, password_value) = submission_fields(&email.get(), &password.get());
            auth.update(|state| {
                state.email = email_value.clone();
                state.password = password_value.clone();
            });

            if let Err(failure) =
                check_submission(email_value.as_deref(), password_value.as_deref())
            {
                auth.update(|state| state.fail(failure));
                return;
            }

            // The validator guarantees both fields are present here.
            let (Some(email_value), Some(password_value)) = (email_value, password_value) else {
                return;
            };

            busy.set(true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let auth_type = auth.get_untracked().auth_type;
                let result =
                    crate::net::api::auth_request(auth_type, &email_value, &password_value).await;
                let mut authenticated = false;
                auth.update(|state| authenticated = apply_auth_result(state, result));
                // Re-enable the button whatever the outcome; navigation
                // unmounts the page, so this only matters if it fails.
                busy.set(false);
                if authenticated {
                    crate::util::first_visit::mark_logged_in();
                    navigate("/dashboard", NavigateOptions::default());
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{move || auth.get().greeting()}</h1>
                <p class="auth-card__subtitle" id="auth-instructions">
                    {move || auth.get().instructions()}
                </p>
                // novalidate keeps the browser's own email tooltip from
                // preempting the validator's "email not valid" banner.
                <form class="auth-form" novalidate=true on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || auth.get().submit_label()}
                    </button>
                </form>
                <Show when=move || auth.get().auth_failure.is_some()>
                    <p class="auth-form__failure">{move || auth.get().failure_text()}</p>
                </Show>
                <p class="auth-card__subtitle" id="form-toggle-text">
                    {move || auth.get().toggle_prompt()}
                    <span class="auth-card__toggle" on:click=on_toggle>
                        {move || auth.get().toggle_action()}
                    </span>
                </p>
            </div>
        </div>
    }
}
