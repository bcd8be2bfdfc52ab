//! Dashboard page shown after a successful login or signup.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthFormState;

/// Post-auth landing page. Redirects to `/` when there is no session.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthFormState>>();
    let navigate = use_navigate();

    // Guard: logging out (or arriving unauthenticated) sends the user
    // back to the auth form.
    Effect::new(move || {
        if !auth.get().authenticated {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let refresh_token = auth.get_untracked().refresh_token.unwrap_or_default();
            leptos::task::spawn_local(async move {
                crate::net::api::logout(&refresh_token).await;
                auth.update(AuthFormState::clear_session);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            auth.update(AuthFormState::clear_session);
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <button class="dashboard-page__logout" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <p class="dashboard-page__identity">
                {move || auth.get().email.unwrap_or_default()}
                {move || {
                    auth.get()
                        .user_role
                        .map(|role| format!(" ({role})"))
                        .unwrap_or_default()
                }}
            </p>
        </div>
    }
}
