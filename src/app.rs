//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{auth::AuthPage, dashboard::DashboardPage};
use crate::state::auth::AuthFormState;
use crate::util::first_visit;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth-form state context and sets up the two client
/// routes: `/` (auth form) and `/dashboard/*` (post-auth page).
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The localStorage flag decides whether the form opens in login or
    // signup mode. Read once here, at state construction.
    let auth = RwSignal::new(AuthFormState::new(first_visit::has_ever_logged_in()));
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/vestibule.css"/>
        <Title text="Vestibule"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AuthPage/>
                <Route path=(StaticSegment("dashboard"), WildcardSegment("any")) view=DashboardPage/>
            </Routes>
        </Router>
    }
}
