//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::require_session::RequireSession;
use crate::net::api::ApiClient;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::{auth::AuthState, toast::ToastBus};

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
/// Constructs the shared HTTP client and the toast bus exactly once and
/// provides them to the whole tree, then sets up client-side routing. Every
/// caller receives these through context; there is no ambient global to
/// mutate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ApiClient::new("/api"));
    provide_context(ToastBus::new());
    provide_context(RwSignal::new(AuthState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/eduvault-ui.css"/>
        <Title text="EduVault"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <RequireSession>
                                <DashboardPage/>
                            </RequireSession>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
