//! Session-gated wrapper for protected content.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::state::auth::AuthState;
use crate::state::session::{SessionCheck, SessionStatus};

/// Wraps protected content behind a session check.
///
/// Issues exactly one `/auth/me` query per mount. While it is outstanding a
/// neutral placeholder renders; success renders the children; any failure
/// redirects to `/login`. The pending query belongs to this component's
/// reactive owner, so unmounting disposes the owner and a late result is
/// dropped with it instead of touching state.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let check = LocalResource::new(move || {
        let client = client.clone();
        async move { SessionCheck::from_result(client.me().await) }
    });

    let status = RwSignal::new(SessionStatus::Unknown);

    Effect::new(move || {
        if let Some(result) = check.get() {
            if let Some(user) = result.user {
                auth.update(|a| a.user = Some(user));
            }
            status.set(result.status);
        }
    });

    Effect::new(move || {
        if status.get() == SessionStatus::Unauthenticated {
            navigate("/login", NavigateOptions::default());
        }
    });

    move || match status.get() {
        SessionStatus::Unknown => view! {
            <div class="session-check">"Checking session..."</div>
        }
        .into_any(),
        SessionStatus::Authenticated => children(),
        SessionStatus::Unauthenticated => ().into_any(),
    }
}
