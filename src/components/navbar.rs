//! Top navigation bar: brand, signed-in identity, and the dark mode
//! toggle.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::state::auth::AuthState;
use crate::util::dark_mode;

/// Sticky top bar shown above the dashboard.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let dark = RwSignal::new(false);

    // Apply the stored preference on mount, then mirror OS changes while
    // no explicit choice exists.
    Effect::new(move || {
        let initial = dark_mode::read_preference();
        dark.set(initial);
        dark_mode::apply(initial);
        dark_mode::watch_system(move |enabled| dark.set(enabled));
    });

    let on_toggle = move |_| {
        let next = dark_mode::toggle(dark.get());
        dark.set(next);
    };

    view! {
        <nav class="navbar">
            <div class="navbar__brand">
                <span class="navbar__logo" aria-hidden="true">"📚"</span>
                <h1 class="navbar__title">"EduVault"</h1>
            </div>
            <div class="navbar__actions">
                <Show when=move || auth.get().user.is_some()>
                    <AccountControls/>
                </Show>
                <button
                    class="btn navbar__theme"
                    title="Toggle dark mode"
                    aria-label="Toggle dark mode"
                    on:click=on_toggle
                >
                    {move || if dark.get() { "☀" } else { "🌙" }}
                </button>
            </div>
        </nav>
    }
}

/// Signed-in email plus the logout button.
#[component]
fn AccountControls() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = client.logout().await {
                leptos::logging::warn!("logout failed: {e}");
            }
            auth.update(|a| a.user = None);
            navigate("/login", NavigateOptions::default());
        });
    };

    view! {
        <span class="navbar__identity">
            {move || auth.get().email().map(|email| format!("Signed in as {email}"))}
        </span>
        <button class="btn" on:click=on_logout>"Logout"</button>
    }
}
