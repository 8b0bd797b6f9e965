//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;

/// Email/password login. A successful login is verified with a session
/// check before navigating to the dashboard; failures show the normalized
/// message inline.
#[component]
pub fn LoginPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let email_val = email.get().trim().to_owned();
        let password_val = password.get();
        if email_val.is_empty() || password_val.is_empty() || busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);

        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = async {
                client.login(&email_val, &password_val).await?;
                client.me().await
            }
            .await;
            match outcome {
                Ok(_) => navigate("/", NavigateOptions::default()),
                Err(e) => {
                    error.set(Some(e.message));
                    busy.set(false);
                }
            }
        });
    });

    view! {
        <div class="auth-page">
            <form
                class="auth-card"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <h1 class="auth-card__title">"EduVault Login"</h1>
                <input
                    class="input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                {move || error.get().map(|msg| view! { <p class="auth-card__error">{msg}</p> })}
                <button
                    class="btn btn--primary auth-card__submit"
                    type="submit"
                    disabled=move || busy.get()
                >
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </button>
                <a class="auth-card__link" href="/signup">"Create account"</a>
            </form>
        </div>
    }
}
