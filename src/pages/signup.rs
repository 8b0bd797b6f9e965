//! Account creation page.

use leptos::prelude::*;

use crate::net::api::ApiClient;

/// Signup form. All three fields are required and silently block
/// submission while empty. Success clears the form and shows a
/// confirmation; failure shows the normalized message inline.
#[component]
pub fn SignupPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let created = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let name_val = full_name.get().trim().to_owned();
        let email_val = email.get().trim().to_owned();
        let password_val = password.get();
        if name_val.is_empty() || email_val.is_empty() || password_val.is_empty() || busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);
        created.set(false);

        let client = client.clone();
        leptos::task::spawn_local(async move {
            match client.signup(&email_val, &password_val, &name_val).await {
                Ok(()) => {
                    full_name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    created.set(true);
                }
                Err(e) => error.set(Some(e.message)),
            }
            busy.set(false);
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
                <h1 class="auth-card__title">"Sign Up"</h1>
                <input
                    class="input"
                    type="text"
                    placeholder="Full name"
                    prop:value=move || full_name.get()
                    on:input=move |ev| full_name.set(event_target_value(&ev))
                />
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
                <Show when=move || created.get()>
                    <p class="auth-card__notice">"Account created! You can now log in."</p>
                </Show>
                <button
                    class="btn btn--primary auth-card__submit"
                    type="submit"
                    disabled=move || busy.get()
                >
                    {move || if busy.get() { "Creating..." } else { "Sign up" }}
                </button>
                <a class="auth-card__link" href="/login">"Back to login"</a>
            </form>
        </div>
    }
}
