//! Inline create-subject form.

use leptos::prelude::*;

use crate::net::api::ApiClient;

/// Add-subject form. An empty name silently blocks submission; success
/// clears the field and notifies the parent; failure shows the normalized
/// message and keeps the input.
#[component]
pub fn AddSubject(on_added: Callback<()>) -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let name = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        let trimmed = name.get().trim().to_owned();
        if trimmed.is_empty() || saving.get() {
            return;
        }
        saving.set(true);
        error.set(None);

        let client = client.clone();
        leptos::task::spawn_local(async move {
            match client.create_subject(&trimmed).await {
                Ok(_) => {
                    name.set(String::new());
                    on_added.run(());
                }
                Err(e) => error.set(Some(e.message)),
            }
            saving.set(false);
        });
    });

    view! {
        <form
            class="add-form add-form--row"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit.run(());
            }
        >
            <input
                class="input"
                type="text"
                placeholder="New subject..."
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Adding..." } else { "Add" }}
            </button>
            {move || error.get().map(|msg| view! { <span class="add-form__error">{msg}</span> })}
        </form>
    }
}
