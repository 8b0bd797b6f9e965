//! Inline create-reminder form.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{NewReminder, normalize_due_input};

/// Add-reminder form: title and due date are required and silently block
/// submission while empty; the description is optional. Success clears the
/// fields and notifies the parent; failure shows the normalized message and
/// keeps them.
#[component]
pub fn AddReminder(on_added: Callback<()>) -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let title = RwSignal::new(String::new());
    let due = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        let title_val = title.get().trim().to_owned();
        let due_val = due.get();
        if title_val.is_empty() || due_val.is_empty() || saving.get() {
            return;
        }
        saving.set(true);
        error.set(None);

        let desc = description.get().trim().to_owned();
        let body = NewReminder {
            title: title_val,
            due_date: normalize_due_input(&due_val),
            description: (!desc.is_empty()).then_some(desc),
        };

        let client = client.clone();
        leptos::task::spawn_local(async move {
            match client.create_reminder(&body).await {
                Ok(_) => {
                    title.set(String::new());
                    due.set(String::new());
                    description.set(String::new());
                    on_added.run(());
                }
                Err(e) => error.set(Some(e.message)),
            }
            saving.set(false);
        });
    });

    view! {
        <form
            class="add-form add-form--stack"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit.run(());
            }
        >
            <input
                class="input"
                type="text"
                placeholder="Reminder title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <input
                class="input"
                type="datetime-local"
                prop:value=move || due.get()
                on:input=move |ev| due.set(event_target_value(&ev))
            />
            <textarea
                class="input add-form__description"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>
            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Adding..." } else { "Add Reminder" }}
            </button>
            {move || error.get().map(|msg| view! { <span class="add-form__error">{msg}</span> })}
        </form>
    }
}
