//! Toast rendering container — the single consumer of the toast bus.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastBus};

/// Renders toasts in publish order and expires each one after its
/// configured lifetime, or earlier via its close button.
#[component]
pub fn ToastHost() -> impl IntoView {
    let bus = expect_context::<ToastBus>();

    view! {
        <div class="toast-host">
            <For
                each=move || bus.entries()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast/> }
            />
        </div>
    }
}

/// One visible toast. Created once per published message; its expiry timer
/// starts on creation.
#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let bus = expect_context::<ToastBus>();
    let Toast {
        id,
        text,
        level,
        duration_ms,
    } = toast;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(duration_ms)).await;
        bus.dismiss(id);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = duration_ms;

    view! {
        <div class=level.css_class()>
            <span class="toast__text">{text}</span>
            <button class="toast__close" aria-label="Dismiss" on:click=move |_| bus.dismiss(id)>
                "✕"
            </button>
        </div>
    }
}
