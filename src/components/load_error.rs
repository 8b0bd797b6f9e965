//! Inline failure notice with a manual retry trigger.

use leptos::prelude::*;

/// Error banner plus a Retry button that re-issues the failed query.
#[component]
pub fn LoadError(message: String, retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="load-error">
            <p class="load-error__message">{message}</p>
            <button class="btn btn--primary load-error__retry" on:click=move |_| retry.run(())>
                "Retry"
            </button>
        </div>
    }
}
