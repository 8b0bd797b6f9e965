//! File upload widget: drag-and-drop or manual selection of one file, an
//! optional subject association, and a progress bar fed by transfer events.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::toast::ToastBus;
use crate::util::format::format_file_size;

/// Display info for the chosen file. The `File` handle itself lives in a
/// browser-only slot inside the component.
#[derive(Clone, Debug, PartialEq)]
struct SelectedMeta {
    name: String,
    size: u64,
}

/// Upload form. Completion publishes a toast, clears the selection, and
/// fires the parent-supplied refresh callback; failure publishes the
/// normalized error and keeps the selection.
#[component]
pub fn FileUploader(on_uploaded: Callback<()>) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let bus = expect_context::<ToastBus>();

    let selected = RwSignal::new(None::<SelectedMeta>);
    let subject_choice = RwSignal::new(String::new());
    let uploading = RwSignal::new(false);
    let progress = RwSignal::new(0_u32);
    let drag_active = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    let file_slot = StoredValue::new_local(None::<web_sys::File>);

    // Subjects for the optional association dropdown; a failed fetch just
    // leaves the dropdown empty.
    let subjects = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.subjects().await.unwrap_or_default() }
        }
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let input = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
            if let Some(file) = input.and_then(|i| i.files()).and_then(|list| list.get(0)) {
                selected.set(Some(SelectedMeta {
                    name: file.name(),
                    size: file.size() as u64,
                }));
                file_slot.set_value(Some(file));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(true);
    };
    let on_drag_enter = on_drag_over;
    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
    };
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        #[cfg(feature = "hydrate")]
        {
            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|list| list.get(0))
            {
                selected.set(Some(SelectedMeta {
                    name: file.name(),
                    size: file.size() as u64,
                }));
                file_slot.set_value(Some(file));
            }
        }
    };

    let clear_selection = move |_| {
        selected.set(None);
        #[cfg(feature = "hydrate")]
        {
            file_slot.set_value(None);
            if let Some(input) = input_ref.get_untracked() {
                input.set_value("");
            }
        }
    };

    let on_upload = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_slot.get_value() else {
                bus.error("Please select a file first");
                return;
            };
            if uploading.get() {
                return;
            }
            uploading.set(true);
            progress.set(0);

            let client = client.clone();
            let subject_id = subject_choice.get().parse::<i64>().ok();
            leptos::task::spawn_local(async move {
                let result = client
                    .upload_file(&file, subject_id, move |pct| progress.set(pct))
                    .await;
                match result {
                    Ok(()) => {
                        bus.success("File uploaded successfully!");
                        selected.set(None);
                        file_slot.set_value(None);
                        subject_choice.set(String::new());
                        progress.set(0);
                        if let Some(input) = input_ref.get_untracked() {
                            input.set_value("");
                        }
                        on_uploaded.run(());
                    }
                    Err(e) => bus.error(e.message),
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&bus, &on_uploaded);
        }
    };

    view! {
        <div class="uploader">
            <select
                class="input uploader__subject"
                prop:value=move || subject_choice.get()
                on:change=move |ev| subject_choice.set(event_target_value(&ev))
                disabled=move || uploading.get()
            >
                <option value="">"Select subject (optional)"</option>
                <Suspense fallback=|| ()>
                    {move || {
                        subjects
                            .get()
                            .map(|list| {
                                list.into_iter()
                                    .map(|s| {
                                        view! {
                                            <option value=s.id.to_string()>{s.name}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </Suspense>
            </select>

            <div
                class=move || {
                    if drag_active.get() { "dropzone dropzone--active" } else { "dropzone" }
                }
                on:dragenter=on_drag_enter
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <input
                    node_ref=input_ref
                    class="dropzone__input"
                    type="file"
                    on:change=on_file_change
                    disabled=move || uploading.get()
                />
                <p class="dropzone__hint">
                    "Drag and drop your file here, or click to select"
                </p>
            </div>

            {move || {
                selected
                    .get()
                    .map(|meta| {
                        let clear = clear_selection;
                        view! {
                            <div class="file-chip">
                                <div class="file-chip__info">
                                    <p class="file-chip__name">{meta.name.clone()}</p>
                                    <p class="file-chip__size">{format_file_size(meta.size)}</p>
                                </div>
                                <button
                                    class="file-chip__clear"
                                    aria-label="Clear selection"
                                    on:click=clear
                                    disabled=move || uploading.get()
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
            }}

            <Show when=move || uploading.get()>
                <div class="progress">
                    <div
                        class="progress__fill"
                        style:width=move || format!("{}%", progress.get())
                    ></div>
                </div>
                <p class="progress__label">
                    {move || format!("Uploading... {}%", progress.get())}
                </p>
            </Show>

            <button
                class="btn btn--primary uploader__submit"
                on:click=on_upload
                disabled=move || uploading.get() || selected.get().is_none()
            >
                {move || if uploading.get() { "Uploading..." } else { "Upload" }}
            </button>
        </div>
    }
}
