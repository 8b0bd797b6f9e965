//! Uploaded-file table with a subject filter and download links.

use leptos::prelude::*;

use crate::components::load_error::LoadError;
use crate::components::skeleton::TableRowSkeleton;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::StoredFile;
use crate::util::format::{format_file_size, format_timestamp};

/// File table fed by a parent-owned resource. Changing the filter select
/// re-runs the query through the shared `filter` signal the resource
/// tracks.
#[component]
pub fn FileList(
    files: LocalResource<Result<Vec<StoredFile>, ApiError>>,
    filter: RwSignal<String>,
) -> impl IntoView {
    let client = expect_context::<ApiClient>();

    // Filter options; a failed fetch leaves only "All".
    let subjects = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.subjects().await.unwrap_or_default() }
        }
    });

    view! {
        <div class="widget__body">
            <label class="file-filter">
                <span class="file-filter__label">"Filter by subject:"</span>
                <select
                    class="input"
                    prop:value=move || filter.get()
                    on:change=move |ev| filter.set(event_target_value(&ev))
                >
                    <option value="">"All"</option>
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
            </label>

            <Suspense fallback=move || {
                view! {
                    <table class="file-table">
                        <tbody>
                            <TableRowSkeleton/>
                            <TableRowSkeleton/>
                            <TableRowSkeleton/>
                        </tbody>
                    </table>
                }
            }>
                {move || {
                    let client = client.clone();
                    files
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! {
                                    <p class="widget__empty">"No files uploaded yet."</p>
                                }
                                    .into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <table class="file-table">
                                        <thead>
                                            <tr>
                                                <th>"File Name"</th>
                                                <th>"Subject"</th>
                                                <th>"Size"</th>
                                                <th>"Uploaded"</th>
                                                <th>"Action"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|file| file_row(&client, &file))
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <LoadError
                                        message=e.message
                                        retry=Callback::new(move |()| files.refetch())
                                    />
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn file_row(client: &ApiClient, file: &StoredFile) -> impl IntoView + use<> {
    let name = file.display_name().to_owned();
    let subject = file
        .subject
        .as_ref()
        .map_or_else(|| "-".to_owned(), |s| s.name.clone());
    let size = file.file_size.map_or_else(|| "-".to_owned(), format_file_size);
    let uploaded = file
        .uploaded_at
        .as_deref()
        .map_or_else(|| "-".to_owned(), format_timestamp);
    let href = client.download_url(file.id);

    view! {
        <tr class="file-table__row">
            <td class="file-table__name">{name}</td>
            <td>{subject}</td>
            <td>{size}</td>
            <td>{uploaded}</td>
            <td class="file-table__action">
                <a class="btn" href=href download="" title="Download">
                    "Download"
                </a>
            </td>
        </tr>
    }
}
