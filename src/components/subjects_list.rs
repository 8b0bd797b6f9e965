//! Subject list widget.

use leptos::prelude::*;

use crate::components::load_error::LoadError;
use crate::components::skeleton::ListItemSkeleton;
use crate::net::error::ApiError;
use crate::net::types::Subject;

/// Renders the subject list from a parent-owned resource: skeletons while
/// loading, inline error plus Retry on failure, empty state at zero
/// entries.
#[component]
pub fn SubjectsList(subjects: LocalResource<Result<Vec<Subject>, ApiError>>) -> impl IntoView {
    view! {
        <div class="widget__body">
            <Suspense fallback=move || {
                view! {
                    <ListItemSkeleton/>
                    <ListItemSkeleton/>
                    <ListItemSkeleton/>
                }
            }>
                {move || {
                    subjects
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! {
                                    <p class="widget__empty">"No subjects yet."</p>
                                }
                                    .into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="subject-list">
                                        {list
                                            .into_iter()
                                            .map(|s| {
                                                view! {
                                                    <li class="subject-list__item">{s.name}</li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <LoadError
                                        message=e.message
                                        retry=Callback::new(move |()| subjects.refetch())
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
