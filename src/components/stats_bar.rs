//! Summary cards: entity counts and the soonest-due reminder.

use leptos::prelude::*;

use crate::components::skeleton::CardSkeleton;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::Reminder;
use crate::util::format::format_timestamp;

/// Aggregate numbers for the stats cards, fetched together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub subjects: u64,
    pub reminders: u64,
    pub files: u64,
    pub next_reminder: Option<Reminder>,
}

/// Load every stat value. Individual failures degrade to zero / none
/// rather than failing the whole bar.
pub async fn load_stats(client: &ApiClient) -> StatsSnapshot {
    let subjects = count_or_zero(client.subject_count().await, "subject");
    let reminders = count_or_zero(client.reminder_count().await, "reminder");
    let files = count_or_zero(client.file_count().await, "file");
    let next_reminder = client.next_reminder().await.ok().flatten();
    StatsSnapshot {
        subjects,
        reminders,
        files,
        next_reminder,
    }
}

fn count_or_zero(result: Result<u64, ApiError>, what: &str) -> u64 {
    result.unwrap_or_else(|e| {
        leptos::logging::warn!("{what} count failed: {e}");
        0
    })
}

/// Row of stat cards above the widget grid.
#[component]
pub fn StatsBar(stats: LocalResource<StatsSnapshot>) -> impl IntoView {
    view! {
        <div class="stats-bar">
            <Suspense fallback=move || view! { <CardSkeleton/> }>
                {move || {
                    stats
                        .get()
                        .map(|snap| {
                            let next = match snap.next_reminder {
                                Some(r) => {
                                    let due = format_timestamp(&r.due_date);
                                    view! {
                                        <div class="stat-card__reminder" title=r.title.clone()>
                                            {r.title.clone()}
                                        </div>
                                        <div class="stat-card__detail">{due}</div>
                                    }
                                        .into_any()
                                }
                                None => view! { <div class="stat-card__empty">"None"</div> }
                                    .into_any(),
                            };
                            view! {
                                <div class="stat-card">
                                    <div class="stat-card__label">"Subjects"</div>
                                    <div class="stat-card__value">{snap.subjects.to_string()}</div>
                                </div>
                                <div class="stat-card">
                                    <div class="stat-card__label">"Reminders"</div>
                                    <div class="stat-card__value">{snap.reminders.to_string()}</div>
                                </div>
                                <div class="stat-card">
                                    <div class="stat-card__label">"Files"</div>
                                    <div class="stat-card__value">{snap.files.to_string()}</div>
                                </div>
                                <div class="stat-card">
                                    <div class="stat-card__label">"Next reminder"</div>
                                    {next}
                                </div>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
