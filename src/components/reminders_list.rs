//! Reminder list widget with due-status badges.

use leptos::prelude::*;

use crate::components::load_error::LoadError;
use crate::components::skeleton::ListItemSkeleton;
use crate::net::error::ApiError;
use crate::net::types::{DueStatus, Reminder, parse_timestamp};
use crate::util::clock::now_local;
use crate::util::format::format_timestamp;

/// Renders reminders soonest-due first, each with an urgency badge and the
/// optional description.
#[component]
pub fn RemindersList(reminders: LocalResource<Result<Vec<Reminder>, ApiError>>) -> impl IntoView {
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
                    reminders
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! {
                                    <p class="widget__empty">"No reminders yet."</p>
                                }
                                    .into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="reminder-list">
                                        {list
                                            .into_iter()
                                            .map(reminder_row)
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <LoadError
                                        message=e.message
                                        retry=Callback::new(move |()| reminders.refetch())
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

fn reminder_row(reminder: Reminder) -> impl IntoView {
    let badge = parse_timestamp(&reminder.due_date)
        .zip(now_local())
        .map(|(due, now)| DueStatus::of(due, now));
    let due_label = format!("Due: {}", format_timestamp(&reminder.due_date));

    view! {
        <li class="reminder-list__item">
            <div class="reminder-list__head">
                <span class="reminder-list__title">{reminder.title}</span>
                {badge.map(|b| view! { <span class=b.css_class()>{b.label()}</span> })}
            </div>
            <div class="reminder-list__due">{due_label}</div>
            {reminder
                .description
                .map(|text| view! { <p class="reminder-list__description">{text}</p> })}
        </li>
    }
}
