//! Dashboard page composing the stats bar and the three domain widgets.

use leptos::prelude::*;

use crate::components::add_reminder::AddReminder;
use crate::components::add_subject::AddSubject;
use crate::components::file_list::FileList;
use crate::components::file_uploader::FileUploader;
use crate::components::navbar::Navbar;
use crate::components::reminders_list::RemindersList;
use crate::components::stats_bar::{StatsBar, load_stats};
use crate::components::subjects_list::SubjectsList;
use crate::components::toast_host::ToastHost;
use crate::net::api::ApiClient;

/// Protected dashboard. Owns every list resource; children receive the
/// handles and refresh through explicit `refetch` callbacks rather than
/// counters.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let subjects = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.subjects().await }
        }
    });
    let reminders = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.reminders().await }
        }
    });
    // Selected subject filter for the file table; the resource tracks it
    // and re-runs the query when it changes.
    let file_filter = RwSignal::new(String::new());
    let files = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            let subject_id = file_filter.get().parse::<i64>().ok();
            async move { client.files(subject_id).await }
        }
    });
    let stats = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { load_stats(&client).await }
        }
    });

    let on_subject_added = Callback::new(move |()| {
        subjects.refetch();
        stats.refetch();
    });
    let on_reminder_added = Callback::new(move |()| {
        reminders.refetch();
        stats.refetch();
    });
    let on_file_uploaded = Callback::new(move |()| {
        files.refetch();
        stats.refetch();
    });

    view! {
        <Navbar/>
        <main class="dashboard">
            <StatsBar stats=stats/>
            <div class="dashboard__grid">
                <section class="widget">
                    <h2 class="widget__heading">"Subjects"</h2>
                    <AddSubject on_added=on_subject_added/>
                    <SubjectsList subjects=subjects/>
                </section>
                <section class="widget">
                    <h2 class="widget__heading">"Reminders"</h2>
                    <AddReminder on_added=on_reminder_added/>
                    <RemindersList reminders=reminders/>
                </section>
                <section class="widget">
                    <h2 class="widget__heading">"Files"</h2>
                    <FileUploader on_uploaded=on_file_uploaded/>
                    <FileList files=files filter=file_filter/>
                </section>
            </div>
        </main>
        <ToastHost/>
    }
}
