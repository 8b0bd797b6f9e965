//! Loading placeholders shown while list queries are outstanding.

use leptos::prelude::*;

/// Card-sized placeholder for a whole widget.
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton-card">
            <div class="skeleton skeleton--title"></div>
            <div class="skeleton skeleton--row"></div>
            <div class="skeleton skeleton--row"></div>
            <div class="skeleton skeleton--row"></div>
        </div>
    }
}

/// Placeholder for one list entry.
#[component]
pub fn ListItemSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton-item">
            <div class="skeleton skeleton--line"></div>
            <div class="skeleton skeleton--line skeleton--short"></div>
        </div>
    }
}

/// Placeholder for one file-table row.
#[component]
pub fn TableRowSkeleton() -> impl IntoView {
    view! {
        <tr class="skeleton-row">
            <td><div class="skeleton skeleton--cell"></div></td>
            <td><div class="skeleton skeleton--cell"></div></td>
            <td><div class="skeleton skeleton--cell"></div></td>
            <td><div class="skeleton skeleton--cell"></div></td>
            <td><div class="skeleton skeleton--cell"></div></td>
        </tr>
    }
}
