//! Wire types mirroring the backend's JSON schema.
//!
//! The backend is the source of truth for these records; the client treats
//! them as plain attribute bags keyed by `id`. Field names are camelCase on
//! the wire.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::NaiveDateTime;

/// Authenticated account as returned by `/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// A study subject.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
}

/// A reminder with a due timestamp. `due_date` stays a string on the wire;
/// [`parse_timestamp`] turns it into a date when the UI needs one.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: i64,
    pub title: String,
    pub due_date: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for creating a reminder.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    pub title: String,
    pub due_date: String,
    pub description: Option<String>,
}

/// An uploaded file record.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    pub id: i64,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub subject: Option<Subject>,
}

impl StoredFile {
    /// Older records carry `name` instead of `fileName`.
    pub fn display_name(&self) -> &str {
        self.file_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("-")
    }
}

/// Timestamp forms the backend emits and the client submits: with seconds,
/// and the bare `datetime-local` form without them.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a backend timestamp, accepting both forms above.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// `datetime-local` inputs omit seconds; the backend expects them.
pub fn normalize_due_input(raw: &str) -> String {
    if NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").is_ok() {
        format!("{raw}:00")
    } else {
        raw.to_owned()
    }
}

/// Sort reminders soonest-due first. Entries whose due date does not parse
/// sort last, keeping their arrival order.
pub fn sort_by_due_date(reminders: &mut [Reminder]) {
    reminders.sort_by(|a, b| {
        match (parse_timestamp(&a.due_date), parse_timestamp(&b.due_date)) {
            (Some(da), Some(db)) => da.cmp(&db),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
    });
}

/// Urgency bucket for a reminder relative to the current time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DueStatus {
    Overdue,
    Today,
    Upcoming,
}

impl DueStatus {
    /// Classify a due date against `now`. Anything on the current calendar
    /// day counts as today, even when the time has already passed.
    pub fn of(due: NaiveDateTime, now: NaiveDateTime) -> Self {
        if due.date() == now.date() {
            Self::Today
        } else if due < now {
            Self::Overdue
        } else {
            Self::Upcoming
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Overdue => "Overdue",
            Self::Today => "Today",
            Self::Upcoming => "Upcoming",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Overdue => "badge badge--overdue",
            Self::Today => "badge badge--today",
            Self::Upcoming => "badge badge--upcoming",
        }
    }
}
