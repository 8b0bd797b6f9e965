use super::*;

fn reminder(id: i64, due: &str) -> Reminder {
    Reminder {
        id,
        title: format!("reminder {id}"),
        due_date: due.to_owned(),
        description: None,
    }
}

// =============================================================
// Timestamp parsing
// =============================================================

#[test]
fn parses_seconds_and_minutes_forms() {
    assert!(parse_timestamp("2025-03-01T10:00:00").is_some());
    assert!(parse_timestamp("2025-03-01T10:00").is_some());
    assert!(parse_timestamp("tomorrow").is_none());
}

#[test]
fn normalize_due_input_appends_seconds() {
    assert_eq!(normalize_due_input("2025-03-01T10:00"), "2025-03-01T10:00:00");
    assert_eq!(
        normalize_due_input("2025-03-01T10:00:30"),
        "2025-03-01T10:00:30"
    );
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn sorts_ascending_by_due_date() {
    let mut list = vec![
        reminder(1, "2025-03-01T09:00:00"),
        reminder(2, "2025-01-10T09:00:00"),
        reminder(3, "2025-02-15T09:00:00"),
    ];
    sort_by_due_date(&mut list);

    let order: Vec<_> = list.iter().map(|r| r.id).collect();
    assert_eq!(order, [2, 3, 1]);
}

#[test]
fn unparsable_dates_sort_last() {
    let mut list = vec![reminder(1, "whenever"), reminder(2, "2025-01-10T09:00:00")];
    sort_by_due_date(&mut list);

    assert_eq!(list[0].id, 2);
    assert_eq!(list[1].id, 1);
}

// =============================================================
// Due status
// =============================================================

#[test]
fn classifies_overdue_today_upcoming() {
    let now = parse_timestamp("2025-02-15T12:00:00").unwrap();

    let yesterday = parse_timestamp("2025-02-14T23:59:00").unwrap();
    assert_eq!(DueStatus::of(yesterday, now), DueStatus::Overdue);

    let tomorrow = parse_timestamp("2025-02-16T00:00:00").unwrap();
    assert_eq!(DueStatus::of(tomorrow, now), DueStatus::Upcoming);
}

#[test]
fn earlier_same_day_counts_as_today() {
    let now = parse_timestamp("2025-02-15T12:00:00").unwrap();
    let this_morning = parse_timestamp("2025-02-15T08:00:00").unwrap();
    assert_eq!(DueStatus::of(this_morning, now), DueStatus::Today);
}

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn user_reads_full_name_field() {
    let user: User =
        serde_json::from_str(r#"{"id":1,"email":"a@b.c","fullName":"Ada"}"#).unwrap();
    assert_eq!(user.full_name.as_deref(), Some("Ada"));
}

#[test]
fn stored_file_reads_camel_case_fields() {
    let json = r#"{
        "id": 3,
        "fileName": "notes.pdf",
        "fileSize": 2048,
        "uploadedAt": "2025-02-15T08:30:00",
        "subject": {"id": 1, "name": "Math"}
    }"#;
    let file: StoredFile = serde_json::from_str(json).unwrap();

    assert_eq!(file.display_name(), "notes.pdf");
    assert_eq!(file.file_size, Some(2048));
    assert_eq!(file.subject.as_ref().map(|s| s.name.as_str()), Some("Math"));
}

#[test]
fn stored_file_falls_back_to_bare_name() {
    let file: StoredFile = serde_json::from_str(r#"{"id":4,"name":"old.txt"}"#).unwrap();
    assert_eq!(file.display_name(), "old.txt");

    let nameless: StoredFile = serde_json::from_str(r#"{"id":5}"#).unwrap();
    assert_eq!(nameless.display_name(), "-");
}

#[test]
fn new_reminder_serializes_camel_case() {
    let body = NewReminder {
        title: "Quiz".to_owned(),
        due_date: "2025-03-01T10:00:00".to_owned(),
        description: None,
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["dueDate"], "2025-03-01T10:00:00");
}
